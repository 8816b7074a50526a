use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TxTypeError {
    #[error("Unknown transaction type `{0}`")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum TxStatusError {
    #[error("Unknown transaction status `{0}`")]
    Parse(String),
}

/// Direction of a wallet transaction.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Sent,
    Received,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Success,
    Pending,
    Failed,
}

/// A single row of wallet history.
///
/// `amount` is in asset units and `usd_value` in display currency. The two are supplied
/// independently; nothing here relates one to the other through a price.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub tx_type: TxType,
    pub asset: String,
    pub amount: Decimal,
    pub usd_value: Decimal,
    pub status: TxStatus,
    pub date: NaiveDateTime,
    pub hash: String,
}

impl TxType {
    pub const ALL: [TxType; 2] = [TxType::Sent, TxType::Received];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Received => "received",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sent => "Sent",
            Self::Received => "Received",
        }
    }
}

impl TxStatus {
    pub const ALL: [TxStatus; 3] = [TxStatus::Success, TxStatus::Pending, TxStatus::Failed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }
}

impl Display for TxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl Display for TxStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TxType {
    type Err = TxTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sent" => Ok(Self::Sent),
            "received" => Ok(Self::Received),
            _ => Err(TxTypeError::Parse(s.to_string())),
        }
    }
}

impl FromStr for TxStatus {
    type Err = TxStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "pending" => Ok(Self::Pending),
            "failed" => Ok(Self::Failed),
            _ => Err(TxStatusError::Parse(s.to_string())),
        }
    }
}

impl Transaction {
    /// Case-insensitive substring match against the searchable text columns.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        self.asset.to_lowercase().contains(needle)
            || self.tx_type.as_str().contains(needle)
            || self.status.as_str().contains(needle)
    }

    /// Shortened hash for list rows, e.g. `0x1a2b...5x6y7z`.
    pub fn short_hash(&self) -> String {
        truncate_middle(&self.hash, 6, 6)
    }
}

/// Keep `head` leading and `tail` trailing characters, joined with an ellipsis.
pub fn truncate_middle(s: &str, head: usize, tail: usize) -> String {
    let count = s.chars().count();
    if count <= head + tail {
        return s.to_string();
    }

    let start: String = s.chars().take(head).collect();
    let end: String = s.chars().skip(count - tail).collect();

    format!("{start}...{end}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn parse_type_and_status() {
        assert_eq!("sent".parse::<TxType>().unwrap(), TxType::Sent);
        assert_eq!("Received".parse::<TxType>().unwrap(), TxType::Received);
        assert_eq!(" pending ".parse::<TxStatus>().unwrap(), TxStatus::Pending);
        assert!("bogus".parse::<TxType>().is_err());
        assert!("done".parse::<TxStatus>().is_err());

        for tx_type in TxType::ALL {
            assert_eq!(tx_type.to_string().parse::<TxType>().unwrap(), tx_type);
        }
        for status in TxStatus::ALL {
            assert_eq!(status.to_string().parse::<TxStatus>().unwrap(), status);
        }
    }

    #[test]
    #[traced_test]
    fn truncate_hash() {
        assert_eq!(truncate_middle("0x1234567890abcdef", 6, 6), "0x1234...abcdef");
        assert_eq!(truncate_middle("short", 6, 6), "short");
        assert_eq!(truncate_middle("", 6, 6), "");
    }
}
