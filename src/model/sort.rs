use crate::model::Transaction;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortKeyError {
    #[error("Unknown sort key `{0}`, expected one of: date-desc, date-asc, amount-desc, amount-asc, asset")]
    Parse(String),
}

/// Ordering applied to the transaction history view.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Newest first.
    #[default]
    DateDesc,
    DateAsc,
    /// Largest USD value first.
    AmountDesc,
    AmountAsc,
    /// Ascending by asset symbol.
    Asset,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::AmountDesc,
        SortKey::AmountAsc,
        SortKey::Asset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateDesc => "date-desc",
            Self::DateAsc => "date-asc",
            Self::AmountDesc => "amount-desc",
            Self::AmountAsc => "amount-asc",
            Self::Asset => "asset",
        }
    }

    /// Label shown in the sort dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DateDesc => "Newest First",
            Self::DateAsc => "Oldest First",
            Self::AmountDesc => "Highest Amount",
            Self::AmountAsc => "Lowest Amount",
            Self::Asset => "By Asset",
        }
    }

    /// Comparator for this key. Callers sort stably, so `Equal` keeps collection order.
    pub fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            Self::DateDesc => b.date.cmp(&a.date),
            Self::DateAsc => a.date.cmp(&b.date),
            Self::AmountDesc => b.usd_value.cmp(&a.usd_value),
            Self::AmountAsc => a.usd_value.cmp(&b.usd_value),
            Self::Asset => a.asset.cmp(&b.asset),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| SortKeyError::Parse(s.to_string()))
    }
}
