use crate::model::{Stats, Transaction, TxStatusError, TxTypeError};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;
use std::{io::Read, path::Path};
use thiserror::Error;
use tracing::debug;

/// Accepted timestamp layouts for the `date` column.
const DATE_FORMATS: [&str; 2] = ["%F %T", "%FT%T"];

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("CSV Error")]
    Csv(#[from] csv::Error),

    #[error("DateTime parsing error for transaction `{0}`")]
    DateTime(String, #[source] chrono::ParseError),

    #[error("Decimal parsing error for transaction `{0}`")]
    Decimal(String, #[source] rust_decimal::Error),

    #[error("Invalid type for transaction `{0}`")]
    TxType(String, #[source] TxTypeError),

    #[error("Invalid status for transaction `{0}`")]
    TxStatus(String, #[source] TxStatusError),

    #[error("Invalid asset `{1}` for transaction `{0}`")]
    Asset(String, String),

    #[error("Duplicate transaction id `{0}`")]
    DuplicateId(String),
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct TransactionCSVRow {
    pub(crate) id: String,
    #[serde(rename = "type")]
    pub(crate) tx_type: String,
    pub(crate) asset: String,
    pub(crate) amount: String,
    pub(crate) usd_value: String,
    pub(crate) status: String,
    pub(crate) date: String,
    pub(crate) hash: String,
}

/// Read a transactions CSV from a file. See [`read_transactions_from_reader`].
pub fn read_transactions(
    s: &mut Stats,
    path: impl AsRef<Path>,
) -> Result<Vec<Transaction>, ImportError> {
    let reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_path(path)?;

    read_rows(s, reader)
}

/// Read a transactions CSV with the header `id,type,asset,amount,usd_value,status,date,hash`.
///
/// Lines starting with `#` are comments. Rows are returned in file order; ids must be unique.
pub fn read_transactions_from_reader<R: Read>(
    s: &mut Stats,
    reader: R,
) -> Result<Vec<Transaction>, ImportError> {
    let reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    read_rows(s, reader)
}

fn read_rows<R: Read>(
    s: &mut Stats,
    mut reader: csv::Reader<R>,
) -> Result<Vec<Transaction>, ImportError> {
    let mut rows = Vec::new();
    let mut seen = HashSet::new();

    debug!("Parsing Transaction rows");
    for result in reader.deserialize() {
        let record: TransactionCSVRow = result?;
        debug!("Deserialized: {record:?}");

        let record2 = transaction_parse(record)?;
        debug!("Parsed: {record2:?}");

        if !seen.insert(record2.id.clone()) {
            return Err(ImportError::DuplicateId(record2.id));
        }

        rows.push(record2);
        s.inc_transactions();
    }

    Ok(rows)
}

pub(crate) fn transaction_parse(r: TransactionCSVRow) -> Result<Transaction, ImportError> {
    // Assets are exported unquoted, so they must not carry CSV delimiters.
    if r.asset.is_empty() || r.asset.contains([',', '"', '\n', '\r']) {
        return Err(ImportError::Asset(r.id, r.asset));
    }

    let decimal = |value: &str| {
        value
            .parse::<Decimal>()
            .map_err(|err| ImportError::Decimal(r.id.clone(), err))
    };

    Ok(Transaction {
        tx_type: r
            .tx_type
            .parse()
            .map_err(|err| ImportError::TxType(r.id.clone(), err))?,
        amount: decimal(&r.amount)?,
        usd_value: decimal(&r.usd_value)?,
        status: r
            .status
            .parse()
            .map_err(|err| ImportError::TxStatus(r.id.clone(), err))?,
        date: parse_date(&r.date).map_err(|err| ImportError::DateTime(r.id.clone(), err))?,
        id: r.id,
        asset: r.asset,
        hash: r.hash,
    })
}

fn parse_date(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, DATE_FORMATS[0])
        .or_else(|_| NaiveDateTime::parse_from_str(s, DATE_FORMATS[1]))
}
