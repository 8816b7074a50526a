use crate::model::constants::EXPORT_HEADER;
use crate::model::Transaction;
use std::fmt::Display;

/// Timestamp format for exported rows, e.g. `2024-08-24T14:30:00.000Z`.
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// CSV rendering of a derived view, rows in display order.
///
/// Fields are joined with commas as-is, without quoting or escaping. Dates, types, statuses and
/// decimals never contain a delimiter, and the importer rejects assets that do.
#[derive(Clone, Copy, Debug)]
pub struct Export<'a> {
    rows: &'a [&'a Transaction],
}

struct ExportRow<'a>(&'a Transaction);

impl<'a> Export<'a> {
    pub fn new(rows: &'a [&'a Transaction]) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Display for Export<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{EXPORT_HEADER}")?;

        for row in self.rows {
            writeln!(f, "{}", ExportRow(row))?;
        }

        Ok(())
    }
}

impl Display for ExportRow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tx = self.0;
        write!(
            f,
            "{date},{tx_type},{asset},{amount},{usd_value},{status}",
            date = tx.date.format(EXPORT_DATE_FORMAT),
            tx_type = tx.tx_type,
            asset = tx.asset,
            amount = tx.amount.normalize(),
            usd_value = tx.usd_value.normalize(),
            status = tx.status,
        )
    }
}
