/// File name offered for the transaction history CSV export.
pub const DEFAULT_EXPORT_FILENAME: &str = "transactions.csv";

/// Header row of the transaction history CSV export.
pub const EXPORT_HEADER: &str = "Date,Type,Asset,Amount,USD Value,Status";

/// Demo transaction history, in the transactions CSV import format.
pub const DEMO_TRANSACTIONS_CSV: &str = include_str!("../../fixtures/demo-transactions.csv");

/// Viewports narrower than this use the mobile layout.
pub const MOBILE_BREAKPOINT: u32 = 1024;
