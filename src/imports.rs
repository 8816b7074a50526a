pub mod preferences;
pub mod transactions;
