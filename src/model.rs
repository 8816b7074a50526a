pub use self::{filter::*, sort::*, stats::*, transaction::*};

pub mod constants;
mod filter;
pub mod fixtures;
mod sort;
mod stats;
mod transaction;
