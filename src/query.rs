//! Search, filter and sort over the transaction history.
//!
//! The view is never stored. Every call recomputes it from the full collection and the current
//! inputs, so the result only depends on its arguments.

use crate::model::{FilterState, SortKey, Transaction};
use tracing::debug;

pub use self::{chips::*, export::*};

mod chips;
mod export;

/// Narrow and order `transactions` for display.
///
/// Stages run in order: case-insensitive search over asset, type and status; the structured
/// filters; then a stable sort by `sort_key`, so equal keys keep their collection order.
pub fn derive_view<'a>(
    transactions: &'a [Transaction],
    search_term: &str,
    filters: &FilterState,
    sort_key: SortKey,
) -> Vec<&'a Transaction> {
    let needle = search_term.to_lowercase();

    let mut view: Vec<_> = transactions
        .iter()
        .filter(|tx| needle.is_empty() || tx.matches_search(&needle))
        .filter(|tx| filters.matches(tx))
        .collect();
    view.sort_by(|a, b| sort_key.compare(a, b));

    debug!(
        "Derived {} of {} transactions (search `{search_term}`, sort {sort_key})",
        view.len(),
        transactions.len(),
    );

    view
}

/// Everything that shapes the transaction list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TransactionQuery {
    pub search: String,
    pub filters: FilterState,
    pub sort: SortKey,
}

impl TransactionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view<'a>(&self, transactions: &'a [Transaction]) -> DerivedView<'a> {
        DerivedView {
            rows: derive_view(transactions, &self.search, &self.filters, self.sort),
        }
    }

    pub fn chips(&self) -> Vec<FilterChip> {
        active_filter_chips(&self.filters)
    }

    /// Reset the search term and all filters. The sort order is kept.
    pub fn clear(&mut self) {
        self.search.clear();
        self.filters.clear_all();
    }
}

/// The result of [`derive_view`], in display order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DerivedView<'a> {
    rows: Vec<&'a Transaction>,
}

impl<'a> DerivedView<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Transaction> + '_ {
        self.rows.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a Transaction] {
        &self.rows
    }

    /// The result count line shown above the list.
    pub fn summary(&self) -> String {
        format!("{} transactions found", self.rows.len())
    }

    pub fn export(&self) -> Export<'_> {
        Export::new(&self.rows)
    }
}
