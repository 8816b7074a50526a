use super::AppEvent;
use crate::model::{FilterDraft, SortKey, Transaction};
use crate::query::{DerivedView, FilterChip, TransactionQuery};
use crate::util::timer::{Lifetime, Scheduler};
use std::time::Duration;
use tracing::debug;

pub const INITIAL_LOAD_DELAY: Duration = Duration::from_millis(500);
pub const LOAD_MORE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Completion {
    Loaded,
}

/// Transaction history with search, filter panel, sort and a detail view.
#[derive(Debug)]
pub struct TransactionsScreen {
    lifetime: Lifetime,
    query: TransactionQuery,
    /// Staged filter edits, present while the filter panel is open.
    draft: Option<FilterDraft>,
    /// Id of the transaction shown in the detail modal.
    selected: Option<String>,
    is_loading: bool,
}

impl TransactionsScreen {
    /// Mount the screen and start the initial load.
    pub fn enter(scheduler: &mut Scheduler<AppEvent>) -> Self {
        let mut screen = Self {
            lifetime: Lifetime::new(),
            query: TransactionQuery::new(),
            draft: None,
            selected: None,
            is_loading: false,
        };
        screen.start_load(scheduler, INITIAL_LOAD_DELAY);

        screen
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn load_more(&mut self, scheduler: &mut Scheduler<AppEvent>) {
        self.start_load(scheduler, LOAD_MORE_DELAY);
    }

    fn start_load(&mut self, scheduler: &mut Scheduler<AppEvent>, delay: Duration) {
        self.is_loading = true;
        scheduler.schedule(
            delay,
            self.lifetime.token(),
            AppEvent::Transactions(Completion::Loaded),
        );
    }

    pub fn handle(&mut self, completion: Completion) {
        match completion {
            Completion::Loaded => self.is_loading = false,
        }
    }

    pub fn query(&self) -> &TransactionQuery {
        &self.query
    }

    pub fn set_search(&mut self, search: &str) {
        self.query.search = search.to_string();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    pub fn view<'a>(&self, transactions: &'a [Transaction]) -> DerivedView<'a> {
        self.query.view(transactions)
    }

    pub fn chips(&self) -> Vec<FilterChip> {
        self.query.chips()
    }

    pub fn remove_chip(&mut self, chip: &FilterChip) {
        chip.remove(&mut self.query.filters);
    }

    /// The "Clear All" action next to the active filter chips.
    pub fn clear_all_filters(&mut self) {
        self.query.filters.clear_all();
    }

    /// The "Clear filters" action on the empty state. Clears the search term too.
    pub fn clear_search_and_filters(&mut self) {
        self.query.clear();
    }

    /// Open the filter panel, staging a copy of the committed filters.
    pub fn open_filter_panel(&mut self) -> &mut FilterDraft {
        self.draft.insert(FilterDraft::from(&self.query.filters))
    }

    pub fn is_filter_panel_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn filter_draft(&self) -> Option<&FilterDraft> {
        self.draft.as_ref()
    }

    pub fn filter_draft_mut(&mut self) -> Option<&mut FilterDraft> {
        self.draft.as_mut()
    }

    /// Commit the staged edits and close the panel. Returns `false` when the panel was not open.
    pub fn apply_filters(&mut self) -> bool {
        let Some(draft) = self.draft.take() else {
            return false;
        };

        self.query.filters = draft.to_filter_state();
        debug!("Applied filters: {:?}", self.query.filters);

        true
    }

    /// Close the panel, discarding the staged edits.
    pub fn close_filter_panel(&mut self) {
        self.draft = None;
    }

    /// The panel's "Reset" action: clears the staged edits and the committed filters.
    pub fn reset_filters(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            *draft = FilterDraft::default();
        }
        self.query.filters.clear_all();
    }

    /// Open the detail modal for a transaction.
    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn is_detail_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected<'a>(&self, transactions: &'a [Transaction]) -> Option<&'a Transaction> {
        let id = self.selected.as_deref()?;

        transactions.iter().find(|tx| tx.id == id)
    }

    /// CSV export of the current view.
    pub fn export(&self, transactions: &[Transaction]) -> String {
        self.view(transactions).export().to_string()
    }
}
