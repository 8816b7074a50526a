use crate::model::{Transaction, TxStatus, TxType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::warn;

/// Date format produced by a date picker, and accepted for date bounds.
pub const DATE_BOUND_FORMAT: &str = "%F";

/// Committed structured filters for the transaction history.
///
/// Every dimension is independent. An empty set or a missing bound places no constraint on the
/// view; present constraints combine with AND.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct FilterState {
    pub assets: BTreeSet<String>,
    pub status: BTreeSet<TxStatus>,
    pub types: BTreeSet<TxType>,
    /// Inclusive, compared against the transaction's calendar date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive, compared against the transaction's calendar date.
    pub date_to: Option<NaiveDate>,
    /// Inclusive lower bound on `usd_value`.
    pub amount_min: Option<Decimal>,
    /// Inclusive upper bound on `usd_value`.
    pub amount_max: Option<Decimal>,
}

/// One independently clearable part of [`FilterState`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FilterDimension {
    Assets,
    Status,
    Types,
    /// Both date bounds.
    DateRange,
    /// Both amount bounds.
    AmountRange,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no dimension constrains the view.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
            && self.status.is_empty()
            && self.types.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.amount_min.is_none()
            && self.amount_max.is_none()
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        if !self.assets.is_empty() && !self.assets.contains(&tx.asset) {
            return false;
        }
        if !self.status.is_empty() && !self.status.contains(&tx.status) {
            return false;
        }
        if !self.types.is_empty() && !self.types.contains(&tx.tx_type) {
            return false;
        }

        let date = tx.date.date();
        if self.date_from.is_some_and(|from| date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| date > to) {
            return false;
        }

        if self.amount_min.is_some_and(|min| tx.usd_value < min) {
            return false;
        }
        if self.amount_max.is_some_and(|max| tx.usd_value > max) {
            return false;
        }

        true
    }

    /// Reset exactly one dimension to its empty default.
    pub fn clear(&mut self, dimension: FilterDimension) {
        match dimension {
            FilterDimension::Assets => self.assets.clear(),
            FilterDimension::Status => self.status.clear(),
            FilterDimension::Types => self.types.clear(),
            FilterDimension::DateRange => {
                self.date_from = None;
                self.date_to = None;
            }
            FilterDimension::AmountRange => {
                self.amount_min = None;
                self.amount_max = None;
            }
        }
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }
}

/// Staged copy of the filters being edited in the filter panel.
///
/// Bounds are kept as the raw text typed by the user. Nothing here affects the view until the
/// draft is converted with [`FilterDraft::to_filter_state`] and committed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterDraft {
    pub assets: BTreeSet<String>,
    pub status: BTreeSet<TxStatus>,
    pub types: BTreeSet<TxType>,
    pub date_from: String,
    pub date_to: String,
    pub amount_min: String,
    pub amount_max: String,
}

impl From<&FilterState> for FilterDraft {
    fn from(filters: &FilterState) -> Self {
        let date = |d: Option<NaiveDate>| {
            d.map(|d| d.format(DATE_BOUND_FORMAT).to_string())
                .unwrap_or_default()
        };
        let amount = |a: Option<Decimal>| a.map(|a| a.to_string()).unwrap_or_default();

        Self {
            assets: filters.assets.clone(),
            status: filters.status.clone(),
            types: filters.types.clone(),
            date_from: date(filters.date_from),
            date_to: date(filters.date_to),
            amount_min: amount(filters.amount_min),
            amount_max: amount(filters.amount_max),
        }
    }
}

impl FilterDraft {
    pub fn set_asset_checked(&mut self, asset: &str, checked: bool) {
        if checked {
            self.assets.insert(asset.to_string());
        } else {
            self.assets.remove(asset);
        }
    }

    pub fn set_status_checked(&mut self, status: TxStatus, checked: bool) {
        if checked {
            self.status.insert(status);
        } else {
            self.status.remove(&status);
        }
    }

    pub fn set_type_checked(&mut self, tx_type: TxType, checked: bool) {
        if checked {
            self.types.insert(tx_type);
        } else {
            self.types.remove(&tx_type);
        }
    }

    /// Parse the staged edits into committed filters.
    ///
    /// Bounds are best-effort: empty text means no bound, and text that does not parse is
    /// logged and also treated as no bound.
    pub fn to_filter_state(&self) -> FilterState {
        FilterState {
            assets: self.assets.clone(),
            status: self.status.clone(),
            types: self.types.clone(),
            date_from: parse_date_bound("date_from", &self.date_from),
            date_to: parse_date_bound("date_to", &self.date_to),
            amount_min: parse_amount_bound("amount_min", &self.amount_min),
            amount_max: parse_amount_bound("amount_max", &self.amount_max),
        }
    }
}

pub(crate) fn parse_date_bound(field: &str, raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, DATE_BOUND_FORMAT)
        .map_err(|err| warn!("Ignoring {field} bound `{raw}`: {err}"))
        .ok()
}

pub(crate) fn parse_amount_bound(field: &str, raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    // Thousands separators are accepted, e.g. "10,000.00"
    raw.replace(',', "")
        .parse::<Decimal>()
        .map_err(|err| warn!("Ignoring {field} bound `{raw}`: {err}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use std::str::FromStr;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn draft_round_trips_committed_filters() {
        let filters = FilterState {
            assets: BTreeSet::from(["BTC".to_string()]),
            status: BTreeSet::from([TxStatus::Pending]),
            types: BTreeSet::new(),
            date_from: NaiveDate::from_ymd_opt(2024, 8, 22),
            date_to: None,
            amount_min: Some(Decimal::from(1000)),
            amount_max: Some(Decimal::from_str("2500.50").unwrap()),
        };

        let draft = FilterDraft::from(&filters);
        assert_eq!(draft.date_from, "2024-08-22");
        assert_eq!(draft.date_to, "");
        assert_eq!(draft.amount_max, "2500.50");
        assert_eq!(draft.to_filter_state(), filters);
    }

    #[test]
    #[traced_test]
    fn unparseable_bounds_fail_open() {
        let draft = FilterDraft {
            date_from: "yesterday".to_string(),
            date_to: "2024-13-40".to_string(),
            amount_min: "lots".to_string(),
            amount_max: "10,000.00".to_string(),
            ..Default::default()
        };

        let filters = draft.to_filter_state();
        assert_eq!(filters.date_from, None);
        assert_eq!(filters.date_to, None);
        assert_eq!(filters.amount_min, None);
        assert_eq!(filters.amount_max, Some(Decimal::from(10_000)));
        assert!(logs_contain("Ignoring amount_min bound `lots`"));
    }

    #[test]
    #[traced_test]
    fn checkboxes_toggle_membership() {
        let mut draft = FilterDraft::default();
        draft.set_asset_checked("ETH", true);
        draft.set_asset_checked("BTC", true);
        draft.set_asset_checked("ETH", false);
        draft.set_type_checked(TxType::Sent, true);
        draft.set_status_checked(TxStatus::Failed, true);
        draft.set_status_checked(TxStatus::Failed, false);

        assert_eq!(draft.assets, BTreeSet::from(["BTC".to_string()]));
        assert_eq!(draft.types, BTreeSet::from([TxType::Sent]));
        assert!(draft.status.is_empty());
    }

    #[test]
    #[traced_test]
    fn clear_touches_one_dimension() {
        let mut filters = FilterState {
            assets: BTreeSet::from(["BTC".to_string()]),
            types: BTreeSet::from([TxType::Received]),
            date_from: NaiveDate::from_ymd_opt(2024, 8, 1),
            date_to: NaiveDate::from_ymd_opt(2024, 8, 31),
            amount_min: Some(Decimal::ONE),
            ..Default::default()
        };

        filters.clear(FilterDimension::DateRange);
        assert_eq!(filters.date_from, None);
        assert_eq!(filters.date_to, None);
        assert_eq!(filters.assets.len(), 1);
        assert_eq!(filters.types.len(), 1);
        assert_eq!(filters.amount_min, Some(Decimal::ONE));

        filters.clear_all();
        assert!(filters.is_empty());
    }
}
