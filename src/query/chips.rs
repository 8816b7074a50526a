use crate::model::{FilterDimension, FilterState};
use std::fmt::Display;

/// A removable summary of one active filter dimension.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterChip {
    pub dimension: FilterDimension,
    pub label: &'static str,
    /// Number of selected options. Range dimensions have no count.
    pub count: Option<usize>,
}

impl FilterChip {
    /// Clear the dimension this chip stands for, leaving every other dimension untouched.
    pub fn remove(&self, filters: &mut FilterState) {
        filters.clear(self.dimension);
    }
}

impl Display for FilterChip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.count {
            Some(count) => write!(f, "{} ({count})", self.label),
            None => f.write_str(self.label),
        }
    }
}

/// One chip per non-empty dimension: assets, status, types, then the date range.
///
/// Amount bounds filter the view but are not summarized as a chip.
pub fn active_filter_chips(filters: &FilterState) -> Vec<FilterChip> {
    let sets = [
        (FilterDimension::Assets, "Assets", filters.assets.len()),
        (FilterDimension::Status, "Status", filters.status.len()),
        (FilterDimension::Types, "Type", filters.types.len()),
    ];

    let mut chips: Vec<_> = sets
        .into_iter()
        .filter(|(_, _, count)| *count > 0)
        .map(|(dimension, label, count)| FilterChip {
            dimension,
            label,
            count: Some(count),
        })
        .collect();

    if filters.date_from.is_some() || filters.date_to.is_some() {
        chips.push(FilterChip {
            dimension: FilterDimension::DateRange,
            label: "Date Range",
            count: None,
        });
    }

    chips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TxStatus, TxType};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use similar_asserts::assert_eq;
    use std::collections::BTreeSet;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn chips_in_dimension_order() {
        let filters = FilterState {
            assets: BTreeSet::from(["BTC".to_string(), "ETH".to_string()]),
            types: BTreeSet::from([TxType::Sent]),
            date_to: NaiveDate::from_ymd_opt(2024, 8, 23),
            amount_min: Some(Decimal::TEN),
            ..Default::default()
        };

        let labels: Vec<_> = active_filter_chips(&filters)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(labels, ["Assets (2)", "Type (1)", "Date Range"]);
    }

    #[test]
    #[traced_test]
    fn removing_assets_chip_keeps_other_dimensions() {
        let mut filters = FilterState {
            assets: BTreeSet::from(["BTC".to_string()]),
            status: BTreeSet::from([TxStatus::Success, TxStatus::Failed]),
            date_from: NaiveDate::from_ymd_opt(2024, 8, 1),
            ..Default::default()
        };
        let before = filters.clone();

        let chips = active_filter_chips(&filters);
        chips[0].remove(&mut filters);

        assert!(filters.assets.is_empty());
        assert_eq!(filters.status, before.status);
        assert_eq!(filters.date_from, before.date_from);
        assert_eq!(
            active_filter_chips(&filters)
                .iter()
                .map(|chip| chip.dimension)
                .collect::<Vec<_>>(),
            [FilterDimension::Status, FilterDimension::DateRange]
        );
    }

    #[test]
    #[traced_test]
    fn amount_bounds_have_no_chip() {
        let filters = FilterState {
            amount_min: Some(Decimal::ONE),
            amount_max: Some(Decimal::ONE_HUNDRED),
            ..Default::default()
        };

        assert!(!filters.is_empty());
        assert!(active_filter_chips(&filters).is_empty());
    }
}
