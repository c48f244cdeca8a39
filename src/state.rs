//! View state and the intents that change it.
//!
//! ```text
//! click ──→ ViewIntent ──→ ViewState::reduce ──→ ViewState ──→ view
//! ```
//!
//! The state is a plain `Copy` value; handlers produce a new one instead of
//! mutating shared selectors.

use crate::selector::{FilterSelector, SortSelector};

/// The two selectors that, together with the source list, determine the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub filter: FilterSelector,
    pub sort: SortSelector,
}

/// A user action on the filter or sort controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewIntent {
    SelectFilter(FilterSelector),
    SelectSort(SortSelector),
}

impl ViewState {
    pub fn new(filter: FilterSelector, sort: SortSelector) -> Self {
        Self { filter, sort }
    }

    /// Return the state that follows `intent`. Only the targeted selector changes.
    pub fn reduce(self, intent: ViewIntent) -> Self {
        match intent {
            ViewIntent::SelectFilter(filter) => Self { filter, ..self },
            ViewIntent::SelectSort(sort) => Self { sort, ..self },
        }
    }
}

impl ViewIntent {
    /// Intent for a filter control carrying the raw `data-filter` value
    pub fn filter_from_attribute(value: &str) -> Self {
        ViewIntent::SelectFilter(FilterSelector::from_attribute(value))
    }

    /// Intent for a sort control carrying the raw `data-sort` value
    pub fn sort_from_attribute(value: &str) -> Self {
        ViewIntent::SelectSort(SortSelector::from_attribute(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_changes_only_target_selector() {
        let state = ViewState::new(FilterSelector::Hard, SortSelector::Name);

        let next = state.reduce(ViewIntent::SelectSort(SortSelector::Time));
        assert_eq!(next, ViewState::new(FilterSelector::Hard, SortSelector::Time));

        let next = next.reduce(ViewIntent::SelectFilter(FilterSelector::Quick));
        assert_eq!(next, ViewState::new(FilterSelector::Quick, SortSelector::Time));

        // the original value is untouched
        assert_eq!(state.filter, FilterSelector::Hard);
    }

    #[test]
    fn test_unknown_attribute_resets_to_neutral() {
        let state = ViewState::new(FilterSelector::Easy, SortSelector::Time);
        let next = state
            .reduce(ViewIntent::filter_from_attribute("vegan"))
            .reduce(ViewIntent::sort_from_attribute("rating"));
        assert_eq!(next, ViewState::default());
    }
}
