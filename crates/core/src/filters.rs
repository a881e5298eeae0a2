//! Sidebar filter set shared by the dashboard, interactions, and reports pages.

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FILTER_WINDOW_DAYS;

/// Conjunctive filter over interactions joined to clients.
///
/// Empty members generate no predicate at all: an empty `sectors` list means
/// "any sector", never "no sector". The storage layer only adds a clause for
/// the members that are set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InteractionFilters {
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub rep_ids: Vec<i32>,
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl InteractionFilters {
    /// The sidebar default window: last 60 days through today.
    pub fn default_window() -> Self {
        let today = Local::now().date_naive();
        Self {
            start: Some(today - Duration::days(DEFAULT_FILTER_WINDOW_DAYS)),
            end: Some(today),
            ..Self::default()
        }
    }

    /// True when no member constrains the query.
    pub fn is_unconstrained(&self) -> bool {
        self.sectors.is_empty()
            && self.regions.is_empty()
            && self.rep_ids.is_empty()
            && self.start.is_none()
            && self.end.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_spans_sixty_days() {
        let filters = InteractionFilters::default_window();
        let start = filters.start.unwrap();
        let end = filters.end.unwrap();
        assert_eq!((end - start).num_days(), DEFAULT_FILTER_WINDOW_DAYS);
        assert!(filters.sectors.is_empty());
        assert!(filters.rep_ids.is_empty());
    }

    #[test]
    fn empty_filters_are_unconstrained() {
        assert!(InteractionFilters::default().is_unconstrained());
        let filters = InteractionFilters {
            sectors: vec!["Power Generation".to_string()],
            ..Default::default()
        };
        assert!(!filters.is_unconstrained());
    }
}
