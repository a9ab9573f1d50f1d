use std::collections::BTreeMap;

use serde::Serialize;

use crate::controller::{ListController, Period, SortDirection, SortState};
use crate::domain::record::Record;
use crate::pagination::Paginated;

/// Validated list request handed to the list services.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListPageQuery {
    /// Search term, trimmed and non-empty.
    pub search: Option<String>,
    /// Categorical filters as `(field, value)` pairs.
    pub filters: Vec<(String, String)>,
    pub period: Period,
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
    pub page: Option<usize>,
}

/// Data required to render a list page or answer the list API.
#[derive(Debug, Serialize)]
pub struct ListPageData {
    /// Current page of records with pagination links.
    pub records: Paginated<Record>,
    /// Search term as the user typed it (trimmed), echoed back to the
    /// template when present.
    pub search_query: Option<String>,
    pub filters: BTreeMap<String, String>,
    pub period: Period,
    pub sort: Option<SortState>,
    /// Per categorical field, number of records for each value.
    pub counts: BTreeMap<String, BTreeMap<String, usize>>,
}

impl ListPageData {
    /// Projects `controller` for rendering; `search_query` is the term as
    /// submitted, since the controller only keeps its lower-cased form.
    pub fn new(controller: &ListController, search_query: Option<String>) -> Self {
        let query = controller.query();
        let counts = controller
            .config()
            .category_fields()
            .iter()
            .map(|field| (field.to_string(), controller.category_counts(field)))
            .collect();

        Self {
            records: Paginated::from(controller),
            search_query,
            filters: query.categories().clone(),
            period: query.period(),
            sort: query.sort().cloned(),
            counts,
        }
    }
}

/// One entry of a categorical filter drop-down.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: &'static str,
    /// Records holding `value`; zero when none do.
    pub count: usize,
}

impl CategoryOption {
    /// Options for `values`, counted from `data.counts[field]`.
    pub fn for_field(data: &ListPageData, field: &str, values: &[&'static str]) -> Vec<Self> {
        let counts = data.counts.get(field);
        values
            .iter()
            .map(|&value| CategoryOption {
                value,
                count: counts
                    .and_then(|counts| counts.get(value))
                    .copied()
                    .unwrap_or(0),
            })
            .collect()
    }
}
