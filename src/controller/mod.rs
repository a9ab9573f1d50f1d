//! Generic list controller: search, filter, sort and paginate an in-memory
//! record set and project the current page.
//!
//! One controller is owned by one view. It never touches presentation; a
//! renderer reads [`ListController::current_page_items`] and
//! [`ListController::pagination_summary`] and forwards user gestures back.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::record::{FieldValue, Record};
use crate::domain::types::RecordId;
use crate::source::errors::SourceResult;
use crate::source::{DataSource, FetchCriteria};

pub mod config;
pub mod query;

pub use config::{FieldKind, ListConfig, ListError, ListResult};
pub use query::{ALL, DateWindow, ListQuery, Period, SortDirection, SortState};

/// Derived pagination figures for the current view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationSummary {
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based index of the first item on the page, `0` for an empty view.
    pub first_index_shown: usize,
    /// 1-based index of the last item on the page, `0` for an empty view.
    pub last_index_shown: usize,
}

/// Generation number handed out by [`ListController::begin_load`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct LoadTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The records replaced the source.
    Applied { records: usize },
    /// A newer load was started meanwhile; the result was discarded.
    Superseded,
}

#[derive(Clone, Debug)]
pub struct ListController {
    config: ListConfig,
    source: Vec<Record>,
    /// Indices into `source`, filtered and ordered.
    view: Vec<usize>,
    query: ListQuery,
    page: usize,
    generation: u64,
}

impl ListController {
    pub fn new(config: ListConfig) -> Self {
        let query = ListQuery::with_sort(config.initial_sort().cloned());
        Self {
            config,
            source: Vec::new(),
            view: Vec::new(),
            query,
            page: 1,
            generation: 0,
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size().get()
    }

    pub fn total_pages(&self) -> usize {
        self.view.len().div_ceil(self.page_size()).max(1)
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// Iterates the whole filtered and sorted view.
    pub fn view(&self) -> impl Iterator<Item = &Record> + '_ {
        self.view.iter().map(|&index| &self.source[index])
    }

    /// Replaces the source with `records`, reapplies the current filters and
    /// sort and returns to page 1.
    ///
    /// Any load started earlier with [`Self::begin_load`] becomes stale.
    pub fn load<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Record>,
    {
        self.generation += 1;
        self.replace_source(records);
    }

    /// Starts a load whose result arrives later through
    /// [`Self::complete_load`].
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    /// Applies the result of the load identified by `ticket`.
    ///
    /// Results of superseded loads are dropped. A failed current load leaves
    /// the source, view and page untouched and returns the error.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: SourceResult<Vec<Record>>,
    ) -> ListResult<LoadOutcome> {
        if ticket.0 != self.generation {
            log::debug!(
                "Discarding load {} superseded by load {}",
                ticket.0,
                self.generation
            );
            return Ok(LoadOutcome::Superseded);
        }

        let records = result?;
        self.replace_source(records);
        Ok(LoadOutcome::Applied {
            records: self.source.len(),
        })
    }

    /// Fetches from `source` and loads the result.
    pub fn refresh<S>(&mut self, source: &S, criteria: &FetchCriteria) -> ListResult<LoadOutcome>
    where
        S: DataSource + ?Sized,
    {
        let ticket = self.begin_load();
        let result = source.fetch_records(criteria);
        self.complete_load(ticket, result)
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.query.set_search(term);
        self.recompute();
    }

    /// Filters `field` to records whose value equals `value`; [`ALL`] clears
    /// the filter. Fields not declared as categorical are ignored.
    pub fn set_category_filter(&mut self, field: &str, value: &str) {
        if value != ALL && !self.config.is_category_field(field) {
            log::debug!("Ignoring filter on undeclared field `{field}`");
        } else {
            self.query.set_category(field, value);
        }
        self.recompute();
    }

    pub fn set_period_filter(&mut self, period: Period, now: DateTime<Utc>) {
        self.query.set_period(period, now);
        self.recompute();
    }

    /// Drops the search term, categorical filters and period. Sort is kept.
    pub fn clear_filters(&mut self) {
        self.query.clear_filters();
        self.recompute();
    }

    /// Sorts the view by `field`.
    ///
    /// Without an explicit direction, repeating the active field toggles the
    /// direction and a new field starts ascending. The page is kept.
    pub fn set_sort(&mut self, field: &str, direction: Option<SortDirection>) {
        let direction = match (direction, self.query.sort()) {
            (Some(direction), _) => direction,
            (None, Some(active)) if active.field == field => active.direction.toggled(),
            (None, _) => SortDirection::Asc,
        };
        self.query.set_sort(SortState::new(field, direction));
        self.sort_view();
    }

    /// Moves to page `n`, clamped into `[1, total_pages]`.
    pub fn go_to_page(&mut self, n: usize) {
        self.page = n.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    /// Owned snapshot of the records on the current page.
    pub fn current_page_items(&self) -> Vec<Record> {
        self.view
            .iter()
            .skip(self.page_start())
            .take(self.page_size())
            .map(|&index| self.source[index].clone())
            .collect()
    }

    pub fn pagination_summary(&self) -> PaginationSummary {
        let total_items = self.view.len();
        let start = self.page_start();
        let (first_index_shown, last_index_shown) = if total_items == 0 {
            (0, 0)
        } else {
            (start + 1, (start + self.page_size()).min(total_items))
        };

        PaginationSummary {
            page: self.page,
            total_pages: self.total_pages(),
            total_items,
            first_index_shown,
            last_index_shown,
        }
    }

    /// Looks a record up in the source, ignoring filters.
    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.source.iter().find(|record| record.id() == id)
    }

    /// Number of source records per value of `field`.
    pub fn category_counts(&self, field: &str) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for value in self
            .source
            .iter()
            .filter_map(|record| record.lookup(field).and_then(FieldValue::as_category))
        {
            *counts.entry(value).or_insert(0) += 1;
        }
        counts
    }

    fn page_start(&self) -> usize {
        (self.page - 1) * self.page_size()
    }

    fn replace_source<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Record>,
    {
        let mut seen = HashSet::new();
        self.source = records
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id());
                if !fresh {
                    log::warn!("Dropping record with duplicate id {}", record.id());
                }
                fresh
            })
            .collect();
        self.recompute();
    }

    fn recompute(&mut self) {
        let query = &self.query;
        let config = &self.config;
        self.view = self
            .source
            .iter()
            .enumerate()
            .filter(|(_, record)| query.matches(record, config))
            .map(|(index, _)| index)
            .collect();
        self.sort_view();
        self.page = 1;
    }

    fn sort_view(&mut self) {
        let Some(sort) = self.query.sort() else {
            return;
        };
        let Some(kind) = self.config.sort_kind(&sort.field) else {
            return;
        };
        let source = &self.source;
        self.view.sort_by(|&a, &b| {
            query::compare_records(&source[a], &source[b], &sort.field, kind, sort.direction)
        });
    }
}
