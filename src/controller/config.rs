//! Explicit per-instance configuration of a [`super::ListController`].

use thiserror::Error;

use crate::controller::query::{SortDirection, SortState};
use crate::domain::types::{FieldName, PageSize};
use crate::source::errors::SourceError;

/// How values of a sortable field are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Case-insensitive lexicographic order.
    Text,
    /// Numeric order; booleans count as `0`/`1`.
    Number,
    /// Chronological order; RFC 3339 text is parsed.
    Date,
}

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error(transparent)]
    Source(#[from] SourceError),
}

pub type ListResult<T> = Result<T, ListError>;

/// Field lists, page size and default ordering of one list.
#[derive(Clone, Debug, Default)]
pub struct ListConfig {
    page_size: PageSize,
    search_fields: Vec<FieldName>,
    category_fields: Vec<FieldName>,
    sort_fields: Vec<(FieldName, FieldKind)>,
    period_field: Option<FieldName>,
    default_sort: Option<SortState>,
}

impl ListConfig {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// Adds a free-text searchable field.
    pub fn search_field(mut self, name: impl Into<String>) -> Self {
        if let Some(name) = field_name(name) {
            self.search_fields.push(name);
        }
        self
    }

    /// Adds a categorical field that accepts exact-match filters.
    pub fn category_field(mut self, name: impl Into<String>) -> Self {
        if let Some(name) = field_name(name) {
            self.category_fields.push(name);
        }
        self
    }

    /// Declares a sortable field and how its values compare.
    pub fn sort_field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        if let Some(name) = field_name(name) {
            self.sort_fields.retain(|(existing, _)| existing != &name);
            self.sort_fields.push((name, kind));
        }
        self
    }

    /// Sets the date field the period filter applies to.
    pub fn period_field(mut self, name: impl Into<String>) -> Self {
        self.period_field = field_name(name);
        self
    }

    /// Sort applied before the user picks one.
    pub fn default_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.default_sort = Some(SortState::new(field, direction));
        self
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn search_fields(&self) -> &[FieldName] {
        &self.search_fields
    }

    pub fn category_fields(&self) -> &[FieldName] {
        &self.category_fields
    }

    pub fn period(&self) -> Option<&FieldName> {
        self.period_field.as_ref()
    }

    pub fn initial_sort(&self) -> Option<&SortState> {
        self.default_sort.as_ref()
    }

    pub fn sort_kind(&self, field: &str) -> Option<FieldKind> {
        self.sort_fields
            .iter()
            .find(|(name, _)| name.as_str() == field)
            .map(|(_, kind)| *kind)
    }

    pub fn is_category_field(&self, field: &str) -> bool {
        self.category_fields.iter().any(|name| name.as_str() == field)
    }

    /// Strict lookup for callers that want to report unknown sort fields.
    pub fn check_sort_field(&self, field: &str) -> ListResult<FieldKind> {
        self.sort_kind(field)
            .ok_or_else(|| ListError::InvalidField(field.to_string()))
    }

    /// Strict lookup for callers that want to report unknown filter fields.
    pub fn check_category_field(&self, field: &str) -> ListResult<()> {
        if self.is_category_field(field) {
            Ok(())
        } else {
            Err(ListError::InvalidField(field.to_string()))
        }
    }
}

fn field_name(name: impl Into<String>) -> Option<FieldName> {
    match FieldName::new(name) {
        Ok(name) => Some(name),
        Err(err) => {
            log::warn!("Skipping list field: {err}");
            None
        }
    }
}
