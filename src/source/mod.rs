//! Data sources supplying the full record set to a list controller.

use crate::domain::record::Record;
use crate::source::errors::SourceResult;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod sample;

/// Options passed to [`DataSource::fetch_records`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchCriteria {
    pub limit: Option<usize>,
}

impl FetchCriteria {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Supplier of the complete, unfiltered record set for one list.
pub trait DataSource: Send + Sync {
    fn fetch_records(&self, criteria: &FetchCriteria) -> SourceResult<Vec<Record>>;
}
