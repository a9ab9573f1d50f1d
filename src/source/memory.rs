use crate::domain::record::Record;
use crate::source::errors::{SourceError, SourceResult};
use crate::source::{DataSource, FetchCriteria};

/// Data source serving a fixed record set held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<Record>,
    outage: Option<String>,
}

impl InMemorySource {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            outage: None,
        }
    }

    /// A source whose every fetch fails with
    /// [`SourceError::SourceUnavailable`].
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            outage: Some(reason.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DataSource for InMemorySource {
    fn fetch_records(&self, criteria: &FetchCriteria) -> SourceResult<Vec<Record>> {
        if let Some(reason) = &self.outage {
            return Err(SourceError::SourceUnavailable(reason.clone()));
        }

        let limit = criteria.limit.unwrap_or(self.records.len());
        Ok(self.records.iter().take(limit).cloned().collect())
    }
}
