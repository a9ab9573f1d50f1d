//! Mock data source for isolating services in tests.

use mockall::mock;

use crate::domain::record::Record;
use crate::source::errors::SourceResult;
use crate::source::{DataSource, FetchCriteria};

mock! {
    pub DataSource {}

    impl DataSource for DataSource {
        fn fetch_records(&self, criteria: &FetchCriteria) -> SourceResult<Vec<Record>>;
    }
}
