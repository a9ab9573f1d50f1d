#![cfg(all(feature = "server", feature = "test-mocks"))]

use chrono::Utc;
use flights_admin::domain::record::Record;
use flights_admin::domain::types::{PageSize, RecordId};
use flights_admin::dto::list::ListPageQuery;
use flights_admin::services::ServiceError;
use flights_admin::services::users::load_users_page;
use flights_admin::source::errors::SourceError;
use flights_admin::source::mock::MockDataSource;

#[test]
fn users_page_fetches_everything_once() {
    let mut source = MockDataSource::new();
    source
        .expect_fetch_records()
        .withf(|criteria| criteria.limit.is_none())
        .times(1)
        .returning(|_| {
            Ok(vec![
                Record::new(RecordId::new(1).unwrap()).with("name", "Zé"),
                Record::new(RecordId::new(2).unwrap()).with("name", "Ana"),
            ])
        });

    let data = load_users_page(
        &source,
        PageSize::default(),
        &ListPageQuery::default(),
        Utc::now(),
    )
    .unwrap();

    let ids: Vec<i64> = data.records.items.iter().map(|r| r.id().get()).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn users_page_surfaces_outage() {
    let mut source = MockDataSource::new();
    source
        .expect_fetch_records()
        .returning(|_| Err(SourceError::SourceUnavailable("maintenance".to_string())));

    let result = load_users_page(
        &source,
        PageSize::default(),
        &ListPageQuery::default(),
        Utc::now(),
    );

    assert!(matches!(result, Err(ServiceError::Source(_))));
}
