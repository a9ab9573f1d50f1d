//! Request-scoped list handling shared by the users and reservations screens.

use chrono::{DateTime, Utc};

use crate::controller::{ListConfig, ListController, Period, SortDirection};
use crate::domain::record::{FieldValue, Record};
use crate::domain::types::RecordId;
use crate::dto::list::{ListPageData, ListPageQuery};
use crate::services::{ServiceError, ServiceResult};
use crate::source::{DataSource, FetchCriteria};

/// Loads `source` into a fresh controller and applies `query` to it.
///
/// Unknown filter or sort fields are logged and skipped; the list is still
/// rendered.
pub fn build_controller<S>(
    source: &S,
    config: ListConfig,
    query: &ListPageQuery,
    now: DateTime<Utc>,
) -> ServiceResult<ListController>
where
    S: DataSource + ?Sized,
{
    let mut controller = ListController::new(config);
    controller
        .refresh(source, &FetchCriteria::all())
        .map_err(|err| {
            log::error!("Failed to load records: {err}");
            ServiceError::from(err)
        })?;

    if let Some(term) = &query.search {
        controller.set_search_term(term);
    }

    for (field, value) in &query.filters {
        if let Err(err) = controller.config().check_category_field(field) {
            log::warn!("Ignoring filter {field}={value}: {err}");
            continue;
        }
        controller.set_category_filter(field, value);
    }

    if query.period != Period::All {
        if controller.config().period().is_none() {
            log::warn!("Ignoring period {}: list has no date field", query.period.as_str());
        } else {
            controller.set_period_filter(query.period, now);
        }
    }

    if let Some(field) = &query.sort {
        if let Err(err) = controller.config().check_sort_field(field) {
            log::warn!("Ignoring sort: {err}");
        } else {
            let direction = query.direction.unwrap_or(SortDirection::Asc);
            controller.set_sort(field, Some(direction));
        }
    }

    if let Some(page) = query.page {
        controller.go_to_page(page);
    }

    Ok(controller)
}

/// Loads one page of `source` for rendering.
pub fn load_list_page<S>(
    source: &S,
    config: ListConfig,
    query: &ListPageQuery,
    now: DateTime<Utc>,
) -> ServiceResult<ListPageData>
where
    S: DataSource + ?Sized,
{
    let controller = build_controller(source, config, query, now)?;
    Ok(ListPageData::new(&controller, query.search.clone()))
}

/// Returns the record with `id`, regardless of any filter.
pub fn find_record<S>(source: &S, config: ListConfig, id: i64) -> ServiceResult<Record>
where
    S: DataSource + ?Sized,
{
    let id = RecordId::new(id)?;
    let mut controller = ListController::new(config);
    controller
        .refresh(source, &FetchCriteria::all())
        .map_err(|err| {
            log::error!("Failed to load records: {err}");
            ServiceError::from(err)
        })?;

    controller.find(id).cloned().ok_or(ServiceError::NotFound)
}

/// Serializes the whole filtered and sorted view as CSV with one column per
/// entry of `columns`. Dotted columns read nested fields.
pub fn export_csv<S>(
    source: &S,
    config: ListConfig,
    query: &ListPageQuery,
    columns: &[&str],
    now: DateTime<Utc>,
) -> ServiceResult<String>
where
    S: DataSource + ?Sized,
{
    let controller = build_controller(source, config, query, now)?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(columns).map_err(csv_error)?;
    for record in controller.view() {
        let row = columns.iter().map(|column| {
            record
                .lookup(column)
                .map(FieldValue::to_display_string)
                .unwrap_or_default()
        });
        writer.write_record(row).map_err(csv_error)?;
    }

    let bytes = writer.into_inner().map_err(|err| {
        log::error!("Failed to flush CSV export: {err}");
        ServiceError::Internal("CSV export failed".to_string())
    })?;
    String::from_utf8(bytes).map_err(|err| {
        log::error!("CSV export is not UTF-8: {err}");
        ServiceError::Internal("CSV export failed".to_string())
    })
}

fn csv_error(err: csv::Error) -> ServiceError {
    log::error!("Failed to write CSV row: {err}");
    ServiceError::Internal("CSV export failed".to_string())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::controller::FieldKind;
    use crate::domain::types::PageSize;
    use crate::source::errors::SourceError;
    use crate::source::memory::InMemorySource;
    use crate::source::mock::MockDataSource;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap()
    }

    fn config() -> ListConfig {
        ListConfig::new(PageSize::new(2).unwrap())
            .search_field("name")
            .category_field("status")
            .sort_field("name", FieldKind::Text)
            .sort_field("bookings", FieldKind::Number)
            .default_sort("name", SortDirection::Asc)
    }

    fn record(id: i64, name: &str, status: &str, bookings: i64) -> Record {
        Record::new(RecordId::new(id).unwrap())
            .with("name", name)
            .with("status", status)
            .with("bookings", bookings)
    }

    fn source() -> InMemorySource {
        InMemorySource::new(vec![
            record(1, "Carla", "active", 4),
            record(2, "Ana", "vip", 9),
            record(3, "Bruno", "active", 1),
            record(4, "Ana, \"Jr\"", "inactive", 0),
        ])
    }

    fn names(data: &ListPageData) -> Vec<String> {
        data.records
            .items
            .iter()
            .filter_map(|r| r.lookup("name").and_then(FieldValue::as_category))
            .collect()
    }

    #[test]
    fn default_sort_and_first_page() {
        let data = load_list_page(&source(), config(), &ListPageQuery::default(), now()).unwrap();

        assert_eq!(names(&data), vec!["Ana", "Ana, \"Jr\""]);
        assert_eq!(data.records.summary.total_items, 4);
        assert_eq!(data.records.summary.total_pages, 2);
        assert_eq!(data.counts["status"]["active"], 2);
        assert!(data.search_query.is_none());
    }

    #[test]
    fn query_applies_filters_sort_and_page() {
        let query = ListPageQuery {
            filters: vec![("status".to_string(), "active".to_string())],
            sort: Some("bookings".to_string()),
            direction: Some(SortDirection::Desc),
            page: Some(1),
            ..ListPageQuery::default()
        };

        let data = load_list_page(&source(), config(), &query, now()).unwrap();

        assert_eq!(names(&data), vec!["Carla", "Bruno"]);
        assert_eq!(data.filters.get("status").map(String::as_str), Some("active"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let query = ListPageQuery {
            filters: vec![("paymentStatus".to_string(), "paid".to_string())],
            sort: Some("colour".to_string()),
            period: Period::Week,
            ..ListPageQuery::default()
        };

        let data = load_list_page(&source(), config(), &query, now()).unwrap();

        assert_eq!(data.records.summary.total_items, 4);
        assert!(data.filters.is_empty());
        assert_eq!(
            data.sort.map(|s| s.field),
            Some("name".to_string())
        );
    }

    #[test]
    fn page_past_the_end_is_clamped() {
        let query = ListPageQuery {
            search: Some("an".to_string()),
            page: Some(9),
            ..ListPageQuery::default()
        };

        let data = load_list_page(&source(), config(), &query, now()).unwrap();

        assert_eq!(data.records.page, 1);
        assert_eq!(data.search_query.as_deref(), Some("an"));
    }

    #[test]
    fn search_term_is_echoed_as_typed() {
        let query = ListPageQuery {
            search: Some("ANA".to_string()),
            ..ListPageQuery::default()
        };

        let data = load_list_page(&source(), config(), &query, now()).unwrap();

        assert_eq!(data.records.summary.total_items, 2);
        assert_eq!(data.search_query.as_deref(), Some("ANA"));
    }

    #[test]
    fn unavailable_source_is_reported() {
        let mut source = MockDataSource::new();
        source
            .expect_fetch_records()
            .returning(|_| Err(SourceError::SourceUnavailable("timeout".to_string())));

        let result = load_list_page(&source, config(), &ListPageQuery::default(), now());

        assert!(matches!(
            result,
            Err(ServiceError::Source(SourceError::SourceUnavailable(_)))
        ));
    }

    #[test]
    fn find_record_by_id() {
        let found = find_record(&source(), config(), 3).unwrap();
        assert_eq!(found.id().get(), 3);

        assert!(matches!(
            find_record(&source(), config(), 99),
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(
            find_record(&source(), config(), 0),
            Err(ServiceError::TypeConstraint(_))
        ));
    }

    #[test]
    fn export_covers_the_whole_view() {
        let query = ListPageQuery {
            search: Some("ana".to_string()),
            ..ListPageQuery::default()
        };

        let csv = export_csv(&source(), config(), &query, &["id", "name", "missing"], now())
            .unwrap();

        assert_eq!(
            csv,
            "id,name,missing\n2,Ana,\n4,\"Ana, \"\"Jr\"\"\",\n"
        );
    }
}
