//! Reservations management screen.

use chrono::{DateTime, Utc};

use crate::controller::{FieldKind, ListConfig, SortDirection};
use crate::domain::record::Record;
use crate::domain::types::PageSize;
use crate::dto::list::{ListPageData, ListPageQuery};
use crate::services::ServiceResult;
use crate::services::list::{export_csv, find_record, load_list_page};
use crate::source::DataSource;

/// Columns written by [`export_reservations`], in order.
pub const RESERVATION_EXPORT_COLUMNS: [&str; 13] = [
    "id",
    "bookingCode",
    "passenger",
    "email",
    "route.from",
    "route.to",
    "flightNumber",
    "departureDate",
    "bookingDate",
    "status",
    "paymentStatus",
    "totalAmount",
    "passengers",
];

/// Search, filter and sort fields of the reservations list.
pub fn reservations_config(page_size: PageSize) -> ListConfig {
    ListConfig::new(page_size)
        .search_field("bookingCode")
        .search_field("passenger")
        .search_field("flightNumber")
        .category_field("status")
        .category_field("paymentStatus")
        .period_field("bookingDate")
        .sort_field("bookingCode", FieldKind::Text)
        .sort_field("passenger", FieldKind::Text)
        .sort_field("flightNumber", FieldKind::Text)
        .sort_field("status", FieldKind::Text)
        .sort_field("totalAmount", FieldKind::Number)
        .sort_field("passengers", FieldKind::Number)
        .sort_field("bookingDate", FieldKind::Date)
        .sort_field("departureDate", FieldKind::Date)
        .default_sort("bookingCode", SortDirection::Desc)
}

pub fn load_reservations_page<S>(
    source: &S,
    page_size: PageSize,
    query: &ListPageQuery,
    now: DateTime<Utc>,
) -> ServiceResult<ListPageData>
where
    S: DataSource + ?Sized,
{
    load_list_page(source, reservations_config(page_size), query, now)
}

pub fn find_reservation<S>(source: &S, id: i64) -> ServiceResult<Record>
where
    S: DataSource + ?Sized,
{
    find_record(source, reservations_config(PageSize::default()), id)
}

/// Exports every reservation matching `query` as CSV.
pub fn export_reservations<S>(
    source: &S,
    query: &ListPageQuery,
    now: DateTime<Utc>,
) -> ServiceResult<String>
where
    S: DataSource + ?Sized,
{
    export_csv(
        source,
        reservations_config(PageSize::default()),
        query,
        &RESERVATION_EXPORT_COLUMNS,
        now,
    )
}
