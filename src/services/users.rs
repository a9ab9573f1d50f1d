//! Users management screen.

use chrono::{DateTime, Utc};

use crate::controller::{FieldKind, ListConfig, SortDirection};
use crate::domain::record::Record;
use crate::domain::types::PageSize;
use crate::dto::list::{ListPageData, ListPageQuery};
use crate::services::ServiceResult;
use crate::services::list::{export_csv, find_record, load_list_page};
use crate::source::DataSource;

/// Columns written by [`export_users`], in order.
pub const USER_EXPORT_COLUMNS: [&str; 10] = [
    "id",
    "name",
    "email",
    "phone",
    "country",
    "status",
    "bookings",
    "totalSpent",
    "lastActivity",
    "registrationDate",
];

/// Search, filter and sort fields of the users list.
pub fn users_config(page_size: PageSize) -> ListConfig {
    ListConfig::new(page_size)
        .search_field("name")
        .search_field("email")
        .category_field("status")
        .sort_field("name", FieldKind::Text)
        .sort_field("email", FieldKind::Text)
        .sort_field("status", FieldKind::Text)
        .sort_field("bookings", FieldKind::Number)
        .sort_field("totalSpent", FieldKind::Number)
        .sort_field("lastActivity", FieldKind::Date)
        .sort_field("registrationDate", FieldKind::Date)
        .default_sort("name", SortDirection::Asc)
}

pub fn load_users_page<S>(
    source: &S,
    page_size: PageSize,
    query: &ListPageQuery,
    now: DateTime<Utc>,
) -> ServiceResult<ListPageData>
where
    S: DataSource + ?Sized,
{
    load_list_page(source, users_config(page_size), query, now)
}

pub fn find_user<S>(source: &S, id: i64) -> ServiceResult<Record>
where
    S: DataSource + ?Sized,
{
    find_record(source, users_config(PageSize::default()), id)
}

/// Exports every user matching `query` as CSV.
pub fn export_users<S>(
    source: &S,
    query: &ListPageQuery,
    now: DateTime<Utc>,
) -> ServiceResult<String>
where
    S: DataSource + ?Sized,
{
    export_csv(
        source,
        users_config(PageSize::default()),
        query,
        &USER_EXPORT_COLUMNS,
        now,
    )
}
