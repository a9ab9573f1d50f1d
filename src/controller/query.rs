//! Filter and sort inputs held by a list controller.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::controller::config::{FieldKind, ListConfig};
use crate::domain::record::{FieldValue, Record};
use crate::domain::types::TypeConstraintError;

/// Filter value that disables a categorical or period filter.
pub const ALL: &str = "all";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "sort direction `{other}`"
            ))),
        }
    }
}

/// Active sort field and direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// Relative booking-date windows offered by the reservations screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    All,
    /// The UTC calendar day containing `now`, not the server's local day.
    Today,
    Week,
    Month,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::All => ALL,
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
        }
    }

    /// Resolves the period against `now`. `All` has no window.
    pub fn window(self, now: DateTime<Utc>) -> Option<DateWindow> {
        match self {
            Period::All => None,
            Period::Today => {
                let start = now
                    .date_naive()
                    .and_hms_opt(0, 0, 0)
                    .map(|midnight| midnight.and_utc())?;
                Some(DateWindow {
                    start,
                    end: Some(start + Duration::days(1)),
                })
            }
            Period::Week => Some(DateWindow {
                start: now - Duration::days(7),
                end: None,
            }),
            Period::Month => Some(DateWindow {
                start: now - Duration::days(30),
                end: None,
            }),
        }
    }
}

impl FromStr for Period {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            ALL | "" => Ok(Period::All),
            "today" => Ok(Period::Today),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            other => Err(TypeConstraintError::InvalidValue(format!("period `{other}`"))),
        }
    }
}

/// Half-open instant range `[start, end)`; no `end` means open-ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

impl DateWindow {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && self.end.is_none_or(|end| instant < end)
    }
}

/// Current search term, categorical filters, period and sort.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListQuery {
    search: String,
    categories: BTreeMap<String, String>,
    period: Period,
    window: Option<DateWindow>,
    sort: Option<SortState>,
}

impl ListQuery {
    pub(crate) fn with_sort(sort: Option<SortState>) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    /// Normalized (lower-cased) search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn categories(&self) -> &BTreeMap<String, String> {
        &self.categories
    }

    pub fn category(&self, field: &str) -> Option<&str> {
        self.categories.get(field).map(String::as_str)
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub(crate) fn set_search(&mut self, term: &str) {
        self.search = term.to_lowercase();
    }

    pub(crate) fn set_category(&mut self, field: &str, value: &str) {
        if value == ALL {
            self.categories.remove(field);
        } else {
            self.categories.insert(field.to_string(), value.to_string());
        }
    }

    pub(crate) fn set_period(&mut self, period: Period, now: DateTime<Utc>) {
        self.period = period;
        self.window = period.window(now);
    }

    pub(crate) fn set_sort(&mut self, sort: SortState) {
        self.sort = Some(sort);
    }

    pub(crate) fn clear_filters(&mut self) {
        self.search.clear();
        self.categories.clear();
        self.period = Period::All;
        self.window = None;
    }

    /// Whether `record` passes the search term, every categorical filter and
    /// the period window.
    pub(crate) fn matches(&self, record: &Record, config: &ListConfig) -> bool {
        self.matches_search(record, config)
            && self.matches_categories(record)
            && self.matches_window(record, config)
    }

    fn matches_search(&self, record: &Record, config: &ListConfig) -> bool {
        if self.search.is_empty() {
            return true;
        }
        config.search_fields().iter().any(|field| {
            record
                .lookup(field)
                .and_then(FieldValue::as_category)
                .is_some_and(|text| text.to_lowercase().contains(&self.search))
        })
    }

    fn matches_categories(&self, record: &Record) -> bool {
        self.categories.iter().all(|(field, expected)| {
            record
                .lookup(field)
                .and_then(FieldValue::as_category)
                .is_some_and(|actual| &actual == expected)
        })
    }

    fn matches_window(&self, record: &Record, config: &ListConfig) -> bool {
        let (Some(window), Some(field)) = (self.window, config.period()) else {
            return true;
        };
        record
            .lookup(field)
            .and_then(FieldValue::as_date)
            .is_some_and(|instant| window.contains(instant))
    }
}

/// Compares two records on one field.
///
/// Records missing the field (or holding a value of the wrong kind) sort
/// after every record that has it, in both directions; two such records are
/// equal so the stable sort keeps their order.
pub(crate) fn compare_records(
    a: &Record,
    b: &Record,
    field: &str,
    kind: FieldKind,
    direction: SortDirection,
) -> Ordering {
    let a = a.lookup(field);
    let b = b.lookup(field);
    match kind {
        FieldKind::Text => compare_present(
            a.and_then(FieldValue::as_category).map(|s| s.to_lowercase()),
            b.and_then(FieldValue::as_category).map(|s| s.to_lowercase()),
            direction,
            |x, y| x.cmp(y),
        ),
        FieldKind::Number => compare_present(
            a.and_then(FieldValue::as_number),
            b.and_then(FieldValue::as_number),
            direction,
            |x, y| x.total_cmp(y),
        ),
        FieldKind::Date => compare_present(
            a.and_then(FieldValue::as_date),
            b.and_then(FieldValue::as_date),
            direction,
            |x, y| x.cmp(y),
        ),
    }
}

fn compare_present<T>(
    a: Option<T>,
    b: Option<T>,
    direction: SortDirection,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Asc => cmp(&a, &b),
            SortDirection::Desc => cmp(&b, &a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::types::RecordId;

    fn record(id: i64) -> Record {
        Record::new(RecordId::new(id).unwrap())
    }

    #[test]
    fn direction_parses_and_toggles() {
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn today_window_covers_the_calendar_day() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 15, 30, 0).unwrap();
        let window = Period::Today.window(now).unwrap();

        assert!(window.contains(Utc.with_ymd_and_hms(2025, 6, 10, 0, 0, 0).unwrap()));
        assert!(window.contains(Utc.with_ymd_and_hms(2025, 6, 10, 23, 59, 59).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2025, 6, 11, 0, 0, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2025, 6, 9, 23, 59, 59).unwrap()));
    }

    #[test]
    fn week_and_month_are_open_ended() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();

        let week = Period::Week.window(now).unwrap();
        assert!(week.contains(now - Duration::days(7)));
        assert!(!week.contains(now - Duration::days(8)));
        assert!(week.contains(now + Duration::days(3)));

        let month = Period::Month.window(now).unwrap();
        assert!(month.contains(now - Duration::days(30)));
        assert!(!month.contains(now - Duration::days(31)));

        assert_eq!(Period::All.window(now), None);
        assert_eq!("".parse::<Period>(), Ok(Period::All));
    }

    #[test]
    fn missing_values_sort_last_in_both_directions() {
        let present = record(1).with("bookings", 3_i64);
        let missing = record(2);

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            assert_eq!(
                compare_records(&present, &missing, "bookings", FieldKind::Number, direction),
                Ordering::Less
            );
        }
        assert_eq!(
            compare_records(&missing, &record(3), "bookings", FieldKind::Number, SortDirection::Asc),
            Ordering::Equal
        );
    }

    #[test]
    fn text_comparison_ignores_case() {
        let upper = record(1).with("name", "ANA");
        let lower = record(2).with("name", "ana");
        let bo = record(3).with("name", "bo");

        assert_eq!(
            compare_records(&upper, &lower, "name", FieldKind::Text, SortDirection::Asc),
            Ordering::Equal
        );
        assert_eq!(
            compare_records(&upper, &bo, "name", FieldKind::Text, SortDirection::Asc),
            Ordering::Less
        );
        assert_eq!(
            compare_records(&upper, &bo, "name", FieldKind::Text, SortDirection::Desc),
            Ordering::Greater
        );
    }

    #[test]
    fn dates_compare_as_instants() {
        let earlier = record(1).with("at", "2025-01-01T10:00:00+02:00");
        let later = record(2).with("at", Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap());

        assert_eq!(
            compare_records(&earlier, &later, "at", FieldKind::Date, SortDirection::Asc),
            Ordering::Less
        );
    }
}
