use serde::Deserialize;
use validator::Validate;

use crate::controller::{ALL, Period, SortDirection};
use crate::dto::list::ListPageQuery;
use crate::forms::FormError;

/// Query-string parameters accepted by the list pages and API.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListQueryForm {
    /// Free-text search.
    #[validate(length(max = 100))]
    pub q: Option<String>,
    #[validate(length(max = 32))]
    pub status: Option<String>,
    /// Payment status (reservations only).
    #[validate(length(max = 32))]
    pub payment: Option<String>,
    pub period: Option<String>,
    #[validate(length(max = 64))]
    pub sort: Option<String>,
    pub dir: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl TryFrom<ListQueryForm> for ListPageQuery {
    type Error = FormError;

    fn try_from(form: ListQueryForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let direction = non_empty(form.dir)
            .map(|dir| dir.parse::<SortDirection>())
            .transpose()
            .map_err(|_| FormError::InvalidDirection)?;

        let period = non_empty(form.period)
            .map(|period| period.parse::<Period>())
            .transpose()
            .map_err(|_| FormError::InvalidPeriod)?
            .unwrap_or_default();

        let mut filters = Vec::new();
        for (field, value) in [("status", form.status), ("paymentStatus", form.payment)] {
            if let Some(value) = non_empty(value).filter(|v| v != ALL) {
                filters.push((field.to_string(), value));
            }
        }

        Ok(ListPageQuery {
            search: non_empty(form.q),
            filters,
            period,
            sort: non_empty(form.sort),
            direction,
            page: form.page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_all_values_are_dropped() {
        let form = ListQueryForm {
            q: Some("   ".to_string()),
            status: Some("all".to_string()),
            payment: Some("".to_string()),
            period: Some("".to_string()),
            ..ListQueryForm::default()
        };

        let query = ListPageQuery::try_from(form).unwrap();

        assert_eq!(query, ListPageQuery::default());
    }

    #[test]
    fn values_are_trimmed_and_parsed() {
        let form = ListQueryForm {
            q: Some(" ana ".to_string()),
            status: Some("confirmed".to_string()),
            payment: Some("paid".to_string()),
            period: Some("week".to_string()),
            sort: Some("bookingDate".to_string()),
            dir: Some("DESC".to_string()),
            page: Some(3),
        };

        let query = ListPageQuery::try_from(form).unwrap();

        assert_eq!(query.search.as_deref(), Some("ana"));
        assert_eq!(
            query.filters,
            vec![
                ("status".to_string(), "confirmed".to_string()),
                ("paymentStatus".to_string(), "paid".to_string()),
            ]
        );
        assert_eq!(query.period, Period::Week);
        assert_eq!(query.sort.as_deref(), Some("bookingDate"));
        assert_eq!(query.direction, Some(SortDirection::Desc));
        assert_eq!(query.page, Some(3));
    }

    #[test]
    fn rejects_bad_direction_and_period() {
        let form = ListQueryForm {
            dir: Some("up".to_string()),
            ..ListQueryForm::default()
        };
        assert!(matches!(
            ListPageQuery::try_from(form),
            Err(FormError::InvalidDirection)
        ));

        let form = ListQueryForm {
            period: Some("year".to_string()),
            ..ListQueryForm::default()
        };
        assert!(matches!(
            ListPageQuery::try_from(form),
            Err(FormError::InvalidPeriod)
        ));
    }

    #[test]
    fn rejects_zero_page_and_long_search() {
        let form = ListQueryForm {
            page: Some(0),
            ..ListQueryForm::default()
        };
        assert!(matches!(
            ListPageQuery::try_from(form),
            Err(FormError::Validation(_))
        ));

        let form = ListQueryForm {
            q: Some("x".repeat(101)),
            ..ListQueryForm::default()
        };
        assert!(matches!(
            ListPageQuery::try_from(form),
            Err(FormError::Validation(_))
        ));
    }
}
