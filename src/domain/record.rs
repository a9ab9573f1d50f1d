//! Opaque record representation flowing through the list controller.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::domain::types::RecordId;

/// Reserved field holding the record identifier.
pub const ID_FIELD: &str = "id";

/// A single field value of a [`Record`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    Date(DateTime<Utc>),
    Nested(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Numeric view of the value. Booleans count as `0`/`1`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(value) => Some(*value as f64),
            FieldValue::Number(value) => Some(*value),
            FieldValue::Bool(value) => Some(if *value { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Instant view of the value. RFC 3339 text is parsed.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Date(value) => Some(*value),
            FieldValue::Text(value) => DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|parsed| parsed.with_timezone(&Utc)),
            _ => None,
        }
    }

    /// Scalar string form used for exact categorical matching.
    ///
    /// `Null` and nested objects have no categorical value.
    pub fn as_category(&self) -> Option<String> {
        match self {
            FieldValue::Text(value) => Some(value.clone()),
            FieldValue::Integer(value) => Some(value.to_string()),
            FieldValue::Number(value) => Some(format_number(*value)),
            FieldValue::Bool(value) => Some(value.to_string()),
            FieldValue::Date(value) => Some(value.to_rfc3339()),
            FieldValue::Null | FieldValue::Nested(_) => None,
        }
    }

    /// Flat textual form used by exports.
    pub fn to_display_string(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Nested(_) => serde_json::to_string(self).unwrap_or_default(),
            other => other.as_category().unwrap_or_default(),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Date(value)
    }
}

impl From<BTreeMap<String, FieldValue>> for FieldValue {
    fn from(value: BTreeMap<String, FieldValue>) -> Self {
        FieldValue::Nested(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// One domain entity as seen by the list controller: an identifier plus a map
/// of named fields.
///
/// The identifier is mirrored into the field map under [`ID_FIELD`] so it can
/// be searched, sorted and serialized like any other field.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    id: RecordId,
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new(id: RecordId) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(ID_FIELD.to_string(), FieldValue::from(id.get()));
        Self { id, fields }
    }

    /// Builder-style setter. Writes to [`ID_FIELD`] are ignored.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        if name == ID_FIELD {
            return;
        }
        self.fields.insert(name, value.into());
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    /// Resolves a field name, following dots into nested objects
    /// (`route.from`).
    pub fn lookup(&self, path: &str) -> Option<&FieldValue> {
        if let Some(value) = self.fields.get(path) {
            return Some(value);
        }

        let mut segments = path.split('.');
        let mut current = self.fields.get(segments.next()?)?;
        for segment in segments {
            match current {
                FieldValue::Nested(children) => current = children.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn id(value: i64) -> RecordId {
        RecordId::new(value).unwrap()
    }

    #[test]
    fn lookup_follows_nested_paths() {
        let mut route = BTreeMap::new();
        route.insert("from".to_string(), FieldValue::from("LIS"));
        let record = Record::new(id(1)).with("route", route);

        assert_eq!(record.lookup("route.from"), Some(&FieldValue::from("LIS")));
        assert_eq!(record.lookup("route.to"), None);
        assert_eq!(record.lookup("route.from.deeper"), None);
        assert_eq!(record.lookup("missing"), None);
    }

    #[test]
    fn id_field_cannot_be_overwritten() {
        let record = Record::new(id(3)).with("id", "other").with("name", "Ana");

        assert_eq!(record.lookup("id"), Some(&FieldValue::Integer(3)));
        assert_eq!(record.id().get(), 3);
    }

    #[test]
    fn serializes_as_flat_object() {
        let booked = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let record = Record::new(id(2))
            .with("name", "Bo")
            .with("bookings", 4_i64)
            .with("bookingDate", booked)
            .with("note", None::<String>);

        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 2,
                "name": "Bo",
                "bookings": 4,
                "bookingDate": "2025-03-01T12:00:00Z",
                "note": null,
            })
        );
    }

    #[test]
    fn categorical_form_of_scalars() {
        assert_eq!(FieldValue::from(3_i64).as_category().as_deref(), Some("3"));
        assert_eq!(FieldValue::from(2.5).as_category().as_deref(), Some("2.5"));
        assert_eq!(FieldValue::from(true).as_category().as_deref(), Some("true"));
        assert_eq!(FieldValue::Null.as_category(), None);
    }

    #[test]
    fn text_dates_are_parsed() {
        let value = FieldValue::from("2025-01-02T03:04:05+01:00");
        let expected = Utc.with_ymd_and_hms(2025, 1, 2, 2, 4, 5).unwrap();

        assert_eq!(value.as_date(), Some(expected));
        assert_eq!(FieldValue::from("not a date").as_date(), None);
    }
}
