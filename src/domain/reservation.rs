use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::record::{FieldValue, Record};
use crate::domain::types::RecordId;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Confirmed,
    Pending,
    Cancelled,
    Refunded,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 4] = [
        ReservationStatus::Confirmed,
        ReservationStatus::Pending,
        ReservationStatus::Cancelled,
        ReservationStatus::Refunded,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Pending => "pending",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Refunded => "refunded",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Paid,
        PaymentStatus::Pending,
        PaymentStatus::Failed,
        PaymentStatus::Refunded,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

/// Origin and destination airports of a booking.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub from_name: String,
    pub to_name: String,
}

impl From<&Route> for FieldValue {
    fn from(route: &Route) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("from".to_string(), FieldValue::from(route.from.as_str()));
        fields.insert("to".to_string(), FieldValue::from(route.to.as_str()));
        fields.insert(
            "fromName".to_string(),
            FieldValue::from(route.from_name.as_str()),
        );
        fields.insert("toName".to_string(), FieldValue::from(route.to_name.as_str()));
        FieldValue::Nested(fields)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub id: RecordId,
    pub booking_code: String,
    pub passenger: String,
    pub email: String,
    pub phone: String,
    pub route: Route,
    pub flight_number: String,
    pub airline: String,
    pub departure_date: DateTime<Utc>,
    pub arrival_date: DateTime<Utc>,
    pub booking_date: DateTime<Utc>,
    pub status: ReservationStatus,
    pub payment_status: PaymentStatus,
    pub total_amount: i64,
    pub taxes: i64,
    pub passengers: u32,
    pub baggage: bool,
    pub seat_preference: String,
    pub special_requests: Option<String>,
    pub checkin_completed: bool,
    pub last_update: DateTime<Utc>,
}

impl From<&Reservation> for Record {
    fn from(reservation: &Reservation) -> Self {
        Record::new(reservation.id)
            .with("bookingCode", reservation.booking_code.as_str())
            .with("passenger", reservation.passenger.as_str())
            .with("email", reservation.email.as_str())
            .with("phone", reservation.phone.as_str())
            .with("route", &reservation.route)
            .with("flightNumber", reservation.flight_number.as_str())
            .with("airline", reservation.airline.as_str())
            .with("departureDate", reservation.departure_date)
            .with("arrivalDate", reservation.arrival_date)
            .with("bookingDate", reservation.booking_date)
            .with("status", reservation.status.as_str())
            .with("paymentStatus", reservation.payment_status.as_str())
            .with("totalAmount", reservation.total_amount)
            .with("taxes", reservation.taxes)
            .with("passengers", reservation.passengers)
            .with("baggage", reservation.baggage)
            .with("seatPreference", reservation.seat_preference.as_str())
            .with("specialRequests", reservation.special_requests.clone())
            .with(
                "checkinStatus",
                if reservation.checkin_completed {
                    "completed"
                } else {
                    "pending"
                },
            )
            .with("lastUpdate", reservation.last_update)
    }
}

impl From<Reservation> for Record {
    fn from(reservation: Reservation) -> Self {
        Record::from(&reservation)
    }
}
