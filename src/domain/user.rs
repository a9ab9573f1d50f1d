use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::record::Record;
use crate::domain::types::RecordId;

/// Account state shown in the users table.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    PaymentIssues,
    SupportPending,
    Vip,
}

impl UserStatus {
    pub const ALL: [UserStatus; 5] = [
        UserStatus::Active,
        UserStatus::Inactive,
        UserStatus::PaymentIssues,
        UserStatus::SupportPending,
        UserStatus::Vip,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::PaymentIssues => "payment_issues",
            UserStatus::SupportPending => "support_pending",
            UserStatus::Vip => "vip",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub bookings: u32,
    /// Lifetime spend in whole currency units.
    pub total_spent: i64,
    pub last_activity: DateTime<Utc>,
    pub registration_date: DateTime<Utc>,
    pub phone: String,
    pub country: String,
    pub avatar: String,
}

impl From<&User> for Record {
    fn from(user: &User) -> Self {
        Record::new(user.id)
            .with("name", user.name.as_str())
            .with("email", user.email.as_str())
            .with("status", user.status.as_str())
            .with("bookings", user.bookings)
            .with("totalSpent", user.total_spent)
            .with("lastActivity", user.last_activity)
            .with("registrationDate", user.registration_date)
            .with("phone", user.phone.as_str())
            .with("country", user.country.as_str())
            .with("avatar", user.avatar.as_str())
    }
}

impl From<User> for Record {
    fn from(user: User) -> Self {
        Record::from(&user)
    }
}
