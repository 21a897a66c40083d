use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{validate_date_range, validate_email, BookingId, Error, PropertyId, Validator};

/// Operator-set booking state. It is stored as-is and never derived from
/// whether "now" falls inside the booked date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Cancelled,
    Completed,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStatus::Active => "active",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for BookingStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(BookingStatus::Active),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            _ => Err(Error::Unknown),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub booking_id: BookingId,
    pub property_id: PropertyId,
    pub user_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatus,
    /// Server-assigned at insert time.
    pub created_at: DateTime<Utc>,
}

/// Editable booking fields for create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub user_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatus,
}

impl NewBooking {
    pub fn new(
        user_email: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: BookingStatus,
    ) -> Self {
        Self {
            user_email: user_email.into(),
            start_date,
            end_date,
            status,
        }
    }
}

impl Validator for NewBooking {
    fn validate(&self) -> Result<(), Error> {
        validate_email(&self.user_email)?;
        validate_date_range(self.start_date, self.end_date)
    }
}
