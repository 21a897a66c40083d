use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::Error;

mod amenity;
mod booking;
mod property;
mod property_filter;

pub use amenity::Amenity;
pub use booking::{Booking, BookingStatus, NewBooking};
pub use property::{NewProperty, Property};
pub use property_filter::{PropertyFilter, PropertyFilterBuilder};

pub trait Validator {
    fn validate(&self) -> Result<(), Error>;
}

pub trait Normalizer: Validator {
    fn normalize(&mut self) -> Result<(), Error> {
        self.validate()?;
        self.do_normalize();
        Ok(())
    }

    fn do_normalize(&mut self);
}

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").unwrap();
}

pub fn validate_email(email: &str) -> Result<(), Error> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(Error::InvalidEmail(email.to_string()))
    }
}

pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), Error> {
    if start >= end {
        return Err(Error::InvalidDateRange);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_email_should_work() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("guest_1+tag@my-host.co.uk").is_ok());
        assert!(validate_email("first.last@example.io").is_ok());
    }

    #[test]
    fn validate_email_should_fail() {
        assert_eq!(
            validate_email("not-an-email"),
            Err(Error::InvalidEmail("not-an-email".to_string()))
        );
        assert!(validate_email("missing-domain@").is_err());
        assert!(validate_email("@no-local.com").is_err());
        assert!(validate_email("no-tld@host").is_err());
        assert!(validate_email("two@@at.com").is_err());
        assert!(validate_email("spaced out@host.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn validate_date_range_should_work() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert!(validate_date_range(start, end).is_ok());
    }

    #[test]
    fn validate_date_range_should_fail() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(validate_date_range(start, end), Err(Error::InvalidDateRange));
        // equal dates are rejected as well, the ordering is strict
        assert_eq!(validate_date_range(end, end), Err(Error::InvalidDateRange));
    }
}
