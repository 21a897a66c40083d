use sqlx::postgres::PgDatabaseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("sqlx error: {0}")]
    DbError(sqlx::Error),

    #[error("Failed to read configuration file")]
    ConfigRead,

    #[error("Failed to parse configuration file")]
    ConfigParse,

    #[error("Invalid email address {0}")]
    InvalidEmail(String),

    #[error("Booking start date must be strictly earlier than end date")]
    InvalidDateRange,

    #[error("Price per night must be non-negative, got {0}")]
    InvalidPrice(i32),

    #[error("Property title must not be empty")]
    EmptyTitle,

    #[error("Amenity name must not be empty")]
    EmptyAmenityName,

    #[error("Amenity {0} already exists")]
    DuplicateAmenity(String),

    #[error("Unknown property category {0}")]
    InvalidCategory(String),

    #[error("No row found by the given condition")]
    NotFound,

    #[error("Booking error")]
    Unknown,
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DbError(_), Self::DbError(_)) => true,
            (Self::ConfigRead, Self::ConfigRead) => true,
            (Self::ConfigParse, Self::ConfigParse) => true,
            (Self::InvalidEmail(v1), Self::InvalidEmail(v2)) => v1 == v2,
            (Self::InvalidDateRange, Self::InvalidDateRange) => true,
            (Self::InvalidPrice(v1), Self::InvalidPrice(v2)) => v1 == v2,
            (Self::EmptyTitle, Self::EmptyTitle) => true,
            (Self::EmptyAmenityName, Self::EmptyAmenityName) => true,
            (Self::DuplicateAmenity(v1), Self::DuplicateAmenity(v2)) => v1 == v2,
            (Self::InvalidCategory(v1), Self::InvalidCategory(v2)) => v1 == v2,
            (Self::NotFound, Self::NotFound) => true,
            (Self::Unknown, Self::Unknown) => true,
            _ => false,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(e) => {
                let err: &PgDatabaseError = e.downcast_ref();
                match (err.code(), err.table()) {
                    // unique_violation on amenity.name
                    ("23505", Some("amenity")) => {
                        Error::DuplicateAmenity(unique_violation_value(err.detail()))
                    }
                    // invalid_text_representation, e.g. a bad property_category label
                    ("22P02", _) => Error::InvalidCategory(err.message().to_string()),
                    _ => Error::DbError(sqlx::Error::Database(e)),
                }
            }
            sqlx::Error::RowNotFound => Error::NotFound,
            _ => Error::DbError(e),
        }
    }
}

/// Pull the offending value out of a unique-violation detail string,
/// which looks like: `Key (name)=(Wi-Fi) already exists.`
fn unique_violation_value(detail: Option<&str>) -> String {
    detail
        .and_then(|d| d.split(")=(").nth(1))
        .and_then(|d| d.rsplit_once(')').map(|(v, _)| v))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_should_map_to_not_found() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert_eq!(err, Error::NotFound);
    }

    #[test]
    fn unique_violation_detail_should_parse() {
        assert_eq!(
            unique_violation_value(Some("Key (name)=(Wi-Fi) already exists.")),
            "Wi-Fi"
        );
        assert_eq!(unique_violation_value(None), "");
    }
}
