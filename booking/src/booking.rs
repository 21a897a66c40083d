use abi::{Booking, BookingId, Error, NewBooking, PropertyId, Validator};
use async_trait::async_trait;

use crate::{BookingManager, BookingStore};

const BOOKING_COLUMNS: &str =
    "booking_id, property_id, user_email, start_date, end_date, status, created_at";

#[async_trait]
impl BookingStore for BookingManager {
    async fn list_bookings(&self, property_id: PropertyId) -> Result<Vec<Booking>, Error> {
        let bookings = sqlx::query_as(&format!(
            r#"
            SELECT {BOOKING_COLUMNS}
            FROM booking
            WHERE property_id = $1
            ORDER BY start_date DESC
            "#
        ))
        .bind(property_id)
        .fetch_all(self.pool())
        .await?;
        Ok(bookings)
    }

    async fn get_booking(&self, id: BookingId) -> Result<Booking, Error> {
        let booking = sqlx::query_as(&format!(
            "SELECT {BOOKING_COLUMNS} FROM booking WHERE booking_id = $1"
        ))
        .bind(id)
        .fetch_one(self.pool())
        .await?;
        Ok(booking)
    }

    async fn create_booking(
        &self,
        property_id: PropertyId,
        booking: &NewBooking,
    ) -> Result<Booking, Error> {
        // invalid input never reaches the database
        booking.validate()?;

        let booking = sqlx::query_as(&format!(
            r#"
            INSERT INTO booking (property_id, user_email, start_date, end_date, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(property_id)
        .bind(&booking.user_email)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.status)
        .fetch_one(self.pool())
        .await?;
        Ok(booking)
    }

    async fn update_booking(&self, id: BookingId, booking: &NewBooking) -> Result<Booking, Error> {
        booking.validate()?;

        let booking = sqlx::query_as(&format!(
            r#"
            UPDATE booking SET
                user_email = $1,
                start_date = $2,
                end_date = $3,
                status = $4
            WHERE booking_id = $5
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(&booking.user_email)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.status)
        .bind(id)
        .fetch_one(self.pool())
        .await?;
        Ok(booking)
    }

    async fn delete_booking(&self, id: BookingId) -> Result<(), Error> {
        let deleted = sqlx::query("DELETE FROM booking WHERE booking_id = $1")
            .bind(id)
            .execute(self.pool())
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}
