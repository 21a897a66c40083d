mod amenity;
mod booking;
mod manager;
mod property;

use abi::{
    Amenity, Booking, BookingId, Error, NewBooking, NewProperty, Property, PropertyFilter,
    PropertyId,
};
use async_trait::async_trait;
use sqlx::PgPool;

/// The data-access manager. Owns one connection pool for the process
/// lifetime; replaced wholesale when the operator reconfigures the database.
#[derive(Debug, Clone)]
pub struct BookingManager {
    pool: PgPool,
}

#[async_trait]
pub trait PropertyStore {
    /// search the catalog through the server-side filtering function
    async fn search_properties(&self, filter: &PropertyFilter) -> Result<Vec<Property>, Error>;
    /// unfiltered catalog listing with aggregated amenities
    async fn list_properties(&self) -> Result<Vec<Property>, Error>;
    /// get a property by id
    async fn get_property(&self, id: PropertyId) -> Result<Property, Error>;
    /// insert a property and its amenity associations in one transaction
    async fn create_property(&self, property: &NewProperty) -> Result<Property, Error>;
    /// full-row replace of the editable fields, amenity set included
    async fn update_property(
        &self,
        id: PropertyId,
        property: &NewProperty,
    ) -> Result<Property, Error>;
    /// physical delete; association rows go via cascade
    async fn delete_property(&self, id: PropertyId) -> Result<(), Error>;
    /// the server-defined category enumeration, in declaration order
    async fn property_categories(&self) -> Result<Vec<String>, Error>;
}

#[async_trait]
pub trait BookingStore {
    /// bookings of a property, newest start date first
    async fn list_bookings(&self, property_id: PropertyId) -> Result<Vec<Booking>, Error>;
    /// get a booking by id
    async fn get_booking(&self, id: BookingId) -> Result<Booking, Error>;
    /// validate and insert one booking row
    async fn create_booking(
        &self,
        property_id: PropertyId,
        booking: &NewBooking,
    ) -> Result<Booking, Error>;
    /// full-row replace of the editable fields
    async fn update_booking(&self, id: BookingId, booking: &NewBooking) -> Result<Booking, Error>;
    /// physical delete
    async fn delete_booking(&self, id: BookingId) -> Result<(), Error>;
}

#[async_trait]
pub trait AmenityStore {
    /// all amenities ordered by name
    async fn list_amenities(&self) -> Result<Vec<Amenity>, Error>;
    /// just the names, the cached snapshot the uniqueness check runs against
    async fn amenity_names(&self) -> Result<Vec<String>, Error>;
    /// insert an amenity after checking the caller's cached snapshot
    async fn create_amenity(&self, name: &str, known: &[String]) -> Result<Amenity, Error>;
    /// rename an amenity, associations follow the id
    async fn rename_amenity(&self, old: &str, new: &str) -> Result<Amenity, Error>;
    /// physical delete; association rows go via cascade
    async fn delete_amenity(&self, name: &str) -> Result<(), Error>;
}
