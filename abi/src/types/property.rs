use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{Error, PropertyId, Validator};

/// A catalog row as returned by the aggregation queries.
///
/// `amenities` carries the aggregated amenity names verbatim. A property
/// without amenities arrives as a single empty placeholder element rather
/// than an empty list; use [`Property::amenity_names`] for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub property_id: PropertyId,
    pub title: String,
    pub description: String,
    pub address: String,
    pub price_per_night: i32,
    pub property_type: String,
    pub amenities: Vec<String>,
}

impl Property {
    pub fn has_amenities(&self) -> bool {
        self.amenities.first().map_or(false, |name| !name.is_empty())
    }

    /// Amenity names with the empty placeholder filtered out.
    pub fn amenity_names(&self) -> &[String] {
        if self.has_amenities() {
            &self.amenities
        } else {
            &[]
        }
    }
}

/// Editable property fields for create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub address: String,
    pub price_per_night: i32,
    pub property_type: String,
    pub amenities: Vec<String>,
}

impl NewProperty {
    pub fn new(
        title: impl Into<String>,
        property_type: impl Into<String>,
        address: impl Into<String>,
        description: impl Into<String>,
        price_per_night: i32,
        amenities: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            address: address.into(),
            price_per_night,
            property_type: property_type.into(),
            amenities,
        }
    }
}

impl Validator for NewProperty {
    fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }
        if self.price_per_night < 0 {
            return Err(Error::InvalidPrice(self.price_per_night));
        }
        Ok(())
    }
}
