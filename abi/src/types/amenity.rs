use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::AmenityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Amenity {
    pub amenity_id: AmenityId,
    pub name: String,
}
