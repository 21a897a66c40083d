use abi::{Amenity, Error};
use async_trait::async_trait;
use sqlx::Row;

use crate::{AmenityStore, BookingManager};

#[async_trait]
impl AmenityStore for BookingManager {
    async fn list_amenities(&self) -> Result<Vec<Amenity>, Error> {
        let amenities = sqlx::query_as("SELECT amenity_id, name FROM amenity ORDER BY name")
            .fetch_all(self.pool())
            .await?;
        Ok(amenities)
    }

    async fn amenity_names(&self) -> Result<Vec<String>, Error> {
        let rows = sqlx::query("SELECT name FROM amenity ORDER BY name")
            .fetch_all(self.pool())
            .await?;
        Ok(rows.into_iter().map(|row| row.get("name")).collect())
    }

    async fn create_amenity(&self, name: &str, known: &[String]) -> Result<Amenity, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyAmenityName);
        }
        // best-effort check against the caller's snapshot; the unique
        // constraint on amenity.name is the backstop for concurrent clients
        if known.iter().any(|n| n == name) {
            return Err(Error::DuplicateAmenity(name.to_string()));
        }

        let amenity = sqlx::query_as(
            "INSERT INTO amenity (name) VALUES ($1) RETURNING amenity_id, name",
        )
        .bind(name)
        .fetch_one(self.pool())
        .await?;
        Ok(amenity)
    }

    async fn rename_amenity(&self, old: &str, new: &str) -> Result<Amenity, Error> {
        let new = new.trim();
        if new.is_empty() {
            return Err(Error::EmptyAmenityName);
        }

        let amenity = sqlx::query_as(
            "UPDATE amenity SET name = $1 WHERE name = $2 RETURNING amenity_id, name",
        )
        .bind(new)
        .bind(old)
        .fetch_one(self.pool())
        .await?;
        Ok(amenity)
    }

    async fn delete_amenity(&self, name: &str) -> Result<(), Error> {
        let deleted = sqlx::query("DELETE FROM amenity WHERE name = $1")
            .bind(name)
            .execute(self.pool())
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropertyStore;
    use abi::NewProperty;

    #[sqlx_database_tester::test(pool(variable = "migrated_pool", migrations = "../migrations"))]
    async fn add_then_duplicate_should_be_rejected() {
        let manager = BookingManager::new(migrated_pool.clone());

        manager.create_amenity("Wi-Fi", &[]).await.unwrap();
        let known = manager.amenity_names().await.unwrap();
        assert_eq!(known, ["Wi-Fi"]);

        assert_eq!(
            manager.create_amenity("Wi-Fi", &known).await.unwrap_err(),
            Error::DuplicateAmenity("Wi-Fi".to_string())
        );
        // catalog unchanged
        assert_eq!(manager.amenity_names().await.unwrap(), ["Wi-Fi"]);
    }

    #[sqlx_database_tester::test(pool(variable = "migrated_pool", migrations = "../migrations"))]
    async fn stale_snapshot_should_hit_the_unique_constraint() {
        let manager = BookingManager::new(migrated_pool.clone());

        manager.create_amenity("Wi-Fi", &[]).await.unwrap();
        // a second client with an empty snapshot races past the local check
        let err = manager.create_amenity("Wi-Fi", &[]).await.unwrap_err();
        assert_eq!(err, Error::DuplicateAmenity("Wi-Fi".to_string()));
    }

    #[sqlx_database_tester::test(pool(variable = "migrated_pool", migrations = "../migrations"))]
    async fn empty_name_should_be_rejected() {
        let manager = BookingManager::new(migrated_pool.clone());
        assert_eq!(
            manager.create_amenity("   ", &[]).await.unwrap_err(),
            Error::EmptyAmenityName
        );
        assert!(manager.list_amenities().await.unwrap().is_empty());
    }

    #[sqlx_database_tester::test(pool(variable = "migrated_pool", migrations = "../migrations"))]
    async fn rename_should_keep_associations() {
        let manager = BookingManager::new(migrated_pool.clone());
        manager.create_amenity("Wifi", &[]).await.unwrap();
        let property = manager
            .create_property(&NewProperty::new(
                "Loft by the river",
                "apartment",
                "",
                "",
                120,
                vec!["Wifi".to_string()],
            ))
            .await
            .unwrap();

        let renamed = manager.rename_amenity("Wifi", "Wi-Fi").await.unwrap();
        assert_eq!(renamed.name, "Wi-Fi");

        let property = manager.get_property(property.property_id).await.unwrap();
        assert_eq!(property.amenity_names(), ["Wi-Fi"]);
    }

    #[sqlx_database_tester::test(pool(variable = "migrated_pool", migrations = "../migrations"))]
    async fn rename_missing_should_fail() {
        let manager = BookingManager::new(migrated_pool.clone());
        assert_eq!(
            manager.rename_amenity("Pool", "Plunge pool").await.unwrap_err(),
            Error::NotFound
        );
    }

    #[sqlx_database_tester::test(pool(variable = "migrated_pool", migrations = "../migrations"))]
    async fn delete_should_cascade_to_associations() {
        let manager = BookingManager::new(migrated_pool.clone());
        manager.create_amenity("Wi-Fi", &[]).await.unwrap();
        let property = manager
            .create_property(&NewProperty::new(
                "Loft by the river",
                "apartment",
                "",
                "",
                120,
                vec!["Wi-Fi".to_string()],
            ))
            .await
            .unwrap();
        assert_eq!(property.amenity_names(), ["Wi-Fi"]);

        manager.delete_amenity("Wi-Fi").await.unwrap();

        // no separate cleanup call: the association rows vanish by cascade
        let property = manager.get_property(property.property_id).await.unwrap();
        assert!(!property.has_amenities());
        assert_eq!(
            manager.delete_amenity("Wi-Fi").await.unwrap_err(),
            Error::NotFound
        );
    }
}
