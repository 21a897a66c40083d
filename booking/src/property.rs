use abi::{Error, NewProperty, Property, PropertyFilter, PropertyId, Validator};
use async_trait::async_trait;
use sqlx::Row;

use crate::{BookingManager, PropertyStore};

#[async_trait]
impl PropertyStore for BookingManager {
    async fn search_properties(&self, filter: &PropertyFilter) -> Result<Vec<Property>, Error> {
        // filtering semantics live server-side; the client only binds the
        // criteria and trusts the function's join logic
        let properties = sqlx::query_as(
            "SELECT * FROM get_filtered_properties($1, $2::property_category[], $3, $4)",
        )
        .bind(filter.query.as_deref())
        .bind(&filter.categories)
        .bind(&filter.amenities)
        .bind(filter.has_active_booking)
        .fetch_all(self.pool())
        .await?;
        Ok(properties)
    }

    async fn list_properties(&self) -> Result<Vec<Property>, Error> {
        let properties = sqlx::query_as(
            r#"
            SELECT p.property_id, p.title, p.description, p.address,
                   p.price_per_night, p.property_type::text AS property_type,
                   array_agg(coalesce(a.name, '')::text ORDER BY a.name) AS amenities
            FROM property p
            LEFT JOIN property_amenity pa ON pa.property_id = p.property_id
            LEFT JOIN amenity a ON a.amenity_id = pa.amenity_id
            GROUP BY p.property_id
            ORDER BY p.property_id
            "#,
        )
        .fetch_all(self.pool())
        .await?;
        Ok(properties)
    }

    async fn get_property(&self, id: PropertyId) -> Result<Property, Error> {
        let property = sqlx::query_as(
            r#"
            SELECT p.property_id, p.title, p.description, p.address,
                   p.price_per_night, p.property_type::text AS property_type,
                   array_agg(coalesce(a.name, '')::text ORDER BY a.name) AS amenities
            FROM property p
            LEFT JOIN property_amenity pa ON pa.property_id = p.property_id
            LEFT JOIN amenity a ON a.amenity_id = pa.amenity_id
            WHERE p.property_id = $1
            GROUP BY p.property_id
            "#,
        )
        .bind(id)
        .fetch_one(self.pool())
        .await?;
        Ok(property)
    }

    async fn create_property(&self, property: &NewProperty) -> Result<Property, Error> {
        property.validate()?;

        // the property row and its associations either land together or not
        // at all
        let mut tx = self.pool().begin().await?;
        let id: PropertyId = sqlx::query(
            r#"
            INSERT INTO property (title, description, address, price_per_night, property_type)
            VALUES ($1, $2, $3, $4, $5::property_category)
            RETURNING property_id
            "#,
        )
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.address)
        .bind(property.price_per_night)
        .bind(&property.property_type)
        .fetch_one(&mut tx)
        .await?
        .get(0);

        if !property.amenities.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO property_amenity (property_id, amenity_id)
                SELECT $1, amenity_id FROM amenity WHERE name = ANY($2)
                "#,
            )
            .bind(id)
            .bind(&property.amenities)
            .execute(&mut tx)
            .await?;
        }
        tx.commit().await?;

        self.get_property(id).await
    }

    async fn update_property(
        &self,
        id: PropertyId,
        property: &NewProperty,
    ) -> Result<Property, Error> {
        property.validate()?;

        let mut tx = self.pool().begin().await?;
        let updated = sqlx::query(
            r#"
            UPDATE property SET
                title = $1,
                address = $2,
                description = $3,
                price_per_night = $4,
                property_type = $5::property_category
            WHERE property_id = $6
            "#,
        )
        .bind(&property.title)
        .bind(&property.address)
        .bind(&property.description)
        .bind(property.price_per_night)
        .bind(&property.property_type)
        .bind(id)
        .execute(&mut tx)
        .await?
        .rows_affected();
        if updated == 0 {
            return Err(Error::NotFound);
        }

        // full replace of the association set
        sqlx::query("DELETE FROM property_amenity WHERE property_id = $1")
            .bind(id)
            .execute(&mut tx)
            .await?;
        if !property.amenities.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO property_amenity (property_id, amenity_id)
                SELECT $1, amenity_id FROM amenity WHERE name = ANY($2)
                "#,
            )
            .bind(id)
            .bind(&property.amenities)
            .execute(&mut tx)
            .await?;
        }
        tx.commit().await?;

        self.get_property(id).await
    }

    async fn delete_property(&self, id: PropertyId) -> Result<(), Error> {
        let deleted = sqlx::query("DELETE FROM property WHERE property_id = $1")
            .bind(id)
            .execute(self.pool())
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    async fn property_categories(&self) -> Result<Vec<String>, Error> {
        let rows = sqlx::query(
            r#"
            SELECT enumlabel::text AS name
            FROM pg_enum
            WHERE enumtypid = 'property_category'::regtype
            ORDER BY enumsortorder
            "#,
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows.into_iter().map(|row| row.get("name")).collect())
    }
}
