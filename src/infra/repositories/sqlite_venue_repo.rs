use crate::domain::{models::venue::Venue, ports::VenueRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteVenueRepo {
    pool: SqlitePool,
}

impl SqliteVenueRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueRepository for SqliteVenueRepo {
    async fn create(&self, venue: &Venue) -> Result<Venue, AppError> {
        sqlx::query_as::<_, Venue>(
            r#"INSERT INTO venues (
                id, name, address, city, postcode, description, image_url, map_url,
                is_active, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#
        )
            .bind(&venue.id)
            .bind(&venue.name)
            .bind(&venue.address)
            .bind(&venue.city)
            .bind(&venue.postcode)
            .bind(&venue.description)
            .bind(&venue.image_url)
            .bind(&venue.map_url)
            .bind(venue.is_active)
            .bind(venue.created_at)
            .bind(venue.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Venue>, AppError> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, include_inactive: bool) -> Result<Vec<Venue>, AppError> {
        sqlx::query_as::<_, Venue>(
            "SELECT * FROM venues WHERE is_active = TRUE OR ? ORDER BY name",
        )
            .bind(include_inactive)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, venue: &Venue) -> Result<Venue, AppError> {
        sqlx::query_as::<_, Venue>(
            r#"UPDATE venues SET
                name=?, address=?, city=?, postcode=?, description=?,
                image_url=?, map_url=?, is_active=?, updated_at=?
               WHERE id=? RETURNING *"#
        )
            .bind(&venue.name)
            .bind(&venue.address)
            .bind(&venue.city)
            .bind(&venue.postcode)
            .bind(&venue.description)
            .bind(&venue.image_url)
            .bind(&venue.map_url)
            .bind(venue.is_active)
            .bind(venue.updated_at)
            .bind(&venue.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM venues WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Venue not found".into()));
        }
        Ok(())
    }
}
