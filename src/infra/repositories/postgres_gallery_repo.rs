use crate::domain::{models::gallery::GalleryImage, ports::GalleryRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresGalleryRepo {
    pool: PgPool,
}

impl PostgresGalleryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GalleryRepository for PostgresGalleryRepo {
    async fn create(&self, image: &GalleryImage) -> Result<GalleryImage, AppError> {
        sqlx::query_as::<_, GalleryImage>(
            r#"INSERT INTO gallery_images (id, title, caption, image_url, event_id, display_order, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING *"#
        )
            .bind(&image.id)
            .bind(&image.title)
            .bind(&image.caption)
            .bind(&image.image_url)
            .bind(&image.event_id)
            .bind(image.display_order)
            .bind(image.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<GalleryImage>, AppError> {
        sqlx::query_as::<_, GalleryImage>("SELECT * FROM gallery_images WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<GalleryImage>, AppError> {
        sqlx::query_as::<_, GalleryImage>(
            "SELECT * FROM gallery_images ORDER BY display_order, created_at DESC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, image: &GalleryImage) -> Result<GalleryImage, AppError> {
        sqlx::query_as::<_, GalleryImage>(
            r#"UPDATE gallery_images SET
                title=$1, caption=$2, image_url=$3, event_id=$4, display_order=$5
               WHERE id=$6 RETURNING *"#
        )
            .bind(&image.title)
            .bind(&image.caption)
            .bind(&image.image_url)
            .bind(&image.event_id)
            .bind(image.display_order)
            .bind(&image.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Gallery image not found".into()));
        }
        Ok(())
    }
}
