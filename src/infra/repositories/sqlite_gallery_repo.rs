use crate::domain::{models::gallery::GalleryImage, ports::GalleryRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteGalleryRepo {
    pool: SqlitePool,
}

impl SqliteGalleryRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GalleryRepository for SqliteGalleryRepo {
    async fn create(&self, image: &GalleryImage) -> Result<GalleryImage, AppError> {
        sqlx::query_as::<_, GalleryImage>(
            r#"INSERT INTO gallery_images (id, title, caption, image_url, event_id, display_order, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)
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
        sqlx::query_as::<_, GalleryImage>("SELECT * FROM gallery_images WHERE id = ?")
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
                title=?, caption=?, image_url=?, event_id=?, display_order=?
               WHERE id=? RETURNING *"#
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
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = ?")
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
