use crate::domain::{models::review::Review, ports::ReviewRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteReviewRepo {
    pool: SqlitePool,
}

impl SqliteReviewRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for SqliteReviewRepo {
    async fn create(&self, review: &Review) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            r#"INSERT INTO reviews (id, author_name, rating, content, source, is_featured, is_published, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&review.id)
            .bind(&review.author_name)
            .bind(review.rating)
            .bind(&review.content)
            .bind(&review.source)
            .bind(review.is_featured)
            .bind(review.is_published)
            .bind(review.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Review>, AppError> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, published_only: bool) -> Result<Vec<Review>, AppError> {
        sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE is_published = TRUE OR NOT ? ORDER BY is_featured DESC, created_at DESC",
        )
            .bind(published_only)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, review: &Review) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            r#"UPDATE reviews SET
                author_name=?, rating=?, content=?, source=?, is_featured=?, is_published=?
               WHERE id=? RETURNING *"#
        )
            .bind(&review.author_name)
            .bind(review.rating)
            .bind(&review.content)
            .bind(&review.source)
            .bind(review.is_featured)
            .bind(review.is_published)
            .bind(&review.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Review not found".into()));
        }
        Ok(())
    }
}
