use crate::domain::{models::review::Review, ports::ReviewRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresReviewRepo {
    pool: PgPool,
}

impl PostgresReviewRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepo {
    async fn create(&self, review: &Review) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            r#"INSERT INTO reviews (id, author_name, rating, content, source, is_featured, is_published, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
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
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, published_only: bool) -> Result<Vec<Review>, AppError> {
        sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE is_published = TRUE OR NOT $1 ORDER BY is_featured DESC, created_at DESC",
        )
            .bind(published_only)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, review: &Review) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            r#"UPDATE reviews SET
                author_name=$1, rating=$2, content=$3, source=$4, is_featured=$5, is_published=$6
               WHERE id=$7 RETURNING *"#
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
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
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
