use crate::domain::{models::contact::ContactSubmission, ports::ContactRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteContactRepo {
    pool: SqlitePool,
}

impl SqliteContactRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepo {
    async fn create(&self, submission: &ContactSubmission) -> Result<ContactSubmission, AppError> {
        sqlx::query_as::<_, ContactSubmission>(
            r#"INSERT INTO contact_submissions (id, name, email, phone, subject, message, is_read, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&submission.id)
            .bind(&submission.name)
            .bind(&submission.email)
            .bind(&submission.phone)
            .bind(&submission.subject)
            .bind(&submission.message)
            .bind(submission.is_read)
            .bind(submission.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, unread_only: bool) -> Result<Vec<ContactSubmission>, AppError> {
        sqlx::query_as::<_, ContactSubmission>(
            "SELECT * FROM contact_submissions WHERE is_read = FALSE OR NOT ? ORDER BY created_at DESC",
        )
            .bind(unread_only)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn mark_read(&self, id: &str) -> Result<ContactSubmission, AppError> {
        sqlx::query_as::<_, ContactSubmission>(
            "UPDATE contact_submissions SET is_read = TRUE WHERE id = ? RETURNING *",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Contact submission not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contact_submissions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Contact submission not found".into()));
        }
        Ok(())
    }
}
