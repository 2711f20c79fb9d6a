use crate::domain::{models::service::Service, ports::ServiceRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteServiceRepo {
    pool: SqlitePool,
}

impl SqliteServiceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for SqliteServiceRepo {
    async fn create(&self, service: &Service) -> Result<Service, AppError> {
        sqlx::query_as::<_, Service>(
            r#"INSERT INTO services (id, title, description, icon, price_info, display_order, is_active, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&service.id)
            .bind(&service.title)
            .bind(&service.description)
            .bind(&service.icon)
            .bind(&service.price_info)
            .bind(service.display_order)
            .bind(service.is_active)
            .bind(service.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Service>, AppError> {
        sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, include_inactive: bool) -> Result<Vec<Service>, AppError> {
        sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE is_active = TRUE OR ? ORDER BY display_order, title",
        )
            .bind(include_inactive)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, service: &Service) -> Result<Service, AppError> {
        sqlx::query_as::<_, Service>(
            r#"UPDATE services SET
                title=?, description=?, icon=?, price_info=?, display_order=?, is_active=?
               WHERE id=? RETURNING *"#
        )
            .bind(&service.title)
            .bind(&service.description)
            .bind(&service.icon)
            .bind(&service.price_info)
            .bind(service.display_order)
            .bind(service.is_active)
            .bind(&service.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Service not found".into()));
        }
        Ok(())
    }
}
