use crate::domain::{models::service::Service, ports::ServiceRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresServiceRepo {
    pool: PgPool,
}

impl PostgresServiceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for PostgresServiceRepo {
    async fn create(&self, service: &Service) -> Result<Service, AppError> {
        sqlx::query_as::<_, Service>(
            r#"INSERT INTO services (id, title, description, icon, price_info, display_order, is_active, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
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
        sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, include_inactive: bool) -> Result<Vec<Service>, AppError> {
        sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE is_active = TRUE OR $1 ORDER BY display_order, title",
        )
            .bind(include_inactive)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, service: &Service) -> Result<Service, AppError> {
        sqlx::query_as::<_, Service>(
            r#"UPDATE services SET
                title=$1, description=$2, icon=$3, price_info=$4, display_order=$5, is_active=$6
               WHERE id=$7 RETURNING *"#
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
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
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
