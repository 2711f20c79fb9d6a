use crate::domain::{models::setting::Setting, ports::SettingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresSettingRepo {
    pool: PgPool,
}

impl PostgresSettingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingRepository for PostgresSettingRepo {
    async fn list(&self) -> Result<Vec<Setting>, AppError> {
        sqlx::query_as::<_, Setting>("SELECT * FROM site_settings ORDER BY key")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn get(&self, key: &str) -> Result<Option<Setting>, AppError> {
        sqlx::query_as::<_, Setting>("SELECT * FROM site_settings WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn upsert(&self, setting: &Setting) -> Result<Setting, AppError> {
        sqlx::query_as::<_, Setting>(
            r#"INSERT INTO site_settings (key, value, updated_at)
               VALUES ($1, $2, $3)
               ON CONFLICT(key) DO UPDATE SET
               value=excluded.value,
               updated_at=excluded.updated_at
               RETURNING *"#
        )
            .bind(&setting.key)
            .bind(&setting.value)
            .bind(setting.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM site_settings WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Setting not found".into()));
        }
        Ok(())
    }
}
