use crate::domain::{models::social::SocialPostCache, ports::SocialPostRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteSocialRepo {
    pool: SqlitePool,
}

impl SqliteSocialRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SocialPostRepository for SqliteSocialRepo {
    async fn get(&self, platform: &str) -> Result<Option<SocialPostCache>, AppError> {
        sqlx::query_as::<_, SocialPostCache>("SELECT * FROM social_posts_cache WHERE platform = ?")
            .bind(platform)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn upsert(&self, entry: &SocialPostCache) -> Result<SocialPostCache, AppError> {
        sqlx::query_as::<_, SocialPostCache>(
            r#"INSERT INTO social_posts_cache (platform, payload_json, fetched_at)
               VALUES (?, ?, ?)
               ON CONFLICT(platform) DO UPDATE SET
               payload_json=excluded.payload_json,
               fetched_at=excluded.fetched_at
               RETURNING *"#
        )
            .bind(&entry.platform)
            .bind(&entry.payload_json)
            .bind(entry.fetched_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
