use serde::{Deserialize, Serialize};
use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;

/// Last known feed for one social platform, stored verbatim as JSON.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct SocialPostCache {
    pub platform: String,
    pub payload_json: String,
    pub fetched_at: DateTime<Utc>,
}

impl SocialPostCache {
    pub fn new(platform: String, payload_json: String) -> Self {
        Self { platform, payload_json, fetched_at: Utc::now() }
    }

    pub fn is_stale(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.fetched_at > ttl
    }
}
