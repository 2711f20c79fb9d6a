use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A service the business offers (e.g. corporate quiz, private party).
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub price_info: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Service {
    pub fn new(title: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            icon: None,
            price_info: None,
            display_order: 0,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
