use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn new(name: String, role: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            role,
            bio: None,
            image_url: None,
            display_order: 0,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
