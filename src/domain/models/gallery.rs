use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct GalleryImage {
    pub id: String,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub image_url: String,
    pub event_id: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

impl GalleryImage {
    pub fn new(image_url: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: None,
            caption: None,
            image_url,
            event_id: None,
            display_order: 0,
            created_at: Utc::now(),
        }
    }
}
