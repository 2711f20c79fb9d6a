use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Review {
    pub id: String,
    pub author_name: String,
    pub rating: i32,
    pub content: String,
    pub source: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(author_name: String, rating: i32, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author_name,
            rating,
            content,
            source: None,
            is_featured: false,
            is_published: true,
            created_at: Utc::now(),
        }
    }
}
