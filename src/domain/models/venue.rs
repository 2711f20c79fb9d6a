use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub postcode: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub map_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Venue {
    pub fn new(name: String, address: String, city: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            address,
            city,
            postcode: None,
            description: None,
            image_url: None,
            map_url: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
