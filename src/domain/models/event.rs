use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub const DEFAULT_EVENT_STATUS: &str = "scheduled";
pub const EVENT_STATUSES: [&str; 4] = ["scheduled", "cancelled", "sold_out", "completed"];

/// A concrete, dated event. Rows with `recurring_template_id` set were
/// produced by the recurrence materializer; the pair
/// (`recurring_template_id`, `event_date`) is unique in storage.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub event_type: String,
    pub venue_id: Option<String>,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub image_url: Option<String>,
    pub status: String,
    pub recurring_template_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn new(title: String, event_type: String, event_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description: None,
            event_type,
            venue_id: None,
            event_date,
            event_time: None,
            image_url: None,
            status: DEFAULT_EVENT_STATUS.to_string(),
            recurring_template_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}

pub fn is_valid_status(status: &str) -> bool {
    EVENT_STATUSES.contains(&status)
}

/// Optional filters for listing events. All bounds are inclusive.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct EventFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub venue_id: Option<String>,
    pub event_type: Option<String>,
    pub status: Option<String>,
}
