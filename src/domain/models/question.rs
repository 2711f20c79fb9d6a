use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl QuizQuestion {
    pub fn new(question: String, answer: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question,
            answer,
            category: None,
            difficulty: None,
            scheduled_date: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
