use crate::domain::services::recurrence::GenerationSummary;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct GenerateAllResponse {
    pub templates: usize,
    pub created: usize,
    pub results: Vec<GenerationSummary>,
}

#[derive(Serialize)]
pub struct QuestionOfDayResponse {
    pub id: String,
    pub date: NaiveDate,
    pub question: String,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

#[derive(Serialize)]
pub struct SocialFeedResponse {
    pub platform: String,
    pub posts: serde_json::Value,
    pub fetched_at: DateTime<Utc>,
    pub is_stale: bool,
}
