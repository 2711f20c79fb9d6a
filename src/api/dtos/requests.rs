use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`)
/// so PATCH-style updates can clear optional columns.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
pub struct CreateVenueRequest {
    pub name: String,
    pub address: String,
    pub city: String,
    pub postcode: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub map_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateVenueRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub postcode: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub map_url: Option<Option<String>>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub event_type: String,
    pub venue_id: Option<String>,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub image_url: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub event_type: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub venue_id: Option<Option<String>>,
    pub event_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub event_time: Option<Option<NaiveTime>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateRecurringRequest {
    pub title: String,
    pub description: Option<String>,
    pub event_type: String,
    pub venue_id: Option<String>,
    pub recurrence_type: String,
    pub day_of_week: Option<i32>,
    pub week_of_month: Option<i32>,
    pub day_of_month: Option<i32>,
    pub event_time: Option<NaiveTime>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub generate_weeks_ahead: Option<i32>,
    pub default_image_url: Option<String>,
    pub default_status: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateRecurringRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub event_type: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub venue_id: Option<Option<String>>,
    pub recurrence_type: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub day_of_week: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub week_of_month: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub day_of_month: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub event_time: Option<Option<NaiveTime>>,
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<NaiveDate>>,
    pub generate_weeks_ahead: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub default_image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub default_status: Option<Option<String>>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateTeamMemberRequest {
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateTeamMemberRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateGalleryImageRequest {
    pub image_url: String,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub event_id: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateGalleryImageRequest {
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub caption: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub event_id: Option<Option<String>>,
    pub display_order: Option<i32>,
}

#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub author_name: String,
    pub rating: i32,
    pub content: String,
    pub source: Option<String>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateReviewRequest {
    pub author_name: Option<String>,
    pub rating: Option<i32>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub source: Option<Option<String>>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateServiceRequest {
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub price_info: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateServiceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub icon: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub price_info: Option<Option<String>>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpsertSettingRequest {
    pub value: String,
}

#[derive(Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub difficulty: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub scheduled_date: Option<Option<NaiveDate>>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct StoreSocialFeedRequest {
    pub posts: serde_json::Value,
}

#[derive(Deserialize, Default)]
pub struct EventListQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub venue_id: Option<String>,
    pub event_type: Option<String>,
    pub status: Option<String>,
    /// Shorthand for `from = today` in the business timezone.
    #[serde(default)]
    pub upcoming: bool,
}

#[derive(Deserialize, Default)]
pub struct ContactListQuery {
    #[serde(default)]
    pub unread: bool,
}

#[derive(Deserialize, Default)]
pub struct QuestionOfDayQuery {
    #[serde(default)]
    pub reveal: bool,
    pub date: Option<NaiveDate>,
}
