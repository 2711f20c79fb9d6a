use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const DEFAULT_WEEKS_AHEAD: i32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    Weekly,
    Biweekly,
    Monthly,
}

impl RecurrenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceType::Weekly => "weekly",
            RecurrenceType::Biweekly => "biweekly",
            RecurrenceType::Monthly => "monthly",
        }
    }
}

impl fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrenceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(RecurrenceType::Weekly),
            "biweekly" => Ok(RecurrenceType::Biweekly),
            "monthly" => Ok(RecurrenceType::Monthly),
            other => Err(format!("Unknown recurrence_type '{}'", other)),
        }
    }
}

/// A stored recurrence rule. Occurrences are generated from it into the
/// `events` table; the template itself is only ever changed by an admin.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct RecurringTemplate {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub event_type: String,
    pub venue_id: Option<String>,
    pub recurrence_type: String,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: Option<i32>,
    pub week_of_month: Option<i32>,
    pub day_of_month: Option<i32>,
    pub event_time: Option<NaiveTime>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub generate_weeks_ahead: i32,
    pub default_image_url: Option<String>,
    pub default_status: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecurringTemplate {
    pub fn new(title: String, event_type: String, recurrence_type: RecurrenceType, start_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description: None,
            event_type,
            venue_id: None,
            recurrence_type: recurrence_type.to_string(),
            day_of_week: None,
            week_of_month: None,
            day_of_month: None,
            event_time: None,
            start_date,
            end_date: None,
            generate_weeks_ahead: DEFAULT_WEEKS_AHEAD,
            default_image_url: None,
            default_status: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Maps the stored Sunday-based index onto a chrono weekday.
pub fn weekday_from_index(index: i32) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
