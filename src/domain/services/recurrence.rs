use crate::domain::models::event::{Event, DEFAULT_EVENT_STATUS};
use crate::domain::models::recurring::{weekday_from_index, RecurrenceType, RecurringTemplate};
use crate::domain::ports::{OccurrenceStore, RecurringTemplateRepository};
use crate::error::AppError;
use chrono::{Datelike, Days, Months, NaiveDate, Utc, Weekday};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Unknown recurrence_type '{0}'")]
    UnknownType(String),
    #[error("day_of_week is required for {0} events")]
    MissingDayOfWeek(RecurrenceType),
    #[error("day_of_week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidDayOfWeek(i32),
    #[error("week_of_month must be between 1 and 5, got {0}")]
    InvalidWeekOfMonth(i32),
    #[error("day_of_month must be between 1 and 31, got {0}")]
    InvalidDayOfMonth(i32),
    #[error("monthly events need either day_of_month or week_of_month with day_of_week")]
    MissingMonthlyPattern,
    #[error("monthly events cannot use day_of_month together with week_of_month")]
    AmbiguousMonthlyPattern,
}

/// A validated recurrence pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceRule {
    Weekly(Weekday),
    Biweekly(Weekday),
    /// Fixed day of the month, clamped to the month's last day.
    MonthlyOnDay(u32),
    /// The `week`-th `weekday` of the month. Months without it are skipped.
    MonthlyOnWeekday { week: u8, weekday: Weekday },
}

/// One transition of the projection: the date produced for the current
/// cursor (if the month has one) and where the cursor moves next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub candidate: Option<NaiveDate>,
    pub next_cursor: NaiveDate,
}

impl RecurrenceRule {
    pub fn from_template(template: &RecurringTemplate) -> Result<Self, RuleError> {
        let kind: RecurrenceType = template.recurrence_type.parse()
            .map_err(|_| RuleError::UnknownType(template.recurrence_type.clone()))?;

        let weekday = template.day_of_week
            .map(|d| weekday_from_index(d).ok_or(RuleError::InvalidDayOfWeek(d)))
            .transpose()?;

        match kind {
            RecurrenceType::Weekly => Ok(RecurrenceRule::Weekly(weekday.ok_or(RuleError::MissingDayOfWeek(kind))?)),
            RecurrenceType::Biweekly => Ok(RecurrenceRule::Biweekly(weekday.ok_or(RuleError::MissingDayOfWeek(kind))?)),
            RecurrenceType::Monthly => match (template.day_of_month, template.week_of_month) {
                (Some(_), Some(_)) => Err(RuleError::AmbiguousMonthlyPattern),
                (Some(day), None) => {
                    if !(1..=31).contains(&day) {
                        return Err(RuleError::InvalidDayOfMonth(day));
                    }
                    Ok(RecurrenceRule::MonthlyOnDay(day as u32))
                }
                (None, Some(week)) => {
                    if !(1..=5).contains(&week) {
                        return Err(RuleError::InvalidWeekOfMonth(week));
                    }
                    let weekday = weekday.ok_or(RuleError::MissingDayOfWeek(kind))?;
                    Ok(RecurrenceRule::MonthlyOnWeekday { week: week as u8, weekday })
                }
                (None, None) => Err(RuleError::MissingMonthlyPattern),
            },
        }
    }

    /// Computes the candidate on or after `cursor` and the following cursor.
    /// `next_cursor` is always strictly after `cursor`; `None` only when the
    /// calendar range of `NaiveDate` is exhausted.
    pub fn step(&self, cursor: NaiveDate) -> Option<Step> {
        match *self {
            RecurrenceRule::Weekly(weekday) => weekly_step(cursor, weekday, 7),
            RecurrenceRule::Biweekly(weekday) => weekly_step(cursor, weekday, 14),
            RecurrenceRule::MonthlyOnDay(day) => {
                let this_month = clamped_day(cursor.year(), cursor.month(), day)?;
                let candidate = if this_month >= cursor {
                    this_month
                } else {
                    let (year, month) = next_month(cursor.year(), cursor.month());
                    clamped_day(year, month, day)?
                };
                let (year, month) = next_month(candidate.year(), candidate.month());
                Some(Step {
                    candidate: Some(candidate),
                    next_cursor: NaiveDate::from_ymd_opt(year, month, 1)?,
                })
            }
            RecurrenceRule::MonthlyOnWeekday { week, weekday } => {
                if let Some(candidate) = NaiveDate::from_weekday_of_month_opt(cursor.year(), cursor.month(), weekday, week)
                    && candidate >= cursor
                {
                    let (year, month) = next_month(cursor.year(), cursor.month());
                    return Some(Step {
                        candidate: Some(candidate),
                        next_cursor: NaiveDate::from_ymd_opt(year, month, 1)?,
                    });
                }

                let (year, month) = next_month(cursor.year(), cursor.month());
                let candidate = NaiveDate::from_weekday_of_month_opt(year, month, weekday, week);
                let (after_year, after_month) = next_month(year, month);
                Some(Step {
                    candidate,
                    next_cursor: NaiveDate::from_ymd_opt(after_year, after_month, 1)?,
                })
            }
        }
    }
}

fn weekly_step(cursor: NaiveDate, weekday: Weekday, stride_days: u64) -> Option<Step> {
    let offset = (weekday.num_days_from_sunday() + 7 - cursor.weekday().num_days_from_sunday()) % 7;
    let candidate = cursor.checked_add_days(Days::new(offset as u64))?;
    Some(Step {
        candidate: Some(candidate),
        next_cursor: candidate.checked_add_days(Days::new(stride_days))?,
    })
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some(last.day())
}

fn clamped_day(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let day = day.min(last_day_of_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// The dates a template may produce occurrences on, relative to `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub today: NaiveDate,
    pub start: NaiveDate,
    pub until: NaiveDate,
}

impl Window {
    pub fn for_template(template: &RecurringTemplate, today: NaiveDate) -> Self {
        let horizon_days = i64::from(template.generate_weeks_ahead.max(0)) * 7;
        let horizon = today.checked_add_days(Days::new(horizon_days as u64)).unwrap_or(NaiveDate::MAX);
        let until = match template.end_date {
            Some(end) => end.min(horizon),
            None => horizon,
        };
        Self {
            today,
            start: template.start_date.max(today),
            until,
        }
    }

    pub fn accepts(&self, date: NaiveDate) -> bool {
        date >= self.today && date >= self.start && date <= self.until
    }
}

/// Projects `rule` over `window`, returning accepted dates in ascending order.
pub fn project(rule: &RecurrenceRule, window: &Window) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut cursor = window.start;

    while cursor <= window.until {
        let Some(step) = rule.step(cursor) else { break };
        debug_assert!(step.next_cursor > cursor);

        if let Some(candidate) = step.candidate
            && window.accepts(candidate)
        {
            dates.push(candidate);
        }
        cursor = step.next_cursor;
    }

    dates
}

fn occurrence_for(template: &RecurringTemplate, date: NaiveDate) -> Event {
    let now = Utc::now();
    let status = template.default_status.as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_EVENT_STATUS)
        .to_string();

    Event {
        id: Uuid::new_v4().to_string(),
        title: template.title.clone(),
        description: template.description.clone(),
        event_type: template.event_type.clone(),
        venue_id: template.venue_id.clone(),
        event_date: date,
        event_time: template.event_time,
        image_url: template.default_image_url.clone(),
        status,
        recurring_template_id: Some(template.id.clone()),
        created_at: now,
        updated_at: now,
    }
}

/// Persists every occurrence of `template` that falls inside its window and
/// does not exist yet. Returns only the rows inserted by this call.
///
/// Inserts are independent: a storage error stops the run and is returned,
/// rows written before it stay. A malformed template yields no occurrences.
pub async fn materialize(
    store: &dyn OccurrenceStore,
    template: &RecurringTemplate,
    today: NaiveDate,
) -> Result<Vec<Event>, AppError> {
    let rule = match RecurrenceRule::from_template(template) {
        Ok(rule) => rule,
        Err(e) => {
            warn!(template_id = %template.id, "Skipping generation for malformed template: {}", e);
            return Ok(Vec::new());
        }
    };

    let window = Window::for_template(template, today);
    let mut created = Vec::new();

    for date in project(&rule, &window) {
        if store.occurrence_exists(&template.id, date).await? {
            debug!(%date, "Occurrence already exists, skipping");
            continue;
        }

        match store.insert_occurrence(&occurrence_for(template, date)).await? {
            Some(event) => created.push(event),
            None => debug!(%date, "Occurrence inserted concurrently, skipping"),
        }
    }

    Ok(created)
}

#[derive(Debug, Serialize)]
pub struct GenerationResult {
    pub template_id: String,
    pub count: usize,
    pub events: Vec<Event>,
}

#[derive(Debug, Serialize)]
pub struct GenerationSummary {
    pub template_id: String,
    pub title: String,
    pub created: usize,
    pub error: Option<String>,
}

pub struct RecurrenceService {
    templates: Arc<dyn RecurringTemplateRepository>,
    occurrences: Arc<dyn OccurrenceStore>,
}

impl RecurrenceService {
    pub fn new(templates: Arc<dyn RecurringTemplateRepository>, occurrences: Arc<dyn OccurrenceStore>) -> Self {
        Self { templates, occurrences }
    }

    pub async fn generate_from_template(&self, template_id: &str, today: NaiveDate) -> Result<GenerationResult, AppError> {
        let template = self.templates.find_by_id(template_id).await?
            .ok_or(AppError::NotFound("Recurring event not found".into()))?;

        if !template.is_active {
            info!(template_id = %template.id, "Recurring event is inactive, nothing generated");
            return Ok(GenerationResult {
                template_id: template.id,
                count: 0,
                events: Vec::new(),
            });
        }

        let events = materialize(self.occurrences.as_ref(), &template, today).await?;
        info!(template_id = %template.id, created = events.len(), "Generated occurrences");

        Ok(GenerationResult {
            template_id: template.id,
            count: events.len(),
            events,
        })
    }

    /// Materializes every active template. A failing template is reported in
    /// its summary and does not stop the others.
    pub async fn generate_all_active(&self, today: NaiveDate) -> Result<Vec<GenerationSummary>, AppError> {
        let templates = self.templates.list_active().await?;
        let mut summaries = Vec::with_capacity(templates.len());

        for template in templates {
            let span = info_span!("materialize", template_id = %template.id);
            let outcome = materialize(self.occurrences.as_ref(), &template, today)
                .instrument(span)
                .await;

            let summary = match outcome {
                Ok(events) => GenerationSummary {
                    template_id: template.id,
                    title: template.title,
                    created: events.len(),
                    error: None,
                },
                Err(e) => {
                    warn!(template_id = %template.id, "Generation failed: {}", e);
                    GenerationSummary {
                        template_id: template.id,
                        title: template.title,
                        created: 0,
                        error: Some(e.to_string()),
                    }
                }
            };
            summaries.push(summary);
        }

        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn weekly(day_of_week: i32, start: NaiveDate, weeks: i32) -> RecurringTemplate {
        let mut t = RecurringTemplate::new("Pub Quiz".into(), "quiz".into(), RecurrenceType::Weekly, start);
        t.day_of_week = Some(day_of_week);
        t.generate_weeks_ahead = weeks;
        t
    }

    fn nth_weekday(week: i32, day_of_week: i32, start: NaiveDate, weeks: i32) -> RecurringTemplate {
        let mut t = RecurringTemplate::new("Music Bingo".into(), "bingo".into(), RecurrenceType::Monthly, start);
        t.week_of_month = Some(week);
        t.day_of_week = Some(day_of_week);
        t.generate_weeks_ahead = weeks;
        t
    }

    fn dates_for(template: &RecurringTemplate, today: NaiveDate) -> Vec<NaiveDate> {
        let rule = RecurrenceRule::from_template(template).unwrap();
        project(&rule, &Window::for_template(template, today))
    }

    #[derive(Default)]
    struct InMemoryStore {
        rows: Mutex<Vec<Event>>,
        fail_on_insert: Option<usize>,
        inserts: Mutex<usize>,
    }

    #[async_trait]
    impl OccurrenceStore for InMemoryStore {
        async fn occurrence_exists(&self, template_id: &str, date: NaiveDate) -> Result<bool, AppError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().any(|e| e.recurring_template_id.as_deref() == Some(template_id) && e.event_date == date))
        }

        async fn insert_occurrence(&self, event: &Event) -> Result<Option<Event>, AppError> {
            let mut inserts = self.inserts.lock().unwrap();
            *inserts += 1;
            if self.fail_on_insert == Some(*inserts) {
                return Err(AppError::InternalWithMsg("connection reset".into()));
            }
            self.rows.lock().unwrap().push(event.clone());
            Ok(Some(event.clone()))
        }
    }

    /// Behaves as if another writer always wins the insert.
    struct RacingStore;

    #[async_trait]
    impl OccurrenceStore for RacingStore {
        async fn occurrence_exists(&self, _template_id: &str, _date: NaiveDate) -> Result<bool, AppError> {
            Ok(false)
        }

        async fn insert_occurrence(&self, _event: &Event) -> Result<Option<Event>, AppError> {
            Ok(None)
        }
    }

    #[test]
    fn test_weekly_occurrences_fall_on_requested_weekday() {
        let today = date(2025, 3, 3);
        let dates = dates_for(&weekly(5, date(2025, 1, 1), 12), today);

        assert_eq!(dates.len(), 12);
        assert!(dates.iter().all(|d| d.weekday() == Weekday::Fri));
        assert_eq!(dates[0], date(2025, 3, 7));
    }

    #[test]
    fn test_weekly_tuesday_from_monday_two_weeks() {
        let today = date(2025, 3, 3);
        let dates = dates_for(&weekly(2, today, 2), today);

        assert_eq!(dates, vec![date(2025, 3, 4), date(2025, 3, 11)]);
        assert_eq!((dates[1] - dates[0]).num_days(), 7);
    }

    #[test]
    fn test_weekly_includes_today_when_weekday_matches() {
        let today = date(2025, 3, 4);
        let dates = dates_for(&weekly(2, today, 1), today);
        assert_eq!(dates, vec![date(2025, 3, 4), date(2025, 3, 11)]);
    }

    #[test]
    fn test_biweekly_skips_alternate_weeks() {
        let today = date(2025, 3, 3);
        let mut t = weekly(3, today, 4);
        t.recurrence_type = "biweekly".into();

        let dates = dates_for(&t, today);
        assert_eq!(dates, vec![date(2025, 3, 5), date(2025, 3, 19)]);
    }

    #[test]
    fn test_end_date_caps_the_window() {
        let today = date(2025, 3, 3);
        let mut t = weekly(2, today, 12);
        t.end_date = Some(date(2025, 3, 20));

        let dates = dates_for(&t, today);
        assert_eq!(dates, vec![date(2025, 3, 4), date(2025, 3, 11), date(2025, 3, 18)]);
    }

    #[test]
    fn test_future_start_date_delays_generation() {
        let today = date(2025, 3, 3);
        let dates = dates_for(&weekly(2, date(2025, 4, 1), 6), today);
        assert_eq!(dates, vec![date(2025, 4, 1), date(2025, 4, 8)]);
    }

    #[test]
    fn test_no_dates_before_today_or_beyond_horizon() {
        let today = date(2025, 6, 18);
        let t = weekly(0, date(2024, 1, 1), 8);
        let dates = dates_for(&t, today);

        let horizon = today + chrono::Duration::weeks(8);
        assert!(!dates.is_empty());
        assert!(dates.iter().all(|d| *d >= today && *d <= horizon));
    }

    #[test]
    fn test_end_date_before_today_yields_nothing() {
        let today = date(2025, 3, 3);
        let mut t = weekly(2, date(2025, 1, 1), 12);
        t.end_date = Some(date(2025, 2, 1));
        assert!(dates_for(&t, today).is_empty());
    }

    #[test]
    fn test_first_tuesday_over_eight_weeks() {
        // 1st Tuesday of March 2025 is the 4th, of April the 1st.
        let today = date(2025, 3, 3);
        let dates = dates_for(&nth_weekday(1, 2, today, 8), today);
        assert_eq!(dates, vec![date(2025, 3, 4), date(2025, 4, 1)]);

        // Once March's has passed only April's fits.
        let today = date(2025, 3, 5);
        let dates = dates_for(&nth_weekday(1, 2, today, 8), today);
        assert_eq!(dates, vec![date(2025, 4, 1)]);
    }

    #[test]
    fn test_nth_weekday_rolls_over_into_january() {
        let rule = RecurrenceRule::MonthlyOnWeekday { week: 2, weekday: Weekday::Mon };
        let step = rule.step(date(2025, 12, 10)).unwrap();

        assert_eq!(step.candidate, Some(date(2026, 1, 12)));
        assert_eq!(step.next_cursor, date(2026, 2, 1));
    }

    #[test]
    fn test_missing_fifth_weekday_skips_month() {
        let rule = RecurrenceRule::MonthlyOnWeekday { week: 5, weekday: Weekday::Fri };
        let step = rule.step(date(2025, 2, 1)).unwrap();
        assert_eq!(step.candidate, None);
        assert_eq!(step.next_cursor, date(2025, 4, 1));

        let today = date(2025, 2, 1);
        let dates = dates_for(&nth_weekday(5, 5, today, 20), today);
        assert_eq!(dates, vec![date(2025, 5, 30)]);
    }

    #[test]
    fn test_day_31_is_clamped_to_month_end() {
        let rule = RecurrenceRule::MonthlyOnDay(31);

        let feb = rule.step(date(2025, 2, 10)).unwrap();
        assert_eq!(feb.candidate, Some(date(2025, 2, 28)));
        assert_eq!(feb.next_cursor, date(2025, 3, 1));

        let leap = rule.step(date(2024, 2, 5)).unwrap();
        assert_eq!(leap.candidate, Some(date(2024, 2, 29)));

        let april = rule.step(date(2025, 4, 1)).unwrap();
        assert_eq!(april.candidate, Some(date(2025, 4, 30)));
    }

    #[test]
    fn test_fixed_day_behind_cursor_moves_to_next_month() {
        let rule = RecurrenceRule::MonthlyOnDay(5);
        let step = rule.step(date(2025, 12, 10)).unwrap();
        assert_eq!(step.candidate, Some(date(2026, 1, 5)));
        assert_eq!(step.next_cursor, date(2026, 2, 1));
    }

    #[test]
    fn test_monthly_fixed_day_projection() {
        let today = date(2025, 1, 15);
        let mut t = RecurringTemplate::new("Quiz Final".into(), "quiz".into(), RecurrenceType::Monthly, today);
        t.day_of_month = Some(31);
        t.generate_weeks_ahead = 12;

        let dates = dates_for(&t, today);
        assert_eq!(dates, vec![date(2025, 1, 31), date(2025, 2, 28), date(2025, 3, 31)]);
    }

    #[test]
    fn test_malformed_templates_are_rejected() {
        let start = date(2025, 1, 1);

        let t = RecurringTemplate::new("x".into(), "quiz".into(), RecurrenceType::Monthly, start);
        assert_eq!(RecurrenceRule::from_template(&t), Err(RuleError::MissingMonthlyPattern));

        let t = RecurringTemplate::new("x".into(), "quiz".into(), RecurrenceType::Weekly, start);
        assert_eq!(RecurrenceRule::from_template(&t), Err(RuleError::MissingDayOfWeek(RecurrenceType::Weekly)));

        let mut t = nth_weekday(1, 2, start, 4);
        t.day_of_month = Some(3);
        assert_eq!(RecurrenceRule::from_template(&t), Err(RuleError::AmbiguousMonthlyPattern));

        let t = nth_weekday(1, 7, start, 4);
        assert_eq!(RecurrenceRule::from_template(&t), Err(RuleError::InvalidDayOfWeek(7)));

        let mut t = weekly(1, start, 4);
        t.recurrence_type = "daily".into();
        assert_eq!(RecurrenceRule::from_template(&t), Err(RuleError::UnknownType("daily".into())));
    }

    #[tokio::test]
    async fn test_materialize_is_idempotent() {
        let store = InMemoryStore::default();
        let today = date(2025, 3, 3);
        let mut t = weekly(2, today, 4);
        t.default_status = None;
        t.event_time = chrono::NaiveTime::from_hms_opt(19, 30, 0);

        let first = materialize(&store, &t, today).await.unwrap();
        assert_eq!(first.len(), 4);
        assert!(first.iter().all(|e| e.status == "scheduled"));
        assert!(first.iter().all(|e| e.recurring_template_id.as_deref() == Some(t.id.as_str())));
        assert!(first.iter().all(|e| e.event_time == t.event_time && e.title == "Pub Quiz"));

        let second = materialize(&store, &t, today).await.unwrap();
        assert!(second.is_empty());

        // A later run only adds the newly reachable week.
        let third = materialize(&store, &t, today + chrono::Duration::days(7)).await.unwrap();
        assert_eq!(third.len(), 1);

        let rows = store.rows.lock().unwrap();
        let mut keys: Vec<_> = rows.iter().map(|e| e.event_date).collect();
        keys.dedup();
        assert_eq!(keys.len(), rows.len());
        assert_eq!(rows.len(), 5);
    }

    #[tokio::test]
    async fn test_existing_occurrence_on_only_date_yields_nothing() {
        let store = InMemoryStore::default();
        let today = date(2025, 3, 3);
        let mut t = weekly(2, today, 1);
        t.end_date = Some(date(2025, 3, 5));

        let mut existing = occurrence_for(&t, date(2025, 3, 4));
        existing.status = "sold_out".into();
        store.rows.lock().unwrap().push(existing);

        let created = materialize(&store, &t, today).await.unwrap();
        assert!(created.is_empty());
        assert_eq!(store.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_template_status_is_copied() {
        let store = InMemoryStore::default();
        let today = date(2025, 3, 3);
        let mut t = weekly(4, today, 1);
        t.default_status = Some("sold_out".into());
        t.default_image_url = Some("https://cdn.example/quiz.jpg".into());

        let created = materialize(&store, &t, today).await.unwrap();
        assert!(!created.is_empty());
        assert!(created.iter().all(|e| e.status == "sold_out"));
        assert!(created.iter().all(|e| e.image_url.as_deref() == Some("https://cdn.example/quiz.jpg")));
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_earlier_inserts() {
        let store = InMemoryStore { fail_on_insert: Some(2), ..Default::default() };
        let today = date(2025, 3, 3);
        let t = weekly(2, today, 4);

        let result = materialize(&store, &t, today).await;
        assert!(result.is_err());
        assert_eq!(store.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_lost_insert_race_is_skipped() {
        let today = date(2025, 3, 3);
        let created = materialize(&RacingStore, &weekly(2, today, 4), today).await.unwrap();
        assert!(created.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_template_materializes_nothing() {
        let store = InMemoryStore::default();
        let today = date(2025, 3, 3);
        let t = RecurringTemplate::new("x".into(), "quiz".into(), RecurrenceType::Monthly, today);

        let created = materialize(&store, &t, today).await.unwrap();
        assert!(created.is_empty());
        assert_eq!(*store.inserts.lock().unwrap(), 0);
    }
}
