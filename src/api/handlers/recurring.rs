use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminUser;
use crate::api::dtos::{
    requests::{CreateRecurringRequest, UpdateRecurringRequest},
    responses::GenerateAllResponse,
};
use crate::api::handlers::{apply_optional_text, require_text};
use crate::domain::models::event::is_valid_status;
use crate::domain::models::recurring::{RecurringTemplate, RecurrenceType, DEFAULT_WEEKS_AHEAD};
use crate::domain::services::recurrence::RecurrenceRule;
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

const MAX_WEEKS_AHEAD: i32 = 104;

/// Rejects templates the materializer could not project.
async fn validate_template(state: &AppState, template: &RecurringTemplate) -> Result<(), AppError> {
    require_text("title", &template.title)?;
    require_text("event_type", &template.event_type)?;

    RecurrenceRule::from_template(template)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if !(1..=MAX_WEEKS_AHEAD).contains(&template.generate_weeks_ahead) {
        return Err(AppError::Validation(format!("generate_weeks_ahead must be between 1 and {}", MAX_WEEKS_AHEAD)));
    }

    if let Some(end) = template.end_date
        && end < template.start_date {
        return Err(AppError::Validation("end_date must not be before start_date".into()));
    }

    if let Some(status) = template.default_status.as_deref()
        && !is_valid_status(status) {
        return Err(AppError::Validation(format!("Invalid default_status '{}'", status)));
    }

    if let Some(venue_id) = template.venue_id.as_deref()
        && state.venue_repo.find_by_id(venue_id).await?.is_none() {
        return Err(AppError::Validation("Venue does not exist".into()));
    }

    Ok(())
}

pub async fn list_recurring(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let templates = state.recurring_repo.list().await?;
    Ok(Json(templates))
}

pub async fn get_recurring(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let template = state.recurring_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Recurring event not found".into()))?;
    Ok(Json(template))
}

pub async fn create_recurring(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateRecurringRequest>,
) -> Result<impl IntoResponse, AppError> {
    let recurrence_type: RecurrenceType = payload.recurrence_type.parse()
        .map_err(AppError::Validation)?;

    let mut template = RecurringTemplate::new(payload.title, payload.event_type, recurrence_type, payload.start_date);
    template.description = payload.description;
    template.venue_id = payload.venue_id;
    template.day_of_week = payload.day_of_week;
    template.week_of_month = payload.week_of_month;
    template.day_of_month = payload.day_of_month;
    template.event_time = payload.event_time;
    template.end_date = payload.end_date;
    template.generate_weeks_ahead = payload.generate_weeks_ahead.unwrap_or(DEFAULT_WEEKS_AHEAD);
    template.default_image_url = payload.default_image_url;
    template.default_status = payload.default_status.filter(|s| !s.trim().is_empty());
    template.is_active = payload.is_active.unwrap_or(true);

    validate_template(&state, &template).await?;

    let created = state.recurring_repo.create(&template).await?;
    info!("Created recurring event '{}' ({})", created.title, created.recurrence_type);
    Ok(Json(created))
}

pub async fn update_recurring(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateRecurringRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut template = state.recurring_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Recurring event not found".into()))?;

    if let Some(title) = payload.title { template.title = title; }
    apply_optional_text(&mut template.description, payload.description);
    if let Some(event_type) = payload.event_type { template.event_type = event_type; }
    apply_optional_text(&mut template.venue_id, payload.venue_id);
    if let Some(kind) = payload.recurrence_type {
        let kind: RecurrenceType = kind.parse().map_err(AppError::Validation)?;
        template.recurrence_type = kind.to_string();
    }
    if let Some(v) = payload.day_of_week { template.day_of_week = v; }
    if let Some(v) = payload.week_of_month { template.week_of_month = v; }
    if let Some(v) = payload.day_of_month { template.day_of_month = v; }
    if let Some(v) = payload.event_time { template.event_time = v; }
    if let Some(v) = payload.start_date { template.start_date = v; }
    if let Some(v) = payload.end_date { template.end_date = v; }
    if let Some(v) = payload.generate_weeks_ahead { template.generate_weeks_ahead = v; }
    apply_optional_text(&mut template.default_image_url, payload.default_image_url);
    apply_optional_text(&mut template.default_status, payload.default_status);
    if let Some(v) = payload.is_active { template.is_active = v; }
    template.updated_at = Utc::now();

    validate_template(&state, &template).await?;

    let updated = state.recurring_repo.update(&template).await?;
    info!("Updated recurring event {}", id);
    Ok(Json(updated))
}

pub async fn delete_recurring(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.recurring_repo.delete(&id).await?;
    info!("Deleted recurring event {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn list_template_events(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if state.recurring_repo.find_by_id(&id).await?.is_none() {
        return Err(AppError::NotFound("Recurring event not found".into()));
    }
    let events = state.event_repo.list_by_template(&id).await?;
    Ok(Json(events))
}

pub async fn generate_from_template(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let today = state.config.today();
    let result = state.recurrence_service.generate_from_template(&id, today).await?;
    Ok(Json(result))
}

pub async fn generate_all(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let today = state.config.today();
    let results = state.recurrence_service.generate_all_active(today).await?;
    let created = results.iter().map(|r| r.created).sum();

    info!("Generated {} occurrences across {} recurring events", created, results.len());
    Ok(Json(GenerateAllResponse {
        templates: results.len(),
        created,
        results,
    }))
}
