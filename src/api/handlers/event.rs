use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminUser;
use crate::api::dtos::requests::{CreateEventRequest, EventListQuery, UpdateEventRequest};
use crate::api::handlers::{apply_optional_text, require_text};
use crate::domain::models::event::{is_valid_status, Event, EventFilter};
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

async fn validate_event(state: &AppState, event: &Event) -> Result<(), AppError> {
    require_text("title", &event.title)?;
    require_text("event_type", &event.event_type)?;

    if !is_valid_status(&event.status) {
        return Err(AppError::Validation(format!("Invalid status '{}'", event.status)));
    }

    if let Some(venue_id) = event.venue_id.as_deref()
        && state.venue_repo.find_by_id(venue_id).await?.is_none() {
        return Err(AppError::Validation("Venue does not exist".into()));
    }
    Ok(())
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EventListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let from = match (query.from, query.upcoming) {
        (Some(from), _) => Some(from),
        (None, true) => Some(state.config.today()),
        (None, false) => None,
    };

    let filter = EventFilter {
        from,
        to: query.to,
        venue_id: query.venue_id,
        event_type: query.event_type,
        status: query.status,
    };

    let events = state.event_repo.list(&filter).await?;
    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;
    Ok(Json(event))
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut event = Event::new(payload.title, payload.event_type, payload.event_date);
    event.description = payload.description;
    event.venue_id = payload.venue_id;
    event.event_time = payload.event_time;
    event.image_url = payload.image_url;
    if let Some(status) = payload.status {
        event.status = status;
    }

    validate_event(&state, &event).await?;

    let created = state.event_repo.create(&event).await?;
    info!("Created event '{}' on {}", created.title, created.event_date);
    Ok(Json(created))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut event = state.event_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if let Some(title) = payload.title { event.title = title; }
    apply_optional_text(&mut event.description, payload.description);
    if let Some(event_type) = payload.event_type { event.event_type = event_type; }
    apply_optional_text(&mut event.venue_id, payload.venue_id);
    if let Some(date) = payload.event_date
        && date != event.event_date
    {
        // Generation is keyed on (template, date); a moved occurrence would be recreated.
        if event.recurring_template_id.is_some() {
            return Err(AppError::Validation(
                "event_date of a generated occurrence cannot be changed; cancel it instead".into(),
            ));
        }
        event.event_date = date;
    }
    if let Some(time) = payload.event_time { event.event_time = time; }
    apply_optional_text(&mut event.image_url, payload.image_url);
    if let Some(status) = payload.status { event.status = status; }
    event.updated_at = Utc::now();

    validate_event(&state, &event).await?;

    let updated = state.event_repo.update(&event).await?;
    info!("Updated event {}", id);
    Ok(Json(updated))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.event_repo.delete(&id).await?;
    info!("Deleted event {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
