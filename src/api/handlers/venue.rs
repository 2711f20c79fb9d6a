use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminUser;
use crate::api::dtos::requests::{CreateVenueRequest, UpdateVenueRequest};
use crate::api::handlers::{apply_optional_text, require_text};
use crate::domain::models::venue::Venue;
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

pub async fn list_venues(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let venues = state.venue_repo.list(false).await?;
    Ok(Json(venues))
}

pub async fn list_all_venues(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let venues = state.venue_repo.list(true).await?;
    Ok(Json(venues))
}

pub async fn get_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let venue = state.venue_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Venue not found".into()))?;
    Ok(Json(venue))
}

pub async fn create_venue(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateVenueRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_text("name", &payload.name)?;
    require_text("address", &payload.address)?;
    require_text("city", &payload.city)?;

    let mut venue = Venue::new(payload.name, payload.address, payload.city);
    venue.postcode = payload.postcode;
    venue.description = payload.description;
    venue.image_url = payload.image_url;
    venue.map_url = payload.map_url;
    venue.is_active = payload.is_active.unwrap_or(true);

    let created = state.venue_repo.create(&venue).await?;
    info!("Created venue: {}", created.name);
    Ok(Json(created))
}

pub async fn update_venue(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateVenueRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut venue = state.venue_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Venue not found".into()))?;

    if let Some(name) = payload.name { venue.name = name; }
    if let Some(address) = payload.address { venue.address = address; }
    if let Some(city) = payload.city { venue.city = city; }
    apply_optional_text(&mut venue.postcode, payload.postcode);
    apply_optional_text(&mut venue.description, payload.description);
    apply_optional_text(&mut venue.image_url, payload.image_url);
    apply_optional_text(&mut venue.map_url, payload.map_url);
    if let Some(active) = payload.is_active { venue.is_active = active; }

    require_text("name", &venue.name)?;
    require_text("address", &venue.address)?;
    require_text("city", &venue.city)?;
    venue.updated_at = Utc::now();

    let updated = state.venue_repo.update(&venue).await?;
    info!("Updated venue {}", id);
    Ok(Json(updated))
}

pub async fn delete_venue(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.venue_repo.delete(&id).await?;
    info!("Deleted venue {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
