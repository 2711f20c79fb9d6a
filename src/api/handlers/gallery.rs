use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminUser;
use crate::api::dtos::requests::{CreateGalleryImageRequest, UpdateGalleryImageRequest};
use crate::api::handlers::{apply_optional_text, require_text};
use crate::domain::models::gallery::GalleryImage;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

async fn ensure_event_exists(state: &AppState, event_id: Option<&str>) -> Result<(), AppError> {
    if let Some(id) = event_id
        && state.event_repo.find_by_id(id).await?.is_none() {
        return Err(AppError::Validation("Event does not exist".into()));
    }
    Ok(())
}

pub async fn list_images(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let images = state.gallery_repo.list().await?;
    Ok(Json(images))
}

pub async fn create_image(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateGalleryImageRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_text("image_url", &payload.image_url)?;
    ensure_event_exists(&state, payload.event_id.as_deref()).await?;

    let mut image = GalleryImage::new(payload.image_url);
    image.title = payload.title;
    image.caption = payload.caption;
    image.event_id = payload.event_id;
    image.display_order = payload.display_order.unwrap_or(0);

    let created = state.gallery_repo.create(&image).await?;
    info!("Added gallery image {}", created.id);
    Ok(Json(created))
}

pub async fn update_image(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateGalleryImageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut image = state.gallery_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Gallery image not found".into()))?;

    if let Some(url) = payload.image_url { image.image_url = url; }
    apply_optional_text(&mut image.title, payload.title);
    apply_optional_text(&mut image.caption, payload.caption);
    apply_optional_text(&mut image.event_id, payload.event_id);
    if let Some(order) = payload.display_order { image.display_order = order; }

    require_text("image_url", &image.image_url)?;
    ensure_event_exists(&state, image.event_id.as_deref()).await?;

    let updated = state.gallery_repo.update(&image).await?;
    Ok(Json(updated))
}

pub async fn delete_image(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.gallery_repo.delete(&id).await?;
    info!("Deleted gallery image {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
