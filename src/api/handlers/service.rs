use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminUser;
use crate::api::dtos::requests::{CreateServiceRequest, UpdateServiceRequest};
use crate::api::handlers::{apply_optional_text, require_text};
use crate::domain::models::service::Service;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let services = state.service_repo.list(false).await?;
    Ok(Json(services))
}

pub async fn list_all_services(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let services = state.service_repo.list(true).await?;
    Ok(Json(services))
}

pub async fn create_service(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_text("title", &payload.title)?;
    require_text("description", &payload.description)?;

    let mut service = Service::new(payload.title, payload.description);
    service.icon = payload.icon;
    service.price_info = payload.price_info;
    service.display_order = payload.display_order.unwrap_or(0);
    service.is_active = payload.is_active.unwrap_or(true);

    let created = state.service_repo.create(&service).await?;
    info!("Created service: {}", created.title);
    Ok(Json(created))
}

pub async fn update_service(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut service = state.service_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Service not found".into()))?;

    if let Some(title) = payload.title { service.title = title; }
    if let Some(description) = payload.description { service.description = description; }
    apply_optional_text(&mut service.icon, payload.icon);
    apply_optional_text(&mut service.price_info, payload.price_info);
    if let Some(order) = payload.display_order { service.display_order = order; }
    if let Some(active) = payload.is_active { service.is_active = active; }

    require_text("title", &service.title)?;
    require_text("description", &service.description)?;

    let updated = state.service_repo.update(&service).await?;
    Ok(Json(updated))
}

pub async fn delete_service(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.service_repo.delete(&id).await?;
    info!("Deleted service {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
