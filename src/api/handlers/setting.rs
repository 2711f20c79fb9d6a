use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminUser;
use crate::api::dtos::requests::UpsertSettingRequest;
use crate::api::handlers::require_text;
use crate::domain::models::setting::Setting;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_settings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let settings = state.setting_repo.list().await?;
    Ok(Json(settings))
}

pub async fn get_setting(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let setting = state.setting_repo.get(&key).await?
        .ok_or(AppError::NotFound(format!("Setting '{}' not found", key)))?;
    Ok(Json(setting))
}

pub async fn upsert_setting(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(key): Path<String>,
    Json(payload): Json<UpsertSettingRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_text("key", &key)?;

    let saved = state.setting_repo.upsert(&Setting::new(key, payload.value)).await?;
    info!("Saved setting '{}'", saved.key);
    Ok(Json(saved))
}

pub async fn delete_setting(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.setting_repo.delete(&key).await?;
    info!("Deleted setting '{}'", key);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
