use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminUser;
use crate::api::dtos::requests::StoreSocialFeedRequest;
use crate::api::dtos::responses::SocialFeedResponse;
use crate::domain::models::social::SocialPostCache;
use crate::error::AppError;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::info;

fn to_response(entry: SocialPostCache, ttl: Duration) -> Result<SocialFeedResponse, AppError> {
    let posts = serde_json::from_str(&entry.payload_json)
        .map_err(|e| AppError::InternalWithMsg(format!("Corrupt social cache for {}: {}", entry.platform, e)))?;
    let is_stale = entry.is_stale(ttl, Utc::now());

    Ok(SocialFeedResponse {
        platform: entry.platform,
        posts,
        fetched_at: entry.fetched_at,
        is_stale,
    })
}

pub async fn get_feed(
    State(state): State<Arc<AppState>>,
    Path(platform): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let platform = platform.trim().to_lowercase();
    let entry = state.social_repo.get(&platform).await?
        .ok_or(AppError::NotFound(format!("No cached posts for '{}'", platform)))?;

    let ttl = state.config.social_cache_ttl();
    Ok(Json(to_response(entry, ttl)?))
}

pub async fn store_feed(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(platform): Path<String>,
    Json(payload): Json<StoreSocialFeedRequest>,
) -> Result<impl IntoResponse, AppError> {
    let platform = platform.trim().to_lowercase();
    if platform.is_empty() {
        return Err(AppError::Validation("platform must not be empty".into()));
    }

    let entry = SocialPostCache::new(platform, payload.posts.to_string());
    let saved = state.social_repo.upsert(&entry).await?;
    info!("Refreshed social cache for {}", saved.platform);

    let ttl = state.config.social_cache_ttl();
    Ok(Json(to_response(saved, ttl)?))
}
