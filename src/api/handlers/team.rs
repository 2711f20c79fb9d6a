use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminUser;
use crate::api::dtos::requests::{CreateTeamMemberRequest, UpdateTeamMemberRequest};
use crate::api::handlers::{apply_optional_text, require_text};
use crate::domain::models::team_member::TeamMember;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_team(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let members = state.team_repo.list(false).await?;
    Ok(Json(members))
}

pub async fn list_all_team(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let members = state.team_repo.list(true).await?;
    Ok(Json(members))
}

pub async fn create_member(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateTeamMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_text("name", &payload.name)?;
    require_text("role", &payload.role)?;

    let mut member = TeamMember::new(payload.name, payload.role);
    member.bio = payload.bio;
    member.image_url = payload.image_url;
    member.display_order = payload.display_order.unwrap_or(0);
    member.is_active = payload.is_active.unwrap_or(true);

    let created = state.team_repo.create(&member).await?;
    info!("Created team member: {}", created.name);
    Ok(Json(created))
}

pub async fn update_member(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTeamMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut member = state.team_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Team member not found".into()))?;

    if let Some(name) = payload.name { member.name = name; }
    if let Some(role) = payload.role { member.role = role; }
    apply_optional_text(&mut member.bio, payload.bio);
    apply_optional_text(&mut member.image_url, payload.image_url);
    if let Some(order) = payload.display_order { member.display_order = order; }
    if let Some(active) = payload.is_active { member.is_active = active; }

    require_text("name", &member.name)?;
    require_text("role", &member.role)?;

    let updated = state.team_repo.update(&member).await?;
    Ok(Json(updated))
}

pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.team_repo.delete(&id).await?;
    info!("Deleted team member {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
