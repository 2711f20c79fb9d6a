use axum::{extract::{State, Path, Query}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminUser;
use crate::api::dtos::requests::{ContactListQuery, ContactRequest};
use crate::api::handlers::require_text;
use crate::domain::models::contact::ContactSubmission;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

const MAX_MESSAGE_LEN: usize = 5000;

fn validate_contact(req: &ContactRequest) -> Result<(), AppError> {
    require_text("name", &req.name)?;
    require_text("message", &req.message)?;

    let email = req.email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
        _ => return Err(AppError::Validation("email is not valid".into())),
    }

    if req.message.len() > MAX_MESSAGE_LEN {
        return Err(AppError::Validation(format!("message must be at most {} characters", MAX_MESSAGE_LEN)));
    }
    Ok(())
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_contact(&payload)?;

    if state.contact_limiter.check().is_err() {
        warn!("Contact form rate limit hit");
        return Err(AppError::RateLimited);
    }

    let mut submission = ContactSubmission::new(
        payload.name.trim().to_string(),
        payload.email.trim().to_string(),
        payload.message,
    );
    submission.phone = payload.phone.filter(|p| !p.trim().is_empty());
    submission.subject = payload.subject.filter(|s| !s.trim().is_empty());

    let created = state.contact_repo.create(&submission).await?;
    info!("Contact submission {} received", created.id);
    Ok((StatusCode::CREATED, Json(serde_json::json!({"status": "received", "id": created.id}))))
}

pub async fn list_submissions(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Query(query): Query<ContactListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let submissions = state.contact_repo.list(query.unread).await?;
    Ok(Json(submissions))
}

pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let submission = state.contact_repo.mark_read(&id).await?;
    Ok(Json(submission))
}

pub async fn delete_submission(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.contact_repo.delete(&id).await?;
    info!("Deleted contact submission {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
