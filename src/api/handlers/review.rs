use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminUser;
use crate::api::dtos::requests::{CreateReviewRequest, UpdateReviewRequest};
use crate::api::handlers::{apply_optional_text, require_text};
use crate::domain::models::review::Review;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

fn validate_rating(rating: i32) -> Result<(), AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation("rating must be between 1 and 5".into()));
    }
    Ok(())
}

pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = state.review_repo.list(true).await?;
    Ok(Json(reviews))
}

pub async fn list_all_reviews(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let reviews = state.review_repo.list(false).await?;
    Ok(Json(reviews))
}

pub async fn create_review(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_text("author_name", &payload.author_name)?;
    require_text("content", &payload.content)?;
    validate_rating(payload.rating)?;

    let mut review = Review::new(payload.author_name, payload.rating, payload.content);
    review.source = payload.source;
    review.is_featured = payload.is_featured.unwrap_or(false);
    review.is_published = payload.is_published.unwrap_or(true);

    let created = state.review_repo.create(&review).await?;
    info!("Created review from {} ({} stars)", created.author_name, created.rating);
    Ok(Json(created))
}

pub async fn update_review(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut review = state.review_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Review not found".into()))?;

    if let Some(author) = payload.author_name { review.author_name = author; }
    if let Some(rating) = payload.rating { review.rating = rating; }
    if let Some(content) = payload.content { review.content = content; }
    apply_optional_text(&mut review.source, payload.source);
    if let Some(featured) = payload.is_featured { review.is_featured = featured; }
    if let Some(published) = payload.is_published { review.is_published = published; }

    require_text("author_name", &review.author_name)?;
    require_text("content", &review.content)?;
    validate_rating(review.rating)?;

    let updated = state.review_repo.update(&review).await?;
    Ok(Json(updated))
}

pub async fn delete_review(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.review_repo.delete(&id).await?;
    info!("Deleted review {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
