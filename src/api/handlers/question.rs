use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::admin::AdminUser;
use crate::api::dtos::requests::{CreateQuestionRequest, QuestionOfDayQuery, UpdateQuestionRequest};
use crate::api::dtos::responses::QuestionOfDayResponse;
use crate::api::handlers::{apply_optional_text, require_text};
use crate::domain::models::question::QuizQuestion;
use crate::domain::services::question_of_day;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn question_of_the_day(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuestionOfDayQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = query.date.unwrap_or_else(|| state.config.today());
    let questions = state.question_repo.list_active().await?;

    let picked = question_of_day::pick_for_date(&questions, date)
        .ok_or(AppError::NotFound("No quiz question available".into()))?;

    Ok(Json(QuestionOfDayResponse {
        id: picked.id.clone(),
        date,
        question: picked.question.clone(),
        category: picked.category.clone(),
        difficulty: picked.difficulty.clone(),
        answer: query.reveal.then(|| picked.answer.clone()),
    }))
}

pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let questions = state.question_repo.list().await?;
    Ok(Json(questions))
}

pub async fn get_question(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let question = state.question_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Question not found".into()))?;
    Ok(Json(question))
}

pub async fn create_question(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_text("question", &payload.question)?;
    require_text("answer", &payload.answer)?;

    let mut question = QuizQuestion::new(payload.question, payload.answer);
    question.category = payload.category;
    question.difficulty = payload.difficulty;
    question.scheduled_date = payload.scheduled_date;
    question.is_active = payload.is_active.unwrap_or(true);

    let created = state.question_repo.create(&question).await?;
    info!("Created quiz question {}", created.id);
    Ok(Json(created))
}

pub async fn update_question(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut question = state.question_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Question not found".into()))?;

    if let Some(text) = payload.question { question.question = text; }
    if let Some(answer) = payload.answer { question.answer = answer; }
    apply_optional_text(&mut question.category, payload.category);
    apply_optional_text(&mut question.difficulty, payload.difficulty);
    if let Some(date) = payload.scheduled_date { question.scheduled_date = date; }
    if let Some(active) = payload.is_active { question.is_active = active; }

    require_text("question", &question.question)?;
    require_text("answer", &question.answer)?;

    let updated = state.question_repo.update(&question).await?;
    Ok(Json(updated))
}

pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.question_repo.delete(&id).await?;
    info!("Deleted quiz question {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
