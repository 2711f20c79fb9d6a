use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{
    health, venue, event, recurring, team, gallery, review, service, setting, contact, question, social,
};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Venues
        .route("/api/v1/venues", get(venue::list_venues).post(venue::create_venue))
        .route("/api/v1/venues/{id}", get(venue::get_venue).put(venue::update_venue).delete(venue::delete_venue))
        .route("/api/v1/admin/venues", get(venue::list_all_venues))

        // Events
        .route("/api/v1/events", get(event::list_events).post(event::create_event))
        .route("/api/v1/events/{id}", get(event::get_event).put(event::update_event).delete(event::delete_event))

        // Recurring events
        .route("/api/v1/recurring-events", get(recurring::list_recurring).post(recurring::create_recurring))
        .route("/api/v1/recurring-events/generate-all", post(recurring::generate_all))
        .route("/api/v1/recurring-events/{id}", get(recurring::get_recurring).put(recurring::update_recurring).delete(recurring::delete_recurring))
        .route("/api/v1/recurring-events/{id}/events", get(recurring::list_template_events))
        .route("/api/v1/recurring-events/{id}/generate", post(recurring::generate_from_template))

        // Site content
        .route("/api/v1/team", get(team::list_team).post(team::create_member))
        .route("/api/v1/team/{id}", put(team::update_member).delete(team::delete_member))
        .route("/api/v1/admin/team", get(team::list_all_team))
        .route("/api/v1/gallery", get(gallery::list_images).post(gallery::create_image))
        .route("/api/v1/gallery/{id}", put(gallery::update_image).delete(gallery::delete_image))
        .route("/api/v1/reviews", get(review::list_reviews).post(review::create_review))
        .route("/api/v1/reviews/{id}", put(review::update_review).delete(review::delete_review))
        .route("/api/v1/admin/reviews", get(review::list_all_reviews))
        .route("/api/v1/services", get(service::list_services).post(service::create_service))
        .route("/api/v1/services/{id}", put(service::update_service).delete(service::delete_service))
        .route("/api/v1/admin/services", get(service::list_all_services))
        .route("/api/v1/settings", get(setting::list_settings))
        .route("/api/v1/settings/{key}", get(setting::get_setting).put(setting::upsert_setting).delete(setting::delete_setting))

        // Contact
        .route("/api/v1/contact", post(contact::submit_contact).get(contact::list_submissions))
        .route("/api/v1/contact/{id}", axum::routing::delete(contact::delete_submission))
        .route("/api/v1/contact/{id}/read", put(contact::mark_read))

        // Quiz questions
        .route("/api/v1/question-of-the-day", get(question::question_of_the_day))
        .route("/api/v1/questions", get(question::list_questions).post(question::create_question))
        .route("/api/v1/questions/{id}", get(question::get_question).put(question::update_question).delete(question::delete_question))

        // Social feed cache
        .route("/api/v1/social/{platform}", get(social::get_feed).put(social::store_feed))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        admin = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
