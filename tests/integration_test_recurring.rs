mod common;

use axum::http::StatusCode;
use chrono::{Datelike, Duration, NaiveDate};
use common::{parse_body, TestApp};
use serde_json::{json, Value};

fn event_dates(events: &Value) -> Vec<NaiveDate> {
    events.as_array().unwrap().iter()
        .map(|e| e["event_date"].as_str().unwrap().parse().unwrap())
        .collect()
}

async fn create_weekly(app: &TestApp, weeks_ahead: i32) -> (String, NaiveDate) {
    let today = app.state.config.today();
    let dow = today.weekday().num_days_from_sunday();

    let res = app.admin("POST", "/api/v1/recurring-events", Some(json!({
        "title": "Tuesday Pub Quiz",
        "event_type": "quiz",
        "recurrence_type": "weekly",
        "day_of_week": dow,
        "event_time": "19:30:00",
        "start_date": today.to_string(),
        "generate_weeks_ahead": weeks_ahead,
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    (body["id"].as_str().unwrap().to_string(), today)
}

#[tokio::test]
async fn test_generate_weekly_occurrences_is_idempotent() {
    let app = TestApp::new().await;
    let (id, today) = create_weekly(&app, 2).await;

    let res = app.admin("POST", &format!("/api/v1/recurring-events/{}/generate", id), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let first = parse_body(res).await;

    // today, +7 and +14 all fall inside a two-week window
    assert_eq!(first["count"], 3);
    let dates = event_dates(&first["events"]);
    assert_eq!(dates, vec![today, today + Duration::days(7), today + Duration::days(14)]);
    for event in first["events"].as_array().unwrap() {
        assert_eq!(event["recurring_template_id"], id.as_str());
        assert_eq!(event["status"], "scheduled");
        assert_eq!(event["event_time"], "19:30:00");
    }

    let res = app.admin("POST", &format!("/api/v1/recurring-events/{}/generate", id), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let second = parse_body(res).await;
    assert_eq!(second["count"], 0);
    assert!(second["events"].as_array().unwrap().is_empty());

    let res = app.admin("GET", &format!("/api/v1/recurring-events/{}/events", id), None).await;
    let stored = parse_body(res).await;
    assert_eq!(stored.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_generated_occurrences_are_public_events() {
    let app = TestApp::new().await;
    let (_id, _today) = create_weekly(&app, 1).await;

    let res = app.admin("POST", "/api/v1/recurring-events/generate-all", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let summary = parse_body(res).await;
    assert_eq!(summary["templates"], 1);
    assert_eq!(summary["created"], 2);

    let res = app.public("GET", "/api/v1/events?upcoming=true&event_type=quiz", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let events = parse_body(res).await;
    assert_eq!(events.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_generate_all_skips_inactive_templates() {
    let app = TestApp::new().await;
    let (id, _today) = create_weekly(&app, 4).await;

    let res = app.admin("PUT", &format!("/api/v1/recurring-events/{}", id), Some(json!({"is_active": false}))).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.admin("POST", "/api/v1/recurring-events/generate-all", None).await;
    let summary = parse_body(res).await;
    assert_eq!(summary["templates"], 0);
    assert_eq!(summary["created"], 0);
}

#[tokio::test]
async fn test_existing_occurrence_is_not_duplicated() {
    let app = TestApp::new().await;
    let (id, today) = create_weekly(&app, 1).await;

    // Pre-existing occurrence for today, e.g. from an earlier run
    sqlx::query(
        "INSERT INTO events (id, title, event_type, event_date, status, recurring_template_id, created_at, updated_at)
         VALUES ('existing', 'Tuesday Pub Quiz', 'quiz', ?, 'sold_out', ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)",
    )
        .bind(today)
        .bind(&id)
        .execute(&app.pool)
        .await
        .unwrap();

    let res = app.admin("POST", &format!("/api/v1/recurring-events/{}/generate", id), None).await;
    let body = parse_body(res).await;
    assert_eq!(body["count"], 1);
    assert_eq!(event_dates(&body["events"]), vec![today + Duration::days(7)]);

    let res = app.public("GET", "/api/v1/events/existing", None).await;
    assert_eq!(parse_body(res).await["status"], "sold_out");
}

#[tokio::test]
async fn test_monthly_nth_weekday_occurrences() {
    let app = TestApp::new().await;
    let today = app.state.config.today();

    let res = app.admin("POST", "/api/v1/recurring-events", Some(json!({
        "title": "First Tuesday Music Quiz",
        "event_type": "music",
        "recurrence_type": "monthly",
        "week_of_month": 1,
        "day_of_week": 2,
        "start_date": today.to_string(),
        "generate_weeks_ahead": 8,
        "default_status": "sold_out",
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.admin("POST", &format!("/api/v1/recurring-events/{}/generate", id), None).await;
    let body = parse_body(res).await;
    let dates = event_dates(&body["events"]);

    assert!((1..=3).contains(&dates.len()), "unexpected count {}", dates.len());
    for (date, event) in dates.iter().zip(body["events"].as_array().unwrap()) {
        assert_eq!(date.weekday(), chrono::Weekday::Tue);
        assert!(date.day() <= 7);
        assert!(*date >= today && *date <= today + Duration::weeks(8));
        assert_eq!(event["status"], "sold_out");
    }
}

#[tokio::test]
async fn test_malformed_templates_are_rejected() {
    let app = TestApp::new().await;

    let cases = [
        json!({"title": "Q", "event_type": "quiz", "recurrence_type": "weekly", "start_date": "2025-01-01"}),
        json!({"title": "Q", "event_type": "quiz", "recurrence_type": "weekly", "day_of_week": 7, "start_date": "2025-01-01"}),
        json!({"title": "Q", "event_type": "quiz", "recurrence_type": "monthly", "start_date": "2025-01-01"}),
        json!({"title": "Q", "event_type": "quiz", "recurrence_type": "monthly", "day_of_month": 3, "week_of_month": 1, "day_of_week": 2, "start_date": "2025-01-01"}),
        json!({"title": "Q", "event_type": "quiz", "recurrence_type": "daily", "day_of_week": 2, "start_date": "2025-01-01"}),
        json!({"title": "Q", "event_type": "quiz", "recurrence_type": "weekly", "day_of_week": 2, "start_date": "2025-02-01", "end_date": "2025-01-01"}),
    ];

    for payload in cases {
        let res = app.admin("POST", "/api/v1/recurring-events", Some(payload.clone())).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload accepted: {}", payload);
    }
}

#[tokio::test]
async fn test_generate_unknown_template_returns_404() {
    let app = TestApp::new().await;

    let res = app.admin("POST", "/api/v1/recurring-events/does-not-exist/generate", None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recurring_routes_require_admin_token() {
    let app = TestApp::new().await;

    let res = app.public("GET", "/api/v1/recurring-events", None).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app.public("POST", "/api/v1/recurring-events/generate-all", None).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deleting_template_keeps_generated_events() {
    let app = TestApp::new().await;
    let (id, _today) = create_weekly(&app, 1).await;

    let res = app.admin("POST", &format!("/api/v1/recurring-events/{}/generate", id), None).await;
    let generated = parse_body(res).await;
    let event_id = generated["events"][0]["id"].as_str().unwrap().to_string();

    let res = app.admin("DELETE", &format!("/api/v1/recurring-events/{}", id), None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.public("GET", &format!("/api/v1/events/{}", event_id), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(parse_body(res).await["recurring_template_id"].is_null());
}

#[tokio::test]
async fn test_generate_inactive_template_creates_nothing() {
    let app = TestApp::new().await;
    let today = app.state.config.today();

    let res = app.admin("POST", "/api/v1/recurring-events", Some(json!({
        "title": "Paused Quiz",
        "event_type": "quiz",
        "recurrence_type": "weekly",
        "day_of_week": today.weekday().num_days_from_sunday(),
        "start_date": today.to_string(),
        "generate_weeks_ahead": 2,
        "is_active": false,
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.admin("POST", &format!("/api/v1/recurring-events/{}/generate", id), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["count"], 0);
    assert!(body["events"].as_array().unwrap().is_empty());

    let res = app.admin("GET", &format!("/api/v1/recurring-events/{}/events", id), None).await;
    assert!(parse_body(res).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_generated_occurrence_date_is_fixed() {
    let app = TestApp::new().await;
    let (id, today) = create_weekly(&app, 1).await;

    let res = app.admin("POST", &format!("/api/v1/recurring-events/{}/generate", id), None).await;
    let generated = parse_body(res).await;
    let event_id = generated["events"][0]["id"].as_str().unwrap().to_string();

    let moved = today + Duration::days(1);
    let res = app.admin("PUT", &format!("/api/v1/events/{}", event_id), Some(json!({
        "event_date": moved.to_string()
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Other edits, and resending the same date, are still allowed
    let res = app.admin("PUT", &format!("/api/v1/events/{}", event_id), Some(json!({
        "event_date": today.to_string(), "status": "cancelled"
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "cancelled");

    let res = app.admin("POST", &format!("/api/v1/recurring-events/{}/generate", id), None).await;
    assert_eq!(parse_body(res).await["count"], 0);
}
