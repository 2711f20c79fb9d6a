mod common;

use axum::http::StatusCode;
use chrono::Duration;
use common::{parse_body, TestApp};
use serde_json::json;

fn contact_payload() -> serde_json::Value {
    json!({
        "name": "Jo",
        "email": "jo@example.com",
        "subject": "Private booking",
        "message": "Can we book a quiz for 40 people?"
    })
}

#[tokio::test]
async fn test_contact_submission_flow() {
    let app = TestApp::new().await;

    let res = app.public("POST", "/api/v1/contact", Some(json!({
        "name": "Jo", "email": "not-an-email", "message": "Hi"
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.public("POST", "/api/v1/contact", Some(contact_payload())).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.public("GET", "/api/v1/contact", None).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app.admin("GET", "/api/v1/contact?unread=true", None).await;
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 1);

    let res = app.admin("PUT", &format!("/api/v1/contact/{}/read", id), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["is_read"], true);

    let res = app.admin("GET", "/api/v1/contact?unread=true", None).await;
    assert!(parse_body(res).await.as_array().unwrap().is_empty());
    let res = app.admin("GET", "/api/v1/contact", None).await;
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 1);

    let res = app.admin("DELETE", &format!("/api/v1/contact/{}", id), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = app.admin("DELETE", &format!("/api/v1/contact/{}", id), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_contact_form_is_rate_limited() {
    let app = TestApp::with_contact_rate(2).await;

    for _ in 0..2 {
        let res = app.public("POST", "/api/v1/contact", Some(contact_payload())).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = app.public("POST", "/api/v1/contact", Some(contact_payload())).await;
    assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_question_of_the_day() {
    let app = TestApp::new().await;

    let res = app.public("GET", "/api/v1/question-of-the-day", None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.admin("POST", "/api/v1/questions", Some(json!({
        "question": "What is the capital of Australia?", "answer": "Canberra", "category": "Geography"
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);

    let special_day = app.state.config.today() + Duration::days(3);
    let res = app.admin("POST", "/api/v1/questions", Some(json!({
        "question": "Who wrote Hamlet?", "answer": "Shakespeare", "scheduled_date": special_day.to_string()
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);

    // Without a scheduled question the single rotating one is shown, answer hidden
    let res = app.public("GET", "/api/v1/question-of-the-day", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let today = parse_body(res).await;
    assert_eq!(today["question"], "What is the capital of Australia?");
    assert!(today.get("answer").is_none());

    let res = app.public("GET", &format!("/api/v1/question-of-the-day?date={}&reveal=true", special_day), None).await;
    let scheduled = parse_body(res).await;
    assert_eq!(scheduled["question"], "Who wrote Hamlet?");
    assert_eq!(scheduled["answer"], "Shakespeare");
}

#[tokio::test]
async fn test_social_feed_cache() {
    let app = TestApp::new().await;

    let res = app.public("GET", "/api/v1/social/instagram", None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let posts = json!([{"id": "1", "caption": "Last night's winners"}]);
    let res = app.admin("PUT", "/api/v1/social/instagram", Some(json!({"posts": posts.clone()}))).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.public("GET", "/api/v1/social/instagram", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let feed = parse_body(res).await;
    assert_eq!(feed["posts"], posts);
    assert_eq!(feed["is_stale"], false);

    sqlx::query("UPDATE social_posts_cache SET fetched_at = ? WHERE platform = 'instagram'")
        .bind(chrono::Utc::now() - Duration::hours(2))
        .execute(&app.pool)
        .await
        .unwrap();

    let res = app.public("GET", "/api/v1/social/instagram", None).await;
    assert_eq!(parse_body(res).await["is_stale"], true);
}
