mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;
    let res = app.public("GET", "/health", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "ok");
}

#[tokio::test]
async fn test_venue_lifecycle() {
    let app = TestApp::new().await;

    let res = app.public("POST", "/api/v1/venues", Some(json!({
        "name": "The Red Lion", "address": "1 High St", "city": "Bristol"
    }))).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app.admin("POST", "/api/v1/venues", Some(json!({
        "name": "The Red Lion", "address": "1 High St", "city": "Bristol", "postcode": "BS1 1AA"
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let venue = parse_body(res).await;
    let id = venue["id"].as_str().unwrap().to_string();
    assert_eq!(venue["is_active"], true);

    let res = app.admin("PUT", &format!("/api/v1/venues/{}", id), Some(json!({
        "postcode": null, "is_active": false
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = parse_body(res).await;
    assert!(updated["postcode"].is_null());

    // Inactive venues disappear from the public list but stay visible to admins
    let res = app.public("GET", "/api/v1/venues", None).await;
    assert!(parse_body(res).await.as_array().unwrap().is_empty());
    let res = app.admin("GET", "/api/v1/admin/venues", None).await;
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 1);

    let res = app.admin("DELETE", &format!("/api/v1/venues/{}", id), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = app.public("GET", &format!("/api/v1/venues/{}", id), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_event_validation_and_filters() {
    let app = TestApp::new().await;

    let res = app.admin("POST", "/api/v1/events", Some(json!({
        "title": "Charity Quiz", "event_type": "special", "event_date": "2030-06-01", "status": "postponed"
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.admin("POST", "/api/v1/events", Some(json!({
        "title": "Charity Quiz", "event_type": "special", "event_date": "2030-06-01", "venue_id": "missing"
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    for (title, date) in [("Early", "2030-01-10"), ("Late", "2030-03-10")] {
        let res = app.admin("POST", "/api/v1/events", Some(json!({
            "title": title, "event_type": "special", "event_date": date, "event_time": "20:00:00"
        }))).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = app.public("GET", "/api/v1/events?from=2030-02-01", None).await;
    let events = parse_body(res).await;
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "Late");
    assert_eq!(events[0]["status"], "scheduled");

    let res = app.public("GET", "/api/v1/events?to=2030-02-01&event_type=special", None).await;
    let events = parse_body(res).await;
    assert_eq!(events.as_array().unwrap()[0]["title"], "Early");
}

#[tokio::test]
async fn test_reviews_publication_and_rating() {
    let app = TestApp::new().await;

    let res = app.admin("POST", "/api/v1/reviews", Some(json!({
        "author_name": "Sam", "rating": 6, "content": "Too good"
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.admin("POST", "/api/v1/reviews", Some(json!({
        "author_name": "Sam", "rating": 5, "content": "Great night", "is_featured": true
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.admin("POST", "/api/v1/reviews", Some(json!({
        "author_name": "Alex", "rating": 3, "content": "Hidden", "is_published": false
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.public("GET", "/api/v1/reviews", None).await;
    let public = parse_body(res).await;
    assert_eq!(public.as_array().unwrap().len(), 1);
    assert_eq!(public[0]["author_name"], "Sam");

    let res = app.admin("GET", "/api/v1/admin/reviews", None).await;
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_team_and_services_ordering() {
    let app = TestApp::new().await;

    for (name, order) in [("Second", 2), ("First", 1)] {
        let res = app.admin("POST", "/api/v1/team", Some(json!({
            "name": name, "role": "Quizmaster", "display_order": order
        }))).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
    let res = app.public("GET", "/api/v1/team", None).await;
    let team = parse_body(res).await;
    assert_eq!(team[0]["name"], "First");
    assert_eq!(team[1]["name"], "Second");

    let res = app.admin("POST", "/api/v1/services", Some(json!({
        "title": "Private quiz", "description": "Hosted at your venue", "is_active": false
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = app.public("GET", "/api/v1/services", None).await;
    assert!(parse_body(res).await.as_array().unwrap().is_empty());
    let res = app.admin("GET", "/api/v1/admin/services", None).await;
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_gallery_rejects_unknown_event() {
    let app = TestApp::new().await;

    let res = app.admin("POST", "/api/v1/gallery", Some(json!({
        "image_url": "https://cdn.example.com/a.jpg", "event_id": "nope"
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.admin("POST", "/api/v1/gallery", Some(json!({
        "image_url": "https://cdn.example.com/a.jpg", "caption": "Winners"
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.public("GET", "/api/v1/gallery", None).await;
    assert_eq!(parse_body(res).await[0]["caption"], "Winners");
}

#[tokio::test]
async fn test_settings_upsert() {
    let app = TestApp::new().await;

    let res = app.admin("PUT", "/api/v1/settings/site_title", Some(json!({"value": "Quiz Night"}))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = app.admin("PUT", "/api/v1/settings/site_title", Some(json!({"value": "Quiz Night Live"}))).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.public("GET", "/api/v1/settings/site_title", None).await;
    assert_eq!(parse_body(res).await["value"], "Quiz Night Live");

    let res = app.public("GET", "/api/v1/settings", None).await;
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 1);

    let res = app.admin("DELETE", "/api/v1/settings/site_title", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = app.public("GET", "/api/v1/settings/site_title", None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_admin_token_is_rejected() {
    let app = TestApp::new().await;

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/v1/questions")
        .header(axum::http::header::AUTHORIZATION, "Bearer not-the-token")
        .body(axum::body::Body::empty())
        .unwrap();
    let res = tower::ServiceExt::oneshot(app.router.clone(), request).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_manual_event_can_be_rescheduled() {
    let app = TestApp::new().await;

    let res = app.admin("POST", "/api/v1/events", Some(json!({
        "title": "Halloween Special", "event_type": "special", "event_date": "2030-10-31"
    }))).await;
    let id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.admin("PUT", &format!("/api/v1/events/{}", id), Some(json!({"event_date": "2030-11-01"}))).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["event_date"], "2030-11-01");
}
