use quiznight_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::factory::sqlite_state,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, header},
    response::Response,
    Router,
};
use std::str::FromStr;
use tower::ServiceExt;
use serde_json::Value;

pub const ADMIN_TOKEN: &str = "test-admin-token";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::with_contact_rate(5).await
    }

    pub async fn with_contact_rate(contact_rate_per_minute: u32) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            admin_token: Some(ADMIN_TOKEN.to_string()),
            business_timezone: chrono_tz::Europe::London,
            generation_interval_secs: 0,
            social_cache_ttl_minutes: 60,
            contact_rate_per_minute,
        };

        let state = Arc::new(sqlite_state(&config, pool.clone()));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>, admin: bool) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if admin {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", ADMIN_TOKEN));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn admin(&self, method: &str, uri: &str, body: Option<Value>) -> Response {
        self.send(method, uri, body, true).await
    }

    pub async fn public(&self, method: &str, uri: &str, body: Option<Value>) -> Response {
        self.send(method, uri, body, false).await
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
