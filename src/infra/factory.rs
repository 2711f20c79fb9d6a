use std::num::NonZeroU32;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use governor::{Quota, RateLimiter, DefaultDirectRateLimiter};
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;
use crate::domain::services::recurrence::RecurrenceService;
use crate::infra::repositories::{
    postgres_venue_repo::PostgresVenueRepo, postgres_event_repo::PostgresEventRepo,
    postgres_recurring_repo::PostgresRecurringRepo, postgres_team_repo::PostgresTeamRepo,
    postgres_gallery_repo::PostgresGalleryRepo, postgres_review_repo::PostgresReviewRepo,
    postgres_service_repo::PostgresServiceRepo, postgres_setting_repo::PostgresSettingRepo,
    postgres_contact_repo::PostgresContactRepo, postgres_question_repo::PostgresQuestionRepo,
    postgres_social_repo::PostgresSocialRepo,
    sqlite_venue_repo::SqliteVenueRepo, sqlite_event_repo::SqliteEventRepo,
    sqlite_recurring_repo::SqliteRecurringRepo, sqlite_team_repo::SqliteTeamRepo,
    sqlite_gallery_repo::SqliteGalleryRepo, sqlite_review_repo::SqliteReviewRepo,
    sqlite_service_repo::SqliteServiceRepo, sqlite_setting_repo::SqliteSettingRepo,
    sqlite_contact_repo::SqliteContactRepo, sqlite_question_repo::SqliteQuestionRepo,
    sqlite_social_repo::SqliteSocialRepo,
};

pub async fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let opts = PgConnectOptions::from_str(database_url)?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await?;

        sqlx::migrate!("./migrations/postgres").run(&pool).await?;

        Ok(postgres_state(config, pool))
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await?;

        sqlx::migrate!("./migrations/sqlite").run(&pool).await?;

        Ok(sqlite_state(config, pool))
    }
}

pub fn postgres_state(config: &Config, pool: PgPool) -> AppState {
    let event_repo = Arc::new(PostgresEventRepo::new(pool.clone()));
    let recurring_repo = Arc::new(PostgresRecurringRepo::new(pool.clone()));
    let recurrence_service = Arc::new(RecurrenceService::new(recurring_repo.clone(), event_repo.clone()));

    AppState {
        config: config.clone(),
        venue_repo: Arc::new(PostgresVenueRepo::new(pool.clone())),
        event_repo,
        recurring_repo,
        team_repo: Arc::new(PostgresTeamRepo::new(pool.clone())),
        gallery_repo: Arc::new(PostgresGalleryRepo::new(pool.clone())),
        review_repo: Arc::new(PostgresReviewRepo::new(pool.clone())),
        service_repo: Arc::new(PostgresServiceRepo::new(pool.clone())),
        setting_repo: Arc::new(PostgresSettingRepo::new(pool.clone())),
        contact_repo: Arc::new(PostgresContactRepo::new(pool.clone())),
        question_repo: Arc::new(PostgresQuestionRepo::new(pool.clone())),
        social_repo: Arc::new(PostgresSocialRepo::new(pool)),
        recurrence_service,
        contact_limiter: contact_limiter(config),
    }
}

pub fn sqlite_state(config: &Config, pool: SqlitePool) -> AppState {
    let event_repo = Arc::new(SqliteEventRepo::new(pool.clone()));
    let recurring_repo = Arc::new(SqliteRecurringRepo::new(pool.clone()));
    let recurrence_service = Arc::new(RecurrenceService::new(recurring_repo.clone(), event_repo.clone()));

    AppState {
        config: config.clone(),
        venue_repo: Arc::new(SqliteVenueRepo::new(pool.clone())),
        event_repo,
        recurring_repo,
        team_repo: Arc::new(SqliteTeamRepo::new(pool.clone())),
        gallery_repo: Arc::new(SqliteGalleryRepo::new(pool.clone())),
        review_repo: Arc::new(SqliteReviewRepo::new(pool.clone())),
        service_repo: Arc::new(SqliteServiceRepo::new(pool.clone())),
        setting_repo: Arc::new(SqliteSettingRepo::new(pool.clone())),
        contact_repo: Arc::new(SqliteContactRepo::new(pool.clone())),
        question_repo: Arc::new(SqliteQuestionRepo::new(pool.clone())),
        social_repo: Arc::new(SqliteSocialRepo::new(pool)),
        recurrence_service,
        contact_limiter: contact_limiter(config),
    }
}

fn contact_limiter(config: &Config) -> Arc<DefaultDirectRateLimiter> {
    let per_minute = NonZeroU32::new(config.contact_rate_per_minute).unwrap_or(NonZeroU32::MIN);
    Arc::new(RateLimiter::direct(Quota::per_minute(per_minute)))
}
