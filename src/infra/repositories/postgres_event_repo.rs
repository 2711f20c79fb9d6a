use crate::domain::{
    models::event::{Event, EventFilter},
    ports::{EventRepository, OccurrenceStore},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{QueryBuilder, Postgres, PgPool};

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepo {
    async fn create(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"INSERT INTO events (
                id, title, description, event_type, venue_id, event_date, event_time,
                image_url, status, recurring_template_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *"#
        )
            .bind(&event.id)
            .bind(&event.title)
            .bind(&event.description)
            .bind(&event.event_type)
            .bind(&event.venue_id)
            .bind(event.event_date)
            .bind(event.event_time)
            .bind(&event.image_url)
            .bind(&event.status)
            .bind(&event.recurring_template_id)
            .bind(event.created_at)
            .bind(event.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, filter: &EventFilter) -> Result<Vec<Event>, AppError> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM events WHERE 1 = 1");

        if let Some(from) = filter.from {
            query.push(" AND event_date >= ").push_bind(from);
        }
        if let Some(to) = filter.to {
            query.push(" AND event_date <= ").push_bind(to);
        }
        if let Some(venue_id) = &filter.venue_id {
            query.push(" AND venue_id = ").push_bind(venue_id.clone());
        }
        if let Some(event_type) = &filter.event_type {
            query.push(" AND event_type = ").push_bind(event_type.clone());
        }
        if let Some(status) = &filter.status {
            query.push(" AND status = ").push_bind(status.clone());
        }
        query.push(" ORDER BY event_date, event_time");

        query.build_query_as::<Event>()
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_template(&self, template_id: &str) -> Result<Vec<Event>, AppError> {
        sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE recurring_template_id = $1 ORDER BY event_date",
        )
            .bind(template_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"UPDATE events SET
                title=$1, description=$2, event_type=$3, venue_id=$4, event_date=$5,
                event_time=$6, image_url=$7, status=$8, updated_at=$9
               WHERE id=$10 RETURNING *"#
        )
            .bind(&event.title)
            .bind(&event.description)
            .bind(&event.event_type)
            .bind(&event.venue_id)
            .bind(event.event_date)
            .bind(event.event_time)
            .bind(&event.image_url)
            .bind(&event.status)
            .bind(event.updated_at)
            .bind(&event.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl OccurrenceStore for PostgresEventRepo {
    async fn occurrence_exists(&self, template_id: &str, date: NaiveDate) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM events WHERE recurring_template_id = $1 AND event_date = $2)",
        )
            .bind(template_id)
            .bind(date)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn insert_occurrence(&self, event: &Event) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>(
            r#"INSERT INTO events (
                id, title, description, event_type, venue_id, event_date, event_time,
                image_url, status, recurring_template_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (recurring_template_id, event_date) DO NOTHING
            RETURNING *"#
        )
            .bind(&event.id)
            .bind(&event.title)
            .bind(&event.description)
            .bind(&event.event_type)
            .bind(&event.venue_id)
            .bind(event.event_date)
            .bind(event.event_time)
            .bind(&event.image_url)
            .bind(&event.status)
            .bind(&event.recurring_template_id)
            .bind(event.created_at)
            .bind(event.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
