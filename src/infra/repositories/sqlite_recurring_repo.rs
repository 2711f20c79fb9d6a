use crate::domain::{models::recurring::RecurringTemplate, ports::RecurringTemplateRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteRecurringRepo {
    pool: SqlitePool,
}

impl SqliteRecurringRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecurringTemplateRepository for SqliteRecurringRepo {
    async fn create(&self, template: &RecurringTemplate) -> Result<RecurringTemplate, AppError> {
        sqlx::query_as::<_, RecurringTemplate>(
            r#"INSERT INTO recurring_events (
                id, title, description, event_type, venue_id, recurrence_type,
                day_of_week, week_of_month, day_of_month, event_time, start_date, end_date,
                generate_weeks_ahead, default_image_url, default_status, is_active,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#
        )
            .bind(&template.id)
            .bind(&template.title)
            .bind(&template.description)
            .bind(&template.event_type)
            .bind(&template.venue_id)
            .bind(&template.recurrence_type)
            .bind(template.day_of_week)
            .bind(template.week_of_month)
            .bind(template.day_of_month)
            .bind(template.event_time)
            .bind(template.start_date)
            .bind(template.end_date)
            .bind(template.generate_weeks_ahead)
            .bind(&template.default_image_url)
            .bind(&template.default_status)
            .bind(template.is_active)
            .bind(template.created_at)
            .bind(template.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<RecurringTemplate>, AppError> {
        sqlx::query_as::<_, RecurringTemplate>("SELECT * FROM recurring_events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<RecurringTemplate>, AppError> {
        sqlx::query_as::<_, RecurringTemplate>("SELECT * FROM recurring_events ORDER BY title")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_active(&self) -> Result<Vec<RecurringTemplate>, AppError> {
        sqlx::query_as::<_, RecurringTemplate>(
            "SELECT * FROM recurring_events WHERE is_active = TRUE ORDER BY title",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, template: &RecurringTemplate) -> Result<RecurringTemplate, AppError> {
        sqlx::query_as::<_, RecurringTemplate>(
            r#"UPDATE recurring_events SET
                title=?, description=?, event_type=?, venue_id=?, recurrence_type=?,
                day_of_week=?, week_of_month=?, day_of_month=?, event_time=?,
                start_date=?, end_date=?, generate_weeks_ahead=?,
                default_image_url=?, default_status=?, is_active=?, updated_at=?
               WHERE id=? RETURNING *"#
        )
            .bind(&template.title)
            .bind(&template.description)
            .bind(&template.event_type)
            .bind(&template.venue_id)
            .bind(&template.recurrence_type)
            .bind(template.day_of_week)
            .bind(template.week_of_month)
            .bind(template.day_of_month)
            .bind(template.event_time)
            .bind(template.start_date)
            .bind(template.end_date)
            .bind(template.generate_weeks_ahead)
            .bind(&template.default_image_url)
            .bind(&template.default_status)
            .bind(template.is_active)
            .bind(template.updated_at)
            .bind(&template.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM recurring_events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Recurring event not found".into()));
        }
        Ok(())
    }
}
