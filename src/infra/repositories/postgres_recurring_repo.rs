use crate::domain::{models::recurring::RecurringTemplate, ports::RecurringTemplateRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresRecurringRepo {
    pool: PgPool,
}

impl PostgresRecurringRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecurringTemplateRepository for PostgresRecurringRepo {
    async fn create(&self, template: &RecurringTemplate) -> Result<RecurringTemplate, AppError> {
        sqlx::query_as::<_, RecurringTemplate>(
            r#"INSERT INTO recurring_events (
                id, title, description, event_type, venue_id, recurrence_type,
                day_of_week, week_of_month, day_of_month, event_time, start_date, end_date,
                generate_weeks_ahead, default_image_url, default_status, is_active,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
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
        sqlx::query_as::<_, RecurringTemplate>("SELECT * FROM recurring_events WHERE id = $1")
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
                title=$1, description=$2, event_type=$3, venue_id=$4, recurrence_type=$5,
                day_of_week=$6, week_of_month=$7, day_of_month=$8, event_time=$9,
                start_date=$10, end_date=$11, generate_weeks_ahead=$12,
                default_image_url=$13, default_status=$14, is_active=$15, updated_at=$16
               WHERE id=$17 RETURNING *"#
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
        let result = sqlx::query("DELETE FROM recurring_events WHERE id = $1")
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
