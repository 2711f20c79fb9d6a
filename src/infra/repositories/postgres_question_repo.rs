use crate::domain::{models::question::QuizQuestion, ports::QuestionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresQuestionRepo {
    pool: PgPool,
}

impl PostgresQuestionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepo {
    async fn create(&self, question: &QuizQuestion) -> Result<QuizQuestion, AppError> {
        sqlx::query_as::<_, QuizQuestion>(
            r#"INSERT INTO quiz_questions (id, question, answer, category, difficulty, scheduled_date, is_active, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING *"#
        )
            .bind(&question.id)
            .bind(&question.question)
            .bind(&question.answer)
            .bind(&question.category)
            .bind(&question.difficulty)
            .bind(question.scheduled_date)
            .bind(question.is_active)
            .bind(question.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<QuizQuestion>, AppError> {
        sqlx::query_as::<_, QuizQuestion>("SELECT * FROM quiz_questions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<QuizQuestion>, AppError> {
        sqlx::query_as::<_, QuizQuestion>("SELECT * FROM quiz_questions ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_active(&self) -> Result<Vec<QuizQuestion>, AppError> {
        sqlx::query_as::<_, QuizQuestion>(
            "SELECT * FROM quiz_questions WHERE is_active = TRUE ORDER BY created_at",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, question: &QuizQuestion) -> Result<QuizQuestion, AppError> {
        sqlx::query_as::<_, QuizQuestion>(
            r#"UPDATE quiz_questions SET
                question=$1, answer=$2, category=$3, difficulty=$4, scheduled_date=$5, is_active=$6
               WHERE id=$7 RETURNING *"#
        )
            .bind(&question.question)
            .bind(&question.answer)
            .bind(&question.category)
            .bind(&question.difficulty)
            .bind(question.scheduled_date)
            .bind(question.is_active)
            .bind(&question.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM quiz_questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Question not found".into()));
        }
        Ok(())
    }
}
