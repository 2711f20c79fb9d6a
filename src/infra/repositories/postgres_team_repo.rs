use crate::domain::{models::team_member::TeamMember, ports::TeamMemberRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresTeamRepo {
    pool: PgPool,
}

impl PostgresTeamRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamMemberRepository for PostgresTeamRepo {
    async fn create(&self, member: &TeamMember) -> Result<TeamMember, AppError> {
        sqlx::query_as::<_, TeamMember>(
            r#"INSERT INTO team_members (id, name, role, bio, image_url, display_order, is_active, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING *"#
        )
            .bind(&member.id)
            .bind(&member.name)
            .bind(&member.role)
            .bind(&member.bio)
            .bind(&member.image_url)
            .bind(member.display_order)
            .bind(member.is_active)
            .bind(member.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<TeamMember>, AppError> {
        sqlx::query_as::<_, TeamMember>("SELECT * FROM team_members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, include_inactive: bool) -> Result<Vec<TeamMember>, AppError> {
        sqlx::query_as::<_, TeamMember>(
            "SELECT * FROM team_members WHERE is_active = TRUE OR $1 ORDER BY display_order, name",
        )
            .bind(include_inactive)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, member: &TeamMember) -> Result<TeamMember, AppError> {
        sqlx::query_as::<_, TeamMember>(
            r#"UPDATE team_members SET
                name=$1, role=$2, bio=$3, image_url=$4, display_order=$5, is_active=$6
               WHERE id=$7 RETURNING *"#
        )
            .bind(&member.name)
            .bind(&member.role)
            .bind(&member.bio)
            .bind(&member.image_url)
            .bind(member.display_order)
            .bind(member.is_active)
            .bind(&member.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Team member not found".into()));
        }
        Ok(())
    }
}
