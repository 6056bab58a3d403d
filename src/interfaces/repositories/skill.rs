use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::skill::{Skill, SkillInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError>;

    /// All skills, oldest first
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;

    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn create_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError> {
        let created = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (name, tech)
            VALUES ($1, $2)
            RETURNING id, name, tech, created_at, updated_at
            "#,
        )
        .bind(&skill.name)
        .bind(&skill.tech)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT id, name, tech, created_at, updated_at
            FROM skills
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Skill Not Found".into()));
        }
        Ok(())
    }
}
