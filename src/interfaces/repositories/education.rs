use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::education::{Education, EducationInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxEducationRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn create_education(&self, education: &EducationInsert) -> Result<Education, AppError>;

    /// All entries in insertion order; callers apply the start-year ordering
    async fn list_educations(&self) -> Result<Vec<Education>, AppError>;

    async fn delete_education(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxEducationRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxEducationRepo { pool }
    }
}

#[async_trait]
impl EducationRepository for SqlxEducationRepo {
    async fn create_education(&self, education: &EducationInsert) -> Result<Education, AppError> {
        let created = sqlx::query_as::<_, Education>(
            r#"
            INSERT INTO educations (
                institution, degree, field_of_study, start_year,
                end_year, gpa, percentage, location, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&education.institution)
        .bind(&education.degree)
        .bind(&education.field_of_study)
        .bind(&education.start_year)
        .bind(&education.end_year)
        .bind(&education.gpa)
        .bind(&education.percentage)
        .bind(&education.location)
        .bind(&education.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_educations(&self) -> Result<Vec<Education>, AppError> {
        let educations = sqlx::query_as::<_, Education>(
            r#"SELECT * FROM educations ORDER BY created_at ASC"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(educations)
    }

    async fn delete_education(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM educations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Education not found".into()));
        }
        Ok(())
    }
}
