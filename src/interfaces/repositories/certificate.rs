use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::certificate::{Certificate, CertificateInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxCertificateRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CertificateRepository: Send + Sync {
    async fn create_certificate(&self, certificate: &CertificateInsert) -> Result<Certificate, AppError>;

    /// All certificates, newest first
    async fn list_certificates(&self) -> Result<Vec<Certificate>, AppError>;

    async fn delete_certificate(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxCertificateRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCertificateRepo { pool }
    }
}

#[async_trait]
impl CertificateRepository for SqlxCertificateRepo {
    async fn create_certificate(&self, certificate: &CertificateInsert) -> Result<Certificate, AppError> {
        let created = sqlx::query_as::<_, Certificate>(
            r#"
            INSERT INTO certificates (name, description, issued_by, issue_date, link, image)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&certificate.name)
        .bind(&certificate.description)
        .bind(&certificate.issued_by)
        .bind(&certificate.issue_date)
        .bind(&certificate.link)
        .bind(&certificate.image)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_certificates(&self) -> Result<Vec<Certificate>, AppError> {
        let certificates = sqlx::query_as::<_, Certificate>(
            r#"SELECT * FROM certificates ORDER BY created_at DESC"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(certificates)
    }

    async fn delete_certificate(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM certificates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Certificate not found".into()));
        }
        Ok(())
    }
}
