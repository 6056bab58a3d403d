use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::contact::{Contact, ContactInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Inserts a contact and returns the stored row
    async fn create_contact(&self, contact: &ContactInsert) -> Result<Contact, AppError>;

    /// All contacts, oldest first
    async fn list_contacts(&self) -> Result<Vec<Contact>, AppError>;

    async fn delete_contact(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxContactRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxContactRepo { pool }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn create_contact(&self, contact: &ContactInsert) -> Result<Contact, AppError> {
        let created = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (appname, username, link)
            VALUES ($1, $2, $3)
            RETURNING id, appname, username, link, created_at, updated_at
            "#,
        )
        .bind(&contact.appname)
        .bind(&contact.username)
        .bind(&contact.link)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        let contacts = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, appname, username, link, created_at, updated_at
            FROM contacts
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(contacts)
    }

    async fn delete_contact(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query(r#"DELETE FROM contacts WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Contact not found".into()));
        }
        Ok(())
    }
}
