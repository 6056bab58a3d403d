use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::contact::{Contact, NewContact},
    errors::AppError,
    repositories::contact::ContactRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ContactHandler<R>
where
    R: ContactRepository + ?Sized,
{
    pub contact_repo: Arc<R>,
}

impl<R> ContactHandler<R>
where
    R: ContactRepository + ?Sized,
{
    pub fn new(contact_repo: Arc<R>) -> Self {
        ContactHandler { contact_repo }
    }

    /// Validates and stores a new contact handle
    pub async fn create_contact(&self, request: NewContact) -> Result<Contact, AppError> {
        request.validate()?;

        let contact = self.contact_repo
            .create_contact(&request.prepare_for_insert())
            .await?;

        tracing::info!(id = %contact.id, "contact created");
        Ok(contact)
    }

    /// Lists every contact, oldest first
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        self.contact_repo.list_contacts().await
    }

    /// Permanently removes a contact
    pub async fn delete_contact(&self, id: &str) -> Result<(), AppError> {
        let not_found = |e: AppError| match e {
            AppError::NotFound(_) => AppError::NotFound("Contact not found".to_string()),
            _ => e,
        };

        let valid_id = valid_uuid(id).map_err(not_found)?;

        self.contact_repo
            .delete_contact(&valid_id)
            .await
            .map_err(not_found)
    }
}
