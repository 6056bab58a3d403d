use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        contact::{ContactCreatedResponse, ContactListResponse, NewContact},
        response::MessageResponse,
    },
    errors::AppError,
    AppState,
};

#[instrument(skip(state, data))]
pub async fn create_contact(
    state: web::Data<AppState>,
    data: web::Json<NewContact>,
) -> Result<impl Responder, AppError> {
    let contact = state.contact_handler
        .create_contact(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ContactCreatedResponse {
        message: "Contact created successfully".to_string(),
        contact,
    }))
}

#[instrument(skip(state))]
pub async fn get_contacts(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let contacts = state.contact_handler.list_contacts().await?;
    Ok(HttpResponse::Ok().json(ContactListResponse { contacts }))
}

#[instrument(skip(state))]
pub async fn delete_contact(
    contact_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.contact_handler.delete_contact(&contact_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Contact deleted successfully")))
}
