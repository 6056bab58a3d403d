use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        education::{EducationCreatedResponse, NewEducation},
        response::MessageResponse,
    },
    errors::AppError,
    AppState,
};

#[instrument(skip(state, data))]
pub async fn create_education(
    state: web::Data<AppState>,
    data: web::Json<NewEducation>,
) -> Result<impl Responder, AppError> {
    let education = state.education_handler
        .create_education(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(EducationCreatedResponse {
        message: "Education added successfully".to_string(),
        education,
    }))
}

/// Replies with a bare array, latest start year first.
#[instrument(skip(state))]
pub async fn get_education(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let educations = state.education_handler.list_educations().await?;
    Ok(HttpResponse::Ok().json(educations))
}

#[instrument(skip(state))]
pub async fn delete_education(
    education_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.education_handler.delete_education(&education_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Education deleted successfully")))
}
