use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        project::{ProjectCreatedResponse, ProjectUpload},
        response::MessageResponse,
    },
    errors::AppError,
    AppState,
};

#[instrument(skip(state, form))]
pub async fn create_project(
    state: web::Data<AppState>,
    form: MultipartForm<ProjectUpload>,
) -> Result<impl Responder, AppError> {
    let (request, image) = form.into_inner().into_parts();

    let project = state.project_handler
        .create_project(request, image)
        .await?;

    Ok(HttpResponse::Created().json(ProjectCreatedResponse {
        message: "Project created successfully".to_string(),
        project,
    }))
}

#[instrument(skip(state))]
pub async fn get_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn delete_project(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.project_handler.delete_project(&project_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Project deleted successfully")))
}
