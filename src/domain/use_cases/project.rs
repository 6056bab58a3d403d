use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::PROJECTS_FOLDER,
    entities::{
        image::{ImageFile, ResourceKind},
        project::{NewProject, Project},
    },
    errors::{AppError, FieldError},
    repositories::project::ProjectRepository,
    upload::uploader::ImageUploader,
    utils::valid_uuid::valid_uuid,
};

pub struct ProjectHandler<R, U>
where
    R: ProjectRepository + ?Sized,
    U: ImageUploader + ?Sized,
{
    pub project_repo: Arc<R>,
    pub uploader: Arc<U>,
}

impl<R, U> ProjectHandler<R, U>
where
    R: ProjectRepository + ?Sized,
    U: ImageUploader + ?Sized,
{
    pub fn new(project_repo: Arc<R>, uploader: Arc<U>) -> Self {
        ProjectHandler { project_repo, uploader }
    }

    /// Uploads the screenshot, then stores the project pointing at it.
    ///
    /// The upload happens before the insert. If the insert fails the image
    /// stays in storage; the orphaned URL is logged.
    pub async fn create_project(
        &self,
        request: NewProject,
        image: Option<ImageFile>,
    ) -> Result<Project, AppError> {
        let mut field_errors = match request.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => FieldError::collect(&errors),
        };
        if image.is_none() {
            field_errors.push(FieldError::new("image", "Image is required"));
        }
        if !field_errors.is_empty() {
            return Err(AppError::ValidationError(field_errors));
        }

        let image = image.ok_or_else(|| AppError::validation("image", "Image is required"))?;
        let mime = image.ensure_image()?;
        tracing::debug!(mime, size = image.len(), "project image accepted");

        let uploaded = self.uploader
            .upload(image.data, PROJECTS_FOLDER, ResourceKind::Image)
            .await?;

        let insert = request.prepare_for_insert(uploaded.url.clone());
        match self.project_repo.create_project(&insert).await {
            Ok(project) => {
                tracing::info!(id = %project.id, "project created");
                Ok(project)
            }
            Err(e) => {
                tracing::warn!(url = %uploaded.url, "project insert failed after upload, image left orphaned");
                Err(e)
            }
        }
    }

    /// Lists every project, newest first
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let not_found = |e: AppError| match e {
            AppError::NotFound(_) => AppError::NotFound("Project not found".to_string()),
            _ => e,
        };

        let valid_id = valid_uuid(id).map_err(not_found)?;

        self.project_repo
            .delete_project(&valid_id)
            .await
            .map_err(not_found)
    }
}
