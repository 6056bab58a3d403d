use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::CERTIFICATES_FOLDER,
    entities::{
        certificate::{Certificate, NewCertificate},
        image::{ImageFile, ResourceKind},
    },
    errors::AppError,
    repositories::certificate::CertificateRepository,
    upload::uploader::ImageUploader,
    utils::valid_uuid::valid_uuid,
};

pub struct CertificateHandler<R, U>
where
    R: CertificateRepository + ?Sized,
    U: ImageUploader + ?Sized,
{
    pub certificate_repo: Arc<R>,
    pub uploader: Arc<U>,
}

impl<R, U> CertificateHandler<R, U>
where
    R: CertificateRepository + ?Sized,
    U: ImageUploader + ?Sized,
{
    pub fn new(certificate_repo: Arc<R>, uploader: Arc<U>) -> Self {
        CertificateHandler { certificate_repo, uploader }
    }

    /// Stores a certificate. An attached scan is uploaded first; without one
    /// the record keeps an empty image URL.
    pub async fn create_certificate(
        &self,
        request: NewCertificate,
        image: Option<ImageFile>,
    ) -> Result<Certificate, AppError> {
        request.validate()?;

        let image_url = match image {
            Some(image) => {
                image.ensure_image()?;
                let uploaded = self.uploader
                    .upload(image.data, CERTIFICATES_FOLDER, ResourceKind::Image)
                    .await?;
                Some(uploaded.url)
            }
            None => None,
        };

        let insert = request.prepare_for_insert(image_url);
        match self.certificate_repo.create_certificate(&insert).await {
            Ok(certificate) => {
                tracing::info!(id = %certificate.id, "certificate created");
                Ok(certificate)
            }
            Err(e) => {
                if !insert.image.is_empty() {
                    tracing::warn!(url = %insert.image, "certificate insert failed after upload, image left orphaned");
                }
                Err(e)
            }
        }
    }

    /// Lists every certificate, newest first
    pub async fn list_certificates(&self) -> Result<Vec<Certificate>, AppError> {
        self.certificate_repo.list_certificates().await
    }

    pub async fn delete_certificate(&self, id: &str) -> Result<(), AppError> {
        let not_found = |e: AppError| match e {
            AppError::NotFound(_) => AppError::NotFound("Certificate not found".to_string()),
            _ => e,
        };

        let valid_id = valid_uuid(id).map_err(not_found)?;

        self.certificate_repo
            .delete_certificate(&valid_id)
            .await
            .map_err(not_found)
    }
}
