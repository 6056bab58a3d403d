use actix_multipart::form::MultipartForm;
use actix_web::{web, Either, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        certificate::{CertificateCreatedResponse, CertificateListResponse, CertificateUpload, NewCertificate},
        response::MessageResponse,
    },
    errors::{is_too_large, AppError},
    AppState,
};

/// Accepts `multipart/form-data` (optionally carrying an `image` file) or a
/// plain JSON body without an image.
#[instrument(skip(state, data_input))]
pub async fn create_certificate(
    state: web::Data<AppState>,
    data_input: Result<Either<MultipartForm<CertificateUpload>, web::Json<NewCertificate>>, actix_web::Error>,
) -> Result<impl Responder, AppError> {
    let either = data_input.map_err(|e| {
        if is_too_large(&e) {
            AppError::PayloadTooLarge(e.to_string())
        } else {
            AppError::InvalidInput(format!(
                "Request must be either application/json or multipart/form-data: {}",
                e
            ))
        }
    })?;

    let (request, image) = match either {
        Either::Left(form) => form.into_inner().into_parts(),
        Either::Right(json) => (json.into_inner(), None),
    };

    let certificate = state.certificate_handler
        .create_certificate(request, image)
        .await?;

    Ok(HttpResponse::Created().json(CertificateCreatedResponse {
        message: "Certificate created successfully".to_string(),
        certificate,
    }))
}

#[instrument(skip(state))]
pub async fn get_certificates(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let certificates = state.certificate_handler.list_certificates().await?;
    Ok(HttpResponse::Ok().json(CertificateListResponse { certificates }))
}

#[instrument(skip(state))]
pub async fn delete_certificate(
    certificate_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.certificate_handler.delete_certificate(&certificate_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Certificate deleted successfully")))
}
