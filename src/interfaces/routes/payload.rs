use actix_multipart::form::MultipartFormConfig;
use actix_web::web;

use crate::errors::AppError;

/// Body limits and JSON error replies for every extractor in the app.
///
/// `upload_max_bytes` bounds multipart forms and the raw payload buffered when
/// a handler accepts either JSON or multipart.
pub fn payload_config(upload_max_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(
            web::JsonConfig::default().error_handler(|err, _req| AppError::from(err).into()),
        );
        cfg.app_data(
            MultipartFormConfig::default()
                .total_limit(upload_max_bytes)
                .memory_limit(upload_max_bytes)
                .error_handler(|err, _req| AppError::from(err).into()),
        );
        cfg.app_data(web::PayloadConfig::new(upload_max_bytes));
    }
}
