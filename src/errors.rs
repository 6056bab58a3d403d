use std::fmt;

use actix_multipart::MultipartError;
use actix_web::{
    error::{JsonPayloadError, PayloadError, ResponseError},
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    InvalidInput(String),
    NotFound(String),
    PayloadTooLarge(String),
    UploadError(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Validation failed: {}", messages)
            }
            AppError::InvalidInput(msg) => write!(f, "{}", msg),
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            AppError::UploadError(msg) => write!(f, "Image upload failed: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::InvalidInput(_) => "bad_request",
            AppError::NotFound(_) => "not_found",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::UploadError(_) => "upload_failed",
            AppError::InternalError(_) => "internal_server_error",
        }
    }

    pub fn validation(field: &str, message: &str) -> Self {
        AppError::ValidationError(vec![FieldError::new(field, message)])
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "error": self.kind(),
                    "message": "Required fields missing or invalid",
                    "details": errors
                })
            }
            _ => {
                serde_json::json!({
                    "error": self.kind(),
                    "message": self.to_string()
                })
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UploadError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(FieldError::collect(&errors))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::InternalError(format!("Database error: {}", err))
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if is_overflow(&err) {
            AppError::PayloadTooLarge(err.to_string())
        } else {
            AppError::InvalidInput(format!("Invalid multipart form: {}", err))
        }
    }
}

// Form limits surface as a bare payload overflow, which reports status 400.
fn is_overflow(err: &MultipartError) -> bool {
    matches!(err, MultipartError::Payload(PayloadError::Overflow))
        || err.status_code() == StatusCode::PAYLOAD_TOO_LARGE
}

/// True when an extractor error stems from a body over the configured limit.
pub fn is_too_large(err: &actix_web::Error) -> bool {
    err.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE
        || matches!(err.as_error::<PayloadError>(), Some(PayloadError::Overflow))
        || err.as_error::<MultipartError>().is_some_and(is_overflow)
}

impl From<JsonPayloadError> for AppError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                AppError::PayloadTooLarge(err.to_string())
            }
            _ => AppError::InvalidInput(format!("JSON payload error: {}", err)),
        }
    }
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        AppError::UploadError(err.to_string())
    }
}

/// Failures reported by the image upload collaborator.
#[derive(Debug, Display, PartialEq)]
pub enum UploadError {
    #[display("upload request failed: {_0}")]
    Request(String),

    #[display("upload rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[display("unexpected upload response: {_0}")]
    InvalidResponse(String),

    #[display("uploader misconfigured: {_0}")]
    Configuration(String),
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        UploadError::Request(err.to_string())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Flattens validator output into one entry per failing rule, ordered by field name.
    pub fn collect(errors: &ValidationErrors) -> Vec<FieldError> {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: camel_case(field),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        field_errors.sort_by(|a, b| a.field.cmp(&b.field));
        field_errors
    }
}

// Request bodies are camelCase on the wire; report fields the way clients sent them.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_rt::test]
    async fn validation_error_lists_details() {
        let err = AppError::ValidationError(vec![
            FieldError::new("appname", "This field is required"),
            FieldError::new("link", "This field is required"),
        ]);

        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "validation_error");
        assert_eq!(json["details"].as_array().unwrap().len(), 2);
        assert_eq!(json["details"][1]["field"], "link");
    }

    #[test]
    fn not_found_and_validation_are_distinguishable() {
        let not_found = AppError::NotFound("Contact not found".into());
        let invalid = AppError::validation("appname", "This field is required");

        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(not_found.to_string(), "Contact not found");
    }

    #[test]
    fn upload_failures_are_server_errors() {
        let err: AppError = UploadError::Rejected { status: 401, body: "bad key".into() }.into();
        assert!(err.status_code().is_server_error());
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn form_limit_overflow_is_payload_too_large() {
        let err: AppError = MultipartError::Payload(PayloadError::Overflow).into();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);

        let err: AppError = MultipartError::Incomplete.into();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn buffered_body_overflow_is_detected() {
        let err: actix_web::Error = PayloadError::Overflow.into();
        assert!(is_too_large(&err));

        let err: actix_web::Error = AppError::InvalidInput("nope".into()).into();
        assert!(!is_too_large(&err));
    }

    #[test]
    fn field_errors_use_wire_names() {
        let mut errors = ValidationErrors::new();
        errors.add("start_year", validator::ValidationError::new("required"));
        errors.add("field_of_study", validator::ValidationError::new("required"));
        errors.add("degree", validator::ValidationError::new("required"));

        let fields: Vec<String> = FieldError::collect(&errors).into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["degree", "fieldOfStudy", "startYear"]);
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
