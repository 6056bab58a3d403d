use uuid::Uuid;

use crate::errors::AppError;

/// Parses a record identifier. Text that is not a UUID cannot name a stored
/// record, so it is reported as not found.
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id.trim()).map_err(|_| AppError::NotFound(format!("No record with id '{id}'")))
}
