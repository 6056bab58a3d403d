use async_trait::async_trait;
use actix_web::web::Bytes;

use crate::{
    entities::image::{ResourceKind, UploadedImage},
    errors::UploadError,
};

/// Object storage that turns an in-memory buffer into a public URL.
///
/// Uploads are not idempotent: retrying a failed create may store the same
/// image twice.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageUploader: Send + Sync {
    async fn upload(
        &self,
        data: Bytes,
        folder: &str,
        kind: ResourceKind,
    ) -> Result<UploadedImage, UploadError>;
}
