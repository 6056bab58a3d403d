use std::time::Duration;

use actix_web::web::Bytes;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{multipart, Client};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use url::Url;
use zeroize::Zeroizing;

use crate::{
    entities::image::{ResourceKind, UploadedImage},
    errors::UploadError,
    settings::CloudinarySettings,
    upload::uploader::ImageUploader,
};

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Signed uploads to the Cloudinary Upload API.
///
/// Signatures use SHA-256, so the account must have SHA-256 signing enabled.
pub struct CloudinaryUploader {
    client: Client,
    base_url: Url,
    cloud_name: String,
    api_key: String,
    api_secret: Zeroizing<String>,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl CloudinaryUploader {
    pub fn new(settings: &CloudinarySettings) -> Result<Self, UploadError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|e| UploadError::Configuration(format!("invalid base url: {e}")))?;

        let client = Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .map_err(|e| UploadError::Configuration(e.to_string()))?;

        Ok(CloudinaryUploader {
            client,
            base_url,
            cloud_name: settings.cloud_name.clone(),
            api_key: settings.api_key.clone(),
            api_secret: Zeroizing::new(settings.api_secret.clone()),
        })
    }

    fn endpoint(&self, kind: ResourceKind) -> String {
        format!(
            "{}/v1_1/{}/{}/upload",
            self.base_url.as_str().trim_end_matches('/'),
            self.cloud_name,
            kind.as_str()
        )
    }

    pub fn sign(&self, params: &[(&str, String)]) -> String {
        signature(params, &self.api_secret)
    }
}

/// Parameters sorted by name and joined as `a=1&b=2`.
pub fn string_to_sign(params: &[(&str, String)]) -> String {
    let mut sorted: Vec<_> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn signature(params: &[(&str, String)], api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(string_to_sign(params).as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[async_trait]
impl ImageUploader for CloudinaryUploader {
    async fn upload(
        &self,
        data: Bytes,
        folder: &str,
        kind: ResourceKind,
    ) -> Result<UploadedImage, UploadError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signed = [("folder", folder.to_string()), ("timestamp", timestamp.clone())];
        let signature = self.sign(&signed);

        let size = data.len();
        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(data.to_vec()).file_name("upload"))
            .text("api_key", self.api_key.clone())
            .text("folder", folder.to_string())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        tracing::debug!(folder, size, "uploading image");

        let response = self
            .client
            .post(self.endpoint(kind))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Rejected { status: status.as_u16(), body });
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

        tracing::info!(folder, url = %uploaded.secure_url, "image uploaded");

        Ok(UploadedImage { url: uploaded.secure_url })
    }
}
