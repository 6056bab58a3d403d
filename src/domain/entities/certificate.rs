use actix_multipart::form::{bytes::Bytes as MpBytes, text::Text, MultipartForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::{
    fields::{not_blank, optional_text},
    image::ImageFile,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub issued_by: Option<String>,
    pub issue_date: Option<String>,
    pub link: Option<String>,
    /// Public URL of the scan, empty when none was attached.
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificateInsert {
    pub name: String,
    pub description: Option<String>,
    pub issued_by: Option<String>,
    pub issue_date: Option<String>,
    pub link: Option<String>,
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewCertificate {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, rename = "issuedBy")]
    pub issued_by: Option<String>,

    #[serde(default, rename = "issueDate")]
    pub issue_date: Option<String>,

    #[serde(default)]
    pub link: Option<String>,
}

impl NewCertificate {
    pub fn prepare_for_insert(self, image_url: Option<String>) -> CertificateInsert {
        CertificateInsert {
            name: self.name,
            description: optional_text(self.description),
            issued_by: optional_text(self.issued_by),
            issue_date: optional_text(self.issue_date),
            link: optional_text(self.link),
            image: image_url.unwrap_or_default(),
        }
    }
}

#[derive(Debug, MultipartForm)]
pub struct CertificateUpload {
    pub image: Option<MpBytes>,
    pub name: Option<Text<String>>,
    pub description: Option<Text<String>>,
    #[multipart(rename = "issuedBy")]
    pub issued_by: Option<Text<String>>,
    #[multipart(rename = "issueDate")]
    pub issue_date: Option<Text<String>>,
    pub link: Option<Text<String>>,
}

impl CertificateUpload {
    pub fn into_parts(self) -> (NewCertificate, Option<ImageFile>) {
        let image = self
            .image
            .map(|file| ImageFile::new(file.data, file.file_name))
            .filter(|file| !file.is_empty());

        let certificate = NewCertificate {
            name: self.name.map(Text::into_inner).unwrap_or_default(),
            description: self.description.map(Text::into_inner),
            issued_by: self.issued_by.map(Text::into_inner),
            issue_date: self.issue_date.map(Text::into_inner),
            link: self.link.map(Text::into_inner),
        };

        (certificate, image)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CertificateCreatedResponse {
    pub message: String,
    pub certificate: Certificate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CertificateListResponse {
    pub certificates: Vec<Certificate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_stores_empty_url() {
        let insert = NewCertificate {
            name: "AWS Cloud Practitioner".into(),
            issued_by: Some("Amazon".into()),
            ..Default::default()
        }
        .prepare_for_insert(None);

        assert_eq!(insert.image, "");
        assert_eq!(insert.issued_by.as_deref(), Some("Amazon"));
    }

    #[test]
    fn name_is_required() {
        let form: NewCertificate = serde_json::from_str(r#"{"issuedBy": "Coursera"}"#).unwrap();
        assert!(form.validate().unwrap_err().field_errors().contains_key("name"));
    }
}
