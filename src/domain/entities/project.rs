use actix_multipart::form::{bytes::Bytes as MpBytes, text::Text, MultipartForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::{
    fields::{not_blank, optional_text, split_tech},
    image::ImageFile,
};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub deployed_link: Option<String>,
    pub git_link: Option<String>,
    pub tech: Vec<String>,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInsert {
    pub title: String,
    pub description: Option<String>,
    pub deployed_link: Option<String>,
    pub git_link: Option<String>,
    pub tech: Vec<String>,
    pub image: String,
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewProject {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, rename = "deployedLink")]
    pub deployed_link: Option<String>,

    #[serde(default, rename = "gitLink")]
    pub git_link: Option<String>,

    /// Comma-joined list as sent by the admin form, e.g. "React,Node,Mongo".
    #[serde(default)]
    pub tech: Option<String>,
}

impl NewProject {
    pub fn prepare_for_insert(self, image_url: String) -> ProjectInsert {
        ProjectInsert {
            tech: split_tech(self.tech.as_deref()),
            title: self.title,
            description: optional_text(self.description),
            deployed_link: optional_text(self.deployed_link),
            git_link: optional_text(self.git_link),
            image: image_url,
        }
    }
}

/// `multipart/form-data` body of `POST /api/projects/create`.
#[derive(Debug, MultipartForm)]
pub struct ProjectUpload {
    pub image: Option<MpBytes>,
    pub title: Option<Text<String>>,
    pub description: Option<Text<String>>,
    #[multipart(rename = "deployedLink")]
    pub deployed_link: Option<Text<String>>,
    #[multipart(rename = "gitLink")]
    pub git_link: Option<Text<String>>,
    pub tech: Option<Text<String>>,
}

impl ProjectUpload {
    pub fn into_parts(self) -> (NewProject, Option<ImageFile>) {
        let image = self
            .image
            .map(|file| ImageFile::new(file.data, file.file_name))
            .filter(|file| !file.is_empty());

        let project = NewProject {
            title: self.title.map(Text::into_inner).unwrap_or_default(),
            description: self.description.map(Text::into_inner),
            deployed_link: self.deployed_link.map(Text::into_inner),
            git_link: self.git_link.map(Text::into_inner),
            tech: self.tech.map(Text::into_inner),
        };

        (project, image)
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectCreatedResponse {
    pub message: String,
    pub project: Project,
}
