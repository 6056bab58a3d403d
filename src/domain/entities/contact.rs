use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::fields::not_blank;

// ───── Database Models ───────────────────────────────────────────────

/// A social or messaging handle shown on the contact page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub appname: String,
    pub username: String,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactInsert {
    pub appname: String,
    pub username: String,
    pub link: String,
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewContact {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub appname: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub username: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub link: String,
}

impl NewContact {
    pub fn prepare_for_insert(self) -> ContactInsert {
        ContactInsert {
            appname: self.appname,
            username: self.username,
            link: self.link,
        }
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactCreatedResponse {
    pub message: String,
    pub contact: Contact,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactListResponse {
    pub contacts: Vec<Contact>,
}
