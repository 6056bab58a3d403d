use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::fields::{clean_tech_list, non_empty_tech, not_blank};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub tech: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillInsert {
    pub name: String,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewSkill {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "non_empty_tech"))]
    pub tech: Vec<String>,
}

impl NewSkill {
    pub fn prepare_for_insert(self) -> SkillInsert {
        SkillInsert {
            name: self.name,
            tech: clean_tech_list(self.tech),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SkillCreatedResponse {
    pub message: String,
    pub skill: Skill,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SkillListResponse {
    pub message: String,
    pub skills: Vec<Skill>,
}
