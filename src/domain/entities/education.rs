use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::fields::{not_blank, numeric_year, optional_text, parse_year};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    /// Free text as submitted; compared numerically only when listing.
    pub start_year: String,
    pub end_year: Option<String>,
    pub gpa: Option<String>,
    pub percentage: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationInsert {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_year: String,
    pub end_year: Option<String>,
    pub gpa: Option<String>,
    pub percentage: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewEducation {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub institution: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub degree: String,

    #[serde(default, rename = "fieldOfStudy")]
    #[validate(custom(function = "not_blank"))]
    pub field_of_study: String,

    #[serde(default, rename = "startYear")]
    #[validate(custom(function = "numeric_year"))]
    pub start_year: String,

    #[serde(default, rename = "endYear")]
    pub end_year: Option<String>,

    #[serde(default)]
    pub gpa: Option<String>,

    #[serde(default)]
    pub percentage: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl NewEducation {
    pub fn prepare_for_insert(self) -> EducationInsert {
        EducationInsert {
            institution: self.institution,
            degree: self.degree,
            field_of_study: self.field_of_study,
            start_year: self.start_year,
            end_year: optional_text(self.end_year),
            gpa: optional_text(self.gpa),
            percentage: optional_text(self.percentage),
            location: optional_text(self.location),
            description: optional_text(self.description),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EducationCreatedResponse {
    pub message: String,
    pub education: Education,
}

/// Orders by start year, latest first. Entries whose year is not a number
/// go last; ties keep their incoming order.
pub fn sort_by_start_year_desc(entries: &mut [Education]) {
    entries.sort_by(|a, b| {
        match (parse_year(&a.start_year), parse_year(&b.start_year)) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}
