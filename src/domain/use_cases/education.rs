use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::education::{sort_by_start_year_desc, Education, NewEducation},
    errors::AppError,
    repositories::education::EducationRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct EducationHandler<R>
where
    R: EducationRepository + ?Sized,
{
    pub education_repo: Arc<R>,
}

impl<R> EducationHandler<R>
where
    R: EducationRepository + ?Sized,
{
    pub fn new(education_repo: Arc<R>) -> Self {
        EducationHandler { education_repo }
    }

    pub async fn create_education(&self, request: NewEducation) -> Result<Education, AppError> {
        request.validate()?;

        let education = self.education_repo
            .create_education(&request.prepare_for_insert())
            .await?;

        tracing::info!(id = %education.id, "education created");
        Ok(education)
    }

    /// Lists every entry, latest start year first
    pub async fn list_educations(&self) -> Result<Vec<Education>, AppError> {
        let mut educations = self.education_repo.list_educations().await?;
        sort_by_start_year_desc(&mut educations);
        Ok(educations)
    }

    pub async fn delete_education(&self, id: &str) -> Result<(), AppError> {
        let not_found = |e: AppError| match e {
            AppError::NotFound(_) => AppError::NotFound("Education not found".to_string()),
            _ => e,
        };

        let valid_id = valid_uuid(id).map_err(not_found)?;

        self.education_repo
            .delete_education(&valid_id)
            .await
            .map_err(not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::education::MockEducationRepository;
    use chrono::Utc;
    use uuid::Uuid;

    fn stored(start_year: &str) -> Education {
        Education {
            id: Uuid::new_v4(),
            institution: "Open University".into(),
            degree: "BSc".into(),
            field_of_study: "Mathematics".into(),
            start_year: start_year.into(),
            end_year: None,
            gpa: Some("3.8".into()),
            percentage: None,
            location: None,
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn list_orders_by_start_year_descending() {
        let mut repo = MockEducationRepository::new();
        repo.expect_list_educations()
            .returning(|| Ok(vec![stored("2019"), stored("2021"), stored("2020")]));

        let handler = EducationHandler::new(Arc::new(repo));
        let years: Vec<String> = handler
            .list_educations()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.start_year)
            .collect();

        assert_eq!(years, vec!["2021", "2020", "2019"]);
    }

    #[tokio::test]
    async fn create_reports_every_missing_field() {
        let mut repo = MockEducationRepository::new();
        repo.expect_create_education().never();

        let handler = EducationHandler::new(Arc::new(repo));
        let request = NewEducation {
            institution: "Open University".into(),
            ..Default::default()
        };

        match handler.create_education(request).await {
            Err(AppError::ValidationError(errors)) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields.len(), 3);
                assert!(!fields.contains(&"institution"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
