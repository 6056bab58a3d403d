use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::skill::{NewSkill, Skill},
    errors::AppError,
    repositories::skill::SkillRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct SkillHandler<R>
where
    R: SkillRepository + ?Sized,
{
    pub skill_repo: Arc<R>,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository + ?Sized,
{
    pub fn new(skill_repo: Arc<R>) -> Self {
        SkillHandler { skill_repo }
    }

    pub async fn create_skill(&self, request: NewSkill) -> Result<Skill, AppError> {
        request.validate()?;

        let skill = self.skill_repo
            .create_skill(&request.prepare_for_insert())
            .await?;

        tracing::info!(id = %skill.id, "skill created");
        Ok(skill)
    }

    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills().await
    }

    pub async fn delete_skill(&self, id: &str) -> Result<(), AppError> {
        let not_found = |e: AppError| match e {
            AppError::NotFound(_) => AppError::NotFound("Skill Not Found".to_string()),
            _ => e,
        };

        let valid_id = valid_uuid(id).map_err(not_found)?;

        self.skill_repo
            .delete_skill(&valid_id)
            .await
            .map_err(not_found)
    }
}
