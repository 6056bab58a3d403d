use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        response::MessageResponse,
        skill::{NewSkill, SkillCreatedResponse, SkillListResponse},
    },
    errors::AppError,
    AppState,
};

#[instrument(skip(state, data))]
pub async fn create_skill(
    state: web::Data<AppState>,
    data: web::Json<NewSkill>,
) -> Result<impl Responder, AppError> {
    let skill = state.skill_handler.create_skill(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(SkillCreatedResponse {
        message: "Skill Created Successfully".to_string(),
        skill,
    }))
}

#[instrument(skip(state))]
pub async fn get_skills(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let skills = state.skill_handler.list_skills().await?;

    Ok(HttpResponse::Ok().json(SkillListResponse {
        message: "Get All Skills Successfully".to_string(),
        skills,
    }))
}

#[instrument(skip(state))]
pub async fn delete_skill(
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.skill_handler.delete_skill(&skill_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Skill Deleted Successfully")))
}
