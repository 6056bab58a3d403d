use std::sync::Arc;

use crate::repositories::{
    certificate::CertificateRepository,
    contact::ContactRepository,
    education::EducationRepository,
    health::HealthRepository,
    project::ProjectRepository,
    skill::SkillRepository,
    sqlx_repo::{
        SqlxCertificateRepo, SqlxContactRepo, SqlxEducationRepo,
        SqlxHealthRepo, SqlxProjectRepo, SqlxSkillRepo,
    },
};

/// One storage handle per resource, injected into the use-case handlers.
#[derive(Clone)]
pub struct SharedRepositories {
    pub contact_repo: Arc<dyn ContactRepository>,
    pub skill_repo: Arc<dyn SkillRepository>,
    pub education_repo: Arc<dyn EducationRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub certificate_repo: Arc<dyn CertificateRepository>,
    pub health_repo: Arc<dyn HealthRepository>,
}

impl SharedRepositories {
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        SharedRepositories {
            contact_repo: Arc::new(SqlxContactRepo::new(pool.clone())),
            skill_repo: Arc::new(SqlxSkillRepo::new(pool.clone())),
            education_repo: Arc::new(SqlxEducationRepo::new(pool.clone())),
            project_repo: Arc::new(SqlxProjectRepo::new(pool.clone())),
            certificate_repo: Arc::new(SqlxCertificateRepo::new(pool.clone())),
            health_repo: Arc::new(SqlxHealthRepo::new(pool)),
        }
    }
}
