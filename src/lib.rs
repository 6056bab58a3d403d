use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{db, upload, utils};

use repositories::{
    certificate::CertificateRepository,
    contact::ContactRepository,
    education::EducationRepository,
    health::HealthRepository,
    project::ProjectRepository,
    skill::SkillRepository,
};
use shared_repos::SharedRepositories;
use upload::uploader::ImageUploader;
use use_cases::{
    certificate::CertificateHandler,
    contact::ContactHandler,
    education::EducationHandler,
    project::ProjectHandler,
    skill::SkillHandler,
};

pub type AppContactHandler = ContactHandler<dyn ContactRepository>;
pub type AppSkillHandler = SkillHandler<dyn SkillRepository>;
pub type AppEducationHandler = EducationHandler<dyn EducationRepository>;
pub type AppProjectHandler = ProjectHandler<dyn ProjectRepository, dyn ImageUploader>;
pub type AppCertificateHandler = CertificateHandler<dyn CertificateRepository, dyn ImageUploader>;

pub struct AppState {
    pub contact_handler: AppContactHandler,
    pub skill_handler: AppSkillHandler,
    pub education_handler: AppEducationHandler,
    pub project_handler: AppProjectHandler,
    pub certificate_handler: AppCertificateHandler,
    pub health_repo: Arc<dyn HealthRepository>,
}

impl AppState {
    pub fn new(repos: SharedRepositories, uploader: Arc<dyn ImageUploader>) -> Self {
        AppState {
            contact_handler: ContactHandler::new(repos.contact_repo),
            skill_handler: SkillHandler::new(repos.skill_repo),
            education_handler: EducationHandler::new(repos.education_repo),
            project_handler: ProjectHandler::new(repos.project_repo, uploader.clone()),
            certificate_handler: CertificateHandler::new(repos.certificate_repo, uploader),
            health_repo: repos.health_repo,
        }
    }
}
