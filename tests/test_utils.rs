#![allow(dead_code)]

use std::{
    net::TcpListener,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use portfolio_api::{
    constants::mark_started,
    entities::{
        certificate::{Certificate, CertificateInsert},
        contact::{Contact, ContactInsert},
        education::{Education, EducationInsert},
        image::{ResourceKind, UploadedImage},
        project::{Project, ProjectInsert},
        skill::{Skill, SkillInsert},
    },
    errors::{AppError, UploadError},
    middlewares::cors::cors_policy,
    repositories::{
        certificate::CertificateRepository, contact::ContactRepository,
        education::EducationRepository, health::HealthRepository,
        project::ProjectRepository, skill::SkillRepository,
    },
    routes::{configure_routes, payload_config},
    shared_repos::SharedRepositories,
    upload::uploader::ImageUploader,
    AppState,
};
use reqwest::Client;
use uuid::Uuid;

pub const FRONTEND_URL: &str = "http://localhost:3000";
pub const UPLOAD_LIMIT: usize = 256 * 1024;

/// Smallest valid PNG header, enough for content sniffing.
pub const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89,
];

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub store: Arc<InMemoryStore>,
    pub uploader: Arc<StubUploader>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        mark_started();

        let store = Arc::new(InMemoryStore::default());
        let uploader = Arc::new(StubUploader::default());

        let repos = SharedRepositories {
            contact_repo: store.clone(),
            skill_repo: store.clone(),
            education_repo: store.clone(),
            project_repo: store.clone(),
            certificate_repo: store.clone(),
            health_repo: store.clone(),
        };
        let state = web::Data::new(AppState::new(repos, uploader.clone()));

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(NormalizePath::trim())
                .wrap(cors_policy(FRONTEND_URL))
                .configure(payload_config(UPLOAD_LIMIT))
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(1)
        .run();

        tokio::spawn(server);

        let client = Client::new();
        while client.get(format!("{}/health", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self { address, client, store, uploader }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request")
    }

    pub async fn post_form(&self, path: &str, form: reqwest::multipart::Form) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .expect("Failed to send multipart request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request")
    }
}

pub fn png_part() -> reqwest::multipart::Part {
    reqwest::multipart::Part::bytes(PNG_BYTES.to_vec())
        .file_name("pixel.png")
        .mime_str("image/png")
        .unwrap()
}

/// Repository double backing every resource with a vector.
///
/// Lists follow the same order as the SQL implementations: contacts, skills
/// and education oldest first, projects and certificates newest first.
#[derive(Default)]
pub struct InMemoryStore {
    pub contacts: Mutex<Vec<Contact>>,
    pub skills: Mutex<Vec<Skill>>,
    pub educations: Mutex<Vec<Education>>,
    pub projects: Mutex<Vec<Project>>,
    pub certificates: Mutex<Vec<Certificate>>,
    pub fail_writes: AtomicBool,
    pub db_down: AtomicBool,
}

impl InMemoryStore {
    fn check_write(&self) -> Result<(), AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::InternalError("write failed".into()));
        }
        Ok(())
    }
}

fn remove_by_id<T>(rows: &Mutex<Vec<T>>, id: &Uuid, id_of: impl Fn(&T) -> Uuid, what: &str) -> Result<(), AppError> {
    let mut rows = rows.lock();
    let before = rows.len();
    rows.retain(|row| id_of(row) != *id);
    if rows.len() == before {
        return Err(AppError::NotFound(format!("{} not found", what)));
    }
    Ok(())
}

#[async_trait]
impl ContactRepository for InMemoryStore {
    async fn create_contact(&self, contact: &ContactInsert) -> Result<Contact, AppError> {
        self.check_write()?;
        let now = Utc::now();
        let created = Contact {
            id: Uuid::new_v4(),
            appname: contact.appname.clone(),
            username: contact.username.clone(),
            link: contact.link.clone(),
            created_at: now,
            updated_at: now,
        };
        self.contacts.lock().push(created.clone());
        Ok(created)
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.contacts.lock().clone())
    }

    async fn delete_contact(&self, id: &Uuid) -> Result<(), AppError> {
        remove_by_id(&self.contacts, id, |c| c.id, "Contact")
    }
}

#[async_trait]
impl SkillRepository for InMemoryStore {
    async fn create_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError> {
        self.check_write()?;
        let now = Utc::now();
        let created = Skill {
            id: Uuid::new_v4(),
            name: skill.name.clone(),
            tech: skill.tech.clone(),
            created_at: now,
            updated_at: now,
        };
        self.skills.lock().push(created.clone());
        Ok(created)
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        Ok(self.skills.lock().clone())
    }

    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError> {
        remove_by_id(&self.skills, id, |s| s.id, "Skill")
    }
}

#[async_trait]
impl EducationRepository for InMemoryStore {
    async fn create_education(&self, education: &EducationInsert) -> Result<Education, AppError> {
        self.check_write()?;
        let now = Utc::now();
        let created = Education {
            id: Uuid::new_v4(),
            institution: education.institution.clone(),
            degree: education.degree.clone(),
            field_of_study: education.field_of_study.clone(),
            start_year: education.start_year.clone(),
            end_year: education.end_year.clone(),
            gpa: education.gpa.clone(),
            percentage: education.percentage.clone(),
            location: education.location.clone(),
            description: education.description.clone(),
            created_at: now,
            updated_at: now,
        };
        self.educations.lock().push(created.clone());
        Ok(created)
    }

    async fn list_educations(&self) -> Result<Vec<Education>, AppError> {
        Ok(self.educations.lock().clone())
    }

    async fn delete_education(&self, id: &Uuid) -> Result<(), AppError> {
        remove_by_id(&self.educations, id, |e| e.id, "Education")
    }
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        self.check_write()?;
        let now = Utc::now();
        let created = Project {
            id: Uuid::new_v4(),
            title: project.title.clone(),
            description: project.description.clone(),
            deployed_link: project.deployed_link.clone(),
            git_link: project.git_link.clone(),
            tech: project.tech.clone(),
            image: project.image.clone(),
            created_at: now,
            updated_at: now,
        };
        self.projects.lock().push(created.clone());
        Ok(created)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.projects.lock().iter().rev().cloned().collect())
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        remove_by_id(&self.projects, id, |p| p.id, "Project")
    }
}

#[async_trait]
impl CertificateRepository for InMemoryStore {
    async fn create_certificate(&self, certificate: &CertificateInsert) -> Result<Certificate, AppError> {
        self.check_write()?;
        let now = Utc::now();
        let created = Certificate {
            id: Uuid::new_v4(),
            name: certificate.name.clone(),
            description: certificate.description.clone(),
            issued_by: certificate.issued_by.clone(),
            issue_date: certificate.issue_date.clone(),
            link: certificate.link.clone(),
            image: certificate.image.clone(),
            created_at: now,
            updated_at: now,
        };
        self.certificates.lock().push(created.clone());
        Ok(created)
    }

    async fn list_certificates(&self) -> Result<Vec<Certificate>, AppError> {
        Ok(self.certificates.lock().iter().rev().cloned().collect())
    }

    async fn delete_certificate(&self, id: &Uuid) -> Result<(), AppError> {
        remove_by_id(&self.certificates, id, |c| c.id, "Certificate")
    }
}

#[async_trait]
impl HealthRepository for InMemoryStore {
    async fn check_connection(&self) -> Result<(), AppError> {
        if self.db_down.load(Ordering::SeqCst) {
            return Err(AppError::InternalError("connection refused".into()));
        }
        Ok(())
    }
}

/// Upload double that hands out predictable URLs and records every call.
#[derive(Default)]
pub struct StubUploader {
    pub calls: Mutex<Vec<(String, usize)>>,
    pub fail: AtomicBool,
}

impl StubUploader {
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl ImageUploader for StubUploader {
    async fn upload(
        &self,
        data: actix_web::web::Bytes,
        folder: &str,
        _kind: ResourceKind,
    ) -> Result<UploadedImage, UploadError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(UploadError::Rejected { status: 500, body: "storage offline".into() });
        }
        let n = {
            let mut calls = self.calls.lock();
            calls.push((folder.to_string(), data.len()));
            calls.len()
        };
        Ok(UploadedImage {
            url: format!("https://img.example.com/{}/{}.png", folder, n),
        })
    }
}
