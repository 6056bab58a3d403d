use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod certificates;
mod contact;
mod education;
mod payload;
mod projects;
mod skills;

pub use payload::payload_config;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .configure(contact::config_routes)
            .configure(skills::config_routes)
            .configure(education::config_routes)
            .configure(projects::config_routes)
            .configure(certificates::config_routes)
    );
}
