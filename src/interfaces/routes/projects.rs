use actix_web::web;

use crate::handlers::projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    // `/create` expects multipart/form-data with a required `image` file field
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("/create")
                    .route(web::post().to(projects::create_project))
            )
            .service(
                web::resource("/get")
                    .route(web::get().to(projects::get_projects))
            )
            .service(
                web::resource("/delete/{project_id}")
                    .route(web::delete().to(projects::delete_project))
            )
    );
}
