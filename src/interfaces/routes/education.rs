use actix_web::web;

use crate::handlers::education;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/education")
            .service(
                web::resource("/create")
                    .route(web::post().to(education::create_education))
            )
            .service(
                web::resource("/get")
                    .route(web::get().to(education::get_education))
            )
            .service(
                web::resource("/delete/{education_id}")
                    .route(web::delete().to(education::delete_education))
            )
    );
}
