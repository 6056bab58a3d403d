use actix_web::web;

use crate::handlers::skills;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/skills")
            .service(
                web::resource("/create")
                    .route(web::post().to(skills::create_skill))
            )
            .service(
                web::resource("/get")
                    .route(web::get().to(skills::get_skills))
            )
            .service(
                web::resource("/delete/{skill_id}")
                    .route(web::delete().to(skills::delete_skill))
            )
    );
}
