use actix_web::web;

use crate::handlers::certificates;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    // `/create` takes multipart/form-data (optional `image`) or JSON
    cfg.service(
        web::scope("/certificates")
            .service(
                web::resource("/create")
                    .route(web::post().to(certificates::create_certificate))
            )
            .service(
                web::resource("/get")
                    .route(web::get().to(certificates::get_certificates))
            )
            .service(
                web::resource("/delete/{certificate_id}")
                    .route(web::delete().to(certificates::delete_certificate))
            )
    );
}
