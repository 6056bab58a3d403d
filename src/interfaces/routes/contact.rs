use actix_web::web;

use crate::handlers::contact;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contact")
            .service(
                web::resource("/create")
                    .route(web::post().to(contact::create_contact))
            )
            .service(
                web::resource("/get")
                    .route(web::get().to(contact::get_contacts))
            )
            .service(
                web::resource("/delete/{contact_id}")
                    .route(web::delete().to(contact::delete_contact))
            )
    );
}
