use actix_cors::Cors;

/// Browser access is limited to the single configured frontend origin.
pub fn cors_policy(frontend_url: &str) -> Cors {
    Cors::default()
        .allowed_origin(frontend_url)
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
