use std::sync::Arc;

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use portfolio_api::{
    constants::mark_started,
    db::postgres::{create_pool, run_migrations},
    graceful_shutdown::shutdown_signal,
    middlewares::cors::cors_policy,
    routes::{configure_routes, payload_config},
    settings::{AppConfig, LogFormat},
    shared_repos::SharedRepositories,
    telemetry::init_tracing,
    upload::cloudinary::CloudinaryUploader,
    AppState,
};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    mark_started();

    let loaded = AppConfig::new();
    init_tracing(loaded.as_ref().map(|c| c.log_format()).unwrap_or(LogFormat::Pretty));

    let config = match loaded {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match create_pool(
        &config.database_url,
        config.db_max_connections,
        config.db_connect_retries,
    ).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Error connecting to the database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool).await {
        tracing::error!("Database migrations failed: {}", e);
        std::process::exit(1);
    }

    let uploader = match CloudinaryUploader::new(&config.cloudinary()) {
        Ok(uploader) => Arc::new(uploader),
        Err(e) => {
            tracing::error!("Image uploader setup failed: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = web::Data::new(
        AppState::new(SharedRepositories::postgres(pool), uploader)
    );

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting {} v{} on {} (allowing origin {})",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr,
        config.frontend_url
    );

    let frontend_url = config.frontend_url.clone();
    let upload_max_bytes = config.upload_max_bytes;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(cors_policy(&frontend_url))
            .wrap(TracingLogger::default())
            .configure(payload_config(upload_max_bytes))
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    let handle = server.handle();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => {
            handle.stop(true).await;
            Ok(())
        },
    }
}
