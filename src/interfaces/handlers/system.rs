use actix_web::{get, web, HttpResponse, Responder};
use humantime::format_duration;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{constants::START_TIME, AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub uptime: String,
    pub timestamp: String,
    pub start_at: String,
    pub database: String,
    pub version: String,
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = chrono::Utc::now();
    let uptime_secs = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;

    let database_ok = match state.health_repo.check_connection().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Health check could not reach the database: {}", e);
            false
        }
    };

    let response = HealthCheckResponse {
        status: if database_ok { "healthy" } else { "degraded" }.to_string(),
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        database: if database_ok { "OK" } else { "Unavailable" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    if database_ok {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
