use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Pins `START_TIME` to now unless already set. Call once at startup.
pub fn mark_started() -> DateTime<Utc> {
    *Lazy::force(&START_TIME)
}

/// Storage folder for project screenshots.
pub const PROJECTS_FOLDER: &str = "projects";

/// Storage folder for certificate scans.
pub const CERTIFICATES_FOLDER: &str = "certificates";
