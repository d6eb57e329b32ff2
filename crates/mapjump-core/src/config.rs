//! Application configuration from environment variables.

use std::path::PathBuf;

use crate::error::ConfigError;

#[derive(Clone)]
pub struct AppConfig {
    /// Path of the JSON file holding the four coordinate slots.
    pub slots_path: PathBuf,
    pub log_level: String,
    pub geocoder_timeout_secs: u64,
    pub geocoder_user_agent: String,
    /// Base URL of the Nominatim reverse-geocoding endpoint.
    pub nominatim_url: String,
    /// Mapbox access token; the Mapbox geocoding fallback is disabled when
    /// absent.
    pub mapbox_token: Option<String>,
    pub geocoder_max_retries: u32,
    pub geocoder_retry_backoff_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("slots_path", &self.slots_path)
            .field("log_level", &self.log_level)
            .field("geocoder_timeout_secs", &self.geocoder_timeout_secs)
            .field("geocoder_user_agent", &self.geocoder_user_agent)
            .field("nominatim_url", &self.nominatim_url)
            .field("mapbox_token", &self.mapbox_token.as_ref().map(|_| "[redacted]"))
            .field("geocoder_max_retries", &self.geocoder_max_retries)
            .field("geocoder_retry_backoff_ms", &self.geocoder_retry_backoff_ms)
            .finish()
    }
}

/// Load configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an unparsable value.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load configuration from environment variables already in the process.
///
/// Unlike [`load_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an unparsable value.
pub fn load_config_from_env() -> Result<AppConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed. Every variable has a default; only malformed values fail.
fn build_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    Ok(AppConfig {
        slots_path: PathBuf::from(or_default("MAPJUMP_SLOTS_PATH", "./mapjump_slots.json")),
        log_level: or_default("MAPJUMP_LOG_LEVEL", "info"),
        geocoder_timeout_secs: parse_u64("MAPJUMP_GEOCODER_TIMEOUT_SECS", "10")?,
        geocoder_user_agent: or_default(
            "MAPJUMP_GEOCODER_USER_AGENT",
            "mapjump/0.1 (coordinate-slots)",
        ),
        nominatim_url: or_default(
            "MAPJUMP_NOMINATIM_URL",
            "https://nominatim.openstreetmap.org",
        ),
        mapbox_token: lookup("MAPJUMP_MAPBOX_TOKEN").ok().filter(|t| !t.is_empty()),
        geocoder_max_retries: parse_u32("MAPJUMP_GEOCODER_MAX_RETRIES", "2")?,
        geocoder_retry_backoff_ms: parse_u64("MAPJUMP_GEOCODER_RETRY_BACKOFF_MS", "500")?,
    })
}
