use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid slot index: {0} (slots are 0..4)")]
    InvalidSlotIndex(usize),

    #[error("coordinates out of range: lat={lat}, lon={lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
