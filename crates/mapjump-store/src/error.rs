use thiserror::Error;

use mapjump_core::CoreError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("slot file I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("slot file is not valid JSON at {path}: {source}")]
    Serde {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}
