//! Biome registry error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BiomeError {
    #[error("unknown biome: {0}")]
    Unknown(String),

    #[error("unable to locate required biome {0}; was a registry entry removed?")]
    Missing(String),

    #[error("biome registered twice: {0}")]
    Duplicate(String),

    #[error("cannot read biome overrides {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid biome override JSON: {0}")]
    Json(#[from] serde_json::Error),
}
