//! Document ingestion error types.

use thiserror::Error;

/// Errors from parsing external documents into a `Value`.
///
/// Cloning itself never errors; non-mapping inputs produce `None` instead.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("JSON document parsing error")]
    Json(#[from] serde_json::Error),

    #[error("TOML document parsing error")]
    Toml(#[from] toml::de::Error),
}
