//! Error types
//!
//! The simulation itself is total; only configuration loading can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to parse config: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
