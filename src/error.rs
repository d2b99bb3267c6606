use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or loading a [`DumpOptions`](crate::DumpOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown culture '{0}'")]
    UnknownCulture(String),

    #[error("invalid {field} pattern '{pattern}' for culture '{culture}'")]
    InvalidPattern {
        culture: String,
        field: &'static str,
        pattern: String,
    },

    #[error("box width {width} is below the minimum of {minimum}")]
    BoxWidth { width: usize, minimum: usize },

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A member accessor that could not produce a value.
///
/// Only the message survives; it is printed inline in the dump.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AccessError {
    message: String,
}

impl AccessError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn from_display<E: fmt::Display>(error: E) -> Self {
        Self::new(error.to_string())
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
