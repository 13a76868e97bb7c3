//! Error types for the core data model.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from status code lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    /// The numeric code is outside the status table.
    #[error("unrecognised status code [{0}]")]
    UnknownCode(u8),

    /// The name is not a canonical status name.
    #[error("unknown status name: {0}")]
    UnknownName(String),
}

/// Errors from parsing trailer text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrailerError {
    /// A non-empty trailer line has no `:` separator.
    #[error("malformed trailer line: {line:?}")]
    MissingSeparator { line: String },
}

/// Errors from loading codec configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
