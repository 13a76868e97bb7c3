//! Codec configuration.
//!
//! Optional size limits applied by the decoder and encoder. The defaults
//! accept any length the wire can express. Limits can be loaded from a TOML
//! file; missing keys keep the default:
//!
//! ```toml
//! max_message_size = 4194304
//! max_trailer_size = 8192
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest length a frame can declare (a non-negative `i32`).
pub const MAX_FRAME_LENGTH: u32 = i32::MAX as u32;

/// Default maximum message size: unlimited up to the wire maximum.
pub const DEFAULT_MAX_MESSAGE_SIZE: u32 = MAX_FRAME_LENGTH;

/// Default maximum trailer block size: unlimited up to the wire maximum.
pub const DEFAULT_MAX_TRAILER_SIZE: u32 = MAX_FRAME_LENGTH;

/// Limits for framing a single response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Largest accepted message payload, in bytes.
    pub max_message_size: u32,

    /// Largest accepted trailer block, in bytes.
    pub max_trailer_size: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            max_trailer_size: DEFAULT_MAX_TRAILER_SIZE,
        }
    }
}

impl CodecConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from a TOML file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Sets the message size limit.
    #[must_use]
    pub fn with_max_message_size(mut self, size: u32) -> Self {
        self.max_message_size = size;
        self
    }

    /// Sets the trailer size limit.
    #[must_use]
    pub fn with_max_trailer_size(mut self, size: u32) -> Self {
        self.max_trailer_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.max_message_size, i32::MAX as u32);
        assert_eq!(config.max_trailer_size, i32::MAX as u32);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = CodecConfig::from_toml_str("max_message_size = 1024\n").unwrap();
        assert_eq!(config.max_message_size, 1024);
        assert_eq!(config.max_trailer_size, DEFAULT_MAX_TRAILER_SIZE);
    }

    #[test]
    fn invalid_toml() {
        let result = CodecConfig::from_toml_str("max_message_size = \"big\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_trailer_size = 256").unwrap();

        let config = CodecConfig::load_from(file.path()).unwrap();
        assert_eq!(config.max_trailer_size, 256);
        assert_eq!(config.max_message_size, DEFAULT_MAX_MESSAGE_SIZE);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CodecConfig::load_from(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn builder_methods() {
        let config = CodecConfig::default()
            .with_max_message_size(10)
            .with_max_trailer_size(20);
        assert_eq!(config.max_message_size, 10);
        assert_eq!(config.max_trailer_size, 20);
    }
}
