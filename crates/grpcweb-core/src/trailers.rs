//! Trailer metadata embedded in a gRPC-Web body.
//!
//! The trailer block is plain text: `key:value` pairs, each terminated by
//! CRLF.
//!
//! ```text
//! grpc-status:5\r\n
//! grpc-message:missing\r\n
//! ```
//!
//! [`Trailers`] keeps insertion order. Keys are stored lower-cased and a
//! repeated key replaces the earlier value in place (last wins).

use crate::error::TrailerError;
use crate::status::StatusCode;

/// Trailer key carrying the numeric status.
pub const GRPC_STATUS: &str = "grpc-status";

/// Trailer key carrying the human-readable status message.
pub const GRPC_MESSAGE: &str = "grpc-message";

/// Ordered trailer mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trailers {
    entries: Vec<(String, String)>,
}

impl Trailers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a trailer block.
    ///
    /// Surrounding whitespace of the whole block is ignored, blank lines are
    /// skipped and each line is split on its first colon. Keys and values
    /// are otherwise kept as written.
    ///
    /// # Errors
    ///
    /// Returns [`TrailerError::MissingSeparator`] for a line without a colon.
    pub fn parse(text: &str) -> Result<Self, TrailerError> {
        let mut trailers = Self::new();
        for line in text.trim().split("\r\n") {
            if line.trim().is_empty() {
                continue;
            }
            let (key, value) = line
                .split_once(':')
                .ok_or_else(|| TrailerError::MissingSeparator {
                    line: line.to_string(),
                })?;
            trailers.insert(key, value);
        }
        Ok(trailers)
    }

    /// Sets `key` to `value`, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        let key = key.as_ref().to_ascii_lowercase();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value for `key` (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the parsed `grpc-status` trailer, if present and recognised.
    pub fn get_status(&self) -> Option<StatusCode> {
        self.get(GRPC_STATUS)?
            .parse::<u8>()
            .ok()
            .and_then(StatusCode::from_code)
    }

    /// Returns the `grpc-message` trailer.
    pub fn get_message(&self) -> Option<&str> {
        self.get(GRPC_MESSAGE)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Formats the trailers as a CRLF-terminated trailer block.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for (key, value) in &self.entries {
            text.push_str(key);
            text.push(':');
            text.push_str(value);
            text.push_str("\r\n");
        }
        text
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Trailers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trailers = Self::new();
        for (key, value) in iter {
            trailers.insert(key, value);
        }
        trailers
    }
}
