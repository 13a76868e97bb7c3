//! Protocol error types.

use thiserror::Error;

use grpcweb_core::TrailerError;

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors that can occur while framing or unframing a gRPC-Web body.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Body has zero length.
    #[error("body has zero length, cannot decode")]
    EmptyBody,

    /// Leading status byte is not a known gRPC status.
    #[error("unrecognised status code [{0}]")]
    UnrecognizedStatus(u8),

    /// A declared length runs past the end of the buffer.
    #[error("truncated {section} at offset {offset}: expected {expected} bytes, got {available}")]
    Truncated {
        section: &'static str,
        offset: usize,
        expected: usize,
        available: usize,
    },

    /// A length field has its sign bit set.
    #[error("negative length {value} at offset {offset}")]
    NegativeLength { offset: usize, value: i32 },

    /// The byte after the message is not the trailer marker.
    #[error("expected trailers header 0x80 at offset {offset}, found {found:?}")]
    MissingTrailerMarker { offset: usize, found: Option<u8> },

    /// Status has no canonical name to use as `grpc-message`.
    #[error("an unknown status was provided: {0}")]
    UnknownStatus(u8),

    /// A section exceeds the configured size limit.
    #[error("{section} too large: {size} bytes (max: {max})")]
    MessageTooLarge {
        section: &'static str,
        size: usize,
        max: u32,
    },

    /// Trailer block is not valid UTF-8.
    #[error("trailers are not valid UTF-8: {0}")]
    InvalidTrailerText(#[from] std::str::Utf8Error),

    /// Trailer block contains a malformed line.
    #[error(transparent)]
    MalformedTrailer(#[from] TrailerError),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProtocolError {
    /// Returns true for framing corruption: truncated sections and negative
    /// lengths.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Truncated { .. } | Self::NegativeLength { .. })
    }
}
