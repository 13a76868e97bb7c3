//! gRPC-Web unary response framing.
//!
//! A unary response body carries one message followed by a trailer block:
//!
//! ```text
//! +--------+---------------+---------+------+---------------+---------------+
//! | status | length (4 BE) | message | 0x80 | length (4 BE) | trailer text  |
//! +--------+---------------+---------+------+---------------+---------------+
//! ```
//!
//! The trailer text is a sequence of `key:value\r\n` lines. Length fields
//! are read as signed big-endian integers; a negative length is corruption.

use std::io::{Read, Write};

use grpcweb_core::{
    CodecConfig, GRPC_MESSAGE, GRPC_STATUS, GrpcResponse, MAX_FRAME_LENGTH, ResponseKind,
    StatusCode, Trailers, canonical_name,
};
use tracing::{debug, trace};

use crate::error::{ProtocolError, ProtocolResult};

/// Byte that opens the trailer section.
pub const TRAILER_MARKER: u8 = 0x80;

/// Size of a length field.
const LENGTH_SIZE: usize = 4;

/// Encodes a length field as 4 big-endian bytes.
pub fn write_length(len: u32) -> [u8; LENGTH_SIZE] {
    len.to_be_bytes()
}

/// Reads the length field at `offset`.
///
/// # Errors
///
/// [`ProtocolError::Truncated`] if fewer than 4 bytes remain,
/// [`ProtocolError::NegativeLength`] if the sign bit is set.
pub fn read_length(data: &[u8], offset: usize) -> ProtocolResult<u32> {
    let bytes = slice_at(data, offset, LENGTH_SIZE, "length")?;
    let mut raw = [0u8; LENGTH_SIZE];
    raw.copy_from_slice(bytes);

    let value = i32::from_be_bytes(raw);
    u32::try_from(value).map_err(|_| ProtocolError::NegativeLength { offset, value })
}

fn slice_at<'a>(
    data: &'a [u8],
    offset: usize,
    len: usize,
    section: &'static str,
) -> ProtocolResult<&'a [u8]> {
    let available = data.len().saturating_sub(offset);
    if available < len {
        return Err(ProtocolError::Truncated {
            section,
            offset,
            expected: len,
            available,
        });
    }
    Ok(&data[offset..offset + len])
}

/// Checks `size` against the configured limit and the wire maximum.
fn frame_length(section: &'static str, size: usize, max: u32) -> ProtocolResult<u32> {
    let max = max.min(MAX_FRAME_LENGTH);
    if size > max as usize {
        return Err(ProtocolError::MessageTooLarge { section, size, max });
    }
    Ok(size as u32)
}

/// Forward-only reader over a response body.
struct BodyCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> BodyCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.data.get(self.offset).copied();
        self.offset += 1;
        byte
    }

    fn length(&mut self) -> ProtocolResult<usize> {
        let len = read_length(self.data, self.offset)?;
        self.offset += LENGTH_SIZE;
        Ok(len as usize)
    }

    fn bytes(&mut self, section: &'static str, len: usize) -> ProtocolResult<&'a [u8]> {
        let bytes = slice_at(self.data, self.offset, len, section)?;
        self.offset += len;
        Ok(bytes)
    }

    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }
}

/// Decodes a complete gRPC-Web response body without size limits.
///
/// # Example
///
/// ```rust
/// use grpcweb_protocol::{decode_grpc_web_body, grpc_response_to_buffer};
/// use grpcweb_core::GrpcResponse;
///
/// let body = grpc_response_to_buffer(&GrpcResponse::success(b"hello".to_vec())).unwrap();
/// let decoded = decode_grpc_web_body(&body).unwrap();
/// assert_eq!(decoded.message(), Some(&b"hello"[..]));
/// ```
pub fn decode_grpc_web_body(data: &[u8]) -> ProtocolResult<GrpcResponse> {
    decode_grpc_web_body_with(data, &CodecConfig::default())
}

/// Decodes a complete gRPC-Web response body.
///
/// A non-OK status yields a failure whose detail is the `grpc-message`
/// trailer. Bytes after the declared trailer block are ignored.
pub fn decode_grpc_web_body_with(
    data: &[u8],
    config: &CodecConfig,
) -> ProtocolResult<GrpcResponse> {
    let mut cursor = BodyCursor::new(data);

    let code = cursor.next_byte().ok_or(ProtocolError::EmptyBody)?;
    let status = StatusCode::from_code(code).ok_or(ProtocolError::UnrecognizedStatus(code))?;

    let message_len = cursor.length()?;
    frame_length("message", message_len, config.max_message_size)?;
    let message = cursor.bytes("message", message_len)?;

    let marker_offset = cursor.offset;
    match cursor.next_byte() {
        Some(TRAILER_MARKER) => {}
        found => {
            return Err(ProtocolError::MissingTrailerMarker {
                offset: marker_offset,
                found,
            });
        }
    }

    let trailer_len = cursor.length()?;
    frame_length("trailers", trailer_len, config.max_trailer_size)?;
    let text = std::str::from_utf8(cursor.bytes("trailers", trailer_len)?)?;
    let trailers = Trailers::parse(text)?;

    if cursor.remaining() > 0 {
        trace!(extra = cursor.remaining(), "ignoring bytes after trailer block");
    }

    debug!(%status, message_len, trailer_len, "decoded grpc-web body");

    let kind = if status.is_ok() {
        ResponseKind::Success {
            message: message.to_vec(),
        }
    } else {
        ResponseKind::Failure {
            status,
            detail: trailers.get_message().map(str::to_string),
        }
    };

    Ok(GrpcResponse {
        kind,
        trailers: Some(trailers),
    })
}

/// Encodes a response into a gRPC-Web body without size limits.
///
/// # Example
///
/// ```rust
/// use grpcweb_protocol::grpc_response_to_buffer;
/// use grpcweb_core::{GrpcResponse, StatusCode};
///
/// let body = grpc_response_to_buffer(&GrpcResponse::failure(StatusCode::NotFound)).unwrap();
/// assert_eq!(&body[..6], &[5, 0, 0, 0, 0, 0x80]);
/// ```
pub fn grpc_response_to_buffer(response: &GrpcResponse) -> ProtocolResult<Vec<u8>> {
    grpc_response_to_buffer_with(response, &CodecConfig::default())
}

/// Encodes a response into a gRPC-Web body.
///
/// Failures always carry an empty message. The trailer block holds exactly
/// `grpc-status` and `grpc-message`; `response.trailers` is not written.
/// `grpc-message` is the failure detail, or the canonical status name when
/// there is none.
pub fn grpc_response_to_buffer_with(
    response: &GrpcResponse,
    config: &CodecConfig,
) -> ProtocolResult<Vec<u8>> {
    let (message, status, detail): (&[u8], StatusCode, Option<&str>) = match &response.kind {
        ResponseKind::Success { message } => (message.as_slice(), StatusCode::Ok, None),
        ResponseKind::Failure { status, detail } => (&[][..], *status, detail.as_deref()),
    };

    if let ResponseKind::Failure { status: StatusCode::Ok, .. } = response.kind {
        debug!("failure with status OK encodes as a success frame");
    }

    let code = status.code();
    let grpc_message = match detail {
        Some(detail) => detail,
        None => canonical_name(code).ok_or(ProtocolError::UnknownStatus(code))?,
    };

    let trailers: Trailers = [
        (GRPC_STATUS, code.to_string()),
        (GRPC_MESSAGE, grpc_message.to_string()),
    ]
    .into_iter()
    .collect();
    let trailer_text = trailers.to_text();

    let message_len = frame_length("message", message.len(), config.max_message_size)?;
    let trailer_len = frame_length("trailers", trailer_text.len(), config.max_trailer_size)?;

    let mut buffer =
        Vec::with_capacity(1 + LENGTH_SIZE + message.len() + 1 + LENGTH_SIZE + trailer_text.len());
    buffer.push(code);
    buffer.extend_from_slice(&write_length(message_len));
    buffer.extend_from_slice(message);
    buffer.push(TRAILER_MARKER);
    buffer.extend_from_slice(&write_length(trailer_len));
    buffer.extend_from_slice(trailer_text.as_bytes());

    debug!(%status, message_len, trailer_len, "encoded grpc-web body");

    Ok(buffer)
}

/// Reads a single response body from a byte stream.
///
/// The stream is read to its end; one body is one response.
pub struct ResponseReader<R> {
    reader: R,
    config: CodecConfig,
}

impl<R: Read> ResponseReader<R> {
    /// Creates a reader without size limits.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, CodecConfig::default())
    }

    /// Creates a reader that enforces the limits in `config`.
    pub fn with_config(reader: R, config: CodecConfig) -> Self {
        Self { reader, config }
    }

    /// Reads and decodes the response.
    ///
    /// Returns `Ok(None)` if the stream is empty.
    pub fn read_response(&mut self) -> ProtocolResult<Option<GrpcResponse>> {
        let mut body = Vec::new();
        self.reader.read_to_end(&mut body)?;
        if body.is_empty() {
            return Ok(None);
        }
        decode_grpc_web_body_with(&body, &self.config).map(Some)
    }

    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Unwraps this ResponseReader, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Writes encoded response bodies to a byte stream.
pub struct ResponseWriter<W> {
    writer: W,
    config: CodecConfig,
}

impl<W: Write> ResponseWriter<W> {
    /// Creates a writer without size limits.
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, CodecConfig::default())
    }

    /// Creates a writer that enforces the limits in `config`.
    pub fn with_config(writer: W, config: CodecConfig) -> Self {
        Self { writer, config }
    }

    /// Encodes and writes a response.
    pub fn write_response(&mut self, response: &GrpcResponse) -> ProtocolResult<()> {
        let data = grpc_response_to_buffer_with(response, &self.config)?;
        self.writer.write_all(&data)?;
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> ProtocolResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Returns a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwraps this ResponseWriter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
