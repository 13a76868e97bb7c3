//! gRPC-Web unary body framing.
//!
//! gRPC-Web carries the response status in the HTTP body rather than in
//! HTTP/2 trailers, so a unary response body is a message frame followed by
//! a trailer frame.
//!
//! # Body Layout
//!
//! - 1 byte: status code
//! - 4 bytes: message length (big-endian)
//! - N bytes: message (opaque, usually protobuf)
//! - 1 byte: trailer marker `0x80`
//! - 4 bytes: trailer length (big-endian)
//! - M bytes: trailers as `key:value\r\n` lines
//!
//! Outbound request bodies carry a 5-byte envelope that
//! [`unframe_request`] strips.
//!
//! # Example
//!
//! ```rust
//! use grpcweb_core::{GrpcResponse, StatusCode};
//! use grpcweb_protocol::{decode_grpc_web_body, grpc_response_to_buffer};
//!
//! let response = GrpcResponse::failure_with_detail(StatusCode::NotFound, "missing");
//! let body = grpc_response_to_buffer(&response).unwrap();
//! let decoded = decode_grpc_web_body(&body).unwrap();
//! assert_eq!(decoded.status(), StatusCode::NotFound);
//! assert_eq!(decoded.detail(), Some("missing"));
//! ```

mod error;
mod framing;
mod request;

#[cfg(test)]
mod golden_tests;

pub use error::{ProtocolError, ProtocolResult};
pub use framing::{
    decode_grpc_web_body, decode_grpc_web_body_with, grpc_response_to_buffer,
    grpc_response_to_buffer_with, read_length, write_length, ResponseReader, ResponseWriter,
    TRAILER_MARKER,
};
pub use request::{strip_request_header, unframe_request, REQUEST_HEADER_LEN};

/// Content type of a binary gRPC-Web body.
pub const GRPC_WEB_CONTENT_TYPE: &str = "application/grpc-web+proto";
