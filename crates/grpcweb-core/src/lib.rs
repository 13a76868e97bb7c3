//! Core types: status codes, trailers, responses, config, tracing

pub mod config;
pub mod error;
pub mod response;
pub mod status;
pub mod tracing;
pub mod trailers;

pub use config::{
    CodecConfig, DEFAULT_MAX_MESSAGE_SIZE, DEFAULT_MAX_TRAILER_SIZE, MAX_FRAME_LENGTH,
};
pub use error::{ConfigError, StatusError, TrailerError};
pub use response::{GrpcResponse, ResponseKind};
pub use status::{canonical_name, StatusCode};
pub use crate::tracing::{init_tracing, TracingConfig, TracingError, TracingOutputFormat};
pub use trailers::{Trailers, GRPC_MESSAGE, GRPC_STATUS};
