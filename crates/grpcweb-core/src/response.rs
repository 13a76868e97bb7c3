//! Structured form of a unary gRPC-Web response.

use crate::status::StatusCode;
use crate::trailers::Trailers;

/// Outcome of a unary call: a payload or a failure status, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseKind {
    /// Call succeeded; status is implicitly [`StatusCode::Ok`].
    Success {
        /// Raw message bytes (opaque, usually a protobuf message).
        message: Vec<u8>,
    },

    /// Call failed.
    Failure {
        status: StatusCode,
        /// Human-readable detail carried in `grpc-message`.
        detail: Option<String>,
    },
}

/// A unary response plus its trailers.
///
/// Trailers are shared by both outcomes. The decoder always fills them in;
/// the encoder does not read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrpcResponse {
    pub kind: ResponseKind,
    pub trailers: Option<Trailers>,
}

impl GrpcResponse {
    /// Creates a successful response carrying `message`.
    pub fn success(message: impl Into<Vec<u8>>) -> Self {
        Self {
            kind: ResponseKind::Success {
                message: message.into(),
            },
            trailers: None,
        }
    }

    /// Creates a failed response without detail.
    pub fn failure(status: StatusCode) -> Self {
        Self {
            kind: ResponseKind::Failure {
                status,
                detail: None,
            },
            trailers: None,
        }
    }

    /// Creates a failed response with a detail message.
    pub fn failure_with_detail(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Failure {
                status,
                detail: Some(detail.into()),
            },
            trailers: None,
        }
    }

    /// Attaches trailers.
    #[must_use]
    pub fn with_trailers(mut self, trailers: Trailers) -> Self {
        self.trailers = Some(trailers);
        self
    }

    /// Returns the status: OK for a success, the failure status otherwise.
    pub fn status(&self) -> StatusCode {
        match &self.kind {
            ResponseKind::Success { .. } => StatusCode::Ok,
            ResponseKind::Failure { status, .. } => *status,
        }
    }

    /// Returns the payload of a successful response.
    pub fn message(&self) -> Option<&[u8]> {
        match &self.kind {
            ResponseKind::Success { message } => Some(message),
            ResponseKind::Failure { .. } => None,
        }
    }

    /// Returns the detail of a failed response.
    pub fn detail(&self) -> Option<&str> {
        match &self.kind {
            ResponseKind::Success { .. } => None,
            ResponseKind::Failure { detail, .. } => detail.as_deref(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.kind, ResponseKind::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_accessors() {
        let response = GrpcResponse::success(b"hello".to_vec());
        assert!(response.is_success());
        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.message(), Some(&b"hello"[..]));
        assert_eq!(response.detail(), None);
        assert!(response.trailers.is_none());
    }

    #[test]
    fn failure_accessors() {
        let response = GrpcResponse::failure_with_detail(StatusCode::NotFound, "missing");
        assert!(!response.is_success());
        assert_eq!(response.status(), StatusCode::NotFound);
        assert_eq!(response.message(), None);
        assert_eq!(response.detail(), Some("missing"));

        let bare = GrpcResponse::failure(StatusCode::Internal);
        assert_eq!(bare.detail(), None);
    }

    #[test]
    fn trailers_attach_to_either_outcome() {
        let trailers: Trailers = [("x-request-id", "abc")].into_iter().collect();
        let ok = GrpcResponse::success(Vec::new()).with_trailers(trailers.clone());
        let err = GrpcResponse::failure(StatusCode::Aborted).with_trailers(trailers.clone());
        assert_eq!(ok.trailers.as_ref(), Some(&trailers));
        assert_eq!(err.trailers.as_ref(), Some(&trailers));
    }
}
