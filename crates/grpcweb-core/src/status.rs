//! gRPC status codes.
//!
//! The numeric codes and their canonical names form a fixed bidirectional
//! table. The wire carries the number, the `grpc-message` trailer falls back
//! to the name.

use std::fmt;
use std::str::FromStr;

use crate::error::StatusError;

/// Outcome of an RPC, as carried in the first byte of a gRPC-Web body and in
/// the `grpc-status` trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum StatusCode {
    Ok = 0,
    Cancelled = 1,
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

/// Code-indexed table of every status and its canonical name.
const TABLE: [(StatusCode, &str); 17] = [
    (StatusCode::Ok, "OK"),
    (StatusCode::Cancelled, "CANCELLED"),
    (StatusCode::Unknown, "UNKNOWN"),
    (StatusCode::InvalidArgument, "INVALID_ARGUMENT"),
    (StatusCode::DeadlineExceeded, "DEADLINE_EXCEEDED"),
    (StatusCode::NotFound, "NOT_FOUND"),
    (StatusCode::AlreadyExists, "ALREADY_EXISTS"),
    (StatusCode::PermissionDenied, "PERMISSION_DENIED"),
    (StatusCode::ResourceExhausted, "RESOURCE_EXHAUSTED"),
    (StatusCode::FailedPrecondition, "FAILED_PRECONDITION"),
    (StatusCode::Aborted, "ABORTED"),
    (StatusCode::OutOfRange, "OUT_OF_RANGE"),
    (StatusCode::Unimplemented, "UNIMPLEMENTED"),
    (StatusCode::Internal, "INTERNAL"),
    (StatusCode::Unavailable, "UNAVAILABLE"),
    (StatusCode::DataLoss, "DATA_LOSS"),
    (StatusCode::Unauthenticated, "UNAUTHENTICATED"),
];

// Lookups index TABLE by code, so entry `i` must hold code `i`.
const _: () = {
    let mut i = 0;
    while i < TABLE.len() {
        assert!(TABLE[i].0 as usize == i);
        i += 1;
    }
};

/// Returns the canonical name for a raw status code, if it has one.
pub fn canonical_name(code: u8) -> Option<&'static str> {
    TABLE.get(code as usize).map(|(_, name)| *name)
}

impl StatusCode {
    /// Every status, in code order.
    pub const ALL: [StatusCode; 17] = {
        let mut all = [StatusCode::Ok; 17];
        let mut i = 0;
        while i < TABLE.len() {
            all[i] = TABLE[i].0;
            i += 1;
        }
        all
    };

    /// Looks up a status by its numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        TABLE.get(code as usize).map(|(status, _)| *status)
    }

    /// Looks up a status by its canonical name (e.g. `NOT_FOUND`).
    pub fn from_name(name: &str) -> Option<Self> {
        TABLE
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(status, _)| *status)
    }

    /// Numeric wire value.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Canonical upper-snake-case name.
    pub fn name(self) -> &'static str {
        TABLE[self as usize].1
    }

    pub fn is_ok(self) -> bool {
        self == StatusCode::Ok
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for StatusCode {
    type Error = StatusError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(StatusError::UnknownCode(code))
    }
}

impl FromStr for StatusCode {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| StatusError::UnknownName(s.to_string()))
    }
}

impl From<StatusCode> for u8 {
    fn from(status: StatusCode) -> Self {
        status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_names_agree() {
        for status in StatusCode::ALL {
            assert_eq!(StatusCode::from_code(status.code()), Some(status));
            assert_eq!(StatusCode::from_name(status.name()), Some(status));
            assert_eq!(canonical_name(status.code()), Some(status.name()));
        }
    }

    #[test]
    fn canonical_names_snapshot() {
        let names: Vec<String> = StatusCode::ALL
            .iter()
            .map(|s| format!("{}={}", s.code(), s))
            .collect();
        insta::assert_snapshot!(names.join(" "), @"0=OK 1=CANCELLED 2=UNKNOWN 3=INVALID_ARGUMENT 4=DEADLINE_EXCEEDED 5=NOT_FOUND 6=ALREADY_EXISTS 7=PERMISSION_DENIED 8=RESOURCE_EXHAUSTED 9=FAILED_PRECONDITION 10=ABORTED 11=OUT_OF_RANGE 12=UNIMPLEMENTED 13=INTERNAL 14=UNAVAILABLE 15=DATA_LOSS 16=UNAUTHENTICATED");
    }

    #[test]
    fn unknown_code_rejected() {
        assert_eq!(StatusCode::from_code(17), None);
        assert_eq!(canonical_name(200), None);
        assert!(matches!(
            StatusCode::try_from(42),
            Err(StatusError::UnknownCode(42))
        ));
    }

    #[test]
    fn parse_from_name() {
        assert_eq!("NOT_FOUND".parse::<StatusCode>().unwrap(), StatusCode::NotFound);
        assert!(matches!(
            "not_found".parse::<StatusCode>(),
            Err(StatusError::UnknownName(_))
        ));
    }

    #[test]
    fn only_ok_is_ok() {
        assert!(StatusCode::Ok.is_ok());
        assert!(StatusCode::ALL[1..].iter().all(|s| !s.is_ok()));
    }
}
