//! Request body unframing.
//!
//! gRPC-Web clients wrap each outbound message in a 5-byte envelope
//! (flags byte plus big-endian length). Only the payload after it matters
//! to the codec; the envelope itself is not validated.

/// Size of the client envelope header.
pub const REQUEST_HEADER_LEN: usize = 5;

/// Returns `body` without the envelope header.
///
/// A body shorter than the header yields an empty slice.
pub fn strip_request_header(body: &[u8]) -> &[u8] {
    body.get(REQUEST_HEADER_LEN..).unwrap_or_default()
}

/// Unframes an intercepted request body.
///
/// Returns `None` when the request carried no body.
///
/// # Example
///
/// ```rust
/// use grpcweb_protocol::unframe_request;
///
/// let body = [0, 0, 0, 0, 2, 0x08, 0x01];
/// assert_eq!(unframe_request(Some(&body[..])), Some(vec![0x08, 0x01]));
/// assert_eq!(unframe_request(None), None);
/// ```
pub fn unframe_request(body: Option<&[u8]>) -> Option<Vec<u8>> {
    body.map(|body| strip_request_header(body).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_body_stays_absent() {
        assert_eq!(unframe_request(None), None);
    }

    #[test]
    fn strips_five_byte_header() {
        let body = [0, 0, 0, 0, 3, b'a', b'b', b'c'];
        assert_eq!(unframe_request(Some(&body[..])), Some(b"abc".to_vec()));
    }

    #[test]
    fn header_bytes_not_validated() {
        let body = [0xde, 0xad, 0xbe, 0xef, 0xff, 1];
        assert_eq!(strip_request_header(&body), &[1]);
    }

    #[test]
    fn short_body_is_empty() {
        assert_eq!(unframe_request(Some(&[0, 0, 0][..])), Some(Vec::new()));
        assert_eq!(unframe_request(Some(&[][..])), Some(Vec::new()));
        assert_eq!(unframe_request(Some(&[0, 0, 0, 0, 0][..])), Some(Vec::new()));
    }
}
