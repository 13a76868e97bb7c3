//! Golden tests for the wire layout.
//!
//! These use insta inline snapshots so any change to the encoded bytes shows
//! up as a diff. Run `cargo insta review` after intentional changes.

use grpcweb_core::{GrpcResponse, StatusCode};

use crate::framing::{decode_grpc_web_body, grpc_response_to_buffer, read_length};

/// Render an encoded body as its labelled sections.
fn layout(data: &[u8]) -> String {
    let message_len = read_length(data, 1).unwrap() as usize;
    let message = &data[5..5 + message_len];
    let marker = data[5 + message_len];
    let trailer_offset = 5 + message_len + 1;
    let trailer_len = read_length(data, trailer_offset).unwrap() as usize;
    let trailers = std::str::from_utf8(&data[trailer_offset + 4..]).unwrap();

    let message_hex: String = message.iter().map(|b| format!("{b:02x}")).collect();
    format!(
        "status={:02x} message_len={} message={} marker={:02x} trailer_len={} trailers={:?}",
        data[0], message_len, message_hex, marker, trailer_len, trailers
    )
}

fn hex_prefix(data: &[u8], len: usize) -> String {
    data[..len].iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn golden_success_hello() {
    let data = grpc_response_to_buffer(&GrpcResponse::success(b"hello".to_vec())).unwrap();
    insta::assert_snapshot!(layout(&data), @r#"status=00 message_len=5 message=68656c6c6f marker=80 trailer_len=32 trailers="grpc-status:0\r\ngrpc-message:OK\r\n""#);
}

#[test]
fn golden_failure_with_detail() {
    let response = GrpcResponse::failure_with_detail(StatusCode::NotFound, "missing");
    let data = grpc_response_to_buffer(&response).unwrap();
    insta::assert_snapshot!(hex_prefix(&data, 10), @"05000000008000000025");
    insta::assert_snapshot!(layout(&data), @r#"status=05 message_len=0 message= marker=80 trailer_len=37 trailers="grpc-status:5\r\ngrpc-message:missing\r\n""#);
}

#[test]
fn golden_failure_canonical_name() {
    let data = grpc_response_to_buffer(&GrpcResponse::failure(StatusCode::Unauthenticated)).unwrap();
    insta::assert_snapshot!(layout(&data), @r#"status=10 message_len=0 message= marker=80 trailer_len=46 trailers="grpc-status:16\r\ngrpc-message:UNAUTHENTICATED\r\n""#);
}

#[test]
fn golden_decode_hello() {
    let mut data = vec![0x00, 0x00, 0x00, 0x00, 0x05];
    data.extend_from_slice(b"hello");
    data.extend_from_slice(&[0x80, 0x00, 0x00, 0x00, 0x1e]);
    data.extend_from_slice(b"grpc-status:0\r\ngrpc-message:OK\r\n");

    let response = decode_grpc_web_body(&data).unwrap();
    insta::assert_snapshot!(format!("{:?}", response.kind), @"Success { message: [104, 101, 108, 108, 111] }");
    let trailers = response.trailers.unwrap().to_text();
    insta::assert_snapshot!(format!("{trailers:?}"), @r#""grpc-status:0\r\ngrpc-message:OK\r\n""#);
}

#[test]
fn golden_decode_failure() {
    let response = GrpcResponse::failure_with_detail(StatusCode::ResourceExhausted, "quota: 0 left");
    let data = grpc_response_to_buffer(&response).unwrap();
    let decoded = decode_grpc_web_body(&data).unwrap();
    insta::assert_snapshot!(format!("{:?}", decoded.kind), @r#"Failure { status: ResourceExhausted, detail: Some("quota: 0 left") }"#);
}
