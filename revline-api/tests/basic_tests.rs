//! Basic tests for revline-api

use revline_api::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_reverse_text_convenience() {
    let output = reverse_text("first\nsecond\nthird").unwrap();

    assert_eq!(output.transformed, "third\nsecond\nfirst");
    assert_eq!(output.line_count, 3);
    assert_eq!(output.source, "direct text");
    assert_eq!(output.metadata.method, "in-memory");
    assert_eq!(output.metadata.original_size_bytes, 18);
}

#[test]
fn test_streaming_threshold_from_config() {
    let config = Config::builder().chunk_size(8).build().unwrap();
    let reverser = Reverser::with_config(config);

    let output = reverser.process_text("0123456789\nabc").unwrap();
    assert_eq!(output.metadata.method, "streaming");
    assert_eq!(output.transformed, "abc\n0123456789");
    assert!(output.original.contains("14 B"));
}

#[test]
fn test_process_upload_checks_ceiling_first() {
    let config = Config::builder().upload_limit(4).build().unwrap();
    let reverser = Reverser::with_config(config);

    // The path does not exist; the ceiling must reject before the engine looks
    let err = reverser
        .process_upload("/nonexistent/upload.txt", 100)
        .unwrap_err();
    assert!(matches!(err, ApiError::UploadTooLarge { size: 100, limit: 4 }));
    assert_eq!(err.code(), "size-exceeded");
}

#[test]
fn test_process_upload_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("upload.log");
    fs::write(&path, "x\ny\nz").unwrap();

    let output = Reverser::new().process_upload(&path, 5).unwrap();
    assert_eq!(output.source, "upload.log");
    assert_eq!(output.transformed, "z\ny\nx");
}

#[test]
fn test_missing_file_error_response() {
    let err = reverse_file("/nonexistent/revline.txt").unwrap_err();
    let response = err.to_response();

    assert_eq!(response.code, "source-not-found");
    assert!(response.message.contains("/nonexistent/revline.txt"));
    assert!(!err.is_client_error());
}

#[test]
fn test_forced_method() {
    let output = Reverser::new()
        .process_with_method(Input::from_text("a\nb"), Method::Streaming)
        .unwrap();
    assert_eq!(output.metadata.method, "streaming");
    assert!(output.steps.iter().any(|s| s == "Method: streaming"));
}

#[test]
#[cfg(feature = "serde")]
fn test_process_request_round_trip() {
    let output = Reverser::new()
        .process_request(r#"{"text":"a\nb\nc","source":"clipboard"}"#)
        .unwrap();
    assert_eq!(output.source, "clipboard");
    assert_eq!(output.transformed, "c\nb\na");

    let json = output.to_json(true).unwrap();
    let parsed: Output = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, output);
}

#[test]
#[cfg(feature = "serde")]
fn test_process_request_missing_text() {
    let err = Reverser::new().process_request(r#"{"source":"x"}"#).unwrap_err();
    assert_eq!(err.code(), "invalid-input");
    assert!(err.is_client_error());
}
