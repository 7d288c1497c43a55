/*!
 * Tests for the application error types
 */

use subalign::errors::{AlignerError, AppError, RequestError};

/// Test display formatting of aligner errors
#[test]
fn test_aligner_error_display_shouldIncludeContext() {
    let error = AlignerError::NotAvailable("python3 not found".to_string());
    assert_eq!(
        error.to_string(),
        "Alignment engine is not available: python3 not found"
    );

    let error = AlignerError::Timeout(300);
    assert_eq!(error.to_string(), "Alignment timed out after 300 seconds");

    let error = AlignerError::MalformedOutput("no entries".to_string());
    assert_eq!(
        error.to_string(),
        "Failed to parse alignment output: no entries"
    );
}

/// Test display formatting of request errors
#[test]
fn test_request_error_display_shouldIncludeContext() {
    let error = RequestError::BadRequest("missing field `text`".to_string());
    assert_eq!(error.to_string(), "Bad request: missing field `text`");

    let error = RequestError::InvalidAudio("empty".to_string());
    assert_eq!(error.to_string(), "Invalid audio: empty");
}

/// Test conversion from an IO error
#[test]
fn test_app_error_fromIoError_shouldBeFileVariant() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let app_error: AppError = io_error.into();

    assert!(matches!(app_error, AppError::File(_)));
    assert!(app_error.to_string().contains("no such file"));
}

/// Test conversion from an anyhow error
#[test]
fn test_app_error_fromAnyhow_shouldBeUnknownVariant() {
    let anyhow_error = anyhow::anyhow!("something went sideways");
    let app_error: AppError = anyhow_error.into();

    assert!(matches!(app_error, AppError::Unknown(_)));
    assert!(app_error.to_string().contains("something went sideways"));
}

/// Test that aligner errors wrap into the application error
#[test]
fn test_app_error_fromAlignerError_shouldPreserveMessage() {
    let aligner_error = AlignerError::ExecutionFailed("exit code 1".to_string());
    let app_error: AppError = aligner_error.into();

    assert!(matches!(app_error, AppError::Aligner(_)));
    assert!(app_error.to_string().contains("Alignment failed: exit code 1"));
}

/// Test that request errors wrap into the application error
#[test]
fn test_app_error_fromRequestError_shouldPreserveMessage() {
    let request_error = RequestError::BadRequest("not json".to_string());
    let app_error: AppError = request_error.into();

    assert!(matches!(app_error, AppError::Request(_)));
    assert!(app_error.to_string().contains("Bad request: not json"));
}

/// Test that different failure modes stay distinguishable after wrapping
#[test]
fn test_app_error_variants_shouldStayDistinguishable() {
    let from_aligner: AppError = AlignerError::Timeout(10).into();
    let from_request: AppError = RequestError::InvalidAudio("bad".to_string()).into();

    match from_aligner {
        AppError::Aligner(AlignerError::Timeout(secs)) => assert_eq!(secs, 10),
        other => panic!("Expected timeout, got: {}", other),
    }

    match from_request {
        AppError::Request(RequestError::InvalidAudio(_)) => {}
        other => panic!("Expected invalid audio, got: {}", other),
    }
}
