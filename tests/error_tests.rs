use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use jobfeed::error::AppError;
use serde_json::Value;

// Test for AppError Display implementation
#[test]
fn test_app_error_display() {
    // Test each error variant
    let error1 = AppError::JobNotFound("j42".to_string());
    assert_eq!(error1.to_string(), "Job not found: j42");

    let error2 = AppError::NoActiveSession;
    assert_eq!(error2.to_string(), "No active session");

    let error3 = AppError::InvalidRequest("display name must not be empty".to_string());
    assert_eq!(
        error3.to_string(),
        "Invalid request: display name must not be empty"
    );

    let error4 = AppError::UnprocessableEntity("origin query parameter is required".to_string());
    assert_eq!(
        error4.to_string(),
        "Unprocessable Entity: origin query parameter is required"
    );

    let error5 = AppError::InternalError("lock poisoned".to_string());
    assert_eq!(error5.to_string(), "Internal Server Error: lock poisoned");
}

// Test for AppError IntoResponse implementation
#[tokio::test]
async fn test_app_error_into_response() {
    // Test JobNotFound error
    let error = AppError::JobNotFound("j42".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["error"], "Job not found: j42");

    // Test NoActiveSession error
    let error = AppError::NoActiveSession;
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Test InvalidRequest error
    let error = AppError::InvalidRequest("bad".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["error"], "Invalid request: bad");

    // Test UnprocessableEntity error
    let error = AppError::UnprocessableEntity("missing origin".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Test SerializationError error
    let error = AppError::SerializationError("bad json".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["error"], "Serialization error: bad json");
}

// Serde errors convert into the serialization variant
#[test]
fn test_serde_error_conversion() {
    let parse_error = serde_json::from_str::<Value>("{not json").unwrap_err();
    let error: AppError = parse_error.into();
    assert!(matches!(error, AppError::SerializationError(_)));
}
