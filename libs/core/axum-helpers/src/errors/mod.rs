pub mod codes;
pub mod handlers;
pub mod responses;
pub mod store;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Every error the API returns has this shape:
/// - `statusCode`: HTTP status, repeated in the body
/// - `error`: Machine-readable error identifier (e.g., "CONFLICT")
/// - `message`: Single-line human-readable message
/// - `details`: Optional structured details (e.g., validation errors per field)
///
/// # JSON Example
///
/// ```json
/// {
///   "statusCode": 409,
///   "error": "CONFLICT",
///   "message": "duplicate key value violates unique constraint \"users_email_key\""
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// HTTP status code
    #[schema(example = 409)]
    pub status_code: u16,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (
                    e.status(),
                    ErrorCode::JsonExtraction,
                    store::sanitize(&e.body_text()),
                    None,
                )
            }
            AppError::InvalidBody(msg) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Invalid request body: {}",
                    msg
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    store::sanitize(&msg),
                    None,
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                let fields = failing_fields(&e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    format!(
                        "{}: {}",
                        ErrorCode::ValidationError.default_message(),
                        fields.join(", ")
                    ),
                    Some(validation_details(&e)),
                )
            }
            AppError::InvalidId(raw) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidId.code(),
                    "Invalid id path parameter: {}",
                    raw
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidId,
                    ErrorCode::InvalidId.default_message().to_string(),
                    None,
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg, None)
            }
            AppError::Store(e) => {
                let translation = store::translate(&e);
                (
                    translation.status,
                    translation.error_code,
                    translation.message,
                    None,
                )
            }
        };

        let mut body = ErrorResponse::new(status, code, message);
        body.details = details;

        (status, Json(body)).into_response()
    }
}

/// Helper function to create error responses.
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    (status, Json(ErrorResponse::new(status, error_code, message))).into_response()
}

/// Failing field names in wire (camelCase) form, sorted.
fn failing_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| to_camel_case(field))
        .collect();
    fields.sort();
    fields
}

/// `{ "<field>": [{ "code", "message", "params" }] }` keyed by wire field name.
fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let error_messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (to_camel_case(field), serde_json::json!(error_messages))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(details)
}

pub(crate) fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::Validate;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[derive(Validate)]
    struct Payload {
        #[validate(length(min = 1))]
        first_name: String,
        #[validate(length(min = 1))]
        email: String,
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("first_name"), "firstName");
        assert_eq!(to_camel_case("is_active"), "isActive");
        assert_eq!(to_camel_case("email"), "email");
    }

    #[tokio::test]
    async fn test_validation_error_lists_every_field() {
        let err = Payload {
            first_name: String::new(),
            email: String::new(),
        }
        .validate()
        .unwrap_err();

        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body.status_code, 400);
        assert_eq!(body.error, "VALIDATION_ERROR");
        assert_eq!(body.message, "Request validation failed: email, firstName");
        let details = body.details.unwrap();
        assert!(details.get("firstName").is_some());
        assert!(details.get("email").is_some());
    }

    #[tokio::test]
    async fn test_store_error_goes_through_translation() {
        let err = StoreError::unique_violation("duplicate key\nvalue");
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_of(response).await;
        assert_eq!(body.status_code, 409);
        assert_eq!(body.error, "CONFLICT");
        assert_eq!(body.message, "duplicate keyvalue");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let response = AppError::NotFound("User with id 9 not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_of(response).await;
        assert_eq!(body.message, "User with id 9 not found");
        assert_eq!(body.error, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unrecognized_store_error_hides_detail() {
        let err = StoreError::unrecognized("pool exhausted at 10.0.0.3");
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body.message, "Internal server error");
    }

    #[test]
    fn test_error_response_omits_absent_details() {
        let body = ErrorResponse::new(StatusCode::NOT_FOUND, ErrorCode::NotFound, "gone");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"statusCode": 404, "error": "NOT_FOUND", "message": "gone"})
        );
    }
}
