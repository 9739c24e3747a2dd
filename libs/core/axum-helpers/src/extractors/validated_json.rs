//! JSON extractor with validation using the validator crate.

use crate::errors::{AppError, to_camel_case};
use axum::{
    extract::{FromRequest, Json, Request, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::Segment;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

/// JSON extractor with validation.
///
/// The body goes through three steps, each rejecting with an `ErrorResponse`:
/// 1. JSON parsing (malformed JSON gives 400, a missing JSON content type gives 415)
/// 2. Deserialization into `T`
/// 3. `Validate::validate`
///
/// Steps 2 and 3 report together: a field of the wrong type is recorded, taken
/// out of the body, and decoding is retried, so one 400 `VALIDATION_ERROR`
/// lists type failures and rule failures side by side in `details`.
///
/// Fields the payload type does not declare are dropped by serde and never
/// reach the handler.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[serde(default)]
///     #[validate(length(min = 1))]
///     email: String,
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) -> String {
///     format!("Creating user: {}", payload.email)
/// }
///
/// let app = Router::new().route("/users", post(create_user));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| rejection_to_error(e).into_response())?;

        decode(value)
            .map(ValidatedJson)
            .map_err(IntoResponse::into_response)
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonSyntaxError(e) => AppError::InvalidBody(e.body_text()),
        JsonRejection::JsonDataError(e) => AppError::InvalidBody(e.body_text()),
        other => AppError::JsonExtractorRejection(other),
    }
}

/// Deserialize and validate `value`, collecting every failing field.
fn decode<T>(mut value: Value) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let mut errors = ValidationErrors::new();

    let data = loop {
        let err = match serde_path_to_error::deserialize::<_, T>(value.clone()) {
            Ok(data) => break data,
            Err(err) => err,
        };
        let message = err.inner().to_string();

        match top_level_field(err.path()) {
            Some(field) => {
                let removed = value
                    .as_object_mut()
                    .and_then(|object| object.remove(&field));
                if removed.is_none() {
                    return Err(AppError::InvalidBody(message));
                }
                record(&mut errors, field, "type", message);
            }
            None => match missing_field(&message) {
                Some(field) => {
                    if !errors.0.contains_key(field) {
                        record(&mut errors, field.to_string(), "required", message.clone());
                    }
                    return Err(AppError::ValidationError(errors));
                }
                None if errors.is_empty() => return Err(AppError::InvalidBody(message)),
                None => return Err(AppError::ValidationError(errors)),
            },
        }
    };

    if let Err(rule_errors) = data.validate() {
        // A field that already failed its type check is reported once.
        for (field, kind) in rule_errors.0 {
            if !errors.0.contains_key(to_camel_case(&field).as_str()) {
                errors.0.insert(field, kind);
            }
        }
    }

    if errors.is_empty() {
        Ok(data)
    } else {
        Err(AppError::ValidationError(errors))
    }
}

fn top_level_field(path: &serde_path_to_error::Path) -> Option<String> {
    match path.iter().next() {
        Some(Segment::Map { key }) => Some(key.clone()),
        _ => None,
    }
}

/// Field name out of serde's "missing field `name`" message
fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")?
        .split('`')
        .next()
        .filter(|name| !name.is_empty())
}

fn record(errors: &mut ValidationErrors, field: String, code: &'static str, message: String) {
    let entry = errors
        .0
        .entry(Cow::Owned(field))
        .or_insert_with(|| ValidationErrorsKind::Field(Vec::new()));
    if let ValidationErrorsKind::Field(list) = entry {
        list.push(ValidationError::new(code).with_message(Cow::Owned(message)));
    }
}
