//! Custom extractors for Axum handlers.
//!
//! Both reject before the handler runs and render their rejection through
//! [`AppError`](crate::errors::AppError), so clients always get an `ErrorResponse`.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
