//! Common types shared by every repository implementation

pub mod error;

pub use error::{DatabaseError, DatabaseResult, StoreError, StoreErrorCode, StoreResult};
