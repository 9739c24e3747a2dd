use serde::Serialize;

/// Infrastructure-level database error (connecting, health checks, migrations)
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// PostgreSQL-specific errors (SeaORM)
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Migration error
    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Machine-readable data-store error codes.
///
/// The set is deliberately small and stable; the engine message carried next
/// to it in [`StoreError`] is not.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreErrorCode {
    /// A write violated a uniqueness constraint (e.g. duplicate email)
    UniqueConstraintViolation,
    /// A write referenced a row that does not exist, or a delete would orphan rows
    ForeignKeyViolation,
    /// An update or delete targeted a row that does not exist
    RecordNotFound,
    /// Anything the taxonomy does not know about
    Unrecognized,
}

impl StoreErrorCode {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Error raised by a repository: a symbolic code plus the raw engine message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
}

impl StoreError {
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn unique_violation(message: impl Into<String>) -> Self {
        Self::new(StoreErrorCode::UniqueConstraintViolation, message)
    }

    pub fn foreign_key_violation(message: impl Into<String>) -> Self {
        Self::new(StoreErrorCode::ForeignKeyViolation, message)
    }

    pub fn record_not_found(message: impl Into<String>) -> Self {
        Self::new(StoreErrorCode::RecordNotFound, message)
    }

    pub fn unrecognized(message: impl Into<String>) -> Self {
        Self::new(StoreErrorCode::Unrecognized, message)
    }

    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Raw engine message. May span several lines.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(feature = "postgres")]
impl From<sea_orm::DbErr> for StoreError {
    fn from(err: sea_orm::DbErr) -> Self {
        use sea_orm::{DbErr, SqlErr};

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => return Self::unique_violation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return Self::foreign_key_violation(msg);
            }
            _ => {}
        }

        match err {
            DbErr::RecordNotFound(msg) => Self::record_not_found(msg),
            DbErr::RecordNotUpdated => {
                Self::record_not_found("None of the records are updated")
            }
            other => Self::unrecognized(other.to_string()),
        }
    }
}

/// Result type alias for repository operations
pub type StoreResult<T> = Result<T, StoreError>;
