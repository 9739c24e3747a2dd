use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::StoreError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArticleError {
    /// A lookup by id found nothing
    #[error("Article with id {0} not found")]
    NotFound(i32),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ArticleResult<T> = Result<T, ArticleError>;

impl From<DbErr> for ArticleError {
    fn from(err: DbErr) -> Self {
        ArticleError::Store(err.into())
    }
}

impl From<ArticleError> for AppError {
    fn from(err: ArticleError) -> Self {
        match err {
            ArticleError::NotFound(_) => AppError::NotFound(err.to_string()),
            ArticleError::Store(e) => AppError::Store(e),
        }
    }
}

impl IntoResponse for ArticleError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
