use std::sync::Arc;
use tracing::instrument;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for users
///
/// Forwards to the repository without extra logic. `find_one` keeps the
/// absent case as `Ok(None)`; turning it into 404 is the handler's job.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: CreateUser) -> UserResult<User> {
        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self), fields(user_id = id))]
    pub async fn find_one(&self, id: i32) -> UserResult<Option<User>> {
        self.repository.find_by_id(id).await
    }

    #[instrument(skip(self, input), fields(user_id = id))]
    pub async fn update(&self, id: i32, input: UpdateUser) -> UserResult<User> {
        self.repository.update(id, input).await
    }

    #[instrument(skip(self), fields(user_id = id))]
    pub async fn remove(&self, id: i32) -> UserResult<User> {
        self.repository.delete(id).await
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn upsert_by_email(&self, input: CreateUser) -> UserResult<User> {
        self.repository.upsert_by_email(input).await
    }
}
