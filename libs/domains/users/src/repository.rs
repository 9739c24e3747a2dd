use async_trait::async_trait;
use chrono::Utc;
use database::{StoreError, StoreResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, User, roles};

/// Repository trait for User persistence
///
/// Write failures come back as `UserError::Store` carrying a tagged
/// [`StoreError`]. `find_by_id` reports a missing row as `Ok(None)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// All users, ordered by id
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Look up a user by id
    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>>;

    /// Change the fields present in `input`
    async fn update(&self, id: i32, input: UpdateUser) -> UserResult<User>;

    /// Remove a user and return the removed row
    async fn delete(&self, id: i32) -> UserResult<User>;

    /// Insert, or update the user that already has `input.email`
    ///
    /// Names are always overwritten; role and active flag only when given.
    async fn upsert_by_email(&self, input: CreateUser) -> UserResult<User>;
}

pub(crate) const EMAIL_UNIQUE_VIOLATION: &str =
    "duplicate key value violates unique constraint \"users_email_key\"";

pub(crate) const USER_REFERENCED_VIOLATION: &str = "update or delete on table \"users\" violates foreign key constraint \"fk_articles_user_id\" on table \"articles\"";

pub(crate) const USER_MISSING_VIOLATION: &str = "insert or update on table \"articles\" violates foreign key constraint \"fk_articles_user_id\"";

pub(crate) fn missing_user(id: i32) -> StoreError {
    StoreError::record_not_found(format!("User with id {} does not exist", id))
}

#[derive(Default)]
struct Store {
    users: HashMap<i32, User>,
    next_id: i32,
    /// Number of rows in other tables pointing at each user
    dependents: HashMap<i32, usize>,
}

impl Store {
    fn email_taken(&self, email: &str, except: Option<i32>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }

    fn insert(&mut self, input: CreateUser) -> User {
        self.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: self.next_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            role: input.role.unwrap_or_else(|| roles::USER.to_string()),
            is_active: input.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        self.users.insert(user.id, user.clone());
        user
    }
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Enforces the same constraints as the database: unique email and
/// `RESTRICT` on users that still have articles.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a row elsewhere now references `user_id`
    ///
    /// Fails with a foreign-key violation when the user does not exist.
    pub async fn link_dependent(&self, user_id: i32) -> StoreResult<()> {
        let mut store = self.store.write().await;
        if !store.users.contains_key(&user_id) {
            return Err(StoreError::foreign_key_violation(USER_MISSING_VIOLATION));
        }
        *store.dependents.entry(user_id).or_default() += 1;
        Ok(())
    }

    /// Undo a previous [`link_dependent`](Self::link_dependent)
    pub async fn unlink_dependent(&self, user_id: i32) {
        let mut store = self.store.write().await;
        if let Some(count) = store.dependents.get_mut(&user_id) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                store.dependents.remove(&user_id);
            }
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        if store.email_taken(&input.email, None) {
            return Err(StoreError::unique_violation(EMAIL_UNIQUE_VIOLATION).into());
        }

        let user = store.insert(input);
        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        let mut users: Vec<User> = store.users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn update(&self, id: i32, input: UpdateUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        if let Some(email) = input.email.as_deref() {
            if store.email_taken(email, Some(id)) {
                return Err(StoreError::unique_violation(EMAIL_UNIQUE_VIOLATION).into());
            }
        }

        let user = store.users.get_mut(&id).ok_or_else(|| missing_user(id))?;
        user.apply_update(input);

        tracing::info!(user_id = id, "Updated user");
        Ok(user.clone())
    }

    async fn delete(&self, id: i32) -> UserResult<User> {
        let mut store = self.store.write().await;

        if !store.users.contains_key(&id) {
            return Err(missing_user(id).into());
        }
        if store.dependents.get(&id).copied().unwrap_or(0) > 0 {
            return Err(StoreError::foreign_key_violation(USER_REFERENCED_VIOLATION).into());
        }

        let user = store.users.remove(&id).ok_or_else(|| missing_user(id))?;
        tracing::info!(user_id = id, "Deleted user");
        Ok(user)
    }

    async fn upsert_by_email(&self, input: CreateUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        let existing = store
            .users
            .values_mut()
            .find(|u| u.email == input.email);

        match existing {
            Some(user) => {
                user.apply_update(UpdateUser {
                    first_name: Some(input.first_name),
                    last_name: Some(input.last_name),
                    email: None,
                    role: input.role,
                    is_active: input.is_active,
                });
                tracing::info!(user_id = user.id, "Upserted existing user");
                Ok(user.clone())
            }
            None => {
                let user = store.insert(input);
                tracing::info!(user_id = user.id, "Upserted new user");
                Ok(user)
            }
        }
    }
}
