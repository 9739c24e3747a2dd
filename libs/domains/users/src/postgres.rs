use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder,
};

use crate::{
    entity,
    error::UserResult,
    models::{CreateUser, UpdateUser, User},
    repository::{UserRepository, missing_user},
};

/// PostgreSQL implementation of UserRepository using SeaORM
///
/// Constraint violations are left to the database and classified from the
/// returned `DbErr`.
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: i32) -> UserResult<entity::Model> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        model.ok_or_else(|| missing_user(id).into())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, id: i32, input: UpdateUser) -> UserResult<User> {
        let mut active_model = self.find_model(id).await?.into_active_model();

        if let Some(first_name) = input.first_name {
            active_model.first_name = Set(first_name);
        }
        if let Some(last_name) = input.last_name {
            active_model.last_name = Set(last_name);
        }
        if let Some(email) = input.email {
            active_model.email = Set(email);
        }
        if let Some(role) = input.role {
            active_model.role = Set(role);
        }
        if let Some(is_active) = input.is_active {
            active_model.is_active = Set(is_active);
        }
        active_model.updated_at = Set(Utc::now().into());

        let model = active_model.update(&self.db).await?;

        tracing::info!(user_id = id, "Updated user");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> UserResult<User> {
        let model = self.find_model(id).await?;

        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(missing_user(id).into());
        }

        tracing::info!(user_id = id, "Deleted user");
        Ok(model.into())
    }

    async fn upsert_by_email(&self, input: CreateUser) -> UserResult<User> {
        let mut update_columns = vec![
            entity::Column::FirstName,
            entity::Column::LastName,
            entity::Column::UpdatedAt,
        ];
        if input.role.is_some() {
            update_columns.push(entity::Column::Role);
        }
        if input.is_active.is_some() {
            update_columns.push(entity::Column::IsActive);
        }

        let mut active_model: entity::ActiveModel = input.into();
        active_model.updated_at = Set(Utc::now().into());

        let model = entity::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(entity::Column::Email)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await?;

        tracing::info!(user_id = model.id, "Upserted user");
        Ok(model.into())
    }
}
