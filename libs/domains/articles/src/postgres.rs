use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder,
};

use crate::{
    entity,
    error::ArticleResult,
    models::{Article, CreateArticle, UpdateArticle},
    repository::{ArticleRepository, missing_article},
};

/// PostgreSQL implementation of ArticleRepository using SeaORM
#[derive(Clone)]
pub struct PgArticleRepository {
    db: DatabaseConnection,
}

impl PgArticleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: i32) -> ArticleResult<entity::Model> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        model.ok_or_else(|| missing_article(id).into())
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn create(&self, input: CreateArticle) -> ArticleResult<Article> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(article_id = model.id, user_id = model.user_id, "Created article");
        Ok(model.into())
    }

    async fn find_all(&self) -> ArticleResult<Vec<Article>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> ArticleResult<Option<Article>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, id: i32, input: UpdateArticle) -> ArticleResult<Article> {
        let mut active_model = self.find_model(id).await?.into_active_model();

        if let Some(title) = input.title {
            active_model.title = Set(title);
        }
        if let Some(content) = input.content {
            active_model.content = Set(content);
        }
        if let Some(user_id) = input.user_id {
            active_model.user_id = Set(user_id);
        }
        active_model.updated_at = Set(Utc::now().into());

        let model = active_model.update(&self.db).await?;

        tracing::info!(article_id = id, "Updated article");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> ArticleResult<Article> {
        let model = self.find_model(id).await?;

        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(missing_article(id).into());
        }

        tracing::info!(article_id = id, "Deleted article");
        Ok(model.into())
    }
}
