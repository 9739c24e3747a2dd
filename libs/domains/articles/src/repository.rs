use async_trait::async_trait;
use chrono::Utc;
use database::StoreError;
use domain_users::InMemoryUserRepository;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ArticleResult;
use crate::models::{Article, CreateArticle, UpdateArticle};

/// Repository trait for Article persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Insert a new article; the author must exist
    async fn create(&self, input: CreateArticle) -> ArticleResult<Article>;

    /// All articles, ordered by id
    async fn find_all(&self) -> ArticleResult<Vec<Article>>;

    /// Look up an article by id
    async fn find_by_id(&self, id: i32) -> ArticleResult<Option<Article>>;

    /// Change the fields present in `input`
    async fn update(&self, id: i32, input: UpdateArticle) -> ArticleResult<Article>;

    /// Remove an article and return the removed row
    async fn delete(&self, id: i32) -> ArticleResult<Article>;
}

pub(crate) fn missing_article(id: i32) -> StoreError {
    StoreError::record_not_found(format!("Article with id {} does not exist", id))
}

#[derive(Default)]
struct Store {
    articles: HashMap<i32, Article>,
    next_id: i32,
}

/// In-memory implementation of ArticleRepository (for development/testing)
///
/// Author references are checked against (and registered with) the user
/// store it was built from.
#[derive(Clone)]
pub struct InMemoryArticleRepository {
    store: Arc<RwLock<Store>>,
    users: InMemoryUserRepository,
}

impl InMemoryArticleRepository {
    pub fn new(users: InMemoryUserRepository) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
            users,
        }
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn create(&self, input: CreateArticle) -> ArticleResult<Article> {
        let mut store = self.store.write().await;

        self.users.link_dependent(input.user_id).await?;

        store.next_id += 1;
        let now = Utc::now();
        let article = Article {
            id: store.next_id,
            title: input.title,
            content: input.content,
            user_id: input.user_id,
            created_at: now,
            updated_at: now,
        };
        store.articles.insert(article.id, article.clone());

        tracing::info!(article_id = article.id, user_id = article.user_id, "Created article");
        Ok(article)
    }

    async fn find_all(&self) -> ArticleResult<Vec<Article>> {
        let store = self.store.read().await;
        let mut articles: Vec<Article> = store.articles.values().cloned().collect();
        articles.sort_by_key(|a| a.id);
        Ok(articles)
    }

    async fn find_by_id(&self, id: i32) -> ArticleResult<Option<Article>> {
        let store = self.store.read().await;
        Ok(store.articles.get(&id).cloned())
    }

    async fn update(&self, id: i32, input: UpdateArticle) -> ArticleResult<Article> {
        let mut store = self.store.write().await;

        let previous_author = store
            .articles
            .get(&id)
            .map(|a| a.user_id)
            .ok_or_else(|| missing_article(id))?;

        if let Some(user_id) = input.user_id.filter(|u| *u != previous_author) {
            self.users.link_dependent(user_id).await?;
            self.users.unlink_dependent(previous_author).await;
        }

        let article = store
            .articles
            .get_mut(&id)
            .ok_or_else(|| missing_article(id))?;
        article.apply_update(input);

        tracing::info!(article_id = id, "Updated article");
        Ok(article.clone())
    }

    async fn delete(&self, id: i32) -> ArticleResult<Article> {
        let mut store = self.store.write().await;

        let article = store
            .articles
            .remove(&id)
            .ok_or_else(|| missing_article(id))?;
        self.users.unlink_dependent(article.user_id).await;

        tracing::info!(article_id = id, "Deleted article");
        Ok(article)
    }
}
