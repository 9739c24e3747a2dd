use std::sync::Arc;
use tracing::instrument;

use crate::error::ArticleResult;
use crate::models::{Article, CreateArticle, UpdateArticle};
use crate::repository::ArticleRepository;

/// Service layer for articles
#[derive(Clone)]
pub struct ArticleService<R: ArticleRepository> {
    repository: Arc<R>,
}

impl<R: ArticleRepository> ArticleService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(user_id = input.user_id))]
    pub async fn create(&self, input: CreateArticle) -> ArticleResult<Article> {
        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ArticleResult<Vec<Article>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self), fields(article_id = id))]
    pub async fn find_one(&self, id: i32) -> ArticleResult<Option<Article>> {
        self.repository.find_by_id(id).await
    }

    #[instrument(skip(self, input), fields(article_id = id))]
    pub async fn update(&self, id: i32, input: UpdateArticle) -> ArticleResult<Article> {
        self.repository.update(id, input).await
    }

    #[instrument(skip(self), fields(article_id = id))]
    pub async fn remove(&self, id: i32) -> ArticleResult<Article> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArticleError;
    use crate::repository::MockArticleRepository;
    use chrono::Utc;
    use database::{StoreError, StoreErrorCode};

    fn article(id: i32, input: &CreateArticle) -> Article {
        let now = Utc::now();
        Article {
            id,
            title: input.title.clone(),
            content: input.content.clone(),
            user_id: input.user_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_one_absent_is_not_an_error() {
        let mut mock_repo = MockArticleRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(mockall::predicate::eq(8))
            .times(1)
            .returning(|_| Ok(None));

        let service = ArticleService::new(mock_repo);
        assert!(service.find_one(8).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_forwards_input() {
        let mut mock_repo = MockArticleRepository::new();
        let input = CreateArticle::new("GraphQL is the best", "I really like GraphQL", 3);
        let expected = input.clone();

        mock_repo
            .expect_create()
            .withf(move |i| *i == expected)
            .times(1)
            .returning(|i| Ok(article(10, &i)));

        let service = ArticleService::new(mock_repo);
        let created = service.create(input).await.unwrap();

        assert_eq!(created.id, 10);
        assert_eq!(created.user_id, 3);
    }

    #[tokio::test]
    async fn test_foreign_key_error_passes_through() {
        let mut mock_repo = MockArticleRepository::new();
        mock_repo.expect_create().returning(|_| {
            Err(StoreError::foreign_key_violation("violates foreign key constraint").into())
        });

        let service = ArticleService::new(mock_repo);
        let err = service
            .create(CreateArticle::new("t", "c", 99))
            .await
            .unwrap_err();

        match err {
            ArticleError::Store(e) => assert_eq!(e.code(), StoreErrorCode::ForeignKeyViolation),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_remove_forwards_id() {
        let mut mock_repo = MockArticleRepository::new();
        mock_repo
            .expect_delete()
            .with(mockall::predicate::eq(4))
            .times(1)
            .returning(|id| Ok(article(id, &CreateArticle::new("t", "c", 1))));

        let service = ArticleService::new(mock_repo);
        assert_eq!(service.remove(4).await.unwrap().id, 4);
    }
}
