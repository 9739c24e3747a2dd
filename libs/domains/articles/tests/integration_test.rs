//! PostgreSQL integration tests for the articles repository
//!
//! They need Docker: `cargo test -p domain_articles -- --ignored`

use database::StoreErrorCode;
use domain_articles::*;
use test_utils::{TestDataBuilder, TestDatabase};

fn store_code(err: ArticleError) -> StoreErrorCode {
    match err {
        ArticleError::Store(e) => e.code(),
        other => panic!("expected a store error, got {other:?}"),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_article_for_existing_user() {
    let db = TestDatabase::new().await;
    let repo = PgArticleRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_article_create");
    let author = db.create_test_user(&builder.email("author")).await;

    let article = repo
        .create(CreateArticle::new("REST is the best", "I really like REST", author))
        .await
        .unwrap();

    assert_eq!(article.user_id, author);
    assert_eq!(repo.find_by_id(article.id).await.unwrap(), Some(article));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unknown_author_is_foreign_key_violation() {
    let db = TestDatabase::new().await;
    let repo = PgArticleRepository::new(db.connection());

    let err = repo
        .create(CreateArticle::new("Orphan", "No author", i32::MAX))
        .await
        .unwrap_err();

    assert_eq!(store_code(err), StoreErrorCode::ForeignKeyViolation);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_and_delete_missing_article() {
    let db = TestDatabase::new().await;
    let repo = PgArticleRepository::new(db.connection());

    let err = repo
        .update(i32::MAX, UpdateArticle::default())
        .await
        .unwrap_err();
    assert_eq!(store_code(err), StoreErrorCode::RecordNotFound);

    let err = repo.delete(i32::MAX).await.unwrap_err();
    assert_eq!(store_code(err), StoreErrorCode::RecordNotFound);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_partial_update_keeps_other_fields() {
    let db = TestDatabase::new().await;
    let repo = PgArticleRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_article_update");
    let author = db.create_test_user(&builder.email("author")).await;

    let article = repo
        .create(CreateArticle::new("Title", "Body", author))
        .await
        .unwrap();
    let updated = repo
        .update(
            article.id,
            UpdateArticle {
                title: Some("New title".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.content, "Body");
    assert_eq!(updated.user_id, author);
}
