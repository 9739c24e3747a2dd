//! PostgreSQL integration tests for the users repository
//!
//! They start a container through testcontainers, so they need Docker:
//! `cargo test -p domain_users -- --ignored`

use database::StoreErrorCode;
use domain_users::*;
use sea_orm::ConnectionTrait;
use test_utils::{TestDataBuilder, TestDatabase};

fn store_code(err: UserError) -> StoreErrorCode {
    match err {
        UserError::Store(e) => e.code(),
        other => panic!("expected a store error, got {other:?}"),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_find_user() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_create_find");

    let created = repo
        .create(CreateUser::new("Amber", "Johnson", builder.email("amber")).with_role(roles::ADMIN))
        .await
        .unwrap();

    assert_eq!(created.role, roles::ADMIN);
    assert!(created.is_active);

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));
    assert!(repo.find_by_id(i32::MAX).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_email_is_unique_violation() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_duplicate_email");
    let email = builder.email("john");

    repo.create(CreateUser::new("John", "Doe", email.clone()))
        .await
        .unwrap();
    let err = repo
        .create(CreateUser::new("John", "Doe", email))
        .await
        .unwrap_err();

    assert_eq!(store_code(err), StoreErrorCode::UniqueConstraintViolation);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_only_changes_present_fields() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_partial_update");

    let user = repo
        .create(CreateUser::new("Bob", "Smith", builder.email("bob")))
        .await
        .unwrap();

    let updated = repo
        .update(
            user.id,
            UpdateUser {
                last_name: Some("Jones".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Bob");
    assert_eq!(updated.last_name, "Jones");
    assert!(updated.updated_at >= user.updated_at);

    let err = repo
        .update(i32::MAX, UpdateUser::default())
        .await
        .unwrap_err();
    assert_eq!(store_code(err), StoreErrorCode::RecordNotFound);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_missing_and_referenced_users() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_delete");

    let err = repo.delete(i32::MAX).await.unwrap_err();
    assert_eq!(store_code(err), StoreErrorCode::RecordNotFound);

    let user_id = db.create_test_user(&builder.email("owner")).await;
    db.connection()
        .execute_unprepared(&format!(
            "INSERT INTO articles (title, content, user_id) VALUES ('t', 'c', {user_id})"
        ))
        .await
        .unwrap();

    let err = repo.delete(user_id).await.unwrap_err();
    assert_eq!(store_code(err), StoreErrorCode::ForeignKeyViolation);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_upsert_by_email_updates_in_place() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_upsert");
    let email = builder.email("amber");

    let first = repo
        .upsert_by_email(CreateUser::new("Amber", "Johnson", email.clone()).with_role(roles::ADMIN))
        .await
        .unwrap();
    let second = repo
        .upsert_by_email(CreateUser::new("Amber", "Jones", email))
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.last_name, "Jones");
    assert_eq!(second.role, roles::ADMIN);
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}
