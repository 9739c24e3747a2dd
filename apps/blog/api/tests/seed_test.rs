//! Seeding against in-memory repositories.

use blog_api::seed;
use domain_articles::{ArticleService, InMemoryArticleRepository};
use domain_users::{InMemoryUserRepository, UserService, roles};

fn services() -> (
    UserService<InMemoryUserRepository>,
    ArticleService<InMemoryArticleRepository>,
) {
    let users = InMemoryUserRepository::new();
    let articles = InMemoryArticleRepository::new(users.clone());
    (UserService::new(users), ArticleService::new(articles))
}

#[tokio::test]
async fn test_seed_creates_users_and_articles() {
    let (users, articles) = services();

    let report = seed::run(&users, &articles).await.unwrap();

    assert_eq!(report.users.len(), 3);
    assert_eq!(report.articles.len(), 3);
    assert_eq!(report.articles_created, 3);

    let amber = report
        .users
        .iter()
        .find(|u| u.email == "amber@mail.com")
        .unwrap();
    let bob = report
        .users
        .iter()
        .find(|u| u.email == "bob@mail.com")
        .unwrap();
    assert_eq!(amber.role, roles::ADMIN);
    assert_eq!(bob.role, roles::USER);

    let rest = report
        .articles
        .iter()
        .find(|a| a.title == "REST is the best")
        .unwrap();
    assert_eq!(rest.user_id, bob.id);

    let by_amber = report
        .articles
        .iter()
        .filter(|a| a.user_id == amber.id)
        .count();
    assert_eq!(by_amber, 2);
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let (users, articles) = services();

    let first = seed::run(&users, &articles).await.unwrap();
    let second = seed::run(&users, &articles).await.unwrap();

    assert_eq!(second.articles_created, 0);
    assert_eq!(users.find_all().await.unwrap().len(), 3);
    assert_eq!(articles.find_all().await.unwrap().len(), 3);

    let first_ids: Vec<i32> = first.users.iter().map(|u| u.id).collect();
    let second_ids: Vec<i32> = second.users.iter().map(|u| u.id).collect();
    assert_eq!(first_ids, second_ids);
}

#[tokio::test]
async fn test_seed_repoints_article_to_its_author() {
    let (users, articles) = services();
    let first = seed::run(&users, &articles).await.unwrap();

    let john = first
        .users
        .iter()
        .find(|u| u.email == "john@mail.com")
        .unwrap();
    let rest = first
        .articles
        .iter()
        .find(|a| a.title == "REST is the best")
        .unwrap();
    articles
        .update(
            rest.id,
            domain_articles::UpdateArticle {
                user_id: Some(john.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let second = seed::run(&users, &articles).await.unwrap();
    let rest_again = second
        .articles
        .iter()
        .find(|a| a.title == "REST is the best")
        .unwrap();

    assert_eq!(rest_again.id, rest.id);
    assert_ne!(rest_again.user_id, john.id);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_seed_is_idempotent_on_postgres() {
    use domain_articles::PgArticleRepository;
    use domain_users::PgUserRepository;

    let db = test_utils::TestDatabase::new().await;
    let users = UserService::new(PgUserRepository::new(db.connection()));
    let articles = ArticleService::new(PgArticleRepository::new(db.connection()));

    seed::run(&users, &articles).await.unwrap();
    let second = seed::run(&users, &articles).await.unwrap();

    assert_eq!(second.articles_created, 0);
    assert_eq!(users.find_all().await.unwrap().len(), 3);
    assert_eq!(articles.find_all().await.unwrap().len(), 3);
}
