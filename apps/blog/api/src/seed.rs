//! Demo data for a fresh database.
//!
//! Safe to run repeatedly: users are upserted by email and articles are
//! matched by title, so a second run updates rows instead of adding new ones.

use domain_articles::{
    Article, ArticleError, ArticleRepository, ArticleService, CreateArticle, UpdateArticle,
};
use domain_users::{CreateUser, User, UserError, UserRepository, UserService, roles};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seeding users failed: {0}")]
    Users(#[from] UserError),

    #[error("seeding articles failed: {0}")]
    Articles(#[from] ArticleError),
}

/// What a seed run left in the store
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub users: Vec<User>,
    pub articles: Vec<Article>,
    /// Articles that did not exist before this run
    pub articles_created: usize,
}

struct SeedUser {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    role: Option<&'static str>,
}

struct SeedArticle {
    title: &'static str,
    content: &'static str,
    /// Email of the author in `USERS`
    author: &'static str,
}

const USERS: [SeedUser; 3] = [
    SeedUser {
        first_name: "John",
        last_name: "Doe",
        email: "john@mail.com",
        role: None,
    },
    SeedUser {
        first_name: "Bob",
        last_name: "Smith",
        email: "bob@mail.com",
        role: None,
    },
    SeedUser {
        first_name: "Amber",
        last_name: "Johnson",
        email: "amber@mail.com",
        role: Some(roles::ADMIN),
    },
];

const ARTICLES: [SeedArticle; 3] = [
    SeedArticle {
        title: "What's new in Prisma?",
        content: "Our engineers have been working hard, issuing new releases with many improvements...",
        author: "amber@mail.com",
    },
    SeedArticle {
        title: "GraphQL is the best",
        content: "I really like GraphQL because it allows me to request only the data I need...",
        author: "amber@mail.com",
    },
    SeedArticle {
        title: "REST is the best",
        content: "I really like REST because it allows me to request only the data I need...",
        author: "bob@mail.com",
    },
];

/// Upsert the demo users, then make sure each demo article exists and
/// belongs to its author.
pub async fn run<U, A>(
    users: &UserService<U>,
    articles: &ArticleService<A>,
) -> Result<SeedReport, SeedError>
where
    U: UserRepository,
    A: ArticleRepository,
{
    let mut seeded_users = Vec::with_capacity(USERS.len());
    for user in &USERS {
        let mut input = CreateUser::new(user.first_name, user.last_name, user.email);
        input.role = user.role.map(str::to_string);
        seeded_users.push(users.upsert_by_email(input).await?);
    }

    let existing = articles.find_all().await?;
    let mut seeded_articles = Vec::with_capacity(ARTICLES.len());
    let mut articles_created = 0;

    for article in &ARTICLES {
        let Some(author) = seeded_users.iter().find(|u| u.email == article.author) else {
            continue;
        };

        let seeded = match existing.iter().find(|a| a.title == article.title) {
            Some(found) => {
                articles
                    .update(
                        found.id,
                        UpdateArticle {
                            user_id: Some(author.id),
                            ..Default::default()
                        },
                    )
                    .await?
            }
            None => {
                articles_created += 1;
                articles
                    .create(CreateArticle::new(article.title, article.content, author.id))
                    .await?
            }
        };
        seeded_articles.push(seeded);
    }

    info!(
        users = seeded_users.len(),
        articles = seeded_articles.len(),
        articles_created,
        "Seed complete"
    );

    Ok(SeedReport {
        users: seeded_users,
        articles: seeded_articles,
        articles_created,
    })
}
