//! Seeds a database with demo users and articles.
//!
//! Reads the same environment as the server (`DATABASE_URL`, `APP_ENV`, ...).

use blog_api::{config::Config, seed};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config, run_migrations};
use domain_articles::{ArticleService, PgArticleRepository};
use domain_users::{PgUserRepository, UserService};
use eyre::WrapErr;
use migration::Migrator;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = connect_from_config(config.database.clone())
        .await
        .wrap_err("PostgreSQL connection failed")?;

    run_migrations::<Migrator>(&db, "seed")
        .await
        .wrap_err("Migrations failed")?;

    let users = UserService::new(PgUserRepository::new(db.clone()));
    let articles = ArticleService::new(PgArticleRepository::new(db.clone()));

    let outcome = seed::run(&users, &articles).await;

    // Release the pool whether or not seeding worked
    if let Err(e) = db.close().await {
        tracing::error!("Error closing PostgreSQL: {}", e);
    }

    let report = outcome.wrap_err("Seeding failed")?;
    for user in &report.users {
        info!(user_id = user.id, email = %user.email, role = %user.role, "Seeded user");
    }
    for article in &report.articles {
        info!(
            article_id = article.id,
            user_id = article.user_id,
            title = %article.title,
            "Seeded article"
        );
    }

    Ok(())
}
