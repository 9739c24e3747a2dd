use axum::Router;
use domain_articles::{ArticleService, PgArticleRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgArticleRepository::new(state.db.clone());
    let service = ArticleService::new(repository);
    handlers::router(service)
}
