//! Articles Domain
//!
//! Blog articles. Every article belongs to a user; the reference is enforced
//! by the store, so a dangling `userId` comes back as a foreign-key violation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, 404 on absent ids
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Pass-through to the repository
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐        ┌──────────────┐
//! │ Repository  │ ─────► │ domain_users │  (belongs-to)
//! └──────┬──────┘        └──────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_articles::{handlers, ArticleService, InMemoryArticleRepository};
//! use domain_users::InMemoryUserRepository;
//!
//! let users = InMemoryUserRepository::new();
//! let repository = InMemoryArticleRepository::new(users);
//! let service = ArticleService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ArticleError, ArticleResult};
pub use models::{Article, CreateArticle, UpdateArticle};
pub use postgres::PgArticleRepository;
pub use repository::{ArticleRepository, InMemoryArticleRepository};
pub use service::ArticleService;
