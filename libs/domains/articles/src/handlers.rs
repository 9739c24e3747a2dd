use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::{ArticleError, ArticleResult};
use crate::models::{Article, CreateArticle, UpdateArticle};
use crate::repository::ArticleRepository;
use crate::service::ArticleService;

/// OpenAPI documentation for Articles API
#[derive(OpenApi)]
#[openapi(
    paths(create_article, list_articles, get_article, update_article, delete_article),
    components(
        schemas(Article, CreateArticle, UpdateArticle),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Article management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the articles router
pub fn router<R: ArticleRepository + 'static>(service: ArticleService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_articles).post(create_article))
        .route(
            "/{id}",
            get(get_article).patch(update_article).delete(delete_article),
        )
        .with_state(shared_service)
}

/// Create an article
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateArticle,
    responses(
        (status = 201, description = "Article created", body = Article),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_article<R: ArticleRepository>(
    State(service): State<Arc<ArticleService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateArticle>,
) -> ArticleResult<impl IntoResponse> {
    let article = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// List all articles
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "List of articles", body = Vec<Article>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_articles<R: ArticleRepository>(
    State(service): State<Arc<ArticleService<R>>>,
) -> ArticleResult<Json<Vec<Article>>> {
    Ok(Json(service.find_all().await?))
}

/// Get an article by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Article found", body = Article),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_article<R: ArticleRepository>(
    State(service): State<Arc<ArticleService<R>>>,
    IdPath(id): IdPath,
) -> ArticleResult<Json<Article>> {
    let article = service
        .find_one(id)
        .await?
        .ok_or(ArticleError::NotFound(id))?;
    Ok(Json(article))
}

/// Update an article; only the fields present in the body change
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    request_body = UpdateArticle,
    responses(
        (status = 200, description = "Article updated", body = Article),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_article<R: ArticleRepository>(
    State(service): State<Arc<ArticleService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateArticle>,
) -> ArticleResult<Json<Article>> {
    Ok(Json(service.update(id, input).await?))
}

/// Delete an article and return it
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Article deleted", body = Article),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_article<R: ArticleRepository>(
    State(service): State<Arc<ArticleService<R>>>,
    IdPath(id): IdPath,
) -> ArticleResult<Json<Article>> {
    Ok(Json(service.remove(id).await?))
}
