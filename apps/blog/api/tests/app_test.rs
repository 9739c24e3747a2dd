//! Whole-application routing over in-memory repositories.
//!
//! Exercises the same router stack the binary builds (resources at the root,
//! docs under `/api`, fallbacks, middleware) without a database.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use blog_api::openapi::ApiDoc;
use domain_articles::{ArticleService, InMemoryArticleRepository};
use domain_users::{InMemoryUserRepository, UserService};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn app() -> Router {
    let users = InMemoryUserRepository::new();
    let articles = InMemoryArticleRepository::new(users.clone());

    let api = Router::new()
        .nest(
            "/users",
            domain_users::handlers::router(UserService::new(users)),
        )
        .nest(
            "/articles",
            domain_articles::handlers::router(ArticleService::new(articles)),
        );

    temp_env::async_with_vars([("CORS_ALLOWED_ORIGIN", None::<&str>)], async {
        axum_helpers::create_router::<ApiDoc>(api).await.unwrap()
    })
    .await
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_user_and_article_round_trip_at_root() {
    let app = app().await;

    let created = app
        .clone()
        .oneshot(post(
            "/users",
            json!({"firstName": "Amber", "lastName": "Johnson", "email": "amber@mail.com", "role": "ADMIN"}),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let user = json_body(created.into_body()).await;
    assert_eq!(user["role"], "ADMIN");
    assert_eq!(user["isActive"], true);

    let fetched = app
        .clone()
        .oneshot(get(&format!("/users/{}", user["id"])))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(json_body(fetched.into_body()).await, user);

    let article = app
        .clone()
        .oneshot(post(
            "/articles",
            json!({"title": "GraphQL is the best", "content": "I really like GraphQL", "userId": user["id"]}),
        ))
        .await
        .unwrap();
    assert_eq!(article.status(), StatusCode::CREATED);

    // The author is still referenced, so deleting them is a conflict
    let delete = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/users/{}", user["id"]))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_duplicate_email_conflict_body_shape() {
    let app = app().await;
    let payload = json!({"firstName": "Amber", "lastName": "Johnson", "email": "amber@mail.com"});

    app.clone()
        .oneshot(post("/users", payload.clone()))
        .await
        .unwrap();
    let second = app.oneshot(post("/users", payload)).await.unwrap();

    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = json_body(second.into_body()).await;
    assert_eq!(body["statusCode"], 409);
    assert!(body["message"].is_string());
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = app().await;

    let response = app.oneshot(get("/comments")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["statusCode"], 404);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app().await;

    let response = app
        .oneshot(get(axum_helpers::OPENAPI_JSON_PATH))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc = json_body(response.into_body()).await;
    assert_eq!(doc["info"]["title"], "Blog API");
    assert!(doc["paths"]["/users/{id}"].is_object());
    assert!(doc["paths"]["/articles"].is_object());
}
