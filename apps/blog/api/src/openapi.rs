use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Blog API",
        version = "0.1.0",
        description = "Users and articles of a small blog, backed by PostgreSQL"
    ),
    nest(
        (path = "/users", api = domain_users::handlers::ApiDoc),
        (path = "/articles", api = domain_articles::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
