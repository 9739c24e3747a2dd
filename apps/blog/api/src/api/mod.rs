use axum::Router;

pub mod articles;
pub mod health;
pub mod users;

/// Creates the resource routes, mounted at the root by `create_router`.
///
/// Returns a stateless Router (every sub-router already has its state).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/users", users::router(state))
        .nest("/articles", articles::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// It carries its own state, so it can be merged into the stateless router
/// returned by `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
