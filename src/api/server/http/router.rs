use axum::{
    http::StatusCode,
    middleware,
    routing::{get, patch},
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
    timeout::TimeoutLayer,
};

use crate::storage::UserStore;

use super::{
    handlers::{health, users},
    middleware::{auth, error, logging},
    state::AppState,
};

/// 请求体上限
const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn create_router<S: UserStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health::check))
        .route("/users", get(users::list::<S>).post(users::create::<S>))
        .route("/users/{id}", patch(users::update::<S>).delete(users::remove::<S>))
        .route("/users/managed/{id}", get(users::managed::<S>))
        .layer(middleware::from_fn(auth::credential_middleware))
        .layer(middleware::from_fn(logging::logging_middleware))
        .layer(middleware::from_fn(error::error_handling_middleware))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .with_state(state)
}
