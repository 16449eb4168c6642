pub mod auth;
pub mod balance;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<services::user_service::UserService>,
    pub auth_service: Arc<services::auth_service::AuthService>,
    pub statement_service: Arc<services::statement_service::StatementService>,
    pub jwt_keys: Arc<auth::jwt::JwtKeys>,
    pub pool: sqlx::SqlitePool,
}

/// Full API route tree. Transport layers (trace, CORS) are attached by the
/// server binary; tests drive this router directly.
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/users", post(handlers::create_user))
        .route("/sessions", post(handlers::create_session));

    let protected = Router::new()
        .route("/profile", get(handlers::show_profile))
        .route("/statements/deposit", post(handlers::create_deposit))
        .route("/statements/withdraw", post(handlers::create_withdrawal))
        .route("/statements/balance", get(handlers::show_balance))
        .route("/statements/{statement_id}", get(handlers::show_statement))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    Router::new()
        .nest("/api/v1", public.merge(protected))
        .with_state(state)
}
