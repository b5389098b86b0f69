// /auth-portal/services/portal-service/src/api/routes.rs

use axum::{
    middleware,
    routing::get,
    Router,
};

use crate::{middleware::require_login, AppState};
use super::handlers;

pub const INDEX_PATH: &str = "/";
pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";

/// Routes mounted under `/auth`
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", get(handlers::register_page).post(handlers::register_submit))
        .route("/login", get(handlers::login_page).post(handlers::login_submit))
        .route("/logout", get(handlers::logout))
}

/// Create semua routes, guarded pages go through `require_login`
pub fn create_routes() -> Router<AppState> {
    let protected_routes = Router::new()
        .route("/profile", get(handlers::profile))
        .route_layer(middleware::from_fn(require_login));

    Router::new()
        .route(INDEX_PATH, get(handlers::index))
        .route("/hello", get(handlers::hello))
        .route("/health", get(handlers::health_check))
        .nest("/auth", auth_routes())
        .merge(protected_routes)
}
