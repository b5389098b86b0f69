// /auth-portal/services/portal-service/src/api/handlers/pages.rs

use axum::response::{Html, IntoResponse, Json, Response};

use crate::{
    api::{redirect_found, routes::LOGIN_PATH, views},
    models::CurrentUser,
};

/// GET /
pub async fn index(current_user: CurrentUser) -> Html<String> {
    Html(views::index_page(&current_user))
}

/// GET /hello
pub async fn hello() -> &'static str {
    "Hello World!"
}

/// GET /profile, mounted behind `require_login`
pub async fn profile(current_user: CurrentUser) -> Response {
    match current_user.user() {
        Some(user) => Html(views::profile_page(&current_user, user)).into_response(),
        None => redirect_found(LOGIN_PATH),
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "portal-service",
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
