// /auth-portal/services/portal-service/src/api/mod.rs

pub mod handlers;
pub mod routes;
pub mod views;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Plain 302 redirect. `Redirect::to` answers 303, which is not what
/// form posts here are expected to return.
pub fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
