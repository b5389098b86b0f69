// /auth-portal/services/portal-service/src/middleware/db_scope.rs

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::{db::RequestDb, utils::AppError, AppState};

/// Outermost app stage: give the request its connection scope and close it
/// once the response is built, whatever the handler returned.
///
/// If a handler panics the scope is dropped with the request and the
/// connection closes on drop.
pub async fn db_scope(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let db = RequestDb::new(state.connect_options.clone());
    req.extensions_mut().insert(db.clone());

    let response = next.run(req).await;

    db.release().await;
    response
}

impl<S> FromRequestParts<S> for RequestDb
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestDb>()
            .cloned()
            .ok_or_else(|| AppError::InternalServer("request connection scope not installed".to_string()))
    }
}
