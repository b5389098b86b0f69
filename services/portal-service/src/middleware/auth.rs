// /auth-portal/services/portal-service/src/middleware/auth.rs

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;
use tower_sessions::Session;

use crate::{
    api::{redirect_found, routes::LOGIN_PATH},
    db::RequestDb,
    models::{CurrentUser, SESSION_USER_ID_KEY},
    utils::AppResult,
    AppState,
};

/// Runs before every route: read `user_id` from the session and attach the
/// resolved identity to the request for handlers and the login guard.
pub async fn load_current_user(
    State(state): State<AppState>,
    session: Session,
    db: RequestDb,
    mut req: Request,
    next: Next,
) -> AppResult<Response> {
    // A value we cannot decode is treated like no value at all
    let user_id = session
        .get::<i64>(SESSION_USER_ID_KEY)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Unreadable session identity, treating as anonymous: {}", e);
            None
        });

    let current_user = state.auth_service.resolve_identity(&db, user_id).await?;
    req.extensions_mut().insert(current_user);

    Ok(next.run(req).await)
}

/// Guard for routes that need a logged-in user. Anonymous requests are sent
/// to the login page and never reach the wrapped handler.
pub async fn require_login(current_user: CurrentUser, req: Request, next: Next) -> Response {
    if !current_user.is_authenticated() {
        tracing::debug!("Anonymous request to {}, redirecting to login", req.uri().path());
        return redirect_found(LOGIN_PATH);
    }

    next.run(req).await
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<CurrentUser>().cloned().unwrap_or_default())
    }
}
