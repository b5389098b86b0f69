// /auth-portal/services/portal-service/src/api/handlers/auth.rs

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use tower_sessions::Session;

use crate::{
    api::{redirect_found, routes::{INDEX_PATH, LOGIN_PATH}, views},
    db::RequestDb,
    models::{CredentialsForm, CurrentUser, SESSION_USER_ID_KEY},
    services::AuthFlowError,
    utils::AppResult,
    AppState,
};

/// GET /auth/register
pub async fn register_page(current_user: CurrentUser) -> Html<String> {
    Html(views::register_page(&current_user, None, ""))
}

/// POST /auth/register
pub async fn register_submit(
    State(state): State<AppState>,
    current_user: CurrentUser,
    db: RequestDb,
    Form(form): Form<CredentialsForm>,
) -> AppResult<Response> {
    match state.auth_service.register(&db, &form).await {
        Ok(_) => Ok(redirect_found(LOGIN_PATH)),
        Err(AuthFlowError::Validation(message)) | Err(AuthFlowError::Auth(message)) => Ok(Html(
            views::register_page(&current_user, Some(&message), &form.username),
        )
        .into_response()),
        Err(AuthFlowError::Database(e)) => Err(e.into()),
    }
}

/// GET /auth/login
pub async fn login_page(current_user: CurrentUser) -> Html<String> {
    Html(views::login_page(&current_user, None, ""))
}

/// POST /auth/login
///
/// On failure the session is not touched, so no cookie is issued or changed.
pub async fn login_submit(
    State(state): State<AppState>,
    current_user: CurrentUser,
    session: Session,
    db: RequestDb,
    Form(form): Form<CredentialsForm>,
) -> AppResult<Response> {
    let user = match state.auth_service.authenticate(&db, &form).await {
        Ok(user) => user,
        Err(AuthFlowError::Auth(message)) | Err(AuthFlowError::Validation(message)) => {
            return Ok(Html(views::login_page(&current_user, Some(&message), &form.username))
                .into_response());
        }
        Err(AuthFlowError::Database(e)) => return Err(e.into()),
    };

    // Start from an empty session under a fresh id, then record the identity
    session.clear().await;
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, user.id).await?;

    Ok(redirect_found(INDEX_PATH))
}

/// GET /auth/logout, works for anonymous sessions too
pub async fn logout(session: Session, current_user: CurrentUser) -> AppResult<Response> {
    if let Some(user) = current_user.user() {
        tracing::info!(user_id = user.id, username = %user.username, "User logged out");
    }

    session.flush().await?;
    Ok(redirect_found(INDEX_PATH))
}
