// /auth-portal/services/portal-service/src/utils/error.rs

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use crate::db::DatabaseError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    Database(String),
    Session(String),
    Configuration(String),
    InternalServer(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(msg) => write!(f, "Database Error: {}", msg),
            AppError::Session(msg) => write!(f, "Session Error: {}", msg),
            AppError::Configuration(msg) => write!(f, "Configuration Error: {}", msg),
            AppError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<&AppError> for StatusCode {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalServer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from(&self);

        // Detail stays in the log, the client only sees the status line
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        let body = format!(
            "<!doctype html>\n<title>{code} {reason}</title>\n<h1>{reason}</h1>\n",
            code = status.as_u16(),
        );

        (status, Html(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<DatabaseError> for AppError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Connection(e) => AppError::Database(e.to_string()),
            // Duplicates are reported on the form before they can get here
            e @ (DatabaseError::UsernameTaken | DatabaseError::Hashing) => {
                AppError::InternalServer(e.to_string())
            }
        }
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        AppError::Session(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            StatusCode::from(&AppError::Session("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            StatusCode::from(&AppError::Database("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_error_hides_detail() {
        let response = AppError::Database("no such table: user".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_connection_error_is_database() {
        let err: AppError = DatabaseError::Connection(sqlx::Error::PoolClosed).into();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_escaped_username_taken_is_server_error() {
        let err: AppError = DatabaseError::UsernameTaken.into();
        assert_eq!(StatusCode::from(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
