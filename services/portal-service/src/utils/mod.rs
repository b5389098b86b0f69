// /auth-portal/services/portal-service/src/utils/mod.rs

pub mod error;
pub mod common;
pub mod config;
pub mod logger;

pub use error::{AppError, AppResult};
pub use common::{escape_html, derive_session_key};
pub use config::AppConfig;
