// /auth-portal/services/portal-service/src/middleware/mod.rs

pub mod auth;
pub mod db_scope;

pub use auth::{load_current_user, require_login};
pub use db_scope::db_scope;
