// /auth-portal/services/portal-service/src/api/handlers/mod.rs

pub mod auth;
pub mod pages;

// Re-export semua handler functions
pub use auth::*;
pub use pages::*;
