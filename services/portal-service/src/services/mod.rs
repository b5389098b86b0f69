// /auth-portal/services/portal-service/src/services/mod.rs

pub mod auth_service;

pub use auth_service::{AuthService, AuthFlowError};
