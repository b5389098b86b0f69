// /auth-portal/services/portal-service/src/db/mod.rs

pub mod connection;
pub mod user_repository;
pub mod security_service;
pub mod session_store;

pub use connection::{connect_options, ensure_instance_dir, initialize_schema, RequestDb};
pub use user_repository::{UserRepository, DatabaseError};
pub use session_store::SessionCache;

#[cfg(test)]
pub mod test_support {
    use sqlx::sqlite::SqliteConnectOptions;
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Fresh store file with the schema applied. Keep the `TempDir` alive for the test.
    pub async fn temp_store() -> (TempDir, Arc<SqliteConnectOptions>) {
        let dir = tempfile::tempdir().expect("temp dir");
        let options = super::connect_options(&dir.path().join("test.sqlite"));
        super::initialize_schema(&options).await.expect("schema");
        (dir, Arc::new(options))
    }
}
