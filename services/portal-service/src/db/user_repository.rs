// /auth-portal/services/portal-service/src/db/user_repository.rs

use sqlx::sqlite::SqliteConnection;
use thiserror::Error;

use crate::models::User;
use super::security_service::SecurityService;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {0}")]
    Connection(#[from] sqlx::Error),
    #[error("Username already registered")]
    UsernameTaken,
    #[error("Password hashing failed")]
    Hashing,
}

/// Repository untuk operasi database terkait user
#[derive(Clone)]
pub struct UserRepository {
    pub security_service: SecurityService,
}

impl UserRepository {
    pub fn new(pepper: &[u8]) -> Self {
        Self {
            security_service: SecurityService::new(pepper),
        }
    }

    /// Hash the password and insert the user, returning the new row id.
    ///
    /// Uniqueness is left to the `UNIQUE` constraint so that two concurrent
    /// registrations cannot both succeed.
    pub async fn create_user(
        &self,
        conn: &mut SqliteConnection,
        username: &str,
        password: &str,
    ) -> Result<i64, DatabaseError> {
        let password_hash = self.security_service.hash_password(password)?;

        let result = sqlx::query("INSERT INTO user (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(&password_hash)
            .execute(conn)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    DatabaseError::UsernameTaken
                }
                other => DatabaseError::Connection(other),
            })?;

        Ok(result.last_insert_rowid())
    }

    /// Exact, case-sensitive username match
    pub async fn find_by_username(
        &self,
        conn: &mut SqliteConnection,
        username: &str,
    ) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM user WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(conn)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM user WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(user)
    }

    pub fn verify_password(&self, user: &User, password: &str) -> bool {
        self.security_service.verify_password(password, &user.password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{test_support::temp_store, RequestDb};
    use sqlx::Row;

    #[tokio::test]
    async fn test_create_and_find() {
        let (_dir, options) = temp_store().await;
        let db = RequestDb::new(options);
        let repo = UserRepository::new(b"");
        let mut conn = db.acquire().await.unwrap();

        let id = repo.create_user(&mut conn, "alice", "wonderland").await.unwrap();

        let by_name = repo.find_by_username(&mut conn, "alice").await.unwrap().unwrap();
        assert_eq!(by_name.id, id);
        assert_eq!(by_name.username, "alice");
        assert_ne!(by_name.password_hash, "wonderland");
        assert!(repo.verify_password(&by_name, "wonderland"));

        let by_id = repo.find_by_id(&mut conn, id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "alice");
    }

    #[tokio::test]
    async fn test_missing_rows_are_none() {
        let (_dir, options) = temp_store().await;
        let db = RequestDb::new(options);
        let repo = UserRepository::new(b"");
        let mut conn = db.acquire().await.unwrap();

        assert!(repo.find_by_username(&mut conn, "ghost").await.unwrap().is_none());
        assert!(repo.find_by_id(&mut conn, 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_distinguishable() {
        let (_dir, options) = temp_store().await;
        let db = RequestDb::new(options);
        let repo = UserRepository::new(b"");
        let mut conn = db.acquire().await.unwrap();

        repo.create_user(&mut conn, "alice", "wonderland").await.unwrap();
        let err = repo.create_user(&mut conn, "alice", "other").await.unwrap_err();
        assert!(matches!(err, DatabaseError::UsernameTaken));

        let row = sqlx::query("SELECT COUNT(*) AS n FROM user WHERE username = 'alice'")
            .fetch_one(&mut *conn)
            .await
            .unwrap();
        assert_eq!(row.get::<i64, _>("n"), 1);
    }

    #[tokio::test]
    async fn test_username_match_is_exact() {
        let (_dir, options) = temp_store().await;
        let db = RequestDb::new(options);
        let repo = UserRepository::new(b"");
        let mut conn = db.acquire().await.unwrap();

        repo.create_user(&mut conn, "alice", "wonderland").await.unwrap();
        assert!(repo.find_by_username(&mut conn, "Alice").await.unwrap().is_none());
    }
}
