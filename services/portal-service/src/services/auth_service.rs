// /auth-portal/services/portal-service/src/services/auth_service.rs

use thiserror::Error;

use crate::{
    db::{DatabaseError, RequestDb, UserRepository},
    models::{CredentialsForm, CurrentUser, User},
};

/// Outcome of a register or login attempt that did not succeed.
///
/// `Validation` and `Auth` are shown to the user on the form that produced
/// them, `Database` is a server failure.
#[derive(Error, Debug)]
pub enum AuthFlowError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Auth(String),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<sqlx::Error> for AuthFlowError {
    fn from(err: sqlx::Error) -> Self {
        AuthFlowError::Database(DatabaseError::Connection(err))
    }
}

/// Registration, credential checks and identity lookup on top of the request connection
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
}

impl AuthService {
    pub fn new(pepper: &[u8]) -> Self {
        Self {
            users: UserRepository::new(pepper),
        }
    }

    /// Validate the form and create the user. Nothing touches the store
    /// until both fields are present.
    pub async fn register(&self, db: &RequestDb, form: &CredentialsForm) -> Result<i64, AuthFlowError> {
        if let Some(message) = form.first_error() {
            return Err(AuthFlowError::Validation(message));
        }

        let mut conn = db.acquire().await?;
        match self.users.create_user(&mut conn, &form.username, &form.password).await {
            Ok(id) => {
                tracing::info!(user_id = id, username = %form.username, "User registered");
                Ok(id)
            }
            Err(DatabaseError::UsernameTaken) => {
                tracing::info!(username = %form.username, "Registration rejected, username taken");
                Err(AuthFlowError::Validation(format!(
                    "User {} is already registered.",
                    form.username
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check credentials. The two failure messages are deliberately distinct.
    pub async fn authenticate(&self, db: &RequestDb, form: &CredentialsForm) -> Result<User, AuthFlowError> {
        let mut conn = db.acquire().await?;
        let user = self.users.find_by_username(&mut conn, &form.username).await?;

        match user {
            None => {
                tracing::info!(username = %form.username, reason = "unknown username", "Login failed");
                Err(AuthFlowError::Auth("Incorrect username.".to_string()))
            }
            Some(user) if !self.users.verify_password(&user, &form.password) => {
                tracing::info!(username = %form.username, reason = "wrong password", "Login failed");
                Err(AuthFlowError::Auth("Incorrect password.".to_string()))
            }
            Some(user) => {
                tracing::info!(user_id = user.id, username = %user.username, "Login succeeded");
                Ok(user)
            }
        }
    }

    /// Resolve a session `user_id` to an identity. No id means no query; an
    /// id without a row resolves to anonymous rather than an error.
    pub async fn resolve_identity(
        &self,
        db: &RequestDb,
        user_id: Option<i64>,
    ) -> Result<CurrentUser, DatabaseError> {
        let Some(user_id) = user_id else {
            return Ok(CurrentUser::anonymous());
        };

        let mut conn = db.acquire().await?;
        let user = self.users.find_by_id(&mut conn, user_id).await?;
        if user.is_none() {
            tracing::debug!(user_id, "Session refers to a user that no longer exists");
        }

        Ok(CurrentUser(user))
    }
}
