// /auth-portal/services/portal-service/src/db/connection.rs

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    Connection,
};
use std::{path::Path, sync::Arc, time::Duration};
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};

const SCHEMA: &str = include_str!("schema.sql");

/// Connection options untuk store file, rows keyed by column name via `FromRow`
pub fn connect_options(path: &Path) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5))
}

/// Create the directory holding the store file if it is missing
pub async fn ensure_instance_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => tokio::fs::create_dir_all(parent).await,
        _ => Ok(()),
    }
}

/// Drop and recreate every table. Only the `init-db` command calls this.
pub async fn initialize_schema(options: &SqliteConnectOptions) -> Result<(), sqlx::Error> {
    let mut conn = SqliteConnection::connect_with(options).await?;
    sqlx::raw_sql(SCHEMA).execute(&mut conn).await?;
    conn.close().await
}

/// Connection scope for a single request.
///
/// Nothing is opened until the first `acquire`; later calls in the same
/// request get the same connection back. `release` closes it and is a no-op
/// when nothing was acquired. Clones share the slot, which is how the scope
/// travels through request extensions.
#[derive(Clone)]
pub struct RequestDb {
    options: Arc<SqliteConnectOptions>,
    slot: Arc<Mutex<Option<SqliteConnection>>>,
}

impl RequestDb {
    pub fn new(options: Arc<SqliteConnectOptions>) -> Self {
        Self {
            options,
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Borrow the request's connection, opening it on first use.
    ///
    /// Drop the guard before handing control to another stage of the same
    /// request, the slot is locked while it is held.
    pub async fn acquire(&self) -> Result<MappedMutexGuard<'_, SqliteConnection>, sqlx::Error> {
        let mut slot = self.slot.lock().await;
        let conn = match slot.take() {
            Some(conn) => conn,
            None => {
                tracing::debug!("Opening request connection");
                SqliteConnection::connect_with(&self.options).await?
            }
        };
        Ok(MutexGuard::map(slot, |slot| slot.insert(conn)))
    }

    /// Close the connection if one was opened during this request
    pub async fn release(&self) {
        let conn = self.slot.lock().await.take();
        if let Some(conn) = conn {
            if let Err(e) = conn.close().await {
                tracing::warn!("Failed to close request connection: {}", e);
            }
        }
    }

    #[cfg(test)]
    pub async fn is_open(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}
