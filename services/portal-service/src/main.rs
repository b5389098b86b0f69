// /auth-portal/services/portal-service/src/main.rs

mod api;
mod cli;
mod db;
mod middleware;
mod models;
mod services;
mod utils;

use anyhow::Context;
use axum::{middleware as axum_middleware, Router};
use clap::Parser;
use sqlx::sqlite::SqliteConnectOptions;
use std::sync::Arc;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tower_sessions::{
    cookie::{time::Duration as CookieDuration, SameSite},
    Expiry, SessionManagerLayer,
};
use tracing::{info, warn};

use crate::{
    cli::{Cli, Command},
    db::SessionCache,
    middleware::{db_scope, load_current_user},
    services::AuthService,
    utils::{derive_session_key, AppConfig, AppResult},
};

/// Name of the session cookie
const SESSION_COOKIE: &str = "session";

/// State aplikasi, shared read-only across requests
#[derive(Clone)]
pub struct AppState {
    pub connect_options: Arc<SqliteConnectOptions>,
    pub auth_service: Arc<AuthService>,
    pub session_store: SessionCache,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            connect_options: Arc::new(db::connect_options(&config.database_path)),
            auth_service: Arc::new(AuthService::new(config.pepper.as_bytes())),
            session_store: SessionCache::new(config.session_max_entries),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before the logger so RUST_LOG from .env applies
    dotenvy::dotenv().ok();
    utils::logger::init_logger();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    cli.apply(&mut config);

    match cli.command() {
        Command::Serve { .. } => serve(config).await,
        Command::InitDb => init_db(&config).await,
    }
}

/// `init-db`: drop and recreate the schema, then confirm on stdout
async fn init_db(config: &AppConfig) -> anyhow::Result<()> {
    db::ensure_instance_dir(&config.database_path)
        .await
        .with_context(|| format!("creating directory for {}", config.database_path.display()))?;

    db::initialize_schema(&db::connect_options(&config.database_path))
        .await
        .context("initializing schema")?;

    info!("Schema initialized at {}", config.database_path.display());
    println!("Initialized the database.");
    Ok(())
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    db::ensure_instance_dir(&config.database_path)
        .await
        .with_context(|| format!("creating directory for {}", config.database_path.display()))?;

    if config.uses_default_secret() {
        warn!("SECRET_KEY is the development default, set it before deploying");
    }

    let bind_address = config.bind_address();
    let state = AppState::new(config);
    let app = build_app(state.clone())?;

    print_startup_info(&state.config);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("binding {}", bind_address))?;

    info!("Portal service started at http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Assemble the app: session cookie, per-request connection scope and
/// identity resolution wrap every route.
pub fn build_app(state: AppState) -> AppResult<Router> {
    let key = derive_session_key(&state.config.secret_key)?;
    let idle_seconds = i64::try_from(state.config.session_idle.as_secs()).unwrap_or(i64::MAX);

    let session_layer = SessionManagerLayer::new(state.session_store.clone())
        .with_name(SESSION_COOKIE)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(state.config.secure_cookie)
        .with_expiry(Expiry::OnInactivity(CookieDuration::seconds(idle_seconds)))
        .with_signed(key);

    let app = Router::new()
        .merge(api::routes::create_routes())
        // Layer terakhir jalan duluan: db_scope wraps load_current_user
        .layer(axum_middleware::from_fn_with_state(state.clone(), load_current_user))
        .layer(axum_middleware::from_fn_with_state(state.clone(), db_scope))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(state.config.request_timeout))
                .layer(session_layer),
        )
        .with_state(state);

    Ok(app)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("Received Ctrl+C, shutting down"),
        _ = terminate => warn!("Received SIGTERM, shutting down"),
    }
}

fn print_startup_info(config: &AppConfig) {
    info!("Store file: {}", config.database_path.display());
    info!("Available endpoints:");
    info!("    GET       /hello            - Greeting");
    info!("    GET       /health           - Health check");
    info!("    GET       /                 - Index");
    info!("    GET/POST  /auth/register    - Registration form");
    info!("    GET/POST  /auth/login       - Login form");
    info!("    GET       /auth/logout      - Logout");
    info!("    GET       /profile          - Profile (login required)");
}
