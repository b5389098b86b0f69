// /auth-portal/services/portal-service/src/utils/logger.rs

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "portal_service=debug,tower_http=debug";

/// Logger initialization, `RUST_LOG` wins over the default directives
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}
