//! Database pool construction and startup migrations.
//!
//! The pool is built once at startup and passed by reference into the
//! repository layer; nothing in the crate reaches for a global handle.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

/// How long an idle connection may sit in the pool before being closed.
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

/// Maximum lifetime of any single pooled connection.
const MAX_LIFETIME: Duration = Duration::from_secs(300);

/// Build a bounded connection pool from the configuration.
///
/// # Errors
///
/// Returns [`ApiError::Database`] if a first connection cannot be
/// established.
pub async fn connect(config: &Config) -> ApiResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .connect(&config.database_url())
        .await?;

    info!(
        max_connections = config.db_max_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Apply the embedded migrations.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] if a migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> ApiResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to apply migrations: {e}")))?;

    info!("migrations applied");
    Ok(())
}
