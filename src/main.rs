//! Contacts API - Main entry point
//!
//! Loads configuration, connects to PostgreSQL, applies migrations, and
//! serves the contact routes over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use contacts_api::repositories::{ContactRepository, PgContactRepository};
use contacts_api::services::{ContactService, ContactServiceImpl};
use contacts_api::{build_router, db, AppState, Config, DeletionAuditLog};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let pool = db::connect(&config).await?;
    db::run_migrations(&pool).await?;

    let contact_repo = Arc::new(PgContactRepository::new(pool)) as Arc<dyn ContactRepository>;
    let contact_service = Arc::new(ContactServiceImpl::new(contact_repo)) as Arc<dyn ContactService>;
    let audit = Arc::new(DeletionAuditLog::new(&config.deletion_log_path));

    let app = build_router(AppState::new(contact_service, audit));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Contacts API listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
