//! Contacts API - a REST service for managing contacts and their phone numbers.
//!
//! Contacts and phones form one consistency unit: every write that
//! touches both runs in a single PostgreSQL transaction, and reads
//! assemble the aggregate from one join query.
//!
//! # Architecture
//!
//! - **models**: Contact aggregate and Phone entity
//! - **error**: Custom error types for precise error handling
//! - **validation**: Field-level checks applied before writes reach the store
//! - **config**: Configuration management from environment variables
//! - **db**: Bounded connection pool and startup migrations
//! - **repositories**: Transactional contact storage over PostgreSQL
//! - **services**: Business operations orchestrating validation and storage
//! - **audit**: Best-effort deletion audit log
//! - **server**: axum router, handlers, and error classification

pub mod audit;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod validation;

pub use audit::DeletionAuditLog;
pub use config::Config;
pub use error::{ApiError, ApiResult, ConfigError, ConfigResult};
pub use models::{Contact, Phone};
pub use repositories::{ContactRepository, PgContactRepository};
pub use server::{build_router, AppState};
pub use services::{ContactService, ContactServiceImpl};
