//! Deletion audit log.
//!
//! Appends a human-readable record for each committed delete. Writing is
//! best-effort: it happens strictly after the delete transaction has
//! committed, and a failure here is logged but never surfaced to the
//! caller or allowed to affect the already-final outcome.

use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::error;

/// Append-only record of contact deletions.
pub struct DeletionAuditLog {
    path: PathBuf,
}

impl DeletionAuditLog {
    /// Create an audit log targeting the given file path.
    ///
    /// The file and its parent directory are created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record that the contact with the given id was deleted.
    ///
    /// Appends one line of the form
    /// `2024-05-01 12:00:00 - Contact ID 7 deleted.`
    /// Failures are logged and swallowed; the delete this records has
    /// already committed and must not be reported as failed.
    pub async fn record(&self, contact_id: i64) {
        if let Err(e) = self.append_line(contact_id).await {
            error!(
                path = %self.path.display(),
                contact_id,
                "failed to write deletion audit log: {e}"
            );
        }
    }

    async fn append_line(&self, contact_id: i64) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let entry = format!("{timestamp} - Contact ID {contact_id} deleted.\n");

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(entry.as_bytes()).await?;
        file.flush().await
    }
}
