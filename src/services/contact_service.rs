//! Contact service layer.
//!
//! Validates incoming aggregates and orchestrates the repository. This
//! is the seam the HTTP handlers talk to; it never crafts user-facing
//! text, it only signals error kinds.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::Contact;
use crate::repositories::ContactRepository;
use crate::validation;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validate and persist a new contact aggregate.
    async fn create(&self, contact: &Contact) -> ApiResult<()>;

    /// Retrieve all contacts.
    async fn find_all(&self) -> ApiResult<Vec<Contact>>;

    /// Retrieve contacts matching optional name/number filters.
    async fn find_with_filters(&self, name: &str, number: &str) -> ApiResult<Vec<Contact>>;

    /// Retrieve a single contact by id.
    async fn find_by_id(&self, id: i64) -> ApiResult<Contact>;

    /// Validate and persist a full replacement of an existing contact.
    async fn update(&self, contact: &Contact) -> ApiResult<()>;

    /// Delete a contact and its phone numbers.
    async fn delete(&self, id: i64) -> ApiResult<()>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repo: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service over the given repository.
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn create(&self, contact: &Contact) -> ApiResult<()> {
        validation::validate_create(contact)?;
        self.repo.create(contact).await
    }

    async fn find_all(&self) -> ApiResult<Vec<Contact>> {
        self.repo.find_all().await
    }

    async fn find_with_filters(&self, name: &str, number: &str) -> ApiResult<Vec<Contact>> {
        self.repo.find_with_filters(name, number).await
    }

    async fn find_by_id(&self, id: i64) -> ApiResult<Contact> {
        self.repo.find_by_id(id).await
    }

    async fn update(&self, contact: &Contact) -> ApiResult<()> {
        validation::validate_update(contact)?;
        self.repo.update(contact).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.repo.delete(id).await
    }
}
