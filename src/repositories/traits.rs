use crate::error::ApiResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Repository for managing the contact aggregate.
///
/// Provides abstraction over contact storage and retrieval, enabling
/// different implementations (PostgreSQL, mock). Implementations own all
/// storage details; no database types appear in these signatures.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a new contact together with its phone numbers.
    ///
    /// The whole aggregate is written in one transaction: either the
    /// contact row and every phone row land, or nothing does.
    ///
    /// Returns `Err(ApiError::AlreadyExists)` if the contact id is taken.
    async fn create(&self, contact: &Contact) -> ApiResult<()>;

    /// Retrieve all contacts with their phone numbers.
    async fn find_all(&self) -> ApiResult<Vec<Contact>>;

    /// Retrieve contacts matching the given filters.
    ///
    /// `name` matches case-insensitively against the contact name;
    /// `number` requires at least one phone whose number contains it.
    /// An empty string means "no filter" for that dimension.
    async fn find_with_filters(&self, name: &str, number: &str) -> ApiResult<Vec<Contact>>;

    /// Retrieve a single contact by id, phones ordered by phone id.
    ///
    /// Returns `Err(ApiError::NotFound)` if no contact matches.
    async fn find_by_id(&self, id: i64) -> ApiResult<Contact>;

    /// Replace a contact's fields and its entire phone set.
    ///
    /// Returns `Err(ApiError::NotFound)` if no contact matches.
    async fn update(&self, contact: &Contact) -> ApiResult<()>;

    /// Delete a contact and all of its phone numbers.
    ///
    /// Returns `Err(ApiError::NotFound)` if no contact matches.
    async fn delete(&self, id: i64) -> ApiResult<()>;
}
