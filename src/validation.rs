//! Field-level validation for the contact aggregate.
//!
//! These checks run before a write reaches the store. They are pure
//! functions of the input and have no side effects.

use crate::error::{ApiError, ApiResult};
use crate::models::Contact;

/// Minimum number of characters in a contact name.
const MIN_NAME_CHARS: usize = 2;

/// Validate a contact about to be created.
///
/// Rules: name at least [`MIN_NAME_CHARS`] characters, age non-negative,
/// id non-negative.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] naming the offending field.
pub fn validate_create(contact: &Contact) -> ApiResult<()> {
    validate_fields(contact)?;
    if contact.id < 0 {
        return Err(ApiError::InvalidInput(format!(
            "id must be non-negative, got {}",
            contact.id
        )));
    }
    Ok(())
}

/// Validate a contact about to be updated.
///
/// Same field rules as [`validate_create`], but the id must be strictly
/// positive: an update targets an already-existing resource.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] naming the offending field.
pub fn validate_update(contact: &Contact) -> ApiResult<()> {
    validate_fields(contact)?;
    if contact.id <= 0 {
        return Err(ApiError::InvalidInput(format!(
            "id must be positive for an update, got {}",
            contact.id
        )));
    }
    Ok(())
}

fn validate_fields(contact: &Contact) -> ApiResult<()> {
    if contact.name.chars().count() < MIN_NAME_CHARS {
        return Err(ApiError::InvalidInput(format!(
            "name must be at least {MIN_NAME_CHARS} characters"
        )));
    }
    if contact.age < 0 {
        return Err(ApiError::InvalidInput(format!(
            "age must be non-negative, got {}",
            contact.age
        )));
    }
    Ok(())
}
