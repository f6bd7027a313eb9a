//! Contact aggregate: a contact and its owned phone numbers.

use serde::{Deserialize, Serialize};

/// A phone number owned by a contact.
///
/// `contact_id` is a back-reference to the owning contact. The store
/// always writes the owning contact's id for it, so a payload carrying a
/// mismatched value cannot detach a phone from its aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Phone {
    /// Id of the owning contact
    pub contact_id: i64,

    /// Phone id, unique within the owning contact's phone set
    pub id: i64,

    /// The phone number
    pub number: String,
}

/// A contact and its phone numbers, treated as one consistency unit.
///
/// `phones` is ordered and may be empty. It always appears in the JSON
/// representation; a contact without phones serializes as `"phones": []`
/// rather than omitting the field, so list consumers can tell "no
/// phones" apart from "field missing".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Contact {
    /// Unique identifier, supplied by the caller on create
    pub id: i64,

    /// Display name, at least 2 characters
    pub name: String,

    /// Age in years, non-negative
    pub age: i32,

    /// Owned phone numbers, in insertion order
    pub phones: Vec<Phone>,
}
