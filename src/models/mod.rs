//! Data models for the contacts API.
//!
//! This module contains the data structures representing contacts and
//! their owned phone numbers.

pub mod contact;

pub use contact::{Contact, Phone};
