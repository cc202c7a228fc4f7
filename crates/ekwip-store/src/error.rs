//! Store error types.

use ekwip_commerce::CommerceError;
use thiserror::Error;

/// Errors that can occur in repositories and application services.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Entity not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A slug is already taken by another entity.
    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),

    /// An email is already taken by another customer.
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    /// Input failed validation.
    #[error("Validation failed: {0}")]
    Invalid(String),

    /// A shared lock was poisoned by a panicking writer.
    #[error("Store lock poisoned")]
    LockPoisoned,

    /// Domain error surfaced through a service.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
