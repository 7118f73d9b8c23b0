//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SiteError`] via `#[from]`. Adapters never surface their transport
//! errors directly; they map them into [`ContentError`] at the boundary.

use thiserror::Error;

/// Top-level error for the application core.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A domain invariant was violated while constructing a record.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record addressed by slug or id does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The content store (or another outbound gateway) failed.
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Invariant violations raised by record constructors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("identifier must not be empty")]
    EmptyId,
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("name must not be empty")]
    EmptyName,
    #[error("slug must not be empty")]
    EmptySlug,
    #[error("date is missing")]
    MissingDate,
    #[error("image url must not be empty")]
    EmptyImageUrl,
    #[error("image dimensions must be positive")]
    InvalidImageDimensions,
    #[error("email address is not valid")]
    InvalidEmail,
}

/// A lookup by slug or id that matched nothing.
#[derive(Debug, Error)]
#[error("{resource} not found: {slug}")]
pub struct NotFoundError {
    /// Human-readable record kind, e.g. `"Gig"`.
    pub resource: &'static str,
    /// The slug or id that was looked up.
    pub slug: String,
}

/// Failure reported by an outbound gateway (content store, newsletter).
///
/// Carries a display message only — the typed source error stays in the
/// adapter that produced it, so the domain stays free of transport crates.
#[derive(Debug, Error)]
#[error("content gateway failed: {message}")]
pub struct ContentError {
    pub message: String,
}

impl ContentError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
