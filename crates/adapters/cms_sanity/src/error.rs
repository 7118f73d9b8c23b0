//! Adapter-level errors.

use bandstand_domain::error::{ContentError, SiteError};
use thiserror::Error;

/// Failure while talking to or decoding from the Sanity API.
#[derive(Debug, Error)]
pub enum CmsError {
    #[error("sanity request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("sanity returned status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("unparseable timestamp from sanity: {raw:?}")]
    BadTimestamp { raw: String },
}

impl From<CmsError> for SiteError {
    fn from(err: CmsError) -> Self {
        ContentError::new(err.to_string()).into()
    }
}
