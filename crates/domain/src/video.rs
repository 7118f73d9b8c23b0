//! Video — a YouTube link with a derived thumbnail.

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, ValidationError};
use crate::id::VideoId;

/// A video entry on the videos page, ordered by `order` ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub youtube_url: String,
    /// Manual ordering hint from the content store.
    pub order: i32,
}

impl Video {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] when a required field is empty.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if self.youtube_url.is_empty() {
            return Err(ValidationError::EmptyImageUrl.into());
        }
        Ok(())
    }

    /// Thumbnail URL derived from the YouTube video id, if the URL has a
    /// recognisable shape.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<String> {
        youtube_video_id(&self.youtube_url)
            .map(|id| format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
    }
}

/// Extract the 11-character video id from a YouTube URL.
///
/// Recognises `watch?v=`, `/embed/`, and short-link (`youtu.be/…`)
/// shapes. Returns `None` for anything that does not carry a
/// well-formed id.
#[must_use]
pub fn youtube_video_id(url: &str) -> Option<&str> {
    for marker in ["v=", "/embed/"] {
        let Some(pos) = url.find(marker) else {
            continue;
        };
        if let Some(id) = leading_video_id(&url[pos + marker.len()..]) {
            return Some(id);
        }
    }
    // Short links put the id in the last path segment.
    url.rsplit('/').next().and_then(leading_video_id)
}

/// First 11 characters of `s`, if they form a valid video id.
fn leading_video_id(s: &str) -> Option<&str> {
    let id = s.get(..11)?;
    id.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        .then_some(id)
}
