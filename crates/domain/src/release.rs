//! Release — a published single, EP, or album, and its tracks.

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, ValidationError};
use crate::id::{ReleaseId, TrackId};
use crate::time::Timestamp;

/// A music release listed on the site and in the home-page carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub id: ReleaseId,
    pub title: String,
    pub slug: String,
    pub artwork_url: String,
    /// Aggregator landing page ("listen everywhere" link).
    pub smart_link: Option<String>,
    pub release_date: Timestamp,
    pub track_count: usize,
    /// Slug of the first track, used to link singles straight to the
    /// track page.
    pub first_track_slug: Option<String>,
}

impl Release {
    /// Create a builder for constructing a [`Release`].
    #[must_use]
    pub fn builder() -> ReleaseBuilder {
        ReleaseBuilder::default()
    }

    /// A release with exactly one track is presented as a single: its
    /// carousel tile links to the track page rather than the release page.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.track_count == 1
    }

    /// Site-relative link target for this release.
    #[must_use]
    pub fn link_path(&self) -> String {
        match (self.is_single(), &self.first_track_slug) {
            (true, Some(track_slug)) => format!("/music/track/{track_slug}"),
            _ => format!("/music/{}", self.slug),
        }
    }

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
        if self.slug.is_empty() {
            return Err(ValidationError::EmptySlug.into());
        }
        if self.artwork_url.is_empty() {
            return Err(ValidationError::EmptyImageUrl.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Release`].
#[derive(Debug, Default)]
pub struct ReleaseBuilder {
    id: Option<ReleaseId>,
    title: Option<String>,
    slug: Option<String>,
    artwork_url: Option<String>,
    smart_link: Option<String>,
    release_date: Option<Timestamp>,
    track_count: usize,
    first_track_slug: Option<String>,
}

impl ReleaseBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<ReleaseId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn artwork_url(mut self, url: impl Into<String>) -> Self {
        self.artwork_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn smart_link(mut self, url: impl Into<String>) -> Self {
        self.smart_link = Some(url.into());
        self
    }

    #[must_use]
    pub fn release_date(mut self, date: Timestamp) -> Self {
        self.release_date = Some(date);
        self
    }

    #[must_use]
    pub fn track_count(mut self, count: usize) -> Self {
        self.track_count = count;
        self
    }

    #[must_use]
    pub fn first_track_slug(mut self, slug: impl Into<String>) -> Self {
        self.first_track_slug = Some(slug.into());
        self
    }

    /// Consume the builder, validate, and return a [`Release`].
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] if a required field is missing
    /// or empty, or [`ValidationError::MissingDate`] when no release
    /// date was set.
    pub fn build(self) -> Result<Release, SiteError> {
        let release_date = self.release_date.ok_or(ValidationError::MissingDate)?;
        let release = Release {
            id: self.id.unwrap_or_else(|| ReleaseId::new(String::new())),
            title: self.title.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            artwork_url: self.artwork_url.unwrap_or_default(),
            smart_link: self.smart_link,
            release_date,
            track_count: self.track_count,
            first_track_slug: self.first_track_slug,
        };
        release.validate()?;
        Ok(release)
    }
}

/// Summary of the release a track belongs to, denormalised onto the
/// track so the track page renders from a single record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseRef {
    pub title: String,
    pub artwork_url: String,
    pub smart_link: Option<String>,
}

/// A single track on a release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub slug: String,
    pub lyrics: Option<String>,
    pub about_song: Option<String>,
    pub about_instrumental: Option<String>,
    /// Owning release, if resolved by the query that produced this track.
    pub release: Option<ReleaseRef>,
}

impl Track {
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
        if self.slug.is_empty() {
            return Err(ValidationError::EmptySlug.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn release(track_count: usize) -> Release {
        Release::builder()
            .id("rel-1")
            .title("Between Worlds")
            .slug("between-worlds")
            .artwork_url("https://cdn.example/art.png")
            .release_date(
                Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0)
                    .single()
                    .unwrap(),
            )
            .track_count(track_count)
            .first_track_slug("between-worlds-i")
            .build()
            .unwrap()
    }

    #[test]
    fn should_link_single_to_track_page() {
        let single = release(1);
        assert!(single.is_single());
        assert_eq!(single.link_path(), "/music/track/between-worlds-i");
    }

    #[test]
    fn should_link_album_to_release_page() {
        let album = release(8);
        assert!(!album.is_single());
        assert_eq!(album.link_path(), "/music/between-worlds");
    }

    #[test]
    fn should_fall_back_to_release_page_when_single_has_no_track_slug() {
        let mut single = release(1);
        single.first_track_slug = None;
        assert_eq!(single.link_path(), "/music/between-worlds");
    }

    #[test]
    fn should_reject_release_without_artwork() {
        let result = Release::builder()
            .id("rel-2")
            .title("Untitled")
            .slug("untitled")
            .release_date(
                Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0)
                    .single()
                    .unwrap(),
            )
            .build();
        assert!(matches!(
            result,
            Err(SiteError::Validation(ValidationError::EmptyImageUrl))
        ));
    }

    #[test]
    fn should_validate_track_with_required_fields() {
        let track = Track {
            id: TrackId::new("t1"),
            title: "Cycle".to_string(),
            slug: "cycle".to_string(),
            lyrics: None,
            about_song: None,
            about_instrumental: None,
            release: None,
        };
        assert!(track.validate().is_ok());
    }

    #[test]
    fn should_reject_track_with_empty_title() {
        let track = Track {
            id: TrackId::new("t1"),
            title: String::new(),
            slug: "cycle".to_string(),
            lyrics: None,
            about_song: None,
            about_instrumental: None,
            release: None,
        };
        assert!(matches!(
            track.validate(),
            Err(SiteError::Validation(ValidationError::EmptyTitle))
        ));
    }
}
