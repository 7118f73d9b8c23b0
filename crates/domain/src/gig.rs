//! Gig — a concert record, past or upcoming.

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, ValidationError};
use crate::id::GigId;
use crate::time::{Timestamp, year_of};

/// Poster artwork reference with its natural dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterImage {
    pub url: String,
    /// Natural pixel width of the source asset.
    pub width: u32,
    /// Natural pixel height of the source asset.
    pub height: u32,
}

impl PosterImage {
    /// Check poster invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] when the url is empty or a
    /// dimension is zero.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.url.is_empty() {
            return Err(ValidationError::EmptyImageUrl.into());
        }
        if self.width == 0 || self.height == 0 {
            return Err(ValidationError::InvalidImageDimensions.into());
        }
        Ok(())
    }
}

/// A concert record as supplied by the content store.
///
/// Records are read-only once constructed: the interactive views only
/// ever derive filtered/sorted/paged projections over them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gig {
    pub id: GigId,
    pub title: String,
    pub date: Timestamp,
    pub venue: String,
    pub city: String,
    pub slug: String,
    pub tickets_url: Option<String>,
    pub details_url: Option<String>,
    pub poster: Option<PosterImage>,
    /// Plain-text setlist shown on the detail page.
    pub setlist: Option<String>,
    /// Free-form notes ("interesting facts") shown on the detail page.
    pub facts: Option<String>,
    pub photo_gallery: Vec<String>,
    pub youtube_url: Option<String>,
}

impl Gig {
    /// Create a builder for constructing a [`Gig`].
    #[must_use]
    pub fn builder() -> GigBuilder {
        GigBuilder::default()
    }

    /// Calendar year of the gig, used for the archive year facets.
    #[must_use]
    pub fn year(&self) -> i32 {
        year_of(self.date)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] when a required field is empty
    /// or the poster reference is malformed.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if self.venue.is_empty() || self.city.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.slug.is_empty() {
            return Err(ValidationError::EmptySlug.into());
        }
        if let Some(poster) = &self.poster {
            poster.validate()?;
        }
        Ok(())
    }
}

/// Distinct calendar years present in `gigs`, descending, duplicate-free.
#[must_use]
pub fn distinct_years(gigs: &[Gig]) -> Vec<i32> {
    let mut years: Vec<i32> = gigs.iter().map(Gig::year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Step-by-step builder for [`Gig`].
#[derive(Debug, Default)]
pub struct GigBuilder {
    id: Option<GigId>,
    title: Option<String>,
    date: Option<Timestamp>,
    venue: Option<String>,
    city: Option<String>,
    slug: Option<String>,
    tickets_url: Option<String>,
    details_url: Option<String>,
    poster: Option<PosterImage>,
    setlist: Option<String>,
    facts: Option<String>,
    photo_gallery: Vec<String>,
    youtube_url: Option<String>,
}

impl GigBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<GigId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn date(mut self, date: Timestamp) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn tickets_url(mut self, url: impl Into<String>) -> Self {
        self.tickets_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn details_url(mut self, url: impl Into<String>) -> Self {
        self.details_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn poster(mut self, poster: PosterImage) -> Self {
        self.poster = Some(poster);
        self
    }

    #[must_use]
    pub fn setlist(mut self, setlist: impl Into<String>) -> Self {
        self.setlist = Some(setlist.into());
        self
    }

    #[must_use]
    pub fn facts(mut self, facts: impl Into<String>) -> Self {
        self.facts = Some(facts.into());
        self
    }

    #[must_use]
    pub fn photo_gallery(mut self, urls: Vec<String>) -> Self {
        self.photo_gallery = urls;
        self
    }

    #[must_use]
    pub fn youtube_url(mut self, url: impl Into<String>) -> Self {
        self.youtube_url = Some(url.into());
        self
    }

    /// Consume the builder, validate, and return a [`Gig`].
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] if a required field is missing
    /// or empty, or [`ValidationError::MissingDate`] when no date was set.
    pub fn build(self) -> Result<Gig, SiteError> {
        let date = self.date.ok_or(ValidationError::MissingDate)?;
        let gig = Gig {
            id: self.id.unwrap_or_else(|| GigId::new(String::new())),
            title: self.title.unwrap_or_default(),
            date,
            venue: self.venue.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            tickets_url: self.tickets_url,
            details_url: self.details_url,
            poster: self.poster,
            setlist: self.setlist,
            facts: self.facts,
            photo_gallery: self.photo_gallery,
            youtube_url: self.youtube_url,
        };
        gig.validate()?;
        Ok(gig)
    }
}
