//! Band service — use-cases for member profiles and the biography.

use std::sync::Arc;

use bandstand_domain::error::{NotFoundError, SiteError};
use bandstand_domain::member::{BandMember, Biography};

use crate::ports::BandRepository;

/// Application service for the band lineup and biography pages.
pub struct BandService<R> {
    repo: Arc<R>,
}

impl<R: BandRepository> BandService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All members in presentation order.
    ///
    /// # Errors
    ///
    /// Returns a content-store error propagated from the repository.
    pub async fn members(&self) -> Result<Vec<BandMember>, SiteError> {
        self.repo.members().await
    }

    /// Look up a member profile.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NotFound`] when no member with `slug`
    /// exists, or a content-store error from the repository.
    pub async fn member_by_slug(&self, slug: &str) -> Result<BandMember, SiteError> {
        self.repo.member_by_slug(slug).await?.ok_or_else(|| {
            NotFoundError {
                resource: "Band member",
                slug: slug.to_owned(),
            }
            .into()
        })
    }

    /// The biography page content.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NotFound`] when no biography is published,
    /// or a content-store error from the repository.
    pub async fn biography(&self) -> Result<Biography, SiteError> {
        self.repo.biography().await?.ok_or_else(|| {
            NotFoundError {
                resource: "Biography",
                slug: "bio".to_owned(),
            }
            .into()
        })
    }
}
