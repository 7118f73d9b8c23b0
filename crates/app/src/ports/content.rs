//! Content ports — read-only repository traits over the content store.
//!
//! The site never writes content; every trait here is a query surface.
//! The interactive views consume the returned records as immutable
//! snapshots and issue no further queries during interaction.

use std::future::Future;

use bandstand_domain::error::SiteError;
use bandstand_domain::gig::Gig;
use bandstand_domain::member::{BandMember, Biography};
use bandstand_domain::merch::MerchProduct;
use bandstand_domain::post::Post;
use bandstand_domain::release::{Release, Track};
use bandstand_domain::time::Timestamp;
use bandstand_domain::video::Video;

/// Queries over concert records.
pub trait GigRepository {
    /// Gigs strictly before `now`, newest first.
    fn past_gigs(&self, now: Timestamp)
    -> impl Future<Output = Result<Vec<Gig>, SiteError>> + Send;

    /// Gigs at or after `now`, soonest first.
    fn upcoming_gigs(
        &self,
        now: Timestamp,
    ) -> impl Future<Output = Result<Vec<Gig>, SiteError>> + Send;

    /// Every gig with a slug, newest first (related-gig pool, sitemap).
    fn all_gigs(&self) -> impl Future<Output = Result<Vec<Gig>, SiteError>> + Send;

    /// A single gig, or `None` when the slug matches nothing.
    fn gig_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Gig>, SiteError>> + Send;
}

/// Queries over releases, tracks, and videos.
pub trait CatalogRepository {
    /// The most recent releases, newest first, at most `limit`.
    fn latest_releases(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Release>, SiteError>> + Send;

    /// All releases, newest first.
    fn all_releases(&self) -> impl Future<Output = Result<Vec<Release>, SiteError>> + Send;

    /// A single release, or `None` when the slug matches nothing.
    fn release_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Release>, SiteError>> + Send;

    /// A single track with its owning release resolved.
    fn track_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Track>, SiteError>> + Send;

    /// All tracks (sitemap).
    fn all_tracks(&self) -> impl Future<Output = Result<Vec<Track>, SiteError>> + Send;

    /// The tracks of one release, in track order.
    fn tracks_for_release(
        &self,
        release_slug: &str,
    ) -> impl Future<Output = Result<Vec<Track>, SiteError>> + Send;

    /// All videos in manual order.
    fn videos(&self) -> impl Future<Output = Result<Vec<Video>, SiteError>> + Send;
}

/// Queries over news posts.
pub trait NewsRepository {
    /// The most recent posts, newest first, at most `limit`.
    fn latest_posts(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Post>, SiteError>> + Send;

    /// All posts, newest first.
    fn all_posts(&self) -> impl Future<Output = Result<Vec<Post>, SiteError>> + Send;

    /// A single post with its body, or `None` when the slug matches nothing.
    fn post_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Post>, SiteError>> + Send;
}

/// Queries over band members and the biography.
pub trait BandRepository {
    /// All members in presentation order.
    fn members(&self) -> impl Future<Output = Result<Vec<BandMember>, SiteError>> + Send;

    /// A single member profile, or `None` when the slug matches nothing.
    fn member_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<BandMember>, SiteError>> + Send;

    /// The biography page content, or `None` when none is published.
    fn biography(&self) -> impl Future<Output = Result<Option<Biography>, SiteError>> + Send;
}

/// Queries over merch products.
pub trait MerchRepository {
    fn products(&self) -> impl Future<Output = Result<Vec<MerchProduct>, SiteError>> + Send;
}

/// Marker for a complete content source. Implemented automatically for
/// any type providing every per-aggregate repository, so composition
/// code can take a single bound.
pub trait ContentStore:
    GigRepository + CatalogRepository + NewsRepository + BandRepository + MerchRepository
{
}

impl<T> ContentStore for T where
    T: GigRepository + CatalogRepository + NewsRepository + BandRepository + MerchRepository
{
}
