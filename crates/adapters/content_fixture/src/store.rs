//! Port implementations over the seeded catalog.

use bandstand_app::ports::{
    BandRepository, CatalogRepository, GigRepository, MerchRepository, NewsRepository,
    NewsletterGateway,
};
use bandstand_domain::error::SiteError;
use bandstand_domain::gig::Gig;
use bandstand_domain::member::{BandMember, Biography};
use bandstand_domain::merch::MerchProduct;
use bandstand_domain::post::Post;
use bandstand_domain::release::{Release, Track};
use bandstand_domain::time::Timestamp;
use bandstand_domain::video::Video;

use crate::seed;

/// Content store over the demo catalog, seeded once at startup.
#[derive(Debug)]
pub struct FixtureContent {
    gigs: Vec<Gig>,
    releases: Vec<Release>,
    tracks: Vec<Track>,
    posts: Vec<Post>,
    members: Vec<BandMember>,
    biography: Biography,
    products: Vec<MerchProduct>,
    videos: Vec<Video>,
}

impl FixtureContent {
    /// Build the store from the demo seed.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            gigs: seed::gigs(),
            releases: seed::releases(),
            tracks: seed::tracks(),
            posts: seed::posts(),
            members: seed::members(),
            biography: seed::biography(),
            products: seed::products(),
            videos: seed::videos(),
        }
    }
}

impl GigRepository for FixtureContent {
    async fn past_gigs(&self, now: Timestamp) -> Result<Vec<Gig>, SiteError> {
        let mut result: Vec<Gig> = self
            .gigs
            .iter()
            .filter(|gig| gig.date < now)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(result)
    }

    async fn upcoming_gigs(&self, now: Timestamp) -> Result<Vec<Gig>, SiteError> {
        let mut result: Vec<Gig> = self
            .gigs
            .iter()
            .filter(|gig| gig.date >= now)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(result)
    }

    async fn all_gigs(&self) -> Result<Vec<Gig>, SiteError> {
        let mut result = self.gigs.clone();
        result.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(result)
    }

    async fn gig_by_slug(&self, slug: &str) -> Result<Option<Gig>, SiteError> {
        Ok(self.gigs.iter().find(|gig| gig.slug == slug).cloned())
    }
}

impl CatalogRepository for FixtureContent {
    async fn latest_releases(&self, limit: usize) -> Result<Vec<Release>, SiteError> {
        let mut result = self.releases.clone();
        result.sort_by(|a, b| b.release_date.cmp(&a.release_date));
        result.truncate(limit);
        Ok(result)
    }

    async fn all_releases(&self) -> Result<Vec<Release>, SiteError> {
        let mut result = self.releases.clone();
        result.sort_by(|a, b| b.release_date.cmp(&a.release_date));
        Ok(result)
    }

    async fn release_by_slug(&self, slug: &str) -> Result<Option<Release>, SiteError> {
        Ok(self
            .releases
            .iter()
            .find(|release| release.slug == slug)
            .cloned())
    }

    async fn track_by_slug(&self, slug: &str) -> Result<Option<Track>, SiteError> {
        Ok(self.tracks.iter().find(|track| track.slug == slug).cloned())
    }

    async fn all_tracks(&self) -> Result<Vec<Track>, SiteError> {
        Ok(self.tracks.clone())
    }

    async fn tracks_for_release(&self, release_slug: &str) -> Result<Vec<Track>, SiteError> {
        Ok(self
            .tracks
            .iter()
            .filter(|track| seed::release_of_track(&track.slug) == Some(release_slug))
            .cloned()
            .collect())
    }

    async fn videos(&self) -> Result<Vec<Video>, SiteError> {
        let mut result = self.videos.clone();
        result.sort_by_key(|video| video.order);
        Ok(result)
    }
}

impl NewsRepository for FixtureContent {
    async fn latest_posts(&self, limit: usize) -> Result<Vec<Post>, SiteError> {
        let mut result = self.posts.clone();
        result.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        result.truncate(limit);
        Ok(result)
    }

    async fn all_posts(&self) -> Result<Vec<Post>, SiteError> {
        let mut result = self.posts.clone();
        result.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(result)
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, SiteError> {
        Ok(self.posts.iter().find(|post| post.slug == slug).cloned())
    }
}

impl BandRepository for FixtureContent {
    async fn members(&self) -> Result<Vec<BandMember>, SiteError> {
        Ok(self.members.clone())
    }

    async fn member_by_slug(&self, slug: &str) -> Result<Option<BandMember>, SiteError> {
        Ok(self
            .members
            .iter()
            .find(|member| member.slug == slug)
            .cloned())
    }

    async fn biography(&self) -> Result<Option<Biography>, SiteError> {
        Ok(Some(self.biography.clone()))
    }
}

impl MerchRepository for FixtureContent {
    async fn products(&self) -> Result<Vec<MerchProduct>, SiteError> {
        Ok(self.products.clone())
    }
}

/// Newsletter gateway that only logs. Pairs with [`FixtureContent`]
/// for credential-free environments.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixtureNewsletter;

impl NewsletterGateway for FixtureNewsletter {
    async fn subscribe(&self, email: &str) -> Result<(), SiteError> {
        tracing::info!(email, "fixture newsletter signup accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SAMPLE_ALBUM_SLUG, SAMPLE_PAST_GIG_SLUG, SAMPLE_TRACK_SLUG};
    use bandstand_domain::time::now;

    #[tokio::test]
    async fn should_split_seed_gigs_around_now() {
        let store = FixtureContent::seeded();
        let current = now();

        let past = store.past_gigs(current).await.unwrap();
        let upcoming = store.upcoming_gigs(current).await.unwrap();

        assert!(past.len() >= 13);
        assert_eq!(upcoming.len(), 2);
        assert!(past.windows(2).all(|pair| pair[0].date >= pair[1].date));
        assert!(upcoming[0].date <= upcoming[1].date);
    }

    #[tokio::test]
    async fn should_expose_sample_slugs() {
        let store = FixtureContent::seeded();

        assert!(store.gig_by_slug(SAMPLE_PAST_GIG_SLUG).await.unwrap().is_some());
        assert!(store.release_by_slug(SAMPLE_ALBUM_SLUG).await.unwrap().is_some());
        assert!(store.track_by_slug(SAMPLE_TRACK_SLUG).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn should_group_album_tracks_by_release() {
        let store = FixtureContent::seeded();
        let tracks = store.tracks_for_release(SAMPLE_ALBUM_SLUG).await.unwrap();
        assert_eq!(tracks.len(), 4);
    }
}
