//! The content store: port implementations over the Sanity client.

use bandstand_app::ports::{
    BandRepository, CatalogRepository, GigRepository, MerchRepository, NewsRepository,
};
use bandstand_domain::error::SiteError;
use bandstand_domain::gig::Gig;
use bandstand_domain::member::{BandMember, Biography};
use bandstand_domain::merch::MerchProduct;
use bandstand_domain::post::Post;
use bandstand_domain::release::{Release, Track};
use bandstand_domain::time::Timestamp;
use bandstand_domain::video::Video;
use serde_json::json;

use crate::client::SanityClient;
use crate::queries;
use crate::records::{BioDoc, GigDoc, MemberDoc, MerchDoc, PostDoc, ReleaseDoc, TrackDoc, VideoDoc};

/// Sanity-backed implementation of every content port.
#[derive(Clone, Debug)]
pub struct SanityContentStore {
    client: SanityClient,
}

impl SanityContentStore {
    #[must_use]
    pub fn new(client: SanityClient) -> Self {
        Self { client }
    }

    /// Convert a batch of wire documents, dropping the ones that fail
    /// validation. One malformed CMS entry must not take a page down.
    fn convert_all<D, T>(docs: Vec<D>) -> Vec<T>
    where
        T: TryFrom<D, Error = SiteError>,
    {
        docs.into_iter()
            .filter_map(|doc| match T::try_from(doc) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping invalid content document");
                    None
                }
            })
            .collect()
    }

    async fn fetch_gigs(&self, query: &str, now: Option<Timestamp>) -> Result<Vec<Gig>, SiteError> {
        let params = match now {
            Some(ts) => vec![("now", json!(ts.to_rfc3339()))],
            None => Vec::new(),
        };
        let docs: Vec<GigDoc> = self
            .client
            .fetch(query, &params)
            .await?;
        Ok(Self::convert_all(docs))
    }
}

impl GigRepository for SanityContentStore {
    async fn past_gigs(&self, now: Timestamp) -> Result<Vec<Gig>, SiteError> {
        self.fetch_gigs(queries::PAST_GIGS, Some(now)).await
    }

    async fn upcoming_gigs(&self, now: Timestamp) -> Result<Vec<Gig>, SiteError> {
        self.fetch_gigs(queries::FUTURE_GIGS, Some(now)).await
    }

    async fn all_gigs(&self) -> Result<Vec<Gig>, SiteError> {
        self.fetch_gigs(queries::ALL_GIGS, None).await
    }

    async fn gig_by_slug(&self, slug: &str) -> Result<Option<Gig>, SiteError> {
        let doc: Option<GigDoc> = self
            .client
            .fetch(queries::GIG_DETAIL, &[("slug", json!(slug))])
            .await?;
        doc.map(Gig::try_from).transpose()
    }
}

impl CatalogRepository for SanityContentStore {
    async fn latest_releases(&self, limit: usize) -> Result<Vec<Release>, SiteError> {
        let docs: Vec<ReleaseDoc> = self
            .client
            .fetch(queries::LATEST_RELEASES, &[("limit", json!(limit))])
            .await?;
        Ok(Self::convert_all(docs))
    }

    async fn all_releases(&self) -> Result<Vec<Release>, SiteError> {
        let docs: Vec<ReleaseDoc> = self
            .client
            .fetch(queries::ALL_RELEASES, &[])
            .await?;
        Ok(Self::convert_all(docs))
    }

    async fn release_by_slug(&self, slug: &str) -> Result<Option<Release>, SiteError> {
        let doc: Option<ReleaseDoc> = self
            .client
            .fetch(queries::RELEASE_DETAIL, &[("slug", json!(slug))])
            .await?;
        doc.map(Release::try_from).transpose()
    }

    async fn track_by_slug(&self, slug: &str) -> Result<Option<Track>, SiteError> {
        let doc: Option<TrackDoc> = self
            .client
            .fetch(queries::TRACK_DETAIL, &[("slug", json!(slug))])
            .await?;
        doc.map(Track::try_from).transpose()
    }

    async fn all_tracks(&self) -> Result<Vec<Track>, SiteError> {
        let docs: Vec<TrackDoc> = self
            .client
            .fetch(queries::ALL_TRACKS, &[])
            .await?;
        Ok(Self::convert_all(docs))
    }

    async fn tracks_for_release(&self, release_slug: &str) -> Result<Vec<Track>, SiteError> {
        let docs: Option<Vec<TrackDoc>> = self
            .client
            .fetch(queries::RELEASE_TRACKS, &[("slug", json!(release_slug))])
            .await?;
        Ok(Self::convert_all(docs.unwrap_or_default()))
    }

    async fn videos(&self) -> Result<Vec<Video>, SiteError> {
        let docs: Vec<VideoDoc> = self
            .client
            .fetch(queries::VIDEOS, &[])
            .await?;
        Ok(Self::convert_all(docs))
    }
}

impl NewsRepository for SanityContentStore {
    async fn latest_posts(&self, limit: usize) -> Result<Vec<Post>, SiteError> {
        let docs: Vec<PostDoc> = self
            .client
            .fetch(queries::LATEST_POSTS, &[("limit", json!(limit))])
            .await?;
        Ok(Self::convert_all(docs))
    }

    async fn all_posts(&self) -> Result<Vec<Post>, SiteError> {
        let docs: Vec<PostDoc> = self
            .client
            .fetch(queries::ALL_POSTS, &[])
            .await?;
        Ok(Self::convert_all(docs))
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, SiteError> {
        let doc: Option<PostDoc> = self
            .client
            .fetch(queries::POST_DETAIL, &[("slug", json!(slug))])
            .await?;
        doc.map(Post::try_from).transpose()
    }
}

impl BandRepository for SanityContentStore {
    async fn members(&self) -> Result<Vec<BandMember>, SiteError> {
        let docs: Vec<MemberDoc> = self
            .client
            .fetch(queries::MEMBERS, &[])
            .await?;
        Ok(Self::convert_all(docs))
    }

    async fn member_by_slug(&self, slug: &str) -> Result<Option<BandMember>, SiteError> {
        let doc: Option<MemberDoc> = self
            .client
            .fetch(queries::MEMBER_DETAIL, &[("slug", json!(slug))])
            .await?;
        doc.map(BandMember::try_from).transpose()
    }

    async fn biography(&self) -> Result<Option<Biography>, SiteError> {
        let doc: Option<BioDoc> = self
            .client
            .fetch(queries::BIO, &[])
            .await?;
        doc.map(Biography::try_from).transpose()
    }
}

impl MerchRepository for SanityContentStore {
    async fn products(&self) -> Result<Vec<MerchProduct>, SiteError> {
        let docs: Vec<MerchDoc> = self
            .client
            .fetch(queries::MERCH, &[])
            .await?;
        Ok(Self::convert_all(docs))
    }
}
