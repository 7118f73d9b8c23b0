//! Media service — use-cases for releases, tracks, and videos.

use std::sync::Arc;

use bandstand_domain::error::{NotFoundError, SiteError};
use bandstand_domain::release::{Release, Track};
use bandstand_domain::video::Video;

use crate::ports::CatalogRepository;

/// How many releases the front-page showcase loads.
pub const SHOWCASE_RELEASES: usize = 10;

/// Application service for the music catalog.
pub struct MediaService<R> {
    repo: Arc<R>,
}

impl<R: CatalogRepository> MediaService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The releases featured on the front page, newest first.
    ///
    /// # Errors
    ///
    /// Returns a content-store error propagated from the repository.
    pub async fn showcase_releases(&self) -> Result<Vec<Release>, SiteError> {
        self.repo.latest_releases(SHOWCASE_RELEASES).await
    }

    /// All releases, newest first.
    ///
    /// # Errors
    ///
    /// Returns a content-store error propagated from the repository.
    pub async fn all_releases(&self) -> Result<Vec<Release>, SiteError> {
        self.repo.all_releases().await
    }

    /// Look up a release for its detail page.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NotFound`] when no release with `slug`
    /// exists, or a content-store error from the repository.
    pub async fn release_by_slug(&self, slug: &str) -> Result<Release, SiteError> {
        self.repo.release_by_slug(slug).await?.ok_or_else(|| {
            NotFoundError {
                resource: "Release",
                slug: slug.to_owned(),
            }
            .into()
        })
    }

    /// Look up a track for its detail page.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NotFound`] when no track with `slug` exists,
    /// or a content-store error from the repository.
    pub async fn track_by_slug(&self, slug: &str) -> Result<Track, SiteError> {
        self.repo.track_by_slug(slug).await?.ok_or_else(|| {
            NotFoundError {
                resource: "Track",
                slug: slug.to_owned(),
            }
            .into()
        })
    }

    /// All tracks (sitemap).
    ///
    /// # Errors
    ///
    /// Returns a content-store error propagated from the repository.
    pub async fn all_tracks(&self) -> Result<Vec<Track>, SiteError> {
        self.repo.all_tracks().await
    }

    /// The tracklist of one release, in track order.
    ///
    /// # Errors
    ///
    /// Returns a content-store error propagated from the repository.
    pub async fn release_tracks(&self, release_slug: &str) -> Result<Vec<Track>, SiteError> {
        self.repo.tracks_for_release(release_slug).await
    }

    /// All videos in manual order.
    ///
    /// # Errors
    ///
    /// Returns a content-store error propagated from the repository.
    pub async fn videos(&self) -> Result<Vec<Video>, SiteError> {
        self.repo.videos().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandstand_domain::release::ReleaseRef;
    use chrono::TimeZone;
    use std::future::Future;

    struct InMemoryCatalog {
        releases: Vec<Release>,
        tracks: Vec<Track>,
        videos: Vec<Video>,
    }

    impl CatalogRepository for InMemoryCatalog {
        fn latest_releases(
            &self,
            limit: usize,
        ) -> impl Future<Output = Result<Vec<Release>, SiteError>> + Send {
            let result: Vec<Release> = self.releases.iter().take(limit).cloned().collect();
            async { Ok(result) }
        }

        fn all_releases(&self) -> impl Future<Output = Result<Vec<Release>, SiteError>> + Send {
            let result = self.releases.clone();
            async { Ok(result) }
        }

        fn release_by_slug(
            &self,
            slug: &str,
        ) -> impl Future<Output = Result<Option<Release>, SiteError>> + Send {
            let result = self.releases.iter().find(|rel| rel.slug == slug).cloned();
            async { Ok(result) }
        }

        fn track_by_slug(
            &self,
            slug: &str,
        ) -> impl Future<Output = Result<Option<Track>, SiteError>> + Send {
            let result = self.tracks.iter().find(|track| track.slug == slug).cloned();
            async { Ok(result) }
        }

        fn all_tracks(&self) -> impl Future<Output = Result<Vec<Track>, SiteError>> + Send {
            let result = self.tracks.clone();
            async { Ok(result) }
        }

        fn tracks_for_release(
            &self,
            _release_slug: &str,
        ) -> impl Future<Output = Result<Vec<Track>, SiteError>> + Send {
            let result = self.tracks.clone();
            async { Ok(result) }
        }

        fn videos(&self) -> impl Future<Output = Result<Vec<Video>, SiteError>> + Send {
            let result = self.videos.clone();
            async { Ok(result) }
        }
    }

    fn release(slug: &str, track_count: usize) -> Release {
        Release::builder()
            .id(format!("release-{slug}"))
            .title(slug.to_uppercase())
            .slug(slug)
            .release_date(chrono::Utc.with_ymd_and_hms(2024, 4, 12, 0, 0, 0).unwrap())
            .artwork_url("https://cdn.example.com/cover.jpg")
            .track_count(track_count)
            .build()
            .unwrap()
    }

    fn track(slug: &str, release_title: &str) -> Track {
        Track {
            id: format!("track-{slug}").into(),
            title: slug.to_uppercase(),
            slug: slug.to_owned(),
            lyrics: None,
            about_song: None,
            about_instrumental: None,
            release: Some(ReleaseRef {
                title: release_title.to_owned(),
                artwork_url: "https://cdn.example.com/cover.jpg".to_owned(),
                smart_link: None,
            }),
        }
    }

    fn make_service() -> MediaService<InMemoryCatalog> {
        MediaService::new(Arc::new(InMemoryCatalog {
            releases: vec![release("midnight-ep", 4), release("first-light", 1)],
            tracks: vec![track("midnight", "Midnight EP")],
            videos: Vec::new(),
        }))
    }

    #[tokio::test]
    async fn should_return_release_by_slug() {
        let svc = make_service();
        let found = svc.release_by_slug("midnight-ep").await.unwrap();
        assert_eq!(found.title, "MIDNIGHT-EP");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_release() {
        let svc = make_service();
        let result = svc.release_by_slug("missing").await;
        assert!(matches!(result, Err(SiteError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_resolve_track_with_owning_release() {
        let svc = make_service();
        let found = svc.track_by_slug("midnight").await.unwrap();
        assert_eq!(found.release.unwrap().title, "Midnight EP");
    }

    #[tokio::test]
    async fn should_cap_showcase_at_limit() {
        let releases: Vec<Release> = (0..15)
            .map(|n| release(&format!("album-{n}"), 8))
            .collect();
        let svc = MediaService::new(Arc::new(InMemoryCatalog {
            releases,
            tracks: Vec::new(),
            videos: Vec::new(),
        }));

        let showcase = svc.showcase_releases().await.unwrap();
        assert_eq!(showcase.len(), SHOWCASE_RELEASES);
    }
}
