//! Shared application state for axum handlers.

use std::sync::Arc;

use bandstand_app::ports::{ContentStore, NewsletterGateway};
use bandstand_app::services::band_service::BandService;
use bandstand_app::services::gig_service::{GigService, RelatedSelection};
use bandstand_app::services::media_service::MediaService;
use bandstand_app::services::merch_service::MerchService;
use bandstand_app::services::news_service::NewsService;
use bandstand_app::services::newsletter_service::NewsletterService;

/// Static site metadata rendered into every page shell.
#[derive(Clone, Debug)]
pub struct SiteMeta {
    /// Absolute origin used for sitemap URLs, e.g. `https://band.example`.
    pub base_url: String,
    /// Band name, used as the page title suffix.
    pub title: String,
    /// Short line under the band name on the front page.
    pub tagline: String,
    /// Booking address shown on the contacts page.
    pub contact_email: String,
}

/// Application state shared across all axum handlers.
///
/// Generic over the content store and newsletter gateway to avoid
/// dynamic dispatch. `Clone` is implemented manually so the underlying
/// types themselves do not need to be `Clone` — only the `Arc` wrappers
/// are cloned.
pub struct AppState<C, N> {
    pub gig_service: Arc<GigService<C>>,
    pub media_service: Arc<MediaService<C>>,
    pub news_service: Arc<NewsService<C>>,
    pub band_service: Arc<BandService<C>>,
    pub merch_service: Arc<MerchService<C>>,
    pub newsletter_service: Arc<NewsletterService<N>>,
    pub meta: Arc<SiteMeta>,
}

impl<C, N> Clone for AppState<C, N> {
    fn clone(&self) -> Self {
        Self {
            gig_service: Arc::clone(&self.gig_service),
            media_service: Arc::clone(&self.media_service),
            news_service: Arc::clone(&self.news_service),
            band_service: Arc::clone(&self.band_service),
            merch_service: Arc::clone(&self.merch_service),
            newsletter_service: Arc::clone(&self.newsletter_service),
            meta: Arc::clone(&self.meta),
        }
    }
}

impl<C, N> AppState<C, N>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    /// Wire all services around one shared content store and gateway.
    pub fn new(content: C, newsletter: N, related: RelatedSelection, meta: SiteMeta) -> Self {
        let content = Arc::new(content);
        let newsletter = Arc::new(newsletter);
        Self {
            gig_service: Arc::new(GigService::new(Arc::clone(&content), related)),
            media_service: Arc::new(MediaService::new(Arc::clone(&content))),
            news_service: Arc::new(NewsService::new(Arc::clone(&content))),
            band_service: Arc::new(BandService::new(Arc::clone(&content))),
            merch_service: Arc::new(MerchService::new(content)),
            newsletter_service: Arc::new(NewsletterService::new(newsletter)),
            meta: Arc::new(meta),
        }
    }
}
