//! Axum router assembly.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use bandstand_app::ports::{ContentStore, NewsletterGateway};

use crate::pages;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at
/// the `DEBUG` level using the `tracing` ecosystem.
pub fn build<C, N>(state: AppState<C, N>) -> Router
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(pages::home::index::<C, N>))
        .route("/gigs", get(pages::gigs::upcoming::<C, N>))
        .route("/gigs/past", get(pages::gigs::archive::<C, N>))
        .route("/gigs/archive/{slug}", get(pages::gigs::detail::<C, N>))
        .route("/music", get(pages::music::releases::<C, N>))
        .route("/music/track/{slug}", get(pages::music::track_detail::<C, N>))
        .route("/music/{slug}", get(pages::music::release_detail::<C, N>))
        .route("/videos", get(pages::music::videos::<C, N>))
        .route("/news", get(pages::news::list::<C, N>))
        .route("/news/{slug}", get(pages::news::detail::<C, N>))
        .route("/band", get(pages::band::members::<C, N>))
        .route("/band/{slug}", get(pages::band::member_detail::<C, N>))
        .route("/bio", get(pages::band::biography::<C, N>))
        .route("/merch", get(pages::merch::list::<C, N>))
        .route("/contacts", get(pages::contacts::show::<C, N>))
        .route("/newsletter", post(pages::newsletter::subscribe::<C, N>))
        .route("/sitemap.xml", get(pages::sitemap::sitemap::<C, N>))
        .route("/static/site.css", get(stylesheet))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn stylesheet() -> impl axum::response::IntoResponse {
    (
        [(axum::http::header::CONTENT_TYPE, "text/css")],
        include_str!("../static/site.css"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppState, SiteMeta};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use bandstand_app::services::gig_service::RelatedSelection;
    use bandstand_domain::error::SiteError;
    use bandstand_domain::gig::Gig;
    use bandstand_domain::member::{BandMember, Biography};
    use bandstand_domain::merch::MerchProduct;
    use bandstand_domain::post::Post;
    use bandstand_domain::release::{Release, Track};
    use bandstand_domain::time::Timestamp;
    use bandstand_domain::video::Video;
    use chrono::TimeZone;
    use tower::ServiceExt;

    struct StubContent;
    struct StubNewsletter;

    fn gig(slug: &str, year: i32) -> Gig {
        Gig::builder()
            .id(format!("gig-{slug}"))
            .title(format!("Show {slug}"))
            .date(chrono::Utc.with_ymd_and_hms(year, 4, 20, 20, 0, 0).unwrap())
            .venue("Rockefeller")
            .city("Oslo")
            .slug(slug)
            .build()
            .unwrap()
    }

    impl bandstand_app::ports::GigRepository for StubContent {
        async fn past_gigs(&self, _now: Timestamp) -> Result<Vec<Gig>, SiteError> {
            Ok(vec![gig("encore-night", 2024), gig("first-show", 2023)])
        }
        async fn upcoming_gigs(&self, _now: Timestamp) -> Result<Vec<Gig>, SiteError> {
            Ok(vec![])
        }
        async fn all_gigs(&self) -> Result<Vec<Gig>, SiteError> {
            Ok(vec![gig("encore-night", 2024), gig("first-show", 2023)])
        }
        async fn gig_by_slug(&self, slug: &str) -> Result<Option<Gig>, SiteError> {
            if slug == "encore-night" {
                Ok(Some(gig("encore-night", 2024)))
            } else {
                Ok(None)
            }
        }
    }

    impl bandstand_app::ports::CatalogRepository for StubContent {
        async fn latest_releases(&self, _limit: usize) -> Result<Vec<Release>, SiteError> {
            Ok(vec![])
        }
        async fn all_releases(&self) -> Result<Vec<Release>, SiteError> {
            Ok(vec![])
        }
        async fn release_by_slug(&self, _slug: &str) -> Result<Option<Release>, SiteError> {
            Ok(None)
        }
        async fn track_by_slug(&self, _slug: &str) -> Result<Option<Track>, SiteError> {
            Ok(None)
        }
        async fn all_tracks(&self) -> Result<Vec<Track>, SiteError> {
            Ok(vec![])
        }
        async fn tracks_for_release(&self, _release_slug: &str) -> Result<Vec<Track>, SiteError> {
            Ok(vec![])
        }
        async fn videos(&self) -> Result<Vec<Video>, SiteError> {
            Ok(vec![])
        }
    }

    impl bandstand_app::ports::NewsRepository for StubContent {
        async fn latest_posts(&self, _limit: usize) -> Result<Vec<Post>, SiteError> {
            Ok(vec![])
        }
        async fn all_posts(&self) -> Result<Vec<Post>, SiteError> {
            Ok(vec![])
        }
        async fn post_by_slug(&self, _slug: &str) -> Result<Option<Post>, SiteError> {
            Ok(None)
        }
    }

    impl bandstand_app::ports::BandRepository for StubContent {
        async fn members(&self) -> Result<Vec<BandMember>, SiteError> {
            Ok(vec![])
        }
        async fn member_by_slug(&self, _slug: &str) -> Result<Option<BandMember>, SiteError> {
            Ok(None)
        }
        async fn biography(&self) -> Result<Option<Biography>, SiteError> {
            Ok(None)
        }
    }

    impl bandstand_app::ports::MerchRepository for StubContent {
        async fn products(&self) -> Result<Vec<MerchProduct>, SiteError> {
            Ok(vec![])
        }
    }

    impl bandstand_app::ports::NewsletterGateway for StubNewsletter {
        async fn subscribe(&self, _email: &str) -> Result<(), SiteError> {
            Ok(())
        }
    }

    fn test_state() -> AppState<StubContent, StubNewsletter> {
        AppState::new(
            StubContent,
            StubNewsletter,
            RelatedSelection::default(),
            SiteMeta {
                base_url: "https://band.example".to_owned(),
                title: "Bandstand".to_owned(),
                tagline: "Loud and proud".to_owned(),
                contact_email: "booking@band.example".to_owned(),
            },
        )
    }

    async fn get_response(uri: &str) -> axum::response::Response {
        build(test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = get_response("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_render_front_page() {
        let response = get_response("/").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_render_archive_with_year_filter() {
        let response = get_response("/gigs/past?year=2024&sort=asc&page=1").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_render_gig_detail_for_known_slug() {
        let response = get_response("/gigs/archive/encore-night").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_gig() {
        let response = get_response("/gigs/archive/no-such-show").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_serve_sitemap_as_xml() {
        let response = get_response("/sitemap.xml").await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert_eq!(content_type, "application/xml");
    }

    #[tokio::test]
    async fn should_redirect_after_newsletter_signup() {
        let response = build(test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/newsletter")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("email=fan%40example.com"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(location.starts_with("/?signup=ok"));
    }
}
