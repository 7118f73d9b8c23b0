//! XML sitemap.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

use bandstand_app::ports::{ContentStore, NewsletterGateway};

use crate::error::PageError;
use crate::nav::static_routes;
use crate::state::AppState;

fn append_url(xml: &mut String, base_url: &str, path: &str) {
    xml.push_str("  <url><loc>");
    xml.push_str(base_url);
    xml.push_str(path);
    xml.push_str("</loc></url>\n");
}

/// `GET /sitemap.xml` — static routes plus every content detail page.
pub async fn sitemap<C, N>(State(state): State<AppState<C, N>>) -> Result<Response, PageError>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let base_url = state.meta.base_url.trim_end_matches('/');

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for path in static_routes() {
        let path = if path == "/" { String::new() } else { path };
        append_url(&mut xml, base_url, &format!("{path}/"));
    }

    for gig in state.gig_service.all_gigs().await? {
        append_url(&mut xml, base_url, &format!("/gigs/archive/{}/", gig.slug));
    }
    // Singles resolve to their track page, which the track loop covers.
    for release in state.media_service.all_releases().await? {
        if !release.is_single() {
            append_url(&mut xml, base_url, &format!("{}/", release.link_path()));
        }
    }
    for track in state.media_service.all_tracks().await? {
        append_url(&mut xml, base_url, &format!("/music/track/{}/", track.slug));
    }
    for post in state.news_service.all_posts().await? {
        append_url(&mut xml, base_url, &format!("/news/{}/", post.slug));
    }
    for member in state.band_service.members().await? {
        append_url(&mut xml, base_url, &format!("/band/{}/", member.slug));
    }

    xml.push_str("</urlset>\n");

    Ok(([(CONTENT_TYPE, "application/xml")], xml).into_response())
}
