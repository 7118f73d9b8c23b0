//! Front page — release showcase, next gigs, latest news, signup form.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use bandstand_app::ports::{ContentStore, NewsletterGateway};
use bandstand_domain::carousel::{Carousel, slides_for_width};
use bandstand_domain::time::now;

use crate::error::PageError;
use crate::state::AppState;
use crate::view::{GigCard, PostCard, ReleaseCard};

/// Front page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    site_title: String,
    tagline: String,
    showcase: Vec<ReleaseCard>,
    showcase_prev: usize,
    showcase_next: usize,
    has_showcase_prev: bool,
    has_showcase_next: bool,
    upcoming: Vec<GigCard>,
    posts: Vec<PostCard>,
    signup_notice: String,
    has_signup_notice: bool,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Query state carried by the front page.
#[derive(Deserialize, Default)]
pub struct HomeQuery {
    /// Showcase position, clamped server-side.
    pub slide: Option<usize>,
    /// Outcome of the newsletter form, set by the PRG redirect.
    pub signup: Option<String>,
}

/// `GET /` — the front page.
pub async fn index<C, N>(
    State(state): State<AppState<C, N>>,
    Query(query): Query<HomeQuery>,
) -> Result<HomeTemplate, PageError>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let releases = state.media_service.showcase_releases().await?;
    let upcoming = state.gig_service.upcoming_gigs(now()).await?;
    let posts = state.news_service.front_page_posts().await?;

    let mut carousel = Carousel::new(releases.len(), slides_for_width(1280));
    if let Some(slide) = query.slide {
        carousel.set_index(slide);
    }

    let showcase = carousel
        .visible_range()
        .filter_map(|idx| releases.get(idx))
        .map(ReleaseCard::from)
        .collect();

    let signup_notice = match query.signup.as_deref() {
        Some("ok") => "Thanks — you are on the list.".to_owned(),
        Some("invalid") => "That does not look like an email address.".to_owned(),
        Some("error") => "Signup is unavailable right now, try again later.".to_owned(),
        _ => String::new(),
    };

    Ok(HomeTemplate {
        site_title: state.meta.title.clone(),
        tagline: state.meta.tagline.clone(),
        showcase_prev: carousel.current_index().saturating_sub(1),
        showcase_next: carousel.current_index() + 1,
        has_showcase_prev: carousel.has_prev(),
        has_showcase_next: carousel.has_next(),
        showcase,
        upcoming: upcoming.iter().take(3).map(GigCard::from).collect(),
        posts: posts.iter().map(PostCard::from).collect(),
        has_signup_notice: !signup_notice.is_empty(),
        signup_notice,
    })
}
