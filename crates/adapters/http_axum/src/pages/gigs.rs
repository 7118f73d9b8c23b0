//! Gig pages — upcoming list, past-gig archive, and detail pages.

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use bandstand_app::ports::{ContentStore, NewsletterGateway};
use bandstand_domain::archive::{SortOrder, YearFilter};
use bandstand_domain::time::now;
use bandstand_domain::video::youtube_video_id;

use crate::error::PageError;
use crate::state::AppState;
use crate::view::{GigCard, long_date};

/// Upcoming gigs page template.
#[derive(Template)]
#[template(path = "gig_list.html")]
pub struct GigListTemplate {
    gigs: Vec<GigCard>,
}

impl IntoResponse for GigListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// A year tab in the archive filter bar.
pub struct YearTab {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// A numbered page link in the archive pager.
pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub active: bool,
}

/// Past-gig archive page template.
#[derive(Template)]
#[template(path = "gig_archive.html")]
pub struct GigArchiveTemplate {
    gigs: Vec<GigCard>,
    year_tabs: Vec<YearTab>,
    sort_toggle_href: String,
    sort_toggle_label: String,
    page_links: Vec<PageLink>,
    prev_href: String,
    next_href: String,
    has_prev: bool,
    has_next: bool,
    is_empty: bool,
}

impl IntoResponse for GigArchiveTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Gig detail page template.
#[derive(Template)]
#[template(path = "gig_detail.html")]
pub struct GigDetailTemplate {
    title: String,
    date: String,
    venue_line: String,
    poster_url: String,
    has_poster: bool,
    setlist: Vec<String>,
    has_setlist: bool,
    facts: String,
    has_facts: bool,
    photos: Vec<String>,
    youtube_embed: String,
    has_video: bool,
    related: Vec<GigCard>,
}

impl IntoResponse for GigDetailTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /gigs` — upcoming gigs, soonest first.
pub async fn upcoming<C, N>(
    State(state): State<AppState<C, N>>,
) -> Result<GigListTemplate, PageError>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let gigs = state.gig_service.upcoming_gigs(now()).await?;
    Ok(GigListTemplate {
        gigs: gigs.iter().map(GigCard::from).collect(),
    })
}

/// Query state carried by the archive page.
#[derive(Deserialize, Default)]
pub struct ArchiveQuery {
    pub year: Option<String>,
    pub sort: Option<String>,
    pub page: Option<usize>,
}

fn archive_href(year: YearFilter, sort: SortOrder, page: usize) -> String {
    format!("/gigs/past?year={year}&sort={sort}&page={page}")
}

/// `GET /gigs/past` — the filterable, sortable, paginated archive.
pub async fn archive<C, N>(
    State(state): State<AppState<C, N>>,
    Query(query): Query<ArchiveQuery>,
) -> Result<GigArchiveTemplate, PageError>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let mut archive = state.gig_service.archive(now()).await?;

    if let Some(raw) = query.year.as_deref() {
        archive.set_year(YearFilter::parse(raw));
    }
    if let Some(raw) = query.sort.as_deref() {
        archive.set_sort(SortOrder::parse(raw));
    }
    if let Some(page) = query.page {
        archive.set_page(page);
    }

    let year = archive.selected_year();
    let sort = archive.sort_order();

    let mut year_tabs = vec![YearTab {
        label: "All".to_owned(),
        href: archive_href(YearFilter::All, sort, 1),
        active: year == YearFilter::All,
    }];
    for candidate in archive.years() {
        year_tabs.push(YearTab {
            label: candidate.to_string(),
            href: archive_href(YearFilter::Year(*candidate), sort, 1),
            active: year == YearFilter::Year(*candidate),
        });
    }

    let sort_toggle_label = match sort {
        SortOrder::Desc => "Oldest first".to_owned(),
        SortOrder::Asc => "Newest first".to_owned(),
    };

    let current = archive.page();
    let page_links = (1..=archive.total_pages())
        .map(|number| PageLink {
            number,
            href: archive_href(year, sort, number),
            active: number == current.number,
        })
        .collect();

    Ok(GigArchiveTemplate {
        gigs: current.gigs.iter().map(|gig| GigCard::from(*gig)).collect(),
        sort_toggle_href: archive_href(year, sort.toggled(), 1),
        sort_toggle_label,
        page_links,
        prev_href: archive_href(year, sort, current.number.saturating_sub(1)),
        next_href: archive_href(year, sort, current.number + 1),
        has_prev: current.has_prev(),
        has_next: current.has_next(),
        is_empty: current.is_empty(),
        year_tabs,
    })
}

/// `GET /gigs/archive/{slug}` — one past gig, with related gigs below.
pub async fn detail<C, N>(
    State(state): State<AppState<C, N>>,
    Path(slug): Path<String>,
) -> Result<GigDetailTemplate, PageError>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let gig = state.gig_service.gig_by_slug(&slug).await?;
    let related = state.gig_service.related_gigs(&gig).await?;

    let poster_url = gig
        .poster
        .as_ref()
        .map(|poster| poster.url.clone())
        .unwrap_or_default();
    let setlist: Vec<String> = gig
        .setlist
        .as_deref()
        .unwrap_or_default()
        .lines()
        .map(str::to_owned)
        .filter(|line| !line.is_empty())
        .collect();
    let facts = gig.facts.clone().unwrap_or_default();
    let youtube_embed = gig
        .youtube_url
        .as_deref()
        .and_then(youtube_video_id)
        .map(|id| format!("https://www.youtube.com/embed/{id}"))
        .unwrap_or_default();

    Ok(GigDetailTemplate {
        title: gig.title.clone(),
        date: long_date(gig.date),
        venue_line: format!("{}, {}", gig.venue, gig.city),
        has_poster: !poster_url.is_empty(),
        poster_url,
        has_setlist: !setlist.is_empty(),
        setlist,
        has_facts: !facts.is_empty(),
        facts,
        photos: gig.photo_gallery.clone(),
        has_video: !youtube_embed.is_empty(),
        youtube_embed,
        related: related.iter().map(GigCard::from).collect(),
    })
}
