//! Music pages — release grid, release and track detail, video list.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use bandstand_app::ports::{ContentStore, NewsletterGateway};

use crate::error::PageError;
use crate::state::AppState;
use crate::view::{ReleaseCard, VideoCard, long_date};

/// Release grid template.
#[derive(Template)]
#[template(path = "release_list.html")]
pub struct ReleaseListTemplate {
    releases: Vec<ReleaseCard>,
}

impl IntoResponse for ReleaseListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// A tracklist row on the release page.
pub struct TrackRow {
    pub title: String,
    pub href: String,
}

/// Release detail template.
#[derive(Template)]
#[template(path = "release_detail.html")]
pub struct ReleaseDetailTemplate {
    title: String,
    artwork_url: String,
    date: String,
    smart_link: String,
    has_smart_link: bool,
    tracks: Vec<TrackRow>,
}

impl IntoResponse for ReleaseDetailTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Track detail template.
#[derive(Template)]
#[template(path = "track_detail.html")]
pub struct TrackDetailTemplate {
    title: String,
    release_title: String,
    artwork_url: String,
    has_artwork: bool,
    smart_link: String,
    has_smart_link: bool,
    lyrics: Vec<String>,
    has_lyrics: bool,
    about_song: String,
    has_about_song: bool,
    about_instrumental: String,
    has_about_instrumental: bool,
}

impl IntoResponse for TrackDetailTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Video list template.
#[derive(Template)]
#[template(path = "video_list.html")]
pub struct VideoListTemplate {
    videos: Vec<VideoCard>,
}

impl IntoResponse for VideoListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /music` — all releases, newest first.
pub async fn releases<C, N>(
    State(state): State<AppState<C, N>>,
) -> Result<ReleaseListTemplate, PageError>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let releases = state.media_service.all_releases().await?;
    Ok(ReleaseListTemplate {
        releases: releases.iter().map(ReleaseCard::from).collect(),
    })
}

/// Response from the release detail handler: singles route straight to
/// their only track, everything else renders the release page.
pub enum ReleaseDetailResponse {
    Page(Box<ReleaseDetailTemplate>),
    Single(Redirect),
}

impl IntoResponse for ReleaseDetailResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Page(template) => template.into_response(),
            Self::Single(redirect) => redirect.into_response(),
        }
    }
}

/// `GET /music/{slug}` — one release with its tracklist.
pub async fn release_detail<C, N>(
    State(state): State<AppState<C, N>>,
    Path(slug): Path<String>,
) -> Result<ReleaseDetailResponse, PageError>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let release = state.media_service.release_by_slug(&slug).await?;

    if release.is_single() {
        if let Some(track_slug) = &release.first_track_slug {
            let target = format!("/music/track/{track_slug}");
            return Ok(ReleaseDetailResponse::Single(Redirect::to(&target)));
        }
    }

    let tracks = state.media_service.release_tracks(&slug).await?;
    let smart_link = release.smart_link.clone().unwrap_or_default();

    Ok(ReleaseDetailResponse::Page(Box::new(ReleaseDetailTemplate {
        title: release.title.clone(),
        artwork_url: release.artwork_url.clone(),
        date: long_date(release.release_date),
        has_smart_link: !smart_link.is_empty(),
        smart_link,
        tracks: tracks
            .iter()
            .map(|track| TrackRow {
                title: track.title.clone(),
                href: format!("/music/track/{}", track.slug),
            })
            .collect(),
    })))
}

/// `GET /music/track/{slug}` — one track with lyrics and notes.
pub async fn track_detail<C, N>(
    State(state): State<AppState<C, N>>,
    Path(slug): Path<String>,
) -> Result<TrackDetailTemplate, PageError>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let track = state.media_service.track_by_slug(&slug).await?;

    let (release_title, artwork_url, smart_link) = match &track.release {
        Some(release) => (
            release.title.clone(),
            release.artwork_url.clone(),
            release.smart_link.clone().unwrap_or_default(),
        ),
        None => (String::new(), String::new(), String::new()),
    };
    let lyrics: Vec<String> = track
        .lyrics
        .as_deref()
        .unwrap_or_default()
        .lines()
        .map(str::to_owned)
        .collect();
    let about_song = track.about_song.clone().unwrap_or_default();
    let about_instrumental = track.about_instrumental.clone().unwrap_or_default();

    Ok(TrackDetailTemplate {
        title: track.title.clone(),
        release_title,
        has_artwork: !artwork_url.is_empty(),
        artwork_url,
        has_smart_link: !smart_link.is_empty(),
        smart_link,
        has_lyrics: !lyrics.is_empty(),
        lyrics,
        has_about_song: !about_song.is_empty(),
        about_song,
        has_about_instrumental: !about_instrumental.is_empty(),
        about_instrumental,
    })
}

/// `GET /videos` — all videos in manual order.
pub async fn videos<C, N>(
    State(state): State<AppState<C, N>>,
) -> Result<VideoListTemplate, PageError>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let videos = state.media_service.videos().await?;
    Ok(VideoListTemplate {
        videos: videos.iter().map(VideoCard::from).collect(),
    })
}
