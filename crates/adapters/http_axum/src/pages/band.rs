//! Band pages — lineup, member profiles, and the biography.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};

use bandstand_app::ports::{ContentStore, NewsletterGateway};

use crate::error::PageError;
use crate::state::AppState;
use crate::view::MemberCard;

/// Lineup page template.
#[derive(Template)]
#[template(path = "member_list.html")]
pub struct MemberListTemplate {
    members: Vec<MemberCard>,
}

impl IntoResponse for MemberListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Member profile template.
#[derive(Template)]
#[template(path = "member_detail.html")]
pub struct MemberDetailTemplate {
    name: String,
    role: String,
    photo_url: String,
    has_photo: bool,
    paragraphs: Vec<String>,
}

impl IntoResponse for MemberDetailTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Biography page template.
#[derive(Template)]
#[template(path = "bio.html")]
pub struct BioTemplate {
    title: String,
    main_image_url: String,
    has_main_image: bool,
    paragraphs: Vec<String>,
    photos: Vec<String>,
}

impl IntoResponse for BioTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_owned)
        .collect()
}

/// `GET /band` — the lineup.
pub async fn members<C, N>(
    State(state): State<AppState<C, N>>,
) -> Result<MemberListTemplate, PageError>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let members = state.band_service.members().await?;
    Ok(MemberListTemplate {
        members: members.iter().map(MemberCard::from).collect(),
    })
}

/// `GET /band/{slug}` — one member profile.
pub async fn member_detail<C, N>(
    State(state): State<AppState<C, N>>,
    Path(slug): Path<String>,
) -> Result<MemberDetailTemplate, PageError>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let member = state.band_service.member_by_slug(&slug).await?;

    let photo_url = member.photo_url.clone().unwrap_or_default();
    Ok(MemberDetailTemplate {
        name: member.name.clone(),
        role: member.role.clone().unwrap_or_default(),
        has_photo: !photo_url.is_empty(),
        photo_url,
        paragraphs: split_paragraphs(member.bio.as_deref().unwrap_or_default()),
    })
}

/// `GET /bio` — the band biography.
pub async fn biography<C, N>(
    State(state): State<AppState<C, N>>,
) -> Result<BioTemplate, PageError>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let bio = state.band_service.biography().await?;

    let main_image_url = bio.main_image_url.clone().unwrap_or_default();
    Ok(BioTemplate {
        title: bio.title.clone(),
        has_main_image: !main_image_url.is_empty(),
        main_image_url,
        paragraphs: split_paragraphs(&bio.text),
        photos: bio.photo_gallery.clone(),
    })
}
