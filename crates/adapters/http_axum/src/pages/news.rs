//! News pages — the feed and single posts.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};

use bandstand_app::ports::{ContentStore, NewsletterGateway};

use crate::error::PageError;
use crate::state::AppState;
use crate::view::{PostCard, long_date};

/// News feed template.
#[derive(Template)]
#[template(path = "post_list.html")]
pub struct PostListTemplate {
    posts: Vec<PostCard>,
}

impl IntoResponse for PostListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Single post template.
#[derive(Template)]
#[template(path = "post_detail.html")]
pub struct PostDetailTemplate {
    title: String,
    date: String,
    image_url: String,
    has_image: bool,
    paragraphs: Vec<String>,
}

impl IntoResponse for PostDetailTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /news` — all posts, newest first.
pub async fn list<C, N>(
    State(state): State<AppState<C, N>>,
) -> Result<PostListTemplate, PageError>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let posts = state.news_service.all_posts().await?;
    Ok(PostListTemplate {
        posts: posts.iter().map(PostCard::from).collect(),
    })
}

/// `GET /news/{slug}` — one post.
pub async fn detail<C, N>(
    State(state): State<AppState<C, N>>,
    Path(slug): Path<String>,
) -> Result<PostDetailTemplate, PageError>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let post = state.news_service.post_by_slug(&slug).await?;

    let image_url = post.main_image_url.clone().unwrap_or_default();
    let paragraphs: Vec<String> = post
        .body
        .as_deref()
        .unwrap_or_default()
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_owned)
        .collect();

    Ok(PostDetailTemplate {
        title: post.title.clone(),
        date: long_date(post.published_at),
        has_image: !image_url.is_empty(),
        image_url,
        paragraphs,
    })
}
