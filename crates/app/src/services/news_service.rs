//! News service — use-cases for the news feed.

use std::sync::Arc;

use bandstand_domain::error::{NotFoundError, SiteError};
use bandstand_domain::post::Post;

use crate::ports::NewsRepository;

/// How many posts the front page teases.
pub const FRONT_PAGE_POSTS: usize = 3;

/// Application service for news posts.
pub struct NewsService<R> {
    repo: Arc<R>,
}

impl<R: NewsRepository> NewsService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The posts teased on the front page, newest first.
    ///
    /// # Errors
    ///
    /// Returns a content-store error propagated from the repository.
    pub async fn front_page_posts(&self) -> Result<Vec<Post>, SiteError> {
        self.repo.latest_posts(FRONT_PAGE_POSTS).await
    }

    /// All posts, newest first.
    ///
    /// # Errors
    ///
    /// Returns a content-store error propagated from the repository.
    pub async fn all_posts(&self) -> Result<Vec<Post>, SiteError> {
        self.repo.all_posts().await
    }

    /// Look up a post for its detail page.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NotFound`] when no post with `slug` exists,
    /// or a content-store error from the repository.
    pub async fn post_by_slug(&self, slug: &str) -> Result<Post, SiteError> {
        self.repo.post_by_slug(slug).await?.ok_or_else(|| {
            NotFoundError {
                resource: "Post",
                slug: slug.to_owned(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::future::Future;

    struct InMemoryNewsRepo {
        posts: Vec<Post>,
    }

    impl NewsRepository for InMemoryNewsRepo {
        fn latest_posts(
            &self,
            limit: usize,
        ) -> impl Future<Output = Result<Vec<Post>, SiteError>> + Send {
            let result: Vec<Post> = self.posts.iter().take(limit).cloned().collect();
            async { Ok(result) }
        }

        fn all_posts(&self) -> impl Future<Output = Result<Vec<Post>, SiteError>> + Send {
            let result = self.posts.clone();
            async { Ok(result) }
        }

        fn post_by_slug(
            &self,
            slug: &str,
        ) -> impl Future<Output = Result<Option<Post>, SiteError>> + Send {
            let result = self.posts.iter().find(|post| post.slug == slug).cloned();
            async { Ok(result) }
        }
    }

    fn post(slug: &str, day: u32) -> Post {
        Post::builder()
            .id(format!("post-{slug}"))
            .title(slug.to_uppercase())
            .slug(slug)
            .published_at(chrono::Utc.with_ymd_and_hms(2025, 1, day, 9, 0, 0).unwrap())
            .build()
            .unwrap()
    }

    fn make_service(posts: Vec<Post>) -> NewsService<InMemoryNewsRepo> {
        NewsService::new(Arc::new(InMemoryNewsRepo { posts }))
    }

    #[tokio::test]
    async fn should_cap_front_page_posts() {
        let posts: Vec<Post> = (1..=6).map(|day| post(&format!("news-{day}"), day)).collect();
        let svc = make_service(posts);

        let teased = svc.front_page_posts().await.unwrap();
        assert_eq!(teased.len(), FRONT_PAGE_POSTS);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_post() {
        let svc = make_service(vec![post("tour-announced", 3)]);

        let result = svc.post_by_slug("missing").await;
        assert!(matches!(result, Err(SiteError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_post_by_slug() {
        let svc = make_service(vec![post("tour-announced", 3)]);

        let found = svc.post_by_slug("tour-announced").await.unwrap();
        assert_eq!(found.title, "TOUR-ANNOUNCED");
    }
}
