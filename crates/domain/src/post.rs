//! Post — a news article.

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, ValidationError};
use crate::id::PostId;
use crate::time::Timestamp;

/// A news post, listed newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub published_at: Timestamp,
    pub main_image_url: Option<String>,
    /// Article body; absent in list projections.
    pub body: Option<String>,
    /// Last modification time, used for sitemap entries.
    pub updated_at: Option<Timestamp>,
}

impl Post {
    /// Create a builder for constructing a [`Post`].
    #[must_use]
    pub fn builder() -> PostBuilder {
        PostBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] when a required field is empty.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if self.slug.is_empty() {
            return Err(ValidationError::EmptySlug.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Post`].
#[derive(Debug, Default)]
pub struct PostBuilder {
    id: Option<PostId>,
    title: Option<String>,
    slug: Option<String>,
    published_at: Option<Timestamp>,
    main_image_url: Option<String>,
    body: Option<String>,
    updated_at: Option<Timestamp>,
}

impl PostBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<PostId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn published_at(mut self, ts: Timestamp) -> Self {
        self.published_at = Some(ts);
        self
    }

    #[must_use]
    pub fn main_image_url(mut self, url: impl Into<String>) -> Self {
        self.main_image_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn updated_at(mut self, ts: Timestamp) -> Self {
        self.updated_at = Some(ts);
        self
    }

    /// Consume the builder, validate, and return a [`Post`].
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] if a required field is missing
    /// or empty, or [`ValidationError::MissingDate`] when no publication
    /// date was set.
    pub fn build(self) -> Result<Post, SiteError> {
        let published_at = self.published_at.ok_or(ValidationError::MissingDate)?;
        let post = Post {
            id: self.id.unwrap_or_else(|| PostId::new(String::new())),
            title: self.title.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            published_at,
            main_image_url: self.main_image_url,
            body: self.body,
            updated_at: self.updated_at,
        };
        post.validate()?;
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn should_build_valid_post() {
        let post = Post::builder()
            .id("post-1")
            .title("First headline tour")
            .slug("first-headline-tour")
            .published_at(
                Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0)
                    .single()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert!(post.main_image_url.is_none());
        assert!(post.updated_at.is_none());
    }

    #[test]
    fn should_reject_post_without_publication_date() {
        let result = Post::builder().id("post-1").title("T").slug("t").build();
        assert!(matches!(
            result,
            Err(SiteError::Validation(ValidationError::MissingDate))
        ));
    }

    #[test]
    fn should_reject_post_with_empty_title() {
        let result = Post::builder()
            .id("post-1")
            .slug("t")
            .published_at(
                Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0)
                    .single()
                    .unwrap(),
            )
            .build();
        assert!(matches!(
            result,
            Err(SiteError::Validation(ValidationError::EmptyTitle))
        ));
    }
}
