//! Wire documents and their conversion into validated domain records.
//!
//! Documents mirror the GROQ projections in [`crate::queries`]. All
//! validation happens in the `TryFrom` impls, so anything past this
//! module is a checked domain record.

use bandstand_domain::error::SiteError;
use bandstand_domain::gig::{Gig, PosterImage};
use bandstand_domain::member::{BandMember, Biography};
use bandstand_domain::merch::MerchProduct;
use bandstand_domain::post::Post;
use bandstand_domain::release::{Release, ReleaseRef, Track};
use bandstand_domain::time::Timestamp;
use bandstand_domain::video::Video;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::error::CmsError;

/// Parse a Sanity datetime or date-only string.
pub(crate) fn parse_timestamp(raw: &str) -> Result<Timestamp, CmsError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(ts) = date.and_hms_opt(0, 0, 0) {
            return Ok(ts.and_utc());
        }
    }
    Err(CmsError::BadTimestamp {
        raw: raw.to_owned(),
    })
}

/// One block of Sanity Portable Text.
#[derive(Debug, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub children: Vec<TextSpan>,
}

#[derive(Debug, Deserialize)]
pub struct TextSpan {
    #[serde(default)]
    pub text: String,
}

/// Flatten Portable Text into plain paragraphs separated by blank lines.
pub(crate) fn flatten_blocks(blocks: &[TextBlock]) -> String {
    blocks
        .iter()
        .map(|block| {
            block
                .children
                .iter()
                .map(|span| span.text.as_str())
                .collect::<String>()
        })
        .filter(|paragraph| !paragraph.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GigDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub date: String,
    pub venue: String,
    pub city: String,
    pub slug: String,
    pub tickets_url: Option<String>,
    pub poster_url: Option<String>,
    pub poster_width: Option<f64>,
    pub poster_height: Option<f64>,
    pub setlist: Option<String>,
    pub interesting_facts: Option<String>,
    #[serde(default)]
    pub photo_gallery: Option<Vec<String>>,
    pub youtube_url: Option<String>,
}

impl TryFrom<GigDoc> for Gig {
    type Error = SiteError;

    fn try_from(doc: GigDoc) -> Result<Self, Self::Error> {
        let mut builder = Gig::builder()
            .id(doc.id)
            .title(doc.title)
            .date(parse_timestamp(&doc.date)?)
            .venue(doc.venue)
            .city(doc.city)
            .slug(doc.slug)
            .photo_gallery(doc.photo_gallery.unwrap_or_default());
        if let Some(url) = doc.tickets_url {
            builder = builder.tickets_url(url);
        }
        if let Some(url) = doc.poster_url {
            builder = builder.poster(PosterImage {
                url,
                width: doc.poster_width.unwrap_or_default().round().max(0.0) as u32,
                height: doc.poster_height.unwrap_or_default().round().max(0.0) as u32,
            });
        }
        if let Some(setlist) = doc.setlist {
            builder = builder.setlist(setlist);
        }
        if let Some(facts) = doc.interesting_facts {
            builder = builder.facts(facts);
        }
        if let Some(url) = doc.youtube_url {
            builder = builder.youtube_url(url);
        }
        builder.build()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub artwork_url: String,
    pub smart_link: Option<String>,
    pub release_date: String,
    pub track_count: Option<usize>,
    pub first_track_slug: Option<String>,
}

impl TryFrom<ReleaseDoc> for Release {
    type Error = SiteError;

    fn try_from(doc: ReleaseDoc) -> Result<Self, Self::Error> {
        let mut builder = Release::builder()
            .id(doc.id)
            .title(doc.title)
            .slug(doc.slug)
            .artwork_url(doc.artwork_url)
            .release_date(parse_timestamp(&doc.release_date)?)
            .track_count(doc.track_count.unwrap_or_default());
        if let Some(url) = doc.smart_link {
            builder = builder.smart_link(url);
        }
        if let Some(slug) = doc.first_track_slug {
            builder = builder.first_track_slug(slug);
        }
        builder.build()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRefDoc {
    pub title: String,
    pub artwork_url: String,
    pub smart_link: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub lyrics: Option<Vec<TextBlock>>,
    #[serde(default)]
    pub about_song: Option<Vec<TextBlock>>,
    #[serde(default)]
    pub about_instrumental: Option<Vec<TextBlock>>,
    pub release: Option<ReleaseRefDoc>,
}

fn optional_text(blocks: Option<Vec<TextBlock>>) -> Option<String> {
    let text = flatten_blocks(&blocks?);
    if text.is_empty() { None } else { Some(text) }
}

impl TryFrom<TrackDoc> for Track {
    type Error = SiteError;

    fn try_from(doc: TrackDoc) -> Result<Self, Self::Error> {
        let track = Track {
            id: doc.id.into(),
            title: doc.title,
            slug: doc.slug,
            lyrics: optional_text(doc.lyrics),
            about_song: optional_text(doc.about_song),
            about_instrumental: optional_text(doc.about_instrumental),
            release: doc.release.map(|release| ReleaseRef {
                title: release.title,
                artwork_url: release.artwork_url,
                smart_link: release.smart_link,
            }),
        };
        track.validate()?;
        Ok(track)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub published_at: String,
    #[serde(rename = "_updatedAt")]
    pub updated_at: Option<String>,
    pub main_image_url: Option<String>,
    #[serde(default)]
    pub body: Option<Vec<TextBlock>>,
}

impl TryFrom<PostDoc> for Post {
    type Error = SiteError;

    fn try_from(doc: PostDoc) -> Result<Self, Self::Error> {
        let mut builder = Post::builder()
            .id(doc.id)
            .title(doc.title)
            .slug(doc.slug)
            .published_at(parse_timestamp(&doc.published_at)?);
        if let Some(url) = doc.main_image_url {
            builder = builder.main_image_url(url);
        }
        if let Some(body) = optional_text(doc.body) {
            builder = builder.body(body);
        }
        if let Some(raw) = doc.updated_at {
            builder = builder.updated_at(parse_timestamp(&raw)?);
        }
        builder.build()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    pub role: Option<String>,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub bio: Option<Vec<TextBlock>>,
}

impl TryFrom<MemberDoc> for BandMember {
    type Error = SiteError;

    fn try_from(doc: MemberDoc) -> Result<Self, Self::Error> {
        let member = BandMember {
            id: doc.id.into(),
            name: doc.name,
            slug: doc.slug,
            role: doc.role,
            photo_url: doc.photo_url,
            bio: optional_text(doc.bio),
        };
        member.validate()?;
        Ok(member)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BioDoc {
    pub title: String,
    pub main_image_url: Option<String>,
    #[serde(default)]
    pub text_content: Option<Vec<TextBlock>>,
    #[serde(default)]
    pub photo_gallery: Option<Vec<String>>,
}

impl TryFrom<BioDoc> for Biography {
    type Error = SiteError;

    fn try_from(doc: BioDoc) -> Result<Self, Self::Error> {
        let bio = Biography {
            title: doc.title,
            main_image_url: doc.main_image_url,
            text: optional_text(doc.text_content).unwrap_or_default(),
            photo_gallery: doc.photo_gallery.unwrap_or_default(),
        };
        bio.validate()?;
        Ok(bio)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

impl TryFrom<MerchDoc> for MerchProduct {
    type Error = SiteError;

    fn try_from(doc: MerchDoc) -> Result<Self, Self::Error> {
        let product = MerchProduct {
            id: doc.id.into(),
            name: doc.name,
            price: doc.price.unwrap_or_default().round().max(0.0) as u32,
            image_url: doc.image_url,
        };
        product.validate()?;
        Ok(product)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub youtube_url: String,
    pub order: Option<i32>,
}

impl TryFrom<VideoDoc> for Video {
    type Error = SiteError;

    fn try_from(doc: VideoDoc) -> Result<Self, Self::Error> {
        let video = Video {
            id: doc.id.into(),
            title: doc.title,
            youtube_url: doc.youtube_url,
            order: doc.order.unwrap_or_default(),
        };
        video.validate()?;
        Ok(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_rfc3339_and_date_only_timestamps() {
        assert!(parse_timestamp("2025-06-14T20:00:00Z").is_ok());
        assert!(parse_timestamp("2025-06-14").is_ok());
        assert!(parse_timestamp("next friday").is_err());
    }

    #[test]
    fn should_flatten_portable_text_to_paragraphs() {
        let blocks: Vec<TextBlock> = serde_json::from_str(
            r#"[
                {"children": [{"text": "First "}, {"text": "paragraph."}]},
                {"children": [{"text": "   "}]},
                {"children": [{"text": "Second."}]}
            ]"#,
        )
        .unwrap();
        assert_eq!(flatten_blocks(&blocks), "First paragraph.\n\nSecond.");
    }

    #[test]
    fn should_convert_gig_doc_into_domain_record() {
        let doc: GigDoc = serde_json::from_str(
            r#"{
                "_id": "gig-1",
                "title": "Release party",
                "date": "2024-11-09T21:00:00Z",
                "venue": "Blitz",
                "city": "Oslo",
                "slug": "release-party",
                "posterUrl": "https://cdn.sanity.io/poster.jpg",
                "posterWidth": 1200.0,
                "posterHeight": 1600.0
            }"#,
        )
        .unwrap();

        let gig = Gig::try_from(doc).unwrap();
        assert_eq!(gig.slug, "release-party");
        let poster = gig.poster.unwrap();
        assert_eq!((poster.width, poster.height), (1200, 1600));
    }

    #[test]
    fn should_reject_gig_doc_with_bad_date() {
        let doc: GigDoc = serde_json::from_str(
            r#"{
                "_id": "gig-1",
                "title": "Release party",
                "date": "whenever",
                "venue": "Blitz",
                "city": "Oslo",
                "slug": "release-party"
            }"#,
        )
        .unwrap();

        assert!(Gig::try_from(doc).is_err());
    }
}
