//! View models — flattened, template-ready projections of domain records.
//!
//! Templates only ever see plain strings and booleans; every optional
//! field is resolved here so the HTML stays free of `Option` handling.

use bandstand_domain::gig::Gig;
use bandstand_domain::member::BandMember;
use bandstand_domain::merch::MerchProduct;
use bandstand_domain::post::Post;
use bandstand_domain::release::Release;
use bandstand_domain::time::Timestamp;
use bandstand_domain::video::Video;

/// `14 June 2025` — the long date format used across the site.
pub fn long_date(ts: Timestamp) -> String {
    ts.format("%-d %B %Y").to_string()
}

/// A gig rendered as a list row or card.
pub struct GigCard {
    pub title: String,
    pub date: String,
    pub venue_line: String,
    pub href: String,
    pub poster_url: String,
    pub has_poster: bool,
    pub tickets_url: String,
    pub has_tickets: bool,
}

impl From<&Gig> for GigCard {
    fn from(gig: &Gig) -> Self {
        let poster_url = gig
            .poster
            .as_ref()
            .map(|poster| poster.url.clone())
            .unwrap_or_default();
        let tickets_url = gig.tickets_url.clone().unwrap_or_default();
        Self {
            title: gig.title.clone(),
            date: long_date(gig.date),
            venue_line: format!("{}, {}", gig.venue, gig.city),
            href: format!("/gigs/archive/{}", gig.slug),
            has_poster: !poster_url.is_empty(),
            poster_url,
            has_tickets: !tickets_url.is_empty(),
            tickets_url,
        }
    }
}

/// A release rendered as a showcase or grid tile.
pub struct ReleaseCard {
    pub title: String,
    pub href: String,
    pub artwork_url: String,
    pub year: String,
}

impl From<&Release> for ReleaseCard {
    fn from(release: &Release) -> Self {
        Self {
            title: release.title.clone(),
            href: release.link_path(),
            artwork_url: release.artwork_url.clone(),
            year: release.release_date.format("%Y").to_string(),
        }
    }
}

/// A news post rendered as a teaser.
pub struct PostCard {
    pub title: String,
    pub href: String,
    pub date: String,
    pub image_url: String,
    pub has_image: bool,
}

impl From<&Post> for PostCard {
    fn from(post: &Post) -> Self {
        let image_url = post.main_image_url.clone().unwrap_or_default();
        Self {
            title: post.title.clone(),
            href: format!("/news/{}", post.slug),
            date: long_date(post.published_at),
            has_image: !image_url.is_empty(),
            image_url,
        }
    }
}

/// A video rendered as a thumbnail link.
pub struct VideoCard {
    pub title: String,
    pub youtube_url: String,
    pub thumbnail_url: String,
    pub has_thumbnail: bool,
}

impl From<&Video> for VideoCard {
    fn from(video: &Video) -> Self {
        let thumbnail_url = video.thumbnail_url().unwrap_or_default();
        Self {
            title: video.title.clone(),
            youtube_url: video.youtube_url.clone(),
            has_thumbnail: !thumbnail_url.is_empty(),
            thumbnail_url,
        }
    }
}

/// A band member rendered as a lineup card.
pub struct MemberCard {
    pub name: String,
    pub role: String,
    pub href: String,
    pub photo_url: String,
    pub has_photo: bool,
}

impl From<&BandMember> for MemberCard {
    fn from(member: &BandMember) -> Self {
        let photo_url = member.photo_url.clone().unwrap_or_default();
        Self {
            name: member.name.clone(),
            role: member.role.clone().unwrap_or_default(),
            href: format!("/band/{}", member.slug),
            has_photo: !photo_url.is_empty(),
            photo_url,
        }
    }
}

/// A merch product rendered as a catalog tile.
pub struct ProductCard {
    pub name: String,
    pub price: String,
    pub image_url: String,
    pub has_image: bool,
}

impl From<&MerchProduct> for ProductCard {
    fn from(product: &MerchProduct) -> Self {
        let image_url = product.image_url.clone().unwrap_or_default();
        Self {
            name: product.name.clone(),
            price: format!("€{}", product.price),
            has_image: !image_url.is_empty(),
            image_url,
        }
    }
}
