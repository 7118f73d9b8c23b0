//! # bandstand-adapter-content-fixture
//!
//! In-memory content store seeded with a small, self-consistent catalog
//! of demo content. Used by local development and the integration
//! tests, so the site runs with no CMS credentials at all.

mod seed;
mod store;

pub use store::{FixtureContent, FixtureNewsletter};

/// Slug of a past gig present in the seed, for tests.
pub const SAMPLE_PAST_GIG_SLUG: &str = "hometown-release-party";
/// Slug of a release with more than one track in the seed.
pub const SAMPLE_ALBUM_SLUG: &str = "midnight-signal";
/// Slug of a track in the seed.
pub const SAMPLE_TRACK_SLUG: &str = "static-bloom";
/// Slug of a post in the seed.
pub const SAMPLE_POST_SLUG: &str = "autumn-tour-announced";
/// Slug of a band member in the seed.
pub const SAMPLE_MEMBER_SLUG: &str = "vera-holt";
