//! Server-side rendered HTML pages (no JavaScript).

pub mod band;
pub mod contacts;
pub mod gigs;
pub mod home;
pub mod merch;
pub mod music;
pub mod news;
pub mod newsletter;
pub mod sitemap;
