//! # bandstand-domain
//!
//! Pure domain model for the bandstand band website.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **content records** served by the site (gigs, releases,
//!   tracks, news posts, band members, merch products, videos)
//! - Contain all invariant enforcement: records are validated when they
//!   are constructed at the data-loader boundary, never downstream
//! - Define the **interactive view-state machines**: the gig archive
//!   filter/sort/paginate view, the release carousel, and the navigation
//!   menu (including the scroll lock held while the mobile overlay is open)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod gig;
pub mod member;
pub mod merch;
pub mod post;
pub mod release;
pub mod video;

pub mod archive;
pub mod carousel;
pub mod menu;
