//! # bandstand-adapter-cms-sanity
//!
//! Content adapter backed by the [Sanity](https://www.sanity.io) HTTP
//! query API. Content is modelled as GROQ projections; each repository
//! method runs one query and converts the wire documents into validated
//! domain records at this boundary.
//!
//! ## Dependency rule
//! Implements the `bandstand-app` content ports. Sanity document shapes
//! and `reqwest` never leak past this crate.

pub mod client;
pub mod error;
pub mod queries;
pub mod records;
pub mod store;

pub use client::{SanityClient, SanityConfig};
pub use store::SanityContentStore;
