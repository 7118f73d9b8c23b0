//! # bandstand-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports): per-aggregate content repositories and the newsletter gateway
//! - Define **driving ports** as use-case services:
//!   - `GigService` — archive/upcoming listings, detail, related gigs
//!   - `MediaService` — releases, tracks, videos
//!   - `NewsService`, `BandService`, `MerchService`
//!   - `NewsletterService` — validate and forward subscriptions
//! - Orchestrate domain objects without knowing *how* content is fetched
//!
//! ## Dependency rule
//! Depends on `bandstand-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
