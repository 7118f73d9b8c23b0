//! # bandstand-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the whole site as **server-side-rendered HTML** that works
//!   with **zero JavaScript**
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTML responses, plus the XML sitemap
//!
//! ## No-JS approach
//! - Every page is rendered server-side as complete HTML via askama.
//! - Interactive state rides in the URL: the gig archive's year filter,
//!   sort order, and page number are query parameters, and the
//!   front-page showcase position is a `slide` parameter. Controls are
//!   plain links and `<form method="get">` elements.
//! - The newsletter form POSTs and redirects (PRG pattern).
//!
//! ## Dependency rule
//! Depends on `bandstand-app` (for port traits and services) and
//! `bandstand-domain` (for the view state machines and records). Never
//! leaks axum types into the domain.

pub mod error;
pub mod nav;
pub mod pages;
pub mod router;
pub mod state;
pub mod view;
