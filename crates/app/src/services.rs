//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic
//! parameters (constructor injection), keeping this layer decoupled from
//! concrete adapters. Services share one content store through `Arc`.

pub mod band_service;
pub mod gig_service;
pub mod media_service;
pub mod merch_service;
pub mod news_service;
pub mod newsletter_service;
