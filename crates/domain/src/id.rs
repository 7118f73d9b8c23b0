//! Typed identifier newtypes wrapping opaque content-store ids.
//!
//! The content store hands out stable string identifiers (`_id`). They
//! are never parsed or generated here — only wrapped so a gig id cannot
//! be confused with a release id.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw content-store identifier.
            #[must_use]
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Access the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the identifier is the empty string.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Gig`](crate::gig::Gig).
    GigId
);

define_id!(
    /// Unique identifier for a [`Release`](crate::release::Release).
    ReleaseId
);

define_id!(
    /// Unique identifier for a [`Track`](crate::release::Track).
    TrackId
);

define_id!(
    /// Unique identifier for a news [`Post`](crate::post::Post).
    PostId
);

define_id!(
    /// Unique identifier for a [`BandMember`](crate::member::BandMember).
    MemberId
);

define_id!(
    /// Unique identifier for a [`MerchProduct`](crate::merch::MerchProduct).
    ProductId
);

define_id!(
    /// Unique identifier for a [`Video`](crate::video::Video).
    VideoId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_raw_identifier() {
        let id = GigId::new("gig-abc123");
        assert_eq!(id.as_str(), "gig-abc123");
        assert_eq!(id.to_string(), "gig-abc123");
    }

    #[test]
    fn should_compare_ids_by_value() {
        assert_eq!(PostId::from("p1"), PostId::new("p1"));
        assert_ne!(PostId::from("p1"), PostId::from("p2"));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let id = ReleaseId::new("rel-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"rel-1\"");
        let parsed: ReleaseId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn should_report_empty_identifier() {
        assert!(VideoId::new("").is_empty());
        assert!(!VideoId::new("v").is_empty());
    }
}
