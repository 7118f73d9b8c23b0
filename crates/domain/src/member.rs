//! Band member profiles and the shared band biography.

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, ValidationError};
use crate::id::MemberId;

/// A band member with a profile page under `/about/{slug}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandMember {
    pub id: MemberId,
    pub name: String,
    pub slug: String,
    pub role: Option<String>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
}

impl BandMember {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] when a required field is empty.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.slug.is_empty() {
            return Err(ValidationError::EmptySlug.into());
        }
        Ok(())
    }
}

/// The band biography page content. There is at most one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Biography {
    pub title: String,
    pub main_image_url: Option<String>,
    pub text: String,
    pub photo_gallery: Vec<String>,
}

impl Biography {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] when the title is empty.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_validate_member_with_required_fields() {
        let member = BandMember {
            id: MemberId::new("m1"),
            name: "Mari".to_string(),
            slug: "mari".to_string(),
            role: Some("vocals".to_string()),
            photo_url: None,
            bio: None,
        };
        assert!(member.validate().is_ok());
    }

    #[test]
    fn should_reject_member_with_empty_name() {
        let member = BandMember {
            id: MemberId::new("m1"),
            name: String::new(),
            slug: "mari".to_string(),
            role: None,
            photo_url: None,
            bio: None,
        };
        assert!(matches!(
            member.validate(),
            Err(SiteError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_reject_biography_with_empty_title() {
        let bio = Biography {
            title: String::new(),
            main_image_url: None,
            text: "Founded in a rehearsal basement.".to_string(),
            photo_gallery: Vec::new(),
        };
        assert!(bio.validate().is_err());
    }
}
