//! Merch — products listed on the merch page.
//!
//! There is no cart or checkout; orders go through the contact page, so
//! a product is just a name, a price, and a photo.

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, ValidationError};
use crate::id::ProductId;

/// A merchandise product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchProduct {
    pub id: ProductId,
    pub name: String,
    /// Price in whole currency units, displayed verbatim.
    pub price: u32,
    pub image_url: Option<String>,
}

impl MerchProduct {
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
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_validate_product_with_name() {
        let product = MerchProduct {
            id: ProductId::new("p1"),
            name: "Tour shirt".to_string(),
            price: 650,
            image_url: None,
        };
        assert!(product.validate().is_ok());
    }

    #[test]
    fn should_reject_product_without_name() {
        let product = MerchProduct {
            id: ProductId::new("p1"),
            name: String::new(),
            price: 650,
            image_url: None,
        };
        assert!(matches!(
            product.validate(),
            Err(SiteError::Validation(ValidationError::EmptyName))
        ));
    }
}
