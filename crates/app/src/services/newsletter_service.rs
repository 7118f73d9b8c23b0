//! Newsletter service — subscription use-case.

use std::sync::Arc;

use bandstand_domain::error::{SiteError, ValidationError};

use crate::ports::NewsletterGateway;

/// Application service for newsletter signups.
pub struct NewsletterService<G> {
    gateway: Arc<G>,
}

impl<G: NewsletterGateway> NewsletterService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Validate and forward a subscription request.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] for a malformed address, or a
    /// gateway error propagated from the provider.
    #[tracing::instrument(skip(self, email))]
    pub async fn subscribe(&self, email: &str) -> Result<(), SiteError> {
        let email = email.trim();
        if !is_plausible_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        self.gateway.subscribe(email).await
    }
}

/// Cheap shape check. The provider does real verification; this only
/// rejects input that cannot possibly be an address.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
