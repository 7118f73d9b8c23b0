//! Merch service — use-cases for the merch catalog.

use std::sync::Arc;

use bandstand_domain::error::SiteError;
use bandstand_domain::merch::MerchProduct;

use crate::ports::MerchRepository;

/// Application service for merch listings.
pub struct MerchService<R> {
    repo: Arc<R>,
}

impl<R: MerchRepository> MerchService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All products in catalog order.
    ///
    /// # Errors
    ///
    /// Returns a content-store error propagated from the repository.
    pub async fn products(&self) -> Result<Vec<MerchProduct>, SiteError> {
        self.repo.products().await
    }
}
