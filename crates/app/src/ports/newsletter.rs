//! Newsletter port — fire-and-forget subscription gateway.

use std::future::Future;

use bandstand_domain::error::SiteError;

/// Outbound gateway for newsletter subscriptions.
///
/// Submissions are fire-and-forget: no retries, no blocking of other
/// operations. A failure is reported back once so the caller can show a
/// user-facing message.
pub trait NewsletterGateway {
    fn subscribe(&self, email: &str) -> impl Future<Output = Result<(), SiteError>> + Send;
}
