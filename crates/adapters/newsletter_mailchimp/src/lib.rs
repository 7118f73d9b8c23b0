//! # bandstand-adapter-newsletter-mailchimp
//!
//! Newsletter gateway that posts signups to a Mailchimp embedded-form
//! endpoint. Mailchimp's embed endpoint takes a form-encoded `EMAIL`
//! field and answers for humans, not machines, so a completed POST
//! counts as success.

use bandstand_app::ports::NewsletterGateway;
use bandstand_domain::error::{ContentError, SiteError};

/// Gateway around one Mailchimp embedded-form URL.
///
/// When no URL is configured the gateway logs and accepts the signup,
/// so environments without Mailchimp credentials still work.
#[derive(Clone, Debug)]
pub struct MailchimpNewsletter {
    http: reqwest::Client,
    form_url: Option<String>,
}

impl MailchimpNewsletter {
    #[must_use]
    pub fn new(form_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            form_url,
        }
    }
}

impl NewsletterGateway for MailchimpNewsletter {
    async fn subscribe(&self, email: &str) -> Result<(), SiteError> {
        let Some(url) = &self.form_url else {
            tracing::info!("newsletter form url not configured, dropping signup");
            return Ok(());
        };

        self.http
            .post(url)
            .form(&[("EMAIL", email)])
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "mailchimp signup request failed");
                SiteError::from(ContentError::new("newsletter provider unreachable"))
            })?;

        tracing::info!("newsletter signup forwarded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_accept_signup_when_unconfigured() {
        let gateway = MailchimpNewsletter::new(None);
        assert!(gateway.subscribe("fan@example.com").await.is_ok());
    }
}
