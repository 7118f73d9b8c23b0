//! Thin HTTP client for the Sanity query endpoint.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CmsError;

/// Connection settings for one Sanity project.
#[derive(Clone, Debug)]
pub struct SanityConfig {
    /// Project identifier, e.g. `seggtq72`.
    pub project_id: String,
    /// Dataset name, usually `production`.
    pub dataset: String,
    /// API version as a UTC date, e.g. `2025-08-24`.
    pub api_version: String,
    /// Query the CDN endpoint instead of the live API.
    pub use_cdn: bool,
}

/// Response envelope of the query endpoint.
#[derive(Deserialize)]
struct Envelope<T> {
    result: T,
}

/// Client for `GET /v{version}/data/query/{dataset}`.
#[derive(Clone, Debug)]
pub struct SanityClient {
    http: reqwest::Client,
    config: SanityConfig,
}

impl SanityClient {
    #[must_use]
    pub fn new(config: SanityConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn query_url(&self) -> String {
        let host = if self.config.use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };
        format!(
            "https://{}.{host}/v{}/data/query/{}",
            self.config.project_id, self.config.api_version, self.config.dataset
        )
    }

    /// Run a GROQ query and decode the `result` field.
    ///
    /// Parameters are passed as `$name` query-string entries with
    /// JSON-encoded values, as the API expects.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError`] on transport failures, non-success status
    /// codes, or an undecodable body.
    #[tracing::instrument(skip(self, query, params))]
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, Value)],
    ) -> Result<T, CmsError> {
        let url = self.query_url();
        let mut pairs: Vec<(String, String)> = vec![("query".to_owned(), query.to_owned())];
        for (name, value) in params {
            pairs.push((format!("${name}"), value.to_string()));
        }

        let response = self.http.get(&url).query(&pairs).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.result)
    }
}
