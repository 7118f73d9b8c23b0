//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `bandstand.toml` in the working directory. Every field has
//! a sensible default so the file is optional. Environment variables
//! take precedence over file values.

use bandstand_app::services::gig_service::RelatedSelection;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Site identity shown in page shells and the sitemap.
    pub site: SiteConfig,
    /// Which content source backs the site.
    pub content: ContentConfig,
    /// Sanity CMS connection, used when `content.source = "sanity"`.
    pub cms: CmsConfig,
    /// Newsletter provider settings.
    pub newsletter: NewsletterConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Site identity.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute origin used in the sitemap, without a trailing slash.
    pub base_url: String,
    /// Band name.
    pub title: String,
    /// One line under the band name on the front page.
    pub tagline: String,
    /// Booking and press address.
    pub contact_email: String,
}

/// Content source selection.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// `"fixture"` for seeded demo content, `"sanity"` for the CMS.
    pub source: String,
    /// Related-gig selection: `"recent"`, `"sequential"`, or `"random"`.
    pub related: String,
}

/// Sanity project settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
}

/// Newsletter provider settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewsletterConfig {
    /// Mailchimp embedded-form POST URL. Empty disables forwarding.
    pub form_url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `bandstand.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the merged configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("bandstand.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("BANDSTAND_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("BANDSTAND_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("BANDSTAND_BASE_URL") {
            self.site.base_url = val;
        }
        if let Ok(val) = std::env::var("BANDSTAND_CONTENT_SOURCE") {
            self.content.source = val;
        }
        if let Ok(val) = std::env::var("BANDSTAND_SANITY_PROJECT") {
            self.cms.project_id = val;
        }
        if let Ok(val) = std::env::var("BANDSTAND_SANITY_DATASET") {
            self.cms.dataset = val;
        }
        if let Ok(val) = std::env::var("BANDSTAND_NEWSLETTER_URL") {
            self.newsletter.form_url = val;
        }
        if let Ok(val) = std::env::var("BANDSTAND_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        match self.content.source.as_str() {
            "fixture" | "sanity" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "content.source must be 'fixture' or 'sanity', got {other:?}"
                )));
            }
        }
        if self.content.source == "sanity" && self.cms.project_id.is_empty() {
            return Err(ConfigError::Validation(
                "cms.project_id is required when content.source = 'sanity'".to_string(),
            ));
        }
        if self.content.related.parse::<RelatedSelection>().is_err() {
            return Err(ConfigError::Validation(format!(
                "content.related must be 'recent', 'sequential', or 'random', got {:?}",
                self.content.related
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// The validated related-gig selection strategy.
    #[must_use]
    pub fn related_selection(&self) -> RelatedSelection {
        self.content.related.parse().unwrap_or_default()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            title: "Bandstand".to_string(),
            tagline: "Loud guitars, late nights.".to_string(),
            contact_email: "booking@example.com".to_string(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: "fixture".to_string(),
            related: "recent".to_string(),
        }
    }
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: "production".to_string(),
            api_version: "2025-08-24".to_string(),
            use_cdn: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "bandstandd=info,bandstand=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.content.source, "fixture");
        assert_eq!(config.content.related, "recent");
        assert!(config.newsletter.form_url.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = r#"
            [server]
            host = '127.0.0.1'
            port = 9090

            [site]
            base_url = 'https://band.example'
            title = 'The Cellar Dwellers'
            tagline = 'From the basement up.'
            contact_email = 'booking@band.example'

            [content]
            source = 'sanity'
            related = 'random'

            [cms]
            project_id = 'seggtq72'
            dataset = 'production'
            api_version = '2025-08-24'
            use_cdn = true

            [newsletter]
            form_url = 'https://example.us1.list-manage.com/subscribe/post'

            [logging]
            filter = 'debug'
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.site.title, "The Cellar Dwellers");
        assert_eq!(config.content.source, "sanity");
        assert_eq!(config.cms.project_id, "seggtq72");
        assert!(config.cms.use_cdn);
        assert_eq!(config.logging.filter, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_unknown_content_source() {
        let mut config = Config::default();
        config.content.source = "filesystem".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_require_project_id_for_sanity_source() {
        let mut config = Config::default();
        config.content.source = "sanity".to_string();
        assert!(config.validate().is_err());

        config.cms.project_id = "seggtq72".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_unknown_related_strategy() {
        let mut config = Config::default();
        config.content.related = "nearest".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8080
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.content.source, "fixture");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_map_related_strategy_to_selection() {
        let mut config = Config::default();
        config.content.related = "sequential".to_string();
        assert_eq!(config.related_selection(), RelatedSelection::Sequential);
    }
}
