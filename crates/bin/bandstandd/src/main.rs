//! # bandstandd — the site server
//!
//! Composition root that wires a content adapter, the newsletter
//! gateway, and the HTTP adapter together, then serves.
//!
//! ## Responsibilities
//! - Load configuration (TOML file + env overrides)
//! - Initialize tracing
//! - Pick the content source (seeded fixture or the Sanity CMS)
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router and serve, with graceful shutdown on
//!   SIGTERM/ctrl-c
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use bandstand_adapter_cms_sanity::{SanityClient, SanityConfig, SanityContentStore};
use bandstand_adapter_content_fixture::{FixtureContent, FixtureNewsletter};
use bandstand_adapter_http_axum::state::{AppState, SiteMeta};
use bandstand_adapter_newsletter_mailchimp::MailchimpNewsletter;
use bandstand_app::ports::{ContentStore, NewsletterGateway};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let meta = SiteMeta {
        base_url: config.site.base_url.clone(),
        title: config.site.title.clone(),
        tagline: config.site.tagline.clone(),
        contact_email: config.site.contact_email.clone(),
    };

    let form_url = if config.newsletter.form_url.is_empty() {
        None
    } else {
        Some(config.newsletter.form_url.clone())
    };

    match config.content.source.as_str() {
        "sanity" => {
            let client = SanityClient::new(SanityConfig {
                project_id: config.cms.project_id.clone(),
                dataset: config.cms.dataset.clone(),
                api_version: config.cms.api_version.clone(),
                use_cdn: config.cms.use_cdn,
            });
            let content = SanityContentStore::new(client);
            let newsletter = MailchimpNewsletter::new(form_url);
            serve(&config, content, newsletter, meta).await
        }
        _ => {
            tracing::info!("serving seeded demo content");
            let content = FixtureContent::seeded();
            let newsletter = FixtureNewsletter;
            serve(&config, content, newsletter, meta).await
        }
    }
}

async fn serve<C, N>(config: &Config, content: C, newsletter: N, meta: SiteMeta) -> anyhow::Result<()>
where
    C: ContentStore + Send + Sync + 'static,
    N: NewsletterGateway + Send + Sync + 'static,
{
    let state = AppState::new(content, newsletter, config.related_selection(), meta);
    let app = bandstand_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!("bandstandd listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding to {bind_addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
