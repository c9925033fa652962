//! External image sources.
//!
//! Exactly one source is active per deployment: the search API when a
//! credential is configured, otherwise the page scraper.

pub mod query;
pub mod scrape;
pub mod serpapi;

pub use scrape::ScrapeSource;
pub use serpapi::SerpApiSource;

use async_trait::async_trait;
use reqwest::Client;

use crate::core::config::AppConfig;
use crate::core::models::{Candidate, SourceKind};
use crate::errors::LizardError;

#[async_trait]
pub trait ImageSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    /// Collects candidates for `base_query`. An empty list means "no results".
    ///
    /// # Errors
    ///
    /// Returns an error only when the source could not be reached at all.
    async fn candidates(&self, base_query: &str) -> Result<Vec<Candidate>, LizardError>;
}

/// Selects the source for this deployment from its configuration.
#[must_use]
pub fn from_config(config: &AppConfig, http: Client) -> Box<dyn ImageSource> {
    match &config.serpapi_key {
        Some(key) => Box::new(SerpApiSource::new(
            http,
            config.serpapi_endpoint.clone(),
            key.clone(),
            config.max_pages,
            config.target_candidates,
        )),
        None => Box::new(ScrapeSource::new(http, config.scrape_url.clone())),
    }
}
