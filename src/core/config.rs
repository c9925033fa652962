use anyhow::Context;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::LizardError;

pub const DEFAULT_SERPAPI_ENDPOINT: &str = "https://serpapi.com/search.json";
pub const DEFAULT_SCRAPE_URL: &str = "https://unsplash.com/s/photos/lizard";
pub const DEFAULT_MAX_PAGES: u32 = 6;
pub const DEFAULT_TARGET_CANDIDATES: usize = 30;
pub const DEFAULT_MAX_TRIES: usize = 15;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub serpapi_key: Option<String>,
    pub serpapi_endpoint: String,
    pub scrape_url: String,
    pub max_pages: u32,
    pub target_candidates: usize,
    pub max_tries: usize,
    pub http_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            serpapi_key: None,
            serpapi_endpoint: DEFAULT_SERPAPI_ENDPOINT.to_string(),
            scrape_url: DEFAULT_SCRAPE_URL.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
            target_candidates: DEFAULT_TARGET_CANDIDATES,
            max_tries: DEFAULT_MAX_TRIES,
            http_timeout: None,
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `LizardError::Config` if a numeric variable is set but not parseable.
    pub fn from_env() -> Result<Self, LizardError> {
        let defaults = Self::default();
        Ok(Self {
            serpapi_key: non_empty_var("SERPAPI_KEY"),
            serpapi_endpoint: non_empty_var("SERPAPI_ENDPOINT")
                .unwrap_or(defaults.serpapi_endpoint),
            scrape_url: non_empty_var("LIZARD_SCRAPE_URL").unwrap_or(defaults.scrape_url),
            max_pages: parse_var("LIZARD_MAX_PAGES")?.unwrap_or(defaults.max_pages),
            target_candidates: parse_var("LIZARD_TARGET_CANDIDATES")?
                .unwrap_or(defaults.target_candidates),
            max_tries: parse_var("LIZARD_MAX_TRIES")?.unwrap_or(defaults.max_tries),
            http_timeout: parse_var::<u64>("LIZARD_HTTP_TIMEOUT_SECS")?.map(Duration::from_secs),
        })
    }

    /// Whether the search-API strategy is active.
    #[must_use]
    pub const fn has_credential(&self) -> bool {
        self.serpapi_key.is_some()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T>(name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    non_empty_var(name)
        .map(|raw| {
            raw.parse::<T>()
                .with_context(|| format!("{name}: cannot parse {raw:?}"))
        })
        .transpose()
}
