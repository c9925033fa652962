//! Scrapes a public search-results page for direct CDN asset URLs.
//!
//! The page markup is undocumented and changes without notice; when the
//! pattern stops matching the source simply yields no candidates.

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{info, warn};

use super::ImageSource;
use crate::core::models::{Candidate, SourceKind};
use crate::errors::LizardError;

static ASSET_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https://images\.unsplash\.com/photo-[A-Za-z0-9_-]+(?:\?[^"'\s<>\\]*)?"#)
        .expect("static regex compile")
});

pub struct ScrapeSource {
    http: Client,
    page_url: String,
}

impl ScrapeSource {
    #[must_use]
    pub const fn new(http: Client, page_url: String) -> Self {
        Self { http, page_url }
    }
}

/// Extracts asset URLs in first-seen order, decoding `&amp;` and dropping duplicates.
#[must_use]
pub fn extract_asset_urls(html: &str) -> Vec<Candidate> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<Candidate> = Vec::new();

    for m in ASSET_URL_RE.find_iter(html) {
        let url = m.as_str().replace("&amp;", "&");
        if seen.insert(url.clone()) {
            out.push(Candidate::new(url, ""));
        }
    }

    out
}

#[async_trait]
impl ImageSource for ScrapeSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Scrape
    }

    async fn candidates(&self, _base_query: &str) -> Result<Vec<Candidate>, LizardError> {
        let resp = self
            .http
            .get(&self.page_url)
            .header(reqwest::header::ACCEPT, "text/html")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %self.page_url, "Scrape page request failed");
            return Err(LizardError::UpstreamHttp {
                status: status.as_u16(),
                url: self.page_url.clone(),
            });
        }

        let html = resp.text().await?;
        let found = extract_asset_urls(&html);
        info!(url = %self.page_url, candidates = found.len(), "Scraped asset URLs");
        Ok(found)
    }
}
