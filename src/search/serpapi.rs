//! Google Images results via SerpApi, collected across pages.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::ImageSource;
use super::query::with_negative_terms;
use crate::core::models::{Candidate, SourceKind};
use crate::errors::LizardError;
use crate::utils::filters::{dedupe_by_url, filter_candidates};

pub struct SerpApiSource {
    http: Client,
    endpoint: String,
    api_key: String,
    max_pages: u32,
    target_candidates: usize,
}

impl SerpApiSource {
    #[must_use]
    pub const fn new(
        http: Client,
        endpoint: String,
        api_key: String,
        max_pages: u32,
        target_candidates: usize,
    ) -> Self {
        Self {
            http,
            endpoint,
            api_key,
            max_pages,
            target_candidates,
        }
    }

    async fn fetch_page(&self, query: &str, page: u32) -> Result<Value, LizardError> {
        let page = page.to_string();
        let params = search_params(query, &page, &self.api_key);

        #[cfg(feature = "debug-logs")]
        debug!(endpoint = %self.endpoint, ?params, "SerpApi request");
        #[cfg(not(feature = "debug-logs"))]
        debug!(endpoint = %self.endpoint, page = %page, "SerpApi request [api_key masked]");

        let resp = self.http.get(&self.endpoint).query(&params).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LizardError::UpstreamHttp {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn search_params(query: &str, page: &str, api_key: &str) -> Vec<(&'static str, String)> {
    vec![
        ("engine", "google_images".to_string()),
        ("q", with_negative_terms(query)),
        ("tbm", "isch".to_string()),
        ("tbs", "itp:photo,isz:l".to_string()),
        ("safe", "active".to_string()),
        ("ijn", page.to_string()),
        ("api_key", api_key.to_string()),
    ]
}

/// Reads `images_results`, preferring `original` over `thumbnail`.
#[must_use]
pub fn parse_images_results(body: &Value) -> Vec<Candidate> {
    let Some(results) = body.get("images_results").and_then(Value::as_array) else {
        return Vec::new();
    };

    results
        .iter()
        .filter_map(|r| {
            let url = ["original", "thumbnail"]
                .iter()
                .filter_map(|key| r.get(*key).and_then(Value::as_str))
                .find(|s| !s.is_empty())?;
            let title = r.get("title").and_then(Value::as_str).unwrap_or("");
            Some(Candidate::new(url, title))
        })
        .collect()
}

#[async_trait]
impl ImageSource for SerpApiSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Serpapi
    }

    async fn candidates(&self, base_query: &str) -> Result<Vec<Candidate>, LizardError> {
        let mut all: Vec<Candidate> = Vec::new();

        for page in 0..self.max_pages {
            match self.fetch_page(base_query, page).await {
                Ok(body) => {
                    let found = parse_images_results(&body);
                    let raw = found.len();
                    let kept = filter_candidates(found);
                    debug!(page, raw, kept = kept.len(), "SerpApi page collected");
                    all.extend(kept);
                    all = dedupe_by_url(all);
                }
                Err(e) => warn!(page, error = %e, "SerpApi page failed, continuing"),
            }

            if all.len() >= self.target_candidates {
                break;
            }
        }

        info!(query = %base_query, candidates = all.len(), "SerpApi candidates collected");
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_prefers_original_then_thumbnail() {
        let body = json!({
            "images_results": [
                { "original": "https://a.org/1.jpg", "thumbnail": "https://t.org/1.jpg", "title": "Gecko" },
                { "original": "", "thumbnail": "https://t.org/2.jpg" },
                { "title": "no url" }
            ]
        });
        let candidates = parse_images_results(&body);
        assert_eq!(
            candidates,
            vec![
                Candidate::new("https://a.org/1.jpg", "Gecko"),
                Candidate::new("https://t.org/2.jpg", ""),
            ]
        );
    }

    #[test]
    fn parse_tolerates_missing_results() {
        assert!(parse_images_results(&json!({ "error": "quota" })).is_empty());
        assert!(parse_images_results(&json!({ "images_results": "nope" })).is_empty());
    }

    #[test]
    fn params_request_large_safe_photos() {
        let params = search_params("lizard", "2", "secret");
        let get = |k: &str| {
            params
                .iter()
                .find(|(key, _)| *key == k)
                .map(|(_, v)| v.clone())
        };
        assert_eq!(get("tbs").as_deref(), Some("itp:photo,isz:l"));
        assert_eq!(get("safe").as_deref(), Some("active"));
        assert_eq!(get("ijn").as_deref(), Some("2"));
        assert!(get("q").is_some_and(|q| q.starts_with("lizard -plush")));
    }
}
