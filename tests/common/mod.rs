#![allow(dead_code)]

pub mod stub;

use async_trait::async_trait;
use lizard::LizardError;
use lizard::clients::ImageFetcher;
use lizard::core::config::AppConfig;
use lizard::core::models::{Candidate, FetchedImage, SourceKind};
use lizard::resolver::Resolver;
use lizard::search::ImageSource;
use lizard::utils::mime::extension_for_content_type;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Source that returns a fixed list (or fails outright).
pub struct FakeSource {
    pub kind: SourceKind,
    pub result: Result<Vec<Candidate>, ()>,
}

#[async_trait]
impl ImageSource for FakeSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    async fn candidates(&self, _base_query: &str) -> Result<Vec<Candidate>, LizardError> {
        self.result.clone().map_err(|()| LizardError::Http("unreachable".into()))
    }
}

/// Fetcher serving canned `(content_type, bytes)` per URL; unknown URLs fail.
/// Every requested URL is recorded.
#[derive(Clone, Default)]
pub struct FakeFetcher {
    pub responses: HashMap<String, (String, Vec<u8>)>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl FakeFetcher {
    pub fn serving(mut self, url: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.responses
            .insert(url.to_string(), (content_type.to_string(), bytes.to_vec()));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, LizardError> {
        self.requested.lock().unwrap().push(url.to_string());
        let Some((content_type, bytes)) = self.responses.get(url) else {
            return Err(LizardError::UpstreamHttp {
                status: 503,
                url: url.to_string(),
            });
        };
        if !content_type.starts_with("image/") {
            return Err(LizardError::NotAnImage(content_type.clone()));
        }
        Ok(FetchedImage {
            bytes: bytes.clone(),
            content_type: content_type.clone(),
            extension: extension_for_content_type(content_type),
        })
    }
}

pub const FALLBACK_URL: &str = "https://fallback.test/lizard.jpg";

pub fn candidates(urls: &[&str]) -> Vec<Candidate> {
    urls.iter().map(|u| Candidate::new(*u, "Lizard photo")).collect()
}

pub fn resolver(kind: SourceKind, found: Vec<Candidate>, fetcher: FakeFetcher) -> Resolver {
    resolver_with(kind, Ok(found), fetcher, &AppConfig::default())
}

pub fn resolver_with(
    kind: SourceKind,
    result: Result<Vec<Candidate>, ()>,
    fetcher: FakeFetcher,
    config: &AppConfig,
) -> Resolver {
    Resolver::new(
        Box::new(FakeSource { kind, result }),
        Box::new(fetcher),
        config,
    )
    .with_fallbacks(vec![FALLBACK_URL.to_string()])
}
