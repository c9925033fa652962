//! Per-request image resolution.
//!
//! Control flows linearly through [`FallbackState`]:
//! `Primary -> ExhaustedCandidates -> StaticFallback -> Failed`.
//! Every per-candidate error is logged and swallowed; only the terminal
//! `Failed` state surfaces to the caller.

use rand::seq::SliceRandom;
use tracing::{debug, error, info, warn};

use crate::clients::ImageFetcher;
use crate::core::config::AppConfig;
use crate::core::constants::STATIC_FALLBACKS;
use crate::core::models::{Candidate, ResolveFailure, ResolvedImage, SourceKind};
use crate::errors::LizardError;
use crate::search::ImageSource;
use crate::search::query::base_query;
use crate::utils::filters::{dedupe_by_url, filter_candidates, shuffle_candidates};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackState {
    Primary,
    ExhaustedCandidates { candidates: usize },
    StaticFallback { candidates: usize },
    Failed { candidates: usize },
}

pub struct Resolver {
    source: Box<dyn ImageSource>,
    fetcher: Box<dyn ImageFetcher>,
    fallbacks: Vec<String>,
    max_tries: usize,
}

impl Resolver {
    #[must_use]
    pub fn new(
        source: Box<dyn ImageSource>,
        fetcher: Box<dyn ImageFetcher>,
        config: &AppConfig,
    ) -> Self {
        Self {
            source,
            fetcher,
            fallbacks: STATIC_FALLBACKS.iter().map(ToString::to_string).collect(),
            max_tries: config.max_tries,
        }
    }

    #[must_use]
    pub fn with_fallbacks(mut self, fallbacks: Vec<String>) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    #[must_use]
    pub fn source_kind(&self) -> SourceKind {
        self.source.kind()
    }

    /// Resolves one image for the request.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveFailure`] once the primary source and the static
    /// fallback have both failed.
    pub async fn resolve(&self, user_query: Option<&str>) -> Result<ResolvedImage, ResolveFailure> {
        let query = base_query(user_query);
        let mut state = FallbackState::Primary;

        loop {
            debug!(?state, "Resolver state");
            state = match state {
                FallbackState::Primary => match self.try_primary(&query).await {
                    Ok(resolved) => return Ok(resolved),
                    Err(candidates) => FallbackState::ExhaustedCandidates { candidates },
                },
                FallbackState::ExhaustedCandidates { candidates } => {
                    warn!(candidates, "No candidate yielded an image, using static fallback");
                    FallbackState::StaticFallback { candidates }
                }
                FallbackState::StaticFallback { candidates } => match self.try_static().await {
                    Ok(resolved) => return Ok(resolved),
                    Err(e) => {
                        warn!(error = %e, "Static fallback failed");
                        FallbackState::Failed { candidates }
                    }
                },
                FallbackState::Failed { candidates } => {
                    let failure = self.failure(candidates);
                    error!(
                        status = failure.status_code,
                        reason = failure.error,
                        "Could not resolve any image"
                    );
                    return Err(failure);
                }
            };
        }
    }

    /// Returns the surviving candidate count on failure.
    async fn try_primary(&self, query: &str) -> Result<ResolvedImage, usize> {
        let kind = self.source.kind();
        let raw = match self.source.candidates(query).await {
            Ok(list) => list,
            Err(e) => {
                warn!(source = kind.as_str(), error = %e, "Source failed");
                Vec::new()
            }
        };

        let candidates = prepare_candidates(raw);
        if candidates.is_empty() {
            warn!(source = kind.as_str(), error = %LizardError::NoCandidates, "Nothing to try");
            return Err(0);
        }

        for candidate in candidates.iter().take(self.max_tries) {
            match self.fetcher.fetch(&candidate.url).await {
                Ok(image) => {
                    info!(source = kind.as_str(), url = %candidate.url, "Picked candidate");
                    return Ok(ResolvedImage {
                        source: kind,
                        url: candidate.url.clone(),
                        candidates: Some(candidates.len()),
                        image,
                    });
                }
                Err(e) => debug!(url = %candidate.url, error = %e, "Candidate rejected"),
            }
        }

        Err(candidates.len())
    }

    async fn try_static(&self) -> Result<ResolvedImage, LizardError> {
        let url = self.pick_fallback().ok_or(LizardError::AllFallbacksFailed)?;
        let image = self.fetcher.fetch(&url).await?;
        info!(url = %url, "Serving static fallback");
        Ok(ResolvedImage {
            source: SourceKind::StaticFallback,
            url,
            candidates: None,
            image,
        })
    }

    fn pick_fallback(&self) -> Option<String> {
        self.fallbacks.choose(&mut rand::thread_rng()).cloned()
    }

    fn failure(&self, candidates: usize) -> ResolveFailure {
        match self.source.kind() {
            SourceKind::Serpapi => ResolveFailure {
                status_code: 404,
                error: "no_usable_lizard_found",
                candidates: Some(candidates),
            },
            SourceKind::Scrape | SourceKind::StaticFallback => ResolveFailure {
                status_code: 500,
                error: "no_key_and_fallback_failed",
                candidates: None,
            },
        }
    }
}

fn prepare_candidates(raw: Vec<Candidate>) -> Vec<Candidate> {
    let mut candidates = dedupe_by_url(filter_candidates(raw));
    shuffle_candidates(&mut candidates);
    candidates
}
