use rand::seq::SliceRandom;
use std::collections::HashSet;
use url::Url;

use crate::core::constants::{BLOCK_SITES, BLOCK_WORDS, VECTOR_EXTENSIONS};
use crate::core::models::Candidate;

/// Whether the URL's host contains a denylisted domain substring.
///
/// URLs that fail to parse are kept: dropping them would cost availability
/// for no gain in precision.
#[must_use]
pub fn is_blocked_site(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str().map(str::to_ascii_lowercase) else {
        return false;
    };
    BLOCK_SITES.iter().any(|site| host.contains(site))
}

#[must_use]
pub fn has_blocked_words(title: &str) -> bool {
    let title = title.to_lowercase();
    BLOCK_WORDS.iter().any(|word| title.contains(word))
}

#[must_use]
pub fn is_vector_graphic(url: &str) -> bool {
    let url = url.to_ascii_lowercase();
    VECTOR_EXTENSIONS.iter().any(|ext| url.ends_with(ext))
}

#[must_use]
pub fn is_acceptable(candidate: &Candidate) -> bool {
    !candidate.url.is_empty()
        && !is_vector_graphic(&candidate.url)
        && !is_blocked_site(&candidate.url)
        && !has_blocked_words(&candidate.title)
}

/// Retains only acceptable candidates, preserving order.
#[must_use]
pub fn filter_candidates(candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.into_iter().filter(is_acceptable).collect()
}

/// Drops repeated URLs, keeping the first occurrence.
#[must_use]
pub fn dedupe_by_url(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen: HashSet<String> = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.url.clone()))
        .collect()
}

/// Uniform in-place shuffle so the same top result is not served every time.
pub fn shuffle_candidates(candidates: &mut [Candidate]) {
    candidates.shuffle(&mut rand::thread_rng());
}
