use rand::seq::SliceRandom;

use crate::core::constants::{NEGATIVE_TERMS, SEED_QUERIES};

/// Picks the base query: the trimmed user override, or a random seed phrase.
#[must_use]
pub fn base_query(user_query: Option<&str>) -> String {
    user_query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(random_seed_query)
}

#[must_use]
pub fn random_seed_query() -> String {
    SEED_QUERIES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("lizard wildlife photo")
        .to_string()
}

/// Appends the negative terms sent to the search provider.
#[must_use]
pub fn with_negative_terms(base: &str) -> String {
    format!("{} {}", base.trim(), NEGATIVE_TERMS.join(" "))
}
