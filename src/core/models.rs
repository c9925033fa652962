use serde::Serialize;

/// A potential image URL, not yet verified to serve image bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub url: String,
    pub title: String,
}

impl Candidate {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Bytes read from a URL whose content-type starts with `image/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub extension: &'static str,
}

/// Where the served image came from; serialized into debug responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Serpapi,
    Scrape,
    StaticFallback,
}

impl SourceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Serpapi => "serpapi",
            Self::Scrape => "scrape",
            Self::StaticFallback => "static_fallback",
        }
    }
}

/// A verified image plus the metadata needed for the debug response.
#[derive(Debug, Clone)]
pub struct ResolvedImage {
    pub source: SourceKind,
    pub url: String,
    /// Surviving candidates; `None` for static fallbacks.
    pub candidates: Option<usize>,
    pub image: FetchedImage,
}

/// Terminal failure of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveFailure {
    pub status_code: u16,
    pub error: &'static str,
    /// Present in the search-API path.
    pub candidates: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_kind_serializes_as_snake_case() {
        let v = serde_json::to_value(SourceKind::StaticFallback).unwrap();
        assert_eq!(v, serde_json::json!("static_fallback"));
        assert_eq!(SourceKind::StaticFallback.as_str(), "static_fallback");
    }
}
