use thiserror::Error;

#[derive(Debug, Error)]
pub enum LizardError {
    #[error("Upstream returned HTTP {status}: {url}")]
    UpstreamHttp { status: u16, url: String },

    #[error("Response is not an image (content-type: {0})")]
    NotAnImage(String),

    #[error("Image of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error("No candidates available")]
    NoCandidates,

    #[error("Every fallback path failed")]
    AllFallbacksFailed,

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Failed to parse upstream response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl LizardError {
    /// Short machine-readable reason, safe to put in a response body.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::UpstreamHttp { .. } => "upstream_http_error",
            Self::NotAnImage(_) => "not_an_image",
            Self::TooLarge { .. } => "image_too_large",
            Self::NoCandidates => "no_candidates",
            Self::AllFallbacksFailed => "all_fallbacks_failed",
            Self::Http(_) => "http_error",
            Self::Parse(_) => "parse_error",
            Self::Config(_) => "config_error",
        }
    }
}

impl From<reqwest::Error> for LizardError {
    fn from(error: reqwest::Error) -> Self {
        LizardError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for LizardError {
    fn from(error: serde_json::Error) -> Self {
        LizardError::Parse(error.to_string())
    }
}

impl From<anyhow::Error> for LizardError {
    fn from(error: anyhow::Error) -> Self {
        LizardError::Config(format!("{error:#}"))
    }
}
