//! Outbound HTTP plumbing

pub mod image_fetcher;

pub use image_fetcher::{HttpImageFetcher, ImageFetcher};

use reqwest::Client;
use reqwest::redirect::Policy;
use std::sync::LazyLock;
use std::time::Duration;

use crate::core::config::AppConfig;
use crate::core::constants::BROWSER_USER_AGENT;

// Built once per process so warm invocations reuse pooled connections.
static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    let timeout = AppConfig::from_env().ok().and_then(|c| c.http_timeout);
    build_http_client(timeout)
});

/// Process-wide client; cloning shares the connection pool.
#[must_use]
pub fn shared_http_client() -> Client {
    HTTP_CLIENT.clone()
}

/// Browser user agent, redirects followed, timeout only when configured.
#[must_use]
pub fn build_http_client(timeout: Option<Duration>) -> Client {
    let mut builder = Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .redirect(Policy::limited(10));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|_| Client::new())
}
