//! Candidate fetcher: downloads a URL only if it really serves an image.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

use crate::core::constants::{IMAGE_ACCEPT, MAX_IMAGE_BYTES};
use crate::core::models::FetchedImage;
use crate::errors::LizardError;
use crate::utils::mime::{extension_for_content_type, is_image_content_type};

#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetches `url` and returns its bytes if the response is a successful `image/*`.
    ///
    /// # Errors
    ///
    /// `UpstreamHttp` on a non-success status, `NotAnImage` when the
    /// content-type is not `image/*`, `TooLarge` past the byte limit, `Http`
    /// on transport failure.
    async fn fetch(&self, url: &str) -> Result<FetchedImage, LizardError>;
}

pub struct HttpImageFetcher {
    http: Client,
    max_bytes: usize,
}

impl HttpImageFetcher {
    #[must_use]
    pub const fn new(http: Client) -> Self {
        Self {
            http,
            max_bytes: MAX_IMAGE_BYTES,
        }
    }

    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    fn too_large(&self, size: usize) -> LizardError {
        LizardError::TooLarge {
            size,
            limit: self.max_bytes,
        }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, LizardError> {
        let mut resp = self
            .http
            .get(url)
            .header(ACCEPT, IMAGE_ACCEPT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LizardError::UpstreamHttp {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        if !is_image_content_type(&content_type) {
            return Err(LizardError::NotAnImage(content_type));
        }

        if let Some(declared) = resp.content_length() {
            let declared = usize::try_from(declared).unwrap_or(usize::MAX);
            if declared > self.max_bytes {
                return Err(self.too_large(declared));
            }
        }

        // Content-Length may be absent or wrong; enforce the limit while reading.
        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = resp.chunk().await? {
            bytes.extend_from_slice(&chunk);
            if bytes.len() > self.max_bytes {
                return Err(self.too_large(bytes.len()));
            }
        }
        debug!(url = %url, content_type = %content_type, size = bytes.len(), "Fetched image");

        let extension = extension_for_content_type(&content_type);
        Ok(FetchedImage {
            bytes,
            content_type,
            extension,
        })
    }
}
