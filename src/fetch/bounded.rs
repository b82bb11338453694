//! Size-capped outbound fetch.
//!
//! # Responsibilities
//! - Hold the shared outbound client with its timeouts
//! - Accumulate the remote body chunk by chunk
//! - Abort the transfer before the byte ceiling is crossed

use std::time::Duration;

use url::Url;

use crate::config::FetchConfig;
use crate::fetch::error::FetchError;

/// Performs outbound fetches, never buffering more than the configured cap.
#[derive(Debug, Clone)]
pub struct BoundedFetcher {
    client: reqwest::Client,
    max_size: usize,
}

impl BoundedFetcher {
    /// Build the shared outbound client with the configured timeouts.
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            max_size: config.max_size,
        })
    }

    /// The byte ceiling this fetcher enforces.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Fetch `url`, accumulating chunks until the transfer completes or the
    /// next chunk would push the body past the cap.
    ///
    /// Returning early drops the in-flight response, which aborts the
    /// connection, so neither memory nor transfer time is spent on
    /// oversized remote bodies. The buffer is owned by this call; nothing
    /// is shared across requests.
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let mut response = self.client.get(url.clone()).send().await?;

        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > self.max_size {
                tracing::debug!(
                    url = %url,
                    buffered = body.len(),
                    max_size = self.max_size,
                    "Aborting transfer at byte ceiling"
                );
                return Err(FetchError::TooLarge);
            }
            body.extend_from_slice(&chunk);
        }

        if body.is_empty() {
            return Err(FetchError::Empty);
        }

        Ok(body)
    }
}
