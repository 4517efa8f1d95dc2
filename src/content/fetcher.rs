// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP page fetching with bounded retry and exponential backoff
//!
//! 429 responses and transport errors are retried; any other non-success
//! status fails the URL immediately.

use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::{Host, Url};

use super::config::FetchConfig;
use super::document::PageDocument;

/// Page fetch error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// URL could not be parsed
    #[error("Invalid URL {0}")]
    InvalidUrl(String),
    /// URL is unsafe (localhost, private IP, non-http scheme)
    #[error("Unsafe URL blocked: {0}")]
    UnsafeUrl(String),
    /// Request timed out
    #[error("Timeout fetching: {0}")]
    Timeout(String),
    /// Connection-level failure
    #[error("Network error: {0}")]
    Network(String),
    /// HTTP 429 from the server
    #[error("Rate limited (429) by: {url}")]
    RateLimited {
        url: String,
        retry_after_secs: Option<u64>,
    },
    /// HTTP non-success status other than 429
    #[error("HTTP {0} for: {1}")]
    HttpStatus(u16, String),
    /// Every allowed attempt failed with a retryable error
    #[error("Failed to fetch {url} after {attempts} attempts: {last}")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        last: String,
    },
}

impl FetchError {
    /// Whether waiting and trying again could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::Network(_) | Self::RateLimited { .. }
        )
    }
}

/// Source of sanitized page documents
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch and sanitize the page at `url`
    async fn fetch(&self, url: &str) -> Result<PageDocument, FetchError>;
}

/// Retrying HTTP fetcher
pub struct ContentFetcher {
    client: Client,
    config: FetchConfig,
}

impl ContentFetcher {
    /// Create a new content fetcher
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetch the raw HTML of a URL, retrying 429 and transport errors
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
        if !self.config.allow_private_hosts && !Self::is_safe_url(&parsed) {
            return Err(FetchError::UnsafeUrl(url.to_string()));
        }

        let max_attempts = self.config.max_retries + 1;
        let mut wait = self.config.initial_backoff();
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!("Fetching {} (attempt {}/{})", url, attempt, max_attempts);

            let error = match self.attempt(parsed.as_str()).await {
                Ok(html) => {
                    info!("Fetched {} bytes from: {}", html.len(), url);
                    return Ok(html);
                }
                Err(e) if !e.is_retryable() => {
                    warn!("{}; not retrying", e);
                    return Err(e);
                }
                Err(e) => e,
            };

            if attempt >= max_attempts {
                warn!("Giving up on {} after {} attempts", url, attempt);
                return Err(FetchError::RetriesExhausted {
                    url: url.to_string(),
                    attempts: attempt,
                    last: error.to_string(),
                });
            }

            if let FetchError::RateLimited {
                retry_after_secs: Some(secs),
                ..
            } = &error
            {
                wait = Duration::from_secs(*secs);
            }

            warn!(
                "{}; waiting {:?} before retrying (attempt {})",
                error, wait, attempt
            );
            tokio::time::sleep(wait).await;
            wait *= self.config.backoff_factor;
        }
    }

    /// One HTTP GET, classified into a [`FetchError`] on failure
    async fn attempt(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            return Err(FetchError::RateLimited {
                url: url.to_string(),
                retry_after_secs,
            });
        }
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16(), url.to_string()));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Network(e.to_string())
            }
        })
    }

    /// Check if URL is safe to fetch (http/https, not loopback/private)
    pub fn is_safe_url(url: &Url) -> bool {
        if !["http", "https"].contains(&url.scheme()) {
            return false;
        }

        match url.host() {
            Some(Host::Domain(domain)) => !domain.eq_ignore_ascii_case("localhost"),
            Some(Host::Ipv4(ip)) => {
                !(ip.is_loopback()
                    || ip.is_private()
                    || ip.is_link_local()
                    || ip.is_unspecified()
                    || ip.is_broadcast())
            }
            Some(Host::Ipv6(ip)) => !(ip.is_loopback() || ip.is_unspecified()),
            None => false,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

#[async_trait]
impl PageSource for ContentFetcher {
    async fn fetch(&self, url: &str) -> Result<PageDocument, FetchError> {
        let html = self.fetch_html(url).await?;
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
        Ok(PageDocument::parse(parsed, &html))
    }
}
