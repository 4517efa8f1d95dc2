// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for page fetching
//!
//! Defines HTTP timeout, retry and backoff settings.

use std::env;
use std::time::Duration;

/// Default user agent sent with every page request
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; FabstirSeoAuditor/1.0; +https://fabstir.com/bot)";

/// Configuration for page fetching
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Timeout per HTTP attempt in seconds (default: 10)
    pub timeout_secs: u64,
    /// Retries after the first attempt for 429 and network errors (default: 3)
    pub max_retries: u32,
    /// First backoff wait in milliseconds (default: 1000)
    pub initial_backoff_ms: u64,
    /// Multiplier applied to the wait after every retry (default: 2)
    pub backoff_factor: u32,
    /// User-Agent header value
    pub user_agent: String,
    /// Allow loopback/private hosts (default: false)
    pub allow_private_hosts: bool,
}

impl FetchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout_secs: env::var("SEO_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            max_retries: env::var("SEO_FETCH_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_retries)
                .min(10), // Cap at 10
            initial_backoff_ms: env::var("SEO_FETCH_INITIAL_BACKOFF_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.initial_backoff_ms),
            backoff_factor: env::var("SEO_FETCH_BACKOFF_FACTOR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.backoff_factor),
            user_agent: env::var("SEO_FETCH_USER_AGENT").unwrap_or(defaults.user_agent),
            allow_private_hosts: env::var("SEO_FETCH_ALLOW_PRIVATE_HOSTS")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        if self.backoff_factor == 0 {
            return Err("backoff_factor must be at least 1".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        Ok(())
    }

    /// Per-attempt request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// First backoff wait
    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_retries: 3,
            initial_backoff_ms: 1000,
            backoff_factor: 2,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            allow_private_hosts: false,
        }
    }
}
