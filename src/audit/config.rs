// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the audit pipeline

use std::env;
use std::time::Duration;

use crate::content::FetchConfig;
use crate::oracle::OracleConfig;

/// Top-level audit configuration
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub fetch: FetchConfig,
    pub oracle: OracleConfig,
    /// URLs audited at the same time (default: 4)
    pub max_concurrent_urls: usize,
    /// Budget for fetch plus evaluation of one URL in seconds (default: 120)
    pub url_timeout_secs: u64,
}

impl AuditConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            fetch: FetchConfig::from_env(),
            oracle: OracleConfig::from_env(),
            max_concurrent_urls: env::var("SEO_AUDIT_MAX_CONCURRENT_URLS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_concurrent_urls),
            url_timeout_secs: env::var("SEO_AUDIT_URL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.url_timeout_secs),
        }
    }

    /// Validate the configuration and its sections
    pub fn validate(&self) -> Result<(), String> {
        self.fetch.validate()?;
        self.oracle.validate()?;
        if self.max_concurrent_urls == 0 {
            return Err("max_concurrent_urls must be at least 1".to_string());
        }
        if self.url_timeout_secs == 0 {
            return Err("url_timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn url_timeout(&self) -> Duration {
        Duration::from_secs(self.url_timeout_secs)
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            oracle: OracleConfig::default(),
            max_concurrent_urls: 4,
            url_timeout_secs: 120,
        }
    }
}
