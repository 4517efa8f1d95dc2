// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// In-memory page sources for driving the auditor without a network

use async_trait::async_trait;
use fabstir_seo_auditor::{
    AuditConfig, FetchError, KeywordAssignment, LexicalOracle, PageDocument, PageSource,
    SemanticOracle, SeoAuditor, UrlAudit,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Serves fixed HTML per URL; unknown URLs answer 404
#[derive(Default)]
pub struct StaticPageSource {
    pages: HashMap<String, String>,
    delay: Option<Duration>,
}

impl StaticPageSource {
    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl PageSource for StaticPageSource {
    async fn fetch(&self, url: &str) -> Result<PageDocument, FetchError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let html = self
            .pages
            .get(url)
            .ok_or_else(|| FetchError::HttpStatus(404, url.to_string()))?;
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        Ok(PageDocument::parse(parsed, html))
    }
}

pub fn auditor(source: StaticPageSource) -> SeoAuditor {
    auditor_with(source, Arc::new(LexicalOracle::new()), AuditConfig::default())
}

pub fn auditor_with(
    source: StaticPageSource,
    oracle: Arc<dyn SemanticOracle>,
    config: AuditConfig,
) -> SeoAuditor {
    SeoAuditor::new(Arc::new(source), oracle, config)
}

pub fn keywords(url: &str, primary: &str, secondary: &[&str]) -> KeywordAssignment {
    KeywordAssignment {
        url: url.to_string(),
        primary: primary.to_string(),
        secondary: secondary.iter().map(|s| s.to_string()).collect(),
    }
}

/// Audit one page served at `url` with no keywords
pub async fn audit_page(url: &str, html: &str) -> UrlAudit {
    let source = StaticPageSource::default().with_page(url, html);
    auditor(source)
        .audit_url(url, &KeywordAssignment::unassigned(url))
        .await
}
