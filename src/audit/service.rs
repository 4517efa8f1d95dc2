// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Audit orchestration
//!
//! Each URL is fetched once, then every rule runs against the same document.
//! URLs are audited concurrently up to a configured limit; a failure on one
//! URL never affects the others.

use futures::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use super::config::AuditConfig;
use super::language::resolve_language;
use super::types::{AuditReport, UrlAudit};
use crate::content::{ContentFetcher, PageSource};
use crate::keywords::{KeywordAssignment, KeywordTable};
use crate::oracle::{LexicalOracle, LlmOracle, SemanticOracle};
use crate::rules::{default_rules, Rule, RuleContext};

/// Runs the rule set over pages and collects the reports
pub struct SeoAuditor {
    source: Arc<dyn PageSource>,
    oracle: Arc<dyn SemanticOracle>,
    rules: Arc<Vec<Box<dyn Rule>>>,
    config: AuditConfig,
}

impl SeoAuditor {
    /// Create an auditor with the default rule set
    pub fn new(
        source: Arc<dyn PageSource>,
        oracle: Arc<dyn SemanticOracle>,
        config: AuditConfig,
    ) -> Self {
        Self::with_rules(source, oracle, default_rules(), config)
    }

    pub fn with_rules(
        source: Arc<dyn PageSource>,
        oracle: Arc<dyn SemanticOracle>,
        rules: Vec<Box<dyn Rule>>,
        config: AuditConfig,
    ) -> Self {
        Self {
            source,
            oracle,
            rules: Arc::new(rules),
            config,
        }
    }

    /// Build the HTTP fetcher and pick an oracle from configuration
    ///
    /// The LLM oracle is used when an API key is configured and `offline` is
    /// not set; otherwise the lexical oracle.
    pub fn from_config(config: AuditConfig, offline: bool) -> Self {
        let source: Arc<dyn PageSource> = Arc::new(ContentFetcher::new(config.fetch.clone()));

        let oracle: Arc<dyn SemanticOracle> = if offline || !config.oracle.is_configured() {
            debug!("Using lexical keyword oracle");
            Arc::new(LexicalOracle::new())
        } else {
            match LlmOracle::new(&config.oracle) {
                Ok(llm) => {
                    debug!("Using LLM keyword oracle ({})", config.oracle.model);
                    Arc::new(llm)
                }
                Err(e) => {
                    warn!("LLM oracle unavailable, falling back to lexical: {}", e);
                    Arc::new(LexicalOracle::new())
                }
            }
        };

        Self::new(source, oracle, config)
    }

    /// Name of the active oracle
    pub fn oracle_name(&self) -> &'static str {
        self.oracle.name()
    }

    /// Audit a single URL
    ///
    /// Fetch failures and timeouts produce [`UrlAudit::Failed`]; otherwise the
    /// report has one record per rule.
    pub async fn audit_url(&self, url: &str, keywords: &KeywordAssignment) -> UrlAudit {
        Self::run_audit(
            self.source.clone(),
            self.oracle.clone(),
            self.rules.clone(),
            self.config.url_timeout(),
            url.to_string(),
            keywords.clone(),
        )
        .await
    }

    /// Audit many URLs concurrently, keyed by URL
    ///
    /// URLs absent from the table are audited with no keywords.
    pub async fn audit(&self, urls: &[String], table: &KeywordTable) -> BTreeMap<String, UrlAudit> {
        let start = Instant::now();
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_urls.max(1)));
        let mut handles = Vec::with_capacity(urls.len());

        for url in urls {
            let sem = semaphore.clone();
            let source = self.source.clone();
            let oracle = self.oracle.clone();
            let rules = self.rules.clone();
            let timeout = self.config.url_timeout();
            let url = url.clone();
            let keywords = table.assignment_for(&url);

            let handle = tokio::spawn(async move {
                let _permit = sem.acquire_owned().await.ok();
                let audit =
                    Self::run_audit(source, oracle, rules, timeout, url.clone(), keywords).await;
                (url, audit)
            });
            handles.push(handle);
        }

        let mut results = BTreeMap::new();
        for (url, handle) in urls.iter().zip(handles) {
            match handle.await {
                Ok((url, audit)) => {
                    results.insert(url, audit);
                }
                Err(e) => {
                    warn!("Audit task for {} panicked: {}", url, e);
                    results.insert(
                        url.clone(),
                        UrlAudit::Failed {
                            error: format!("Audit aborted - {}", e),
                        },
                    );
                }
            }
        }

        let failed = results.values().filter(|a| a.error().is_some()).count();
        info!(
            "Audited {} URLs ({} failed) in {}ms",
            results.len(),
            failed,
            start.elapsed().as_millis()
        );
        results
    }

    async fn run_audit(
        source: Arc<dyn PageSource>,
        oracle: Arc<dyn SemanticOracle>,
        rules: Arc<Vec<Box<dyn Rule>>>,
        timeout: std::time::Duration,
        url: String,
        keywords: KeywordAssignment,
    ) -> UrlAudit {
        let work = async {
            let document = match source.fetch(&url).await {
                Ok(document) => document,
                Err(e) => {
                    warn!("Skipping analysis of {}: {}", url, e);
                    return UrlAudit::Failed {
                        error: format!("Could not fetch page ({}) - skipped analysis", e),
                    };
                }
            };

            let language = resolve_language(&document);
            let ctx = &RuleContext {
                document: &document,
                keywords: &keywords,
                oracle: oracle.as_ref(),
            };

            let records = join_all(rules.iter().map(|rule| async move {
                (rule.metric(), rule.evaluate(ctx).await)
            }))
            .await;

            let report = AuditReport {
                url: url.clone(),
                language,
                metrics: records.into_iter().collect(),
            };
            debug!(
                "Audit of {} complete: {} issues",
                url,
                report.issues().count()
            );
            UrlAudit::Report(report)
        };

        match tokio::time::timeout(timeout, work).await {
            Ok(audit) => audit,
            Err(_) => {
                warn!("Audit of {} timed out after {:?}", url, timeout);
                UrlAudit::Failed {
                    error: format!("Audit timed out after {}s - skipped analysis", timeout.as_secs()),
                }
            }
        }
    }
}
