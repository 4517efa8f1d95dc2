// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page audit aggregation
//!
//! `SeoAuditor` fetches each URL once, resolves its language and merges the
//! output of every rule into an `AuditReport` keyed by metric name.

pub mod config;
pub mod language;
pub mod service;
pub mod types;

pub use config::AuditConfig;
pub use language::{detect_language, language_name, resolve_language, DEFAULT_LANGUAGE};
pub use service::SeoAuditor;
pub use types::{AuditReport, KeywordScope, Metric, MetricRecord, UrlAudit, LANGUAGE_KEY, NO_ISSUE};
