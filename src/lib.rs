// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod audit;
pub mod cli;
pub mod content;
pub mod keywords;
pub mod oracle;
pub mod rules;
pub mod tips;

pub use audit::{AuditConfig, AuditReport, Metric, MetricRecord, SeoAuditor, UrlAudit};
pub use content::{ContentFetcher, FetchConfig, FetchError, PageDocument, PageSource};
pub use keywords::{KeywordAssignment, KeywordTable, KeywordTableError};
pub use oracle::{Concept, LexicalOracle, LlmOracle, OracleConfig, OracleError, SemanticOracle};
pub use rules::{default_rules, Rule, RuleContext};
pub use tips::{TipGenerator, TipRequest};
