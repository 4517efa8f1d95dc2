// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Audit report types
//!
//! A report maps every metric of the fixed catalogue to one record, plus the
//! resolved page language under the reserved `_lang` key.

use serde::Serialize;
use std::collections::BTreeMap;

/// Recommendation value meaning "no issue found"
pub const NO_ISSUE: &str = "/";

/// Reserved report key holding the language code
pub const LANGUAGE_KEY: &str = "_lang";

/// The fixed metric catalogue, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Metric {
    #[serde(rename = "Page Title")]
    PageTitle,
    #[serde(rename = "Primary KW in Title")]
    PrimaryKwInTitle,
    #[serde(rename = "Meta Description")]
    MetaDescription,
    #[serde(rename = "Primary KW in Description")]
    PrimaryKwInDescription,
    #[serde(rename = "H1 Structure")]
    H1Structure,
    #[serde(rename = "Primary KW in H1")]
    PrimaryKwInH1,
    #[serde(rename = "H3 Presence")]
    H3Presence,
    #[serde(rename = "H5/H6 Depth")]
    H5H6Depth,
    #[serde(rename = "Paragraph Length")]
    ParagraphLength,
    #[serde(rename = "Bullet List Presence")]
    BulletListPresence,
    #[serde(rename = "Internal Links Count")]
    InternalLinksCount,
    #[serde(rename = "Internal Link Anchor Length")]
    InternalLinkAnchorLength,
    #[serde(rename = "Bold Text Count")]
    BoldTextCount,
    #[serde(rename = "Bold Sequence Length")]
    BoldSequenceLength,
    #[serde(rename = "Secondary KWs in Content")]
    SecondaryKwsInContent,
    #[serde(rename = "Images & Word Count Ratio")]
    ImagesWordCountRatio,
    #[serde(rename = "Image Alt Text Presence")]
    ImageAltTextPresence,
    #[serde(rename = "Primary KW in Image Alts")]
    PrimaryKwInImageAlts,
    #[serde(rename = "Primary KW in Content")]
    PrimaryKwInContent,
    #[serde(rename = "Banner / CTA")]
    BannerCta,
}

/// Which keywords a metric is about, for the tip layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordScope {
    None,
    Primary,
    Secondary,
}

impl Metric {
    pub const ALL: [Metric; 20] = [
        Metric::PageTitle,
        Metric::PrimaryKwInTitle,
        Metric::MetaDescription,
        Metric::PrimaryKwInDescription,
        Metric::H1Structure,
        Metric::PrimaryKwInH1,
        Metric::H3Presence,
        Metric::H5H6Depth,
        Metric::ParagraphLength,
        Metric::BulletListPresence,
        Metric::InternalLinksCount,
        Metric::InternalLinkAnchorLength,
        Metric::BoldTextCount,
        Metric::BoldSequenceLength,
        Metric::SecondaryKwsInContent,
        Metric::ImagesWordCountRatio,
        Metric::ImageAltTextPresence,
        Metric::PrimaryKwInImageAlts,
        Metric::PrimaryKwInContent,
        Metric::BannerCta,
    ];

    /// Display name, also the report key
    pub fn name(self) -> &'static str {
        match self {
            Metric::PageTitle => "Page Title",
            Metric::PrimaryKwInTitle => "Primary KW in Title",
            Metric::MetaDescription => "Meta Description",
            Metric::PrimaryKwInDescription => "Primary KW in Description",
            Metric::H1Structure => "H1 Structure",
            Metric::PrimaryKwInH1 => "Primary KW in H1",
            Metric::H3Presence => "H3 Presence",
            Metric::H5H6Depth => "H5/H6 Depth",
            Metric::ParagraphLength => "Paragraph Length",
            Metric::BulletListPresence => "Bullet List Presence",
            Metric::InternalLinksCount => "Internal Links Count",
            Metric::InternalLinkAnchorLength => "Internal Link Anchor Length",
            Metric::BoldTextCount => "Bold Text Count",
            Metric::BoldSequenceLength => "Bold Sequence Length",
            Metric::SecondaryKwsInContent => "Secondary KWs in Content",
            Metric::ImagesWordCountRatio => "Images & Word Count Ratio",
            Metric::ImageAltTextPresence => "Image Alt Text Presence",
            Metric::PrimaryKwInImageAlts => "Primary KW in Image Alts",
            Metric::PrimaryKwInContent => "Primary KW in Content",
            Metric::BannerCta => "Banner / CTA",
        }
    }

    pub fn keyword_scope(self) -> KeywordScope {
        match self {
            Metric::PrimaryKwInTitle
            | Metric::PrimaryKwInDescription
            | Metric::PrimaryKwInH1
            | Metric::PrimaryKwInImageAlts
            | Metric::PrimaryKwInContent => KeywordScope::Primary,
            Metric::SecondaryKwsInContent => KeywordScope::Secondary,
            _ => KeywordScope::None,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one rule for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricRecord {
    /// Advice text, or [`NO_ISSUE`]
    pub recommendation: String,
    /// Current page content backing the verdict
    pub example: String,
}

impl MetricRecord {
    /// Record with no issue
    pub fn ok(example: impl Into<String>) -> Self {
        Self {
            recommendation: NO_ISSUE.to_string(),
            example: example.into(),
        }
    }

    /// Record flagging an issue
    pub fn issue(recommendation: impl Into<String>, example: impl Into<String>) -> Self {
        Self {
            recommendation: recommendation.into(),
            example: example.into(),
        }
    }

    pub fn is_issue(&self) -> bool {
        !self.recommendation.is_empty() && self.recommendation != NO_ISSUE
    }
}

/// Full audit of one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    #[serde(skip)]
    pub url: String,
    /// ISO 639-1 code when known
    #[serde(rename = "_lang")]
    pub language: String,
    #[serde(flatten)]
    pub metrics: BTreeMap<Metric, MetricRecord>,
}

impl AuditReport {
    pub fn get(&self, metric: Metric) -> Option<&MetricRecord> {
        self.metrics.get(&metric)
    }

    /// Flagged metrics in catalogue order
    pub fn issues(&self) -> impl Iterator<Item = (Metric, &MetricRecord)> {
        self.metrics
            .iter()
            .filter(|(_, record)| record.is_issue())
            .map(|(metric, record)| (*metric, record))
    }

    /// Whether every catalogue metric has a record
    pub fn is_complete(&self) -> bool {
        Metric::ALL.iter().all(|m| self.metrics.contains_key(m))
    }
}

/// Result of auditing one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UrlAudit {
    Report(AuditReport),
    /// Terminal failure; no partial report is produced
    Failed { error: String },
}

impl UrlAudit {
    pub fn report(&self) -> Option<&AuditReport> {
        match self {
            Self::Report(report) => Some(report),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Report(_) => None,
            Self::Failed { error } => Some(error),
        }
    }
}
