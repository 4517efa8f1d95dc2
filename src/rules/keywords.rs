// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Keyword presence rules
//!
//! Both rules delegate the match decision to the semantic oracle through
//! [`check_presence`], so a failing oracle reads as "keyword missing".

use async_trait::async_trait;

use super::body::excerpt;
use super::images::content_alts;
use super::{Rule, RuleContext};
use crate::audit::types::{Metric, MetricRecord};
use crate::content::PageDocument;
use crate::oracle::{check_presence, Concept};

/// Page element checked for the primary keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordTarget {
    Title,
    Description,
    H1,
    /// Non-empty alt texts of content images, space joined
    ImageAlts,
    /// Whole-page text
    Content,
}

impl KeywordTarget {
    /// Text handed to the oracle
    pub fn text(self, doc: &PageDocument) -> String {
        match self {
            Self::Title => doc.title().to_string(),
            Self::Description => doc.meta_description().to_string(),
            Self::H1 => doc.headings(1).first().map(|h| h.to_string()).unwrap_or_default(),
            Self::ImageAlts => content_alts(doc).join(" "),
            Self::Content => doc.text().to_string(),
        }
    }

    fn missing_record(self, primary: &str, doc: &PageDocument, text: &str) -> MetricRecord {
        match self {
            Self::Title => MetricRecord::issue(
                format!(
                    "Include your primary keyword (\u{201c}{}\u{201d}) in the page title for better relevance.",
                    primary
                ),
                if text.is_empty() { "(no title to show)" } else { text },
            ),
            Self::Description => MetricRecord::issue(
                format!(
                    "Include your primary keyword (\u{201c}{}\u{201d}) in the meta description for better relevance.",
                    primary
                ),
                text,
            ),
            Self::H1 => MetricRecord::issue(
                format!(
                    "Include your primary keyword (\u{201c}{}\u{201d}) in the <h1> tag to signal relevance.",
                    primary
                ),
                text,
            ),
            Self::ImageAlts => {
                let alts = content_alts(doc);
                let current = if alts.is_empty() {
                    "(none)".to_string()
                } else {
                    format!("{:?}", alts)
                };
                MetricRecord::issue(
                    format!(
                        "Include your primary keyword in at least one image\u{2019}s alt text. \
                         Current alts: {}.",
                        current
                    ),
                    alts.first().copied().unwrap_or(""),
                )
            }
            Self::Content => MetricRecord::issue(
                format!(
                    "Include your primary keyword (\u{201c}{}\u{201d}) naturally in the main content, \
                     ideally within the first paragraph.",
                    primary
                ),
                if text.is_empty() { String::new() } else { excerpt(text) },
            ),
        }
    }

    fn present_record(self, text: &str) -> MetricRecord {
        match self {
            Self::Title | Self::Description | Self::H1 => MetricRecord::ok(text),
            Self::ImageAlts | Self::Content => MetricRecord::ok(""),
        }
    }
}

/// Primary keyword presence in one page element
pub struct PrimaryKeywordRule {
    metric: Metric,
    target: KeywordTarget,
}

impl PrimaryKeywordRule {
    pub fn new(metric: Metric, target: KeywordTarget) -> Self {
        Self { metric, target }
    }
}

#[async_trait]
impl Rule for PrimaryKeywordRule {
    fn metric(&self) -> Metric {
        self.metric
    }

    async fn evaluate(&self, ctx: &RuleContext<'_>) -> MetricRecord {
        let text = self.target.text(ctx.document);
        if !ctx.keywords.has_primary() {
            return self.target.present_record(&text);
        }

        let primary = &ctx.keywords.primary;
        let concept = Concept::Single(primary.clone());
        if check_presence(ctx.oracle, &concept, &text).await {
            self.target.present_record(&text)
        } else {
            self.target.missing_record(primary, ctx.document, &text)
        }
    }
}

/// All secondary keywords present in the whole-page text
pub struct SecondaryKeywordRule;

#[async_trait]
impl Rule for SecondaryKeywordRule {
    fn metric(&self) -> Metric {
        Metric::SecondaryKwsInContent
    }

    async fn evaluate(&self, ctx: &RuleContext<'_>) -> MetricRecord {
        let secondaries = &ctx.keywords.secondary;
        if secondaries.is_empty() {
            return MetricRecord::ok("");
        }

        let concept = Concept::Many(secondaries.clone());
        if check_presence(ctx.oracle, &concept, ctx.document.text()).await {
            MetricRecord::ok("")
        } else {
            MetricRecord::issue(
                format!(
                    "Include your secondary keywords somewhere in the main content. \
                     Current secondaries: {:?}.",
                    secondaries
                ),
                secondaries.join(", "),
            )
        }
    }
}
