// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! On-page SEO rule evaluators
//!
//! Every rule is independent and stateless: it reads the immutable page
//! document (and, for keyword rules, the URL's keyword assignment and the
//! semantic oracle) and returns exactly one [`MetricRecord`]. Rules may run
//! in any order or concurrently.

pub mod body;
pub mod headings;
pub mod images;
pub mod keywords;
pub mod links;
pub mod meta;

use async_trait::async_trait;

use crate::audit::types::{Metric, MetricRecord};
use crate::content::PageDocument;
use crate::keywords::KeywordAssignment;
use crate::oracle::SemanticOracle;

pub use keywords::{KeywordTarget, PrimaryKeywordRule, SecondaryKeywordRule};

/// Everything a rule may read
pub struct RuleContext<'a> {
    pub document: &'a PageDocument,
    pub keywords: &'a KeywordAssignment,
    pub oracle: &'a dyn SemanticOracle,
}

/// A single audit check
#[async_trait]
pub trait Rule: Send + Sync {
    /// Metric this rule reports under
    fn metric(&self) -> Metric;

    /// Evaluate the page; always yields a record, using the "/" sentinel when fine
    async fn evaluate(&self, ctx: &RuleContext<'_>) -> MetricRecord;
}

/// Rule backed by a pure function of the document
pub struct DocumentRule {
    metric: Metric,
    check: fn(&PageDocument) -> MetricRecord,
}

impl DocumentRule {
    pub fn new(metric: Metric, check: fn(&PageDocument) -> MetricRecord) -> Self {
        Self { metric, check }
    }
}

#[async_trait]
impl Rule for DocumentRule {
    fn metric(&self) -> Metric {
        self.metric
    }

    async fn evaluate(&self, ctx: &RuleContext<'_>) -> MetricRecord {
        (self.check)(ctx.document)
    }
}

/// The full rule set, one rule per catalogue metric
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(DocumentRule::new(Metric::PageTitle, meta::page_title)),
        Box::new(PrimaryKeywordRule::new(
            Metric::PrimaryKwInTitle,
            KeywordTarget::Title,
        )),
        Box::new(DocumentRule::new(
            Metric::MetaDescription,
            meta::meta_description,
        )),
        Box::new(PrimaryKeywordRule::new(
            Metric::PrimaryKwInDescription,
            KeywordTarget::Description,
        )),
        Box::new(DocumentRule::new(
            Metric::H1Structure,
            headings::h1_structure,
        )),
        Box::new(PrimaryKeywordRule::new(
            Metric::PrimaryKwInH1,
            KeywordTarget::H1,
        )),
        Box::new(DocumentRule::new(Metric::H3Presence, headings::h3_presence)),
        Box::new(DocumentRule::new(Metric::H5H6Depth, headings::h5_h6_depth)),
        Box::new(DocumentRule::new(
            Metric::ParagraphLength,
            body::paragraph_length,
        )),
        Box::new(DocumentRule::new(
            Metric::BulletListPresence,
            body::bullet_lists,
        )),
        Box::new(DocumentRule::new(
            Metric::InternalLinksCount,
            links::internal_links_count,
        )),
        Box::new(DocumentRule::new(
            Metric::InternalLinkAnchorLength,
            links::anchor_length,
        )),
        Box::new(DocumentRule::new(Metric::BoldTextCount, body::bold_count)),
        Box::new(DocumentRule::new(
            Metric::BoldSequenceLength,
            body::bold_length,
        )),
        Box::new(SecondaryKeywordRule),
        Box::new(DocumentRule::new(
            Metric::ImagesWordCountRatio,
            images::images_word_ratio,
        )),
        Box::new(DocumentRule::new(
            Metric::ImageAltTextPresence,
            images::alt_text_presence,
        )),
        Box::new(PrimaryKeywordRule::new(
            Metric::PrimaryKwInImageAlts,
            KeywordTarget::ImageAlts,
        )),
        Box::new(PrimaryKeywordRule::new(
            Metric::PrimaryKwInContent,
            KeywordTarget::Content,
        )),
        Box::new(DocumentRule::new(Metric::BannerCta, body::banner_cta)),
    ]
}
