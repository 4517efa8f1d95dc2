// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Body text rules: paragraphs, lists, emphasis and calls to action

use regex::Regex;
use std::sync::OnceLock;

use crate::audit::types::MetricRecord;
use crate::content::PageDocument;

pub const MAX_SENTENCES_PER_PARAGRAPH: usize = 3;
pub const MIN_BOLD_PHRASES: usize = 8;
pub const MAX_BOLD_WORDS: usize = 7;
pub const EXCERPT_CHARS: usize = 100;

/// Lowercase tokens that count as a call to action
pub const CTA_TOKENS: [&str; 3] = ["sign up", "subscribe", "discount"];

fn sentence_boundary() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"[.!?]+(?:\s|$)").expect("valid sentence regex"))
}

/// Number of non-empty sentences in a paragraph
pub fn sentence_count(text: &str) -> usize {
    sentence_boundary()
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// First `EXCERPT_CHARS` characters followed by an ellipsis
pub(crate) fn excerpt(text: &str) -> String {
    let head: String = text.chars().take(EXCERPT_CHARS).collect();
    format!("{}\u{2026}", head)
}

pub fn paragraph_length(doc: &PageDocument) -> MetricRecord {
    let first_long = doc
        .paragraphs()
        .iter()
        .find(|p| sentence_count(p) > MAX_SENTENCES_PER_PARAGRAPH);

    match first_long {
        Some(paragraph) => {
            let example = excerpt(paragraph);
            MetricRecord::issue(
                format!(
                    "Break long paragraphs into 2\u{2013}3 sentences each for readability. \
                     For example, the paragraph starting \u{201c}{}\u{201d} could be split.",
                    example
                ),
                example,
            )
        }
        None => MetricRecord::ok(""),
    }
}

pub fn bullet_lists(doc: &PageDocument) -> MetricRecord {
    if doc.list_count() == 0 {
        MetricRecord::issue(
            "Add a bullet or numbered list where appropriate to improve scannability.",
            "(no <ul> or <ol> tags found)",
        )
    } else {
        MetricRecord::ok("")
    }
}

pub fn bold_count(doc: &PageDocument) -> MetricRecord {
    let total = doc.bold_phrases().len();
    if total < MIN_BOLD_PHRASES {
        MetricRecord::issue(
            format!(
                "Bold at least 8 phrases to improve scannability. \
                 Currently only {} phrases are bolded.",
                total
            ),
            format!("(found {} bolded phrases)", total),
        )
    } else {
        MetricRecord::ok("")
    }
}

pub fn bold_length(doc: &PageDocument) -> MetricRecord {
    let long = doc
        .bold_phrases()
        .iter()
        .find(|p| p.split_whitespace().count() > MAX_BOLD_WORDS);

    match long {
        Some(phrase) => MetricRecord::issue(
            format!(
                "Shorten lengthy bolded phrases to 7 words or fewer. \
                 For example: \u{201c}{}\u{201d}.",
                phrase
            ),
            phrase.as_str(),
        ),
        None => MetricRecord::ok(""),
    }
}

/// Passes when the page already carries a call-to-action token
pub fn banner_cta(doc: &PageDocument) -> MetricRecord {
    let text = doc.text().to_lowercase();
    match CTA_TOKENS.iter().find(|token| text.contains(*token)) {
        Some(token) => MetricRecord::ok(*token),
        None => MetricRecord::issue(
            "Add a banner or call-to-action (e.g. \u{201c}Sign up\u{201d}, \
             \u{201c}Subscribe\u{201d} or a discount offer) to guide visitors to the next step.",
            "(no call-to-action found)",
        ),
    }
}
