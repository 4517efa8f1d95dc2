// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Internal link rules
//!
//! Anchors are resolved against the page URL; a link is internal when it
//! lands on the same host and port as the page.

use url::Url;

use crate::audit::types::MetricRecord;
use crate::content::{PageAnchor, PageDocument};

pub const MIN_INTERNAL_LINKS: usize = 5;
pub const MAX_ANCHOR_WORDS: usize = 6;

/// Same-host anchors in document order
pub fn internal_anchors(doc: &PageDocument) -> Vec<&PageAnchor> {
    let base = doc.url();
    doc.anchors()
        .iter()
        .filter(|anchor| match base.join(&anchor.href) {
            Ok(target) => is_same_site(base, &target),
            Err(_) => false,
        })
        .collect()
}

fn is_same_site(base: &Url, target: &Url) -> bool {
    target.host_str().is_some()
        && target.host_str() == base.host_str()
        && target.port() == base.port()
}

pub fn internal_links_count(doc: &PageDocument) -> MetricRecord {
    if internal_anchors(doc).len() < MIN_INTERNAL_LINKS {
        MetricRecord::issue(
            "Add at least 5 internal links to relevant pages for better navigation.",
            "(found fewer than 5 valid internal links)",
        )
    } else {
        MetricRecord::ok("")
    }
}

pub fn anchor_length(doc: &PageDocument) -> MetricRecord {
    let long = internal_anchors(doc)
        .into_iter()
        .find(|a| a.text.split_whitespace().count() > MAX_ANCHOR_WORDS);

    match long {
        Some(anchor) => MetricRecord::issue(
            format!(
                "Shorten link anchor text to 6 words or fewer. \
                 For example, the anchor \u{201c}{}\u{201d} is too long.",
                anchor.text
            ),
            anchor.text.as_str(),
        ),
        None => MetricRecord::ok(""),
    }
}
