// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Title and meta description length rules

use crate::audit::types::MetricRecord;
use crate::content::PageDocument;

pub const TITLE_MIN_CHARS: usize = 30;
pub const TITLE_MAX_CHARS: usize = 60;
pub const DESCRIPTION_MIN_CHARS: usize = 120;
pub const DESCRIPTION_MAX_CHARS: usize = 160;

/// `<title>` must be 30..=60 characters
pub fn page_title(doc: &PageDocument) -> MetricRecord {
    let title = doc.title();
    let chars = title.chars().count();

    if title.is_empty() {
        MetricRecord::issue(
            "Add a page title of ~45 characters that includes your primary keyword.",
            "(none found)",
        )
    } else if chars < TITLE_MIN_CHARS {
        MetricRecord::issue(
            "Expand the page title to ~45 characters to improve SEO visibility.",
            title,
        )
    } else if chars > TITLE_MAX_CHARS {
        MetricRecord::issue(
            "Shorten the page title to ~45 characters to ensure it displays fully in search results.",
            title,
        )
    } else {
        MetricRecord::ok(title)
    }
}

/// Meta description must be 120..=160 characters
pub fn meta_description(doc: &PageDocument) -> MetricRecord {
    let description = doc.meta_description();
    let chars = description.chars().count();

    if description.is_empty() {
        MetricRecord::issue(
            "Add a meta description of ~130 characters that summarizes the page and includes a CTA.",
            "(none found)",
        )
    } else if chars < DESCRIPTION_MIN_CHARS {
        MetricRecord::issue(
            "Expand the meta description to ~130 characters to improve click-through rates.",
            description,
        )
    } else if chars > DESCRIPTION_MAX_CHARS {
        MetricRecord::issue(
            "Shorten the meta description to ~130 characters so it doesn\u{2019}t get cut off in search results.",
            description,
        )
    } else {
        MetricRecord::ok(description)
    }
}
