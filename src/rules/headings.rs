// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Heading structure rules

use crate::audit::types::MetricRecord;
use crate::content::PageDocument;

/// Exactly one `<h1>`
pub fn h1_structure(doc: &PageDocument) -> MetricRecord {
    let h1s = doc.headings(1);
    match h1s.len() {
        0 => MetricRecord::issue(
            "Add exactly one <h1> tag that clearly states the page\u{2019}s topic.",
            "(no H1 found)",
        ),
        1 => MetricRecord::ok(h1s[0]),
        _ => MetricRecord::issue(
            "Remove extra <h1> tags so there is only one main heading.",
            h1s.join("; "),
        ),
    }
}

/// At least one `<h3>` whenever the page uses `<h2>`
pub fn h3_presence(doc: &PageDocument) -> MetricRecord {
    let has_h3 = !doc.headings(3).is_empty();
    let has_h2 = !doc.headings(2).is_empty();

    if !has_h3 && has_h2 {
        MetricRecord::issue(
            "Add at least one <h3> subsection under each <h2> to improve hierarchy.",
            "(no H3 tags found)",
        )
    } else if has_h3 {
        MetricRecord::ok("(H3 present)")
    } else {
        MetricRecord::ok("")
    }
}

/// No headings deeper than `<h4>`
pub fn h5_h6_depth(doc: &PageDocument) -> MetricRecord {
    let deep = doc.headings_in(&[5, 6]);
    if deep.is_empty() {
        MetricRecord::ok("")
    } else {
        MetricRecord::issue(
            "Remove <h5> and <h6> tags; stop heading depth at <h4>.",
            deep.join("; "),
        )
    }
}
