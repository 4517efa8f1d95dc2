// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image coverage and alt text rules
//!
//! Only content images count: the `alt` attribute must be present and must not
//! mention "logo". Images with no `alt` attribute at all are ignored.

use crate::audit::types::MetricRecord;
use crate::content::{PageDocument, PageImage};

pub fn content_images(doc: &PageDocument) -> Vec<&PageImage> {
    doc.images().iter().filter(|img| img.is_content_image()).collect()
}

/// Non-empty alt texts of content images
pub fn content_alts(doc: &PageDocument) -> Vec<&str> {
    content_images(doc)
        .into_iter()
        .filter_map(|img| img.alt.as_deref())
        .filter(|alt| !alt.trim().is_empty())
        .collect()
}

/// Images needed for the page length, if the page is in a checked band
fn required_images(word_count: usize) -> Option<usize> {
    if word_count > 1500 {
        Some(3)
    } else if (400..=1000).contains(&word_count) {
        Some(2)
    } else {
        None
    }
}

pub fn images_word_ratio(doc: &PageDocument) -> MetricRecord {
    let word_count = doc.word_count();
    let images = content_images(doc).len();

    match required_images(word_count) {
        Some(needed) if images < needed => MetricRecord::issue(
            format!(
                "At {} words but only {} images, add {} more images. \
                 For instance: a chart of key data (alt: \u{201c}Key data chart\u{201d}) \
                 and a photo illustrating the topic.",
                word_count,
                images,
                needed - images
            ),
            format!("({} images found)", images),
        ),
        _ => MetricRecord::ok(""),
    }
}

pub fn alt_text_presence(doc: &PageDocument) -> MetricRecord {
    let empty: Vec<&PageImage> = content_images(doc)
        .into_iter()
        .filter(|img| img.alt.as_deref().map(|a| a.trim().is_empty()).unwrap_or(false))
        .collect();

    match empty.first() {
        Some(first) => MetricRecord::issue(
            format!(
                "{} image(s) lack alt text, which hurts accessibility. \
                 Add alt attributes like \u{201c}Description of image\u{201d} for each.",
                empty.len()
            ),
            first.markup.as_str(),
        ),
        None => MetricRecord::ok(""),
    }
}
