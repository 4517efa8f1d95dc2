// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Boilerplate removal for fetched HTML
//!
//! Strips navigation, chrome and script noise from a parsed tree so that
//! rule evaluators only see page content.

use scraper::{ElementRef, Html, Selector};

/// Element kinds removed from every fetched page
pub const NOISE_ELEMENTS: [&str; 8] = [
    "header", "footer", "nav", "aside", "form", "noscript", "script", "style",
];

/// Detach every noise element from the tree
///
/// Returns the number of elements removed (nested noise counts once per element).
pub fn strip_noise(document: &mut Html) -> usize {
    let selector = match Selector::parse(&NOISE_ELEMENTS.join(", ")) {
        Ok(s) => s,
        Err(_) => return 0,
    };

    let ids: Vec<_> = document.select(&selector).map(|el| el.id()).collect();
    for id in &ids {
        if let Some(mut node) = document.tree.get_mut(*id) {
            node.detach();
        }
    }

    ids.len()
}

/// Select all elements matching a static CSS selector
pub(crate) fn select_all<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// Text content of an element with whitespace collapsed
pub(crate) fn element_text(element: &ElementRef) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

/// Normalize whitespace: collapse runs, trim ends
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
