// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Immutable snapshot of a sanitized page
//!
//! The parsed HTML tree is reduced once, at fetch time, to the plain data the
//! rule evaluators read. The snapshot owns no parser state, so it is `Send +
//! Sync` and can be shared by reference across concurrent evaluators.

use scraper::Html;
use url::Url;

use super::sanitize::{clean_text, element_text, select_all, strip_noise};

/// An `<img>` element as seen by the image rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// Raw `alt` attribute; `None` when the attribute is absent
    pub alt: Option<String>,
    /// Serialized element, used as the example for empty-alt findings
    pub markup: String,
}

impl PageImage {
    /// Alt attribute present and not mentioning "logo" (case-insensitive)
    pub fn is_content_image(&self) -> bool {
        self.alt
            .as_deref()
            .map(|alt| !alt.to_lowercase().contains("logo"))
            .unwrap_or(false)
    }
}

/// An `<a href>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAnchor {
    pub href: String,
    pub text: String,
}

/// Sanitized, read-only view of a fetched page
#[derive(Debug, Clone)]
pub struct PageDocument {
    url: Url,
    lang: Option<String>,
    title: String,
    meta_description: String,
    headings: Vec<(u8, String)>,
    paragraphs: Vec<String>,
    list_count: usize,
    anchors: Vec<PageAnchor>,
    bold_phrases: Vec<String>,
    images: Vec<PageImage>,
    text: String,
}

impl PageDocument {
    /// Parse raw HTML, strip noise elements and snapshot the result
    pub fn parse(url: Url, html: &str) -> Self {
        let mut document = Html::parse_document(html);
        strip_noise(&mut document);
        Self::from_sanitized(url, &document)
    }

    fn from_sanitized(url: Url, document: &Html) -> Self {
        let lang = select_all(document, "html")
            .first()
            .and_then(|el| el.value().attr("lang"))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        // Only the ends are trimmed; the title length rule counts inner spacing
        let title = select_all(document, "title")
            .first()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let meta_description = select_all(document, r#"meta[name="description"]"#)
            .first()
            .and_then(|el| el.value().attr("content"))
            .map(|v| v.trim().to_string())
            .unwrap_or_default();

        let headings = select_all(document, "h1, h2, h3, h4, h5, h6")
            .iter()
            .filter_map(|el| {
                let level = el.value().name().strip_prefix('h')?.parse::<u8>().ok()?;
                Some((level, element_text(el)))
            })
            .collect();

        let paragraphs = select_all(document, "p").iter().map(element_text).collect();

        let list_count = select_all(document, "ul, ol").len();

        let anchors = select_all(document, "a[href]")
            .iter()
            .filter_map(|el| {
                el.value().attr("href").map(|href| PageAnchor {
                    href: href.to_string(),
                    text: element_text(el),
                })
            })
            .collect();

        let bold_phrases = select_all(document, "b, strong")
            .iter()
            .map(element_text)
            .filter(|t| !t.is_empty())
            .collect();

        let images = select_all(document, "img")
            .iter()
            .map(|el| PageImage {
                alt: el.value().attr("alt").map(str::to_string),
                markup: el.html(),
            })
            .collect();

        let text = clean_text(&document.root_element().text().collect::<Vec<_>>().join(" "));

        Self {
            url,
            lang,
            title,
            meta_description,
            headings,
            paragraphs,
            list_count,
            anchors,
            bold_phrases,
            images,
            text,
        }
    }

    /// URL the page was requested from
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Declared `<html lang>` attribute, if any
    pub fn declared_lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// `<title>` text, empty when missing
    pub fn title(&self) -> &str {
        &self.title
    }

    /// `<meta name="description">` content, empty when missing
    pub fn meta_description(&self) -> &str {
        &self.meta_description
    }

    /// Heading texts of one level, in document order
    pub fn headings(&self, level: u8) -> Vec<&str> {
        self.headings_in(&[level])
    }

    /// Heading texts of any of the given levels, in document order
    pub fn headings_in(&self, levels: &[u8]) -> Vec<&str> {
        self.headings
            .iter()
            .filter(|(level, _)| levels.contains(level))
            .map(|(_, text)| text.as_str())
            .collect()
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Number of `<ul>` and `<ol>` elements
    pub fn list_count(&self) -> usize {
        self.list_count
    }

    pub fn anchors(&self) -> &[PageAnchor] {
        &self.anchors
    }

    /// Non-empty `<b>`/`<strong>` texts in document order
    pub fn bold_phrases(&self) -> &[String] {
        &self.bold_phrases
    }

    pub fn images(&self) -> &[PageImage] {
        &self.images
    }

    /// Whole-page text with whitespace collapsed
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
