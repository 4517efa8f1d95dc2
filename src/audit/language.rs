// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page language resolution

use tracing::debug;
use whatlang::Lang;

use crate::content::PageDocument;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Declared `lang` attribute first, then statistical detection, then English
pub fn resolve_language(doc: &PageDocument) -> String {
    if let Some(code) = doc.declared_lang().and_then(primary_subtag) {
        return code;
    }

    match detect_language(doc.text()) {
        Some(code) => {
            debug!("Detected language '{}' for {}", code, doc.url());
            code
        }
        None => DEFAULT_LANGUAGE.to_string(),
    }
}

/// `en-GB` -> `en`
fn primary_subtag(tag: &str) -> Option<String> {
    tag.split(['-', '_'])
        .next()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

/// Statistical detection on page text, as an ISO 639-1 code where one is known
pub fn detect_language(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    let lang = whatlang::detect(text)?.lang();
    let code = match lang {
        Lang::Eng => "en",
        Lang::Hrv => "hr",
        Lang::Srp => "sr",
        Lang::Deu => "de",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Pol => "pl",
        Lang::Ces => "cs",
        Lang::Slv => "sl",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Bul => "bg",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Hun => "hu",
        Lang::Ron => "ro",
        Lang::Tur => "tr",
        other => other.code(),
    };
    Some(code.to_string())
}

/// Human-readable name used when addressing the page owner
pub fn language_name(code: &str) -> &'static str {
    match code {
        "hr" => "Croatian",
        "sr" => "Serbian",
        "bs" => "Bosnian",
        "de" => "German",
        "fr" => "French",
        "es" => "Spanish",
        _ => "English",
    }
}
