// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Offline word-overlap oracle
//!
//! Used when no chat backend is configured. It only recognises literal word
//! matches (with a suffix allowance for plurals and inflections), so it under-
//! reports paraphrases compared to the LLM oracle.

use async_trait::async_trait;
use std::collections::HashSet;

use super::provider::SemanticOracle;
use super::types::{Concept, OracleError};

/// Shortest concept word that may match a longer text word by prefix
const PREFIX_MATCH_MIN_LEN: usize = 4;

/// Case-insensitive word-overlap oracle
#[derive(Debug, Default, Clone)]
pub struct LexicalOracle;

impl LexicalOracle {
    pub fn new() -> Self {
        Self
    }

    fn words(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(|w| w.to_lowercase())
            .collect()
    }

    /// Every word of `term` appears in the text words
    fn term_present(term: &str, text_words: &HashSet<String>) -> bool {
        let words = Self::words(term);
        !words.is_empty()
            && words.iter().all(|word| {
                text_words.contains(word)
                    || (word.chars().count() >= PREFIX_MATCH_MIN_LEN
                        && text_words.iter().any(|t| t.starts_with(word.as_str())))
            })
    }
}

#[async_trait]
impl SemanticOracle for LexicalOracle {
    async fn matches(&self, concept: &Concept, text: &str) -> Result<bool, OracleError> {
        let text_words: HashSet<String> = Self::words(text).into_iter().collect();
        let terms = concept.terms();
        Ok(!terms.is_empty()
            && terms
                .iter()
                .all(|term| Self::term_present(term, &text_words)))
    }

    fn name(&self) -> &'static str {
        "lexical"
    }
}
