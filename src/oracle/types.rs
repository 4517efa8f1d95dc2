// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for semantic keyword matching

use thiserror::Error;

/// What the oracle is asked to find
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Concept {
    /// One keyword or phrase
    Single(String),
    /// Several keywords, each of which should be present
    Many(Vec<String>),
}

impl Concept {
    /// True when there is nothing to look for
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(term) => term.trim().is_empty(),
            Self::Many(terms) => terms.iter().all(|t| t.trim().is_empty()),
        }
    }

    /// Individual terms, blanks dropped
    pub fn terms(&self) -> Vec<&str> {
        let terms: Vec<&str> = match self {
            Self::Single(term) => vec![term.as_str()],
            Self::Many(terms) => terms.iter().map(String::as_str).collect(),
        };
        terms.into_iter().filter(|t| !t.trim().is_empty()).collect()
    }
}

impl std::fmt::Display for Concept {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(term) => write!(f, "{}", term),
            Self::Many(terms) => write!(f, "[{}]", terms.join(", ")),
        }
    }
}

/// Errors from an oracle backend
///
/// These never leave the keyword rules: a failed query counts as "no match".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OracleError {
    #[error("Oracle transport error: {0}")]
    Transport(String),

    #[error("Oracle API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Oracle returned an empty answer")]
    EmptyAnswer,

    #[error("Oracle not configured: {0}")]
    NotConfigured(String),
}
