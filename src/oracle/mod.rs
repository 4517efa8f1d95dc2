// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Semantic keyword matching
//!
//! Keyword rules ask an oracle whether a concept appears in a piece of page
//! text. The oracle is a pluggable capability:
//! - `LlmOracle` - OpenAI-compatible chat model, rate limited
//! - `LexicalOracle` - offline word-overlap fallback
//!
//! Oracle failures are never fatal: `check_presence` turns them into "no
//! match", which surfaces as a keyword recommendation.

pub mod chat;
pub mod config;
pub mod lexical;
pub mod llm;
pub mod provider;
pub mod rate_limiter;
pub mod types;

pub use chat::ChatClient;
pub use config::OracleConfig;
pub use lexical::LexicalOracle;
pub use llm::LlmOracle;
pub use provider::{check_presence, SemanticOracle};
pub use rate_limiter::OracleRateLimiter;
pub use types::{Concept, OracleError};
