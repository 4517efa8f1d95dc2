// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! LLM-backed semantic oracle
//!
//! Asks a chat model for a yes/no verdict. Requests are paced by a shared
//! rate limiter.

use async_trait::async_trait;

use super::chat::ChatClient;
use super::config::OracleConfig;
use super::provider::SemanticOracle;
use super::rate_limiter::OracleRateLimiter;
use super::types::{Concept, OracleError};

const PRIMARY_SYSTEM_PROMPT: &str = "You are a semantic analysis tool for SEO keywords.";
const SECONDARY_SYSTEM_PROMPT: &str = "You are a semantic analysis tool for SEO secondary keywords.";

/// Oracle that delegates to an OpenAI-compatible chat model
pub struct LlmOracle {
    chat: ChatClient,
    limiter: OracleRateLimiter,
}

impl LlmOracle {
    /// Create an oracle from configuration; requires an API key
    pub fn new(config: &OracleConfig) -> Result<Self, OracleError> {
        if !config.is_configured() {
            return Err(OracleError::NotConfigured(
                "OPENAI_API_KEY is not set".to_string(),
            ));
        }

        Ok(Self {
            chat: ChatClient::new(config)?,
            limiter: OracleRateLimiter::new(config.rate_limit_per_minute),
        })
    }

    /// Build the (system, user) prompt pair for a query
    pub fn prompts(concept: &Concept, text: &str) -> (&'static str, String) {
        let (system, target) = match concept {
            Concept::Single(term) => (PRIMARY_SYSTEM_PROMPT, format!("this element {}", term)),
            Concept::Many(_) => (
                SECONDARY_SYSTEM_PROMPT,
                format!("each element of {}", concept),
            ),
        };

        let user = format!(
            "You are a helpful assistant specialized in analyzing the content of the website. \
             Try to find {} by finding its contextual and semantic match in the following text: {} \
             A match is considered even if the words don't match exactly but the concept or idea matches. \
             Answer only 'yes' or 'no'.",
            target, text
        );

        (system, user)
    }

    /// Interpret a model reply; anything containing "yes" is a match
    pub fn is_affirmative(answer: &str) -> bool {
        answer.to_lowercase().contains("yes")
    }
}

#[async_trait]
impl SemanticOracle for LlmOracle {
    async fn matches(&self, concept: &Concept, text: &str) -> Result<bool, OracleError> {
        let (system, user) = Self::prompts(concept, text);
        self.limiter.wait().await;
        let answer = self.chat.complete(system, &user, 0.0).await?;
        Ok(Self::is_affirmative(&answer))
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}
