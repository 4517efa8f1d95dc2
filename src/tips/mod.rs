// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Conversational fix suggestions
//!
//! Turns a flagged metric into short advice addressed to the page owner,
//! using the same chat backend as the LLM oracle. Tip failures never abort a
//! run; they come back as an inline error string.

use tracing::{debug, warn};

use crate::audit::language::language_name;
use crate::audit::types::{KeywordScope, Metric, MetricRecord};
use crate::keywords::KeywordAssignment;
use crate::oracle::{ChatClient, OracleConfig, OracleError, OracleRateLimiter};

const TIP_SYSTEM_PROMPT: &str = "You are a friendly SEO content advisor.";
const TIP_TEMPERATURE: f32 = 0.1;

/// One flagged metric to explain
#[derive(Debug, Clone, PartialEq)]
pub struct TipRequest {
    pub metric: Metric,
    pub recommendation: String,
    /// Current page content for the metric
    pub example: String,
    /// Keywords the advice should use, for keyword metrics only
    pub keywords: Option<Vec<String>>,
    /// ISO 639-1 code of the page
    pub language: String,
}

impl TipRequest {
    /// Build a request, scoping keywords to the metric
    pub fn for_metric(
        metric: Metric,
        record: &MetricRecord,
        assignment: &KeywordAssignment,
        language: &str,
    ) -> Self {
        let keywords = match metric.keyword_scope() {
            KeywordScope::Primary if assignment.has_primary() => {
                Some(vec![assignment.primary.clone()])
            }
            KeywordScope::Secondary if assignment.has_secondary() => {
                Some(assignment.secondary.clone())
            }
            _ => None,
        };

        Self {
            metric,
            recommendation: record.recommendation.clone(),
            example: record.example.clone(),
            keywords,
            language: language.to_string(),
        }
    }

    /// User prompt sent to the chat model
    pub fn prompt(&self) -> String {
        let metric = self.metric.name();
        let current = &self.example;

        let mut prompt = format!(
            "You are an SEO consultant, specialized in clear communication and practical solutions. \
             A page owner sees this raw issue for '{}':\n\n    {} because this is the current version \
             of the metric: {} \n\n",
            metric, self.recommendation, current
        );

        if let Some(keywords) = self.keywords.as_ref().filter(|k| !k.is_empty()) {
            prompt.push_str(&format!(
                "If there are keyword related issues, here are the keywords to include: {}\n\n",
                keywords.join(", ")
            ));
        }

        prompt.push_str(
            "Your task is to transform this technical issue into a straightforward, conversational \
             explanation for the page owner. Clearly articulate what the problem is and, more \
             importantly, **how they can fix it themselves with concrete, actionable steps and \
             examples.**\n\
             When explaining and suggesting, ensure you:\n\
             -   **Explain the 'Why':** Briefly touch on *why* this problem matters for their \
             website's SEO and user experience.\n\
             -   **Direct Address:** Speak directly to the page owner (e.g., 'Your page title...', \
             'You can do this by...').\n\
             -   **Actionable Steps:** Provide step-by-step instructions or clear tasks they can perform.\n",
        );
        prompt.push_str(&format!(
            "-   **Concrete Examples:** Offer specific, ready-to-use examples for titles, descriptions, \
             content snippets, or structural changes. Make sure that all examples are directly \
             connected to {} and not some general examples.\n",
            current
        ));
        prompt.push_str(
            "-   **Quantifiable Advice:** Include numbers, lengths, or counts where relevant (e.g., \
             'aim for 45-60 characters', 'add 2-3 bullet points').\n\
             -   **Focus on 'How-To':** The primary goal is to empower the page owner to take \
             immediate, effective action.\n",
        );
        prompt.push_str(&format!(
            "For every {} write max 7 sentences. Write the examples in {}.",
            metric,
            language_name(&self.language)
        ));
        prompt
    }
}

/// Generates advisor prose for flagged metrics
pub struct TipGenerator {
    client: ChatClient,
    rate_limiter: OracleRateLimiter,
}

impl TipGenerator {
    /// Create a tip generator; requires an API key
    pub fn new(config: &OracleConfig) -> Result<Self, OracleError> {
        if !config.is_configured() {
            return Err(OracleError::NotConfigured(
                "OPENAI_API_KEY is required for tips".to_string(),
            ));
        }

        Ok(Self {
            client: ChatClient::new(config)?,
            rate_limiter: OracleRateLimiter::new(config.rate_limit_per_minute),
        })
    }

    /// Advice text, or `(Error getting tip: ...)` on failure
    pub async fn tip(&self, request: &TipRequest) -> String {
        self.rate_limiter.wait().await;
        debug!("Requesting tip for '{}'", request.metric);

        match self
            .client
            .complete(TIP_SYSTEM_PROMPT, &request.prompt(), TIP_TEMPERATURE)
            .await
        {
            Ok(tip) => tip,
            Err(e) => {
                warn!("Tip generation failed for '{}': {}", request.metric, e);
                format!("(Error getting tip: {})", e)
            }
        }
    }
}
