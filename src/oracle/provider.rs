// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Semantic oracle trait definition

use async_trait::async_trait;
use tracing::{debug, warn};

use super::types::{Concept, OracleError};

/// Answers "does this concept appear in this text"
///
/// Implementations must tolerate paraphrase and synonymy, and be safe for
/// concurrent use from many audit tasks.
#[async_trait]
pub trait SemanticOracle: Send + Sync {
    /// Decide whether `concept` is expressed in `text`
    async fn matches(&self, concept: &Concept, text: &str) -> Result<bool, OracleError>;

    /// Get the oracle name for logging
    fn name(&self) -> &'static str;
}

/// Ask the oracle, degrading every failure to "no match"
///
/// An empty concept or empty text is answered `false` without a query.
pub async fn check_presence(oracle: &dyn SemanticOracle, concept: &Concept, text: &str) -> bool {
    if concept.is_empty() || text.trim().is_empty() {
        return false;
    }

    match oracle.matches(concept, text).await {
        Ok(found) => {
            debug!("Oracle {}: '{}' present = {}", oracle.name(), concept, found);
            found
        }
        Err(e) => {
            warn!(
                "Oracle {} failed for '{}', treating as no match: {}",
                oracle.name(),
                concept,
                e
            );
            false
        }
    }
}
