// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Keyword table parsing
//!
//! The input has three columns: `url`, `primary kw` and `secundary kw` (the
//! misspelling is the established header). A row with a URL starts a new
//! assignment; a row with an empty URL is a continuation row and appends its
//! secondary keyword to the most recently started assignment.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

pub const URL_COLUMN: &str = "url";
pub const PRIMARY_COLUMN: &str = "primary kw";
pub const SECONDARY_COLUMN: &str = "secundary kw";
/// Correctly spelled header, accepted as an alias
const SECONDARY_COLUMN_ALIAS: &str = "secondary kw";

/// Errors raised while loading a keyword table
#[derive(Debug, Error)]
pub enum KeywordTableError {
    /// A required header is absent
    #[error("Keyword table is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Keyword table is not valid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not read keyword table: {0}")]
    Io(#[from] std::io::Error),
}

/// Keywords assigned to one URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordAssignment {
    pub url: String,
    /// Primary keyword, empty when none was given
    #[serde(rename = "primary_kw")]
    pub primary: String,
    /// Secondary keywords in table order
    #[serde(rename = "secondary_kw")]
    pub secondary: Vec<String>,
}

impl KeywordAssignment {
    /// Assignment with no keywords, used for URLs absent from the table
    pub fn unassigned(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Default::default()
        }
    }

    pub fn has_primary(&self) -> bool {
        !self.primary.is_empty()
    }

    pub fn has_secondary(&self) -> bool {
        !self.secondary.is_empty()
    }
}

/// Parsed keyword table keyed by URL
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    assignments: HashMap<String, KeywordAssignment>,
    order: Vec<String>,
}

impl KeywordTable {
    /// Load a table from a CSV file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KeywordTableError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Parse a table from any CSV source
    ///
    /// Fails with [`KeywordTableError::MissingColumn`] before reading any row
    /// when a required header is absent.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, KeywordTableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect();
        let column = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

        let url_idx = column(&[URL_COLUMN]).ok_or(KeywordTableError::MissingColumn(URL_COLUMN))?;
        let primary_idx =
            column(&[PRIMARY_COLUMN]).ok_or(KeywordTableError::MissingColumn(PRIMARY_COLUMN))?;
        let secondary_idx = column(&[SECONDARY_COLUMN, SECONDARY_COLUMN_ALIAS])
            .ok_or(KeywordTableError::MissingColumn(SECONDARY_COLUMN))?;

        let mut table = Self::default();
        let mut current: Option<String> = None;

        for (line, record) in csv_reader.records().enumerate() {
            let record = record?;
            let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
            let url = field(url_idx);
            let secondary = field(secondary_idx);

            if !url.is_empty() {
                let mut assignment = KeywordAssignment {
                    url: url.clone(),
                    primary: field(primary_idx),
                    secondary: Vec::new(),
                };
                if !secondary.is_empty() {
                    assignment.secondary.push(secondary);
                }
                table.insert(assignment);
                current = Some(url);
            } else if secondary.is_empty() {
                continue;
            } else if let Some(assignment) = current
                .as_ref()
                .and_then(|u| table.assignments.get_mut(u))
            {
                assignment.secondary.push(secondary);
            } else {
                warn!(
                    "Ignoring continuation row {} with no preceding URL",
                    line + 2
                );
            }
        }

        debug!("Loaded keyword assignments for {} URLs", table.len());
        Ok(table)
    }

    /// Start (or restart) the assignment for a URL; the last one wins
    fn insert(&mut self, assignment: KeywordAssignment) {
        if !self.assignments.contains_key(&assignment.url) {
            self.order.push(assignment.url.clone());
        }
        self.assignments.insert(assignment.url.clone(), assignment);
    }

    pub fn get(&self, url: &str) -> Option<&KeywordAssignment> {
        self.assignments.get(url)
    }

    /// Assignment for a URL, or an empty one when the URL is not listed
    pub fn assignment_for(&self, url: &str) -> KeywordAssignment {
        self.get(url)
            .cloned()
            .unwrap_or_else(|| KeywordAssignment::unassigned(url))
    }

    pub fn contains(&self, url: &str) -> bool {
        self.assignments.contains_key(url)
    }

    /// URLs in the order they first appear in the table
    pub fn urls(&self) -> &[String] {
        &self.order
    }

    /// Assignments in table order
    pub fn assignments(&self) -> impl Iterator<Item = &KeywordAssignment> {
        self.order.iter().filter_map(|u| self.assignments.get(u))
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
