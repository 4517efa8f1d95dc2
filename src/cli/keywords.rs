// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::keywords::{KeywordAssignment, KeywordTable};

/// Arguments for keywords command
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// CSV file with columns: url, primary kw, secundary kw
    #[arg(long, env = "SEO_KEYWORDS_CSV")]
    pub keywords: PathBuf,
}

/// Print the grouped keyword table as JSON
pub fn show_keywords(args: KeywordsArgs) -> Result<()> {
    let table = KeywordTable::from_path(&args.keywords)
        .with_context(|| format!("Could not parse CSV file {}", args.keywords.display()))?;

    let assignments: Vec<&KeywordAssignment> = table.assignments().collect();
    println!("{}", serde_json::to_string_pretty(&assignments)?);
    Ok(())
}
