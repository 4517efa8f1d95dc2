// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod audit;
pub mod keywords;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Fabstir SEO Auditor CLI
#[derive(Parser, Debug)]
#[command(name = "fabstir-seo-auditor")]
#[command(version = "0.1.0")]
#[command(about = "On-page SEO audits driven by a keyword table", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit pages listed in a keyword table
    Audit(audit::AuditArgs),

    /// Show the parsed keyword table
    Keywords(keywords::KeywordsArgs),
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Audit(args) => audit::run_audit(args).await,
        Commands::Keywords(args) => keywords::show_keywords(args),
    }
}
