// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

use crate::audit::{AuditConfig, Metric, SeoAuditor, UrlAudit};
use crate::keywords::KeywordTable;
use crate::tips::{TipGenerator, TipRequest};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Arguments for audit command
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// CSV file with columns: url, primary kw, secundary kw
    #[arg(long, env = "SEO_KEYWORDS_CSV")]
    pub keywords: PathBuf,

    /// URL to audit (repeatable); defaults to every URL in the table
    #[arg(long = "url")]
    pub urls: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Ask the chat model for a fix suggestion per issue
    #[arg(long, conflicts_with = "offline")]
    pub tips: bool,

    /// Use the lexical keyword matcher even when an API key is set
    #[arg(long)]
    pub offline: bool,
}

/// Tips per URL, then per metric
pub type TipMap = BTreeMap<String, BTreeMap<Metric, String>>;

#[derive(Serialize)]
struct AuditOutput<'a> {
    reports: &'a BTreeMap<String, UrlAudit>,
    tips: &'a TipMap,
}

/// URLs to audit; every explicit URL must be listed in the table
pub fn select_urls(requested: &[String], table: &KeywordTable) -> Result<Vec<String>> {
    if requested.is_empty() {
        if table.is_empty() {
            return Err(anyhow!("Keyword table lists no URLs"));
        }
        return Ok(table.urls().to_vec());
    }

    if let Some(missing) = requested.iter().find(|url| !table.contains(url)) {
        return Err(anyhow!(
            "URL {} was not found in the keyword table. Please ensure it is included.",
            missing
        ));
    }
    Ok(requested.to_vec())
}

/// Run the audit and print the reports to stdout
pub async fn run_audit(args: AuditArgs) -> Result<()> {
    let table = KeywordTable::from_path(&args.keywords)
        .with_context(|| format!("Could not parse CSV file {}", args.keywords.display()))?;
    let urls = select_urls(&args.urls, &table)?;

    let config = AuditConfig::from_env();
    config.validate().map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    let tip_generator = if args.tips {
        Some(TipGenerator::new(&config.oracle)?)
    } else {
        None
    };

    let auditor = SeoAuditor::from_config(config, args.offline);
    info!(
        "Auditing {} URLs with the {} keyword oracle",
        urls.len(),
        auditor.oracle_name()
    );
    let results = auditor.audit(&urls, &table).await;

    let tips = match tip_generator {
        Some(generator) => collect_tips(&generator, &results, &table).await,
        None => TipMap::new(),
    };

    let output = match args.format {
        OutputFormat::Json if args.tips => serde_json::to_string_pretty(&AuditOutput {
            reports: &results,
            tips: &tips,
        })?,
        OutputFormat::Json => serde_json::to_string_pretty(&results)?,
        OutputFormat::Text => render_text(&results, &tips),
    };
    println!("{}", output);
    Ok(())
}

async fn collect_tips(
    generator: &TipGenerator,
    results: &BTreeMap<String, UrlAudit>,
    table: &KeywordTable,
) -> TipMap {
    let mut tips = TipMap::new();
    for (url, audit) in results {
        let Some(report) = audit.report() else {
            continue;
        };
        let assignment = table.assignment_for(url);
        let mut url_tips = BTreeMap::new();
        for (metric, record) in report.issues() {
            let request = TipRequest::for_metric(metric, record, &assignment, &report.language);
            url_tips.insert(metric, generator.tip(&request).await);
        }
        tips.insert(url.clone(), url_tips);
    }
    tips
}

/// Human-readable report listing only the flagged metrics
pub fn render_text(results: &BTreeMap<String, UrlAudit>, tips: &TipMap) -> String {
    let mut out = String::new();
    for (url, audit) in results {
        let _ = writeln!(out, "== {}", url);
        let report = match audit {
            UrlAudit::Failed { error } => {
                let _ = writeln!(out, "Error: {}\n", error);
                continue;
            }
            UrlAudit::Report(report) => report,
        };

        let _ = writeln!(out, "Language: {}", report.language);
        let url_tips = tips.get(url);
        let mut any_issue = false;
        for (metric, record) in report.issues() {
            any_issue = true;
            let _ = writeln!(out, "{}: {}", metric, record.recommendation);
            if record.example.is_empty() {
                let _ = writeln!(out, "  Current content: (none found)");
            } else {
                let _ = writeln!(out, "  Current content: \u{201c}{}\u{201d}", record.example);
            }
            if let Some(tip) = url_tips.and_then(|t| t.get(&metric)) {
                let _ = writeln!(out, "  > {}", tip);
            }
        }
        if !any_issue {
            let _ = writeln!(out, "No actionable issues found.");
        }
        out.push('\n');
    }
    out
}
