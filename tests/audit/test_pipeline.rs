// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Whole-pipeline properties: completeness, idempotence and failure isolation

use fabstir_seo_auditor::audit::LANGUAGE_KEY;
use fabstir_seo_auditor::{AuditConfig, KeywordTable, LexicalOracle, Metric};
use std::sync::Arc;
use std::time::Duration;

use super::support::{audit_page, auditor, auditor_with, keywords, StaticPageSource};

const RICH_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en-US">
<head>
    <title>Garden tools guide for beginners and pros</title>
    <meta name="description" content="A complete guide to garden tools.">
</head>
<body>
    <h1>Garden tools</h1>
    <h2>Digging</h2>
    <p>Spades dig. Forks loosen. Trowels plant. Hoes weed. Rakes level.</p>
    <ul><li>Spade</li><li>Rake</li></ul>
    <a href="/spades">Spades</a>
    <p>Sign up for our tips.</p>
</body>
</html>"#;

#[tokio::test]
async fn test_report_is_complete_for_any_input() {
    let inputs = [
        "",
        "not html at all",
        "<html><body></body></html>",
        "<html><body><h5>deep</h5><b></b><img></body></html>",
        RICH_PAGE,
    ];

    for html in inputs {
        let audit = audit_page("https://example.com/", html).await;
        let report = audit.report().unwrap();
        assert!(report.is_complete(), "incomplete report for {:?}", html);
        assert_eq!(report.metrics.len(), Metric::ALL.len());
    }
}

#[tokio::test]
async fn test_report_serializes_flat_with_language_key() {
    let audit = audit_page("https://example.com/", RICH_PAGE).await;
    let json = serde_json::to_value(&audit).unwrap();
    let object = json.as_object().unwrap();

    assert_eq!(object.len(), Metric::ALL.len() + 1);
    assert_eq!(object[LANGUAGE_KEY], "en");
    for metric in Metric::ALL {
        let record = &object[metric.name()];
        assert!(record["recommendation"].is_string());
        assert!(record["example"].is_string());
    }
    assert_eq!(object["Paragraph Length"]["recommendation"].as_str().map(|s| s != "/"), Some(true));
}

#[tokio::test]
async fn test_audit_is_idempotent() {
    let url = "https://example.com/guide";
    let auditor = auditor(StaticPageSource::default().with_page(url, RICH_PAGE));
    let kw = keywords(url, "garden tools", &["spades", "rakes"]);

    let first = serde_json::to_vec(&auditor.audit_url(url, &kw).await).unwrap();
    let second = serde_json::to_vec(&auditor.audit_url(url, &kw).await).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fetch_failure_isolated_in_batch() {
    let table = KeywordTable::from_reader(
        "url,primary kw,secundary kw\n\
         https://example.com/ok,garden tools,\n\
         https://example.com/gone,spades,\n"
            .as_bytes(),
    )
    .unwrap();
    let auditor = auditor(StaticPageSource::default().with_page("https://example.com/ok", RICH_PAGE));

    let results = auditor.audit(table.urls(), &table).await;
    assert_eq!(results.len(), 2);

    let error = results["https://example.com/gone"].error().unwrap();
    assert!(error.starts_with("Could not fetch page"));
    let json = serde_json::to_value(&results["https://example.com/gone"]).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 1);

    assert!(results["https://example.com/ok"].report().unwrap().is_complete());
}

#[tokio::test]
async fn test_url_timeout_yields_error_record() {
    let url = "https://example.com/slow";
    let source = StaticPageSource::default()
        .with_page(url, RICH_PAGE)
        .with_delay(Duration::from_secs(5));
    let config = AuditConfig {
        url_timeout_secs: 1,
        ..AuditConfig::default()
    };
    let auditor = auditor_with(source, Arc::new(LexicalOracle::new()), config);

    let audit = auditor.audit_url(url, &keywords(url, "", &[])).await;
    assert!(audit.error().unwrap().contains("timed out"));
}
