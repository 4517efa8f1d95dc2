// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Decision boundaries of the length and structure rules, end to end

use fabstir_seo_auditor::audit::NO_ISSUE;
use fabstir_seo_auditor::Metric;

use super::support::audit_page;

const URL: &str = "https://example.com/page";

async fn record(metric: Metric, html: String) -> (String, String) {
    let audit = audit_page(URL, &html).await;
    let record = audit.report().unwrap().get(metric).unwrap().clone();
    (record.recommendation, record.example)
}

#[tokio::test]
async fn test_title_length_boundaries() {
    let page = |n: usize| format!("<html><head><title>{}</title></head></html>", "x".repeat(n));

    let (rec, _) = record(Metric::PageTitle, page(29)).await;
    assert!(rec.starts_with("Expand the page title"));
    assert_eq!(record(Metric::PageTitle, page(30)).await.0, NO_ISSUE);
    assert_eq!(record(Metric::PageTitle, page(60)).await.0, NO_ISSUE);
    let (rec, example) = record(Metric::PageTitle, page(61)).await;
    assert!(rec.starts_with("Shorten the page title"));
    assert_eq!(example, "x".repeat(61));
}

#[tokio::test]
async fn test_description_length_boundaries() {
    let page = |n: usize| {
        format!(
            r#"<html><head><meta name="description" content="{}"></head></html>"#,
            "d".repeat(n)
        )
    };

    assert!(record(Metric::MetaDescription, page(119))
        .await
        .0
        .starts_with("Expand the meta description"));
    assert_eq!(record(Metric::MetaDescription, page(120)).await.0, NO_ISSUE);
    assert_eq!(record(Metric::MetaDescription, page(160)).await.0, NO_ISSUE);
    assert!(record(Metric::MetaDescription, page(161))
        .await
        .0
        .starts_with("Shorten the meta description"));
}

#[tokio::test]
async fn test_h1_count() {
    let (rec, example) = record(Metric::H1Structure, "<body><p>No heading</p></body>".into()).await;
    assert!(rec.starts_with("Add exactly one <h1>"));
    assert_eq!(example, "(no H1 found)");

    let (rec, example) = record(
        Metric::H1Structure,
        "<body><h1>Spades</h1><h1>Rakes</h1></body>".into(),
    )
    .await;
    assert!(rec.starts_with("Remove extra <h1>"));
    assert_eq!(example, "Spades; Rakes");
}

#[tokio::test]
async fn test_h3_not_applicable_without_h2() {
    let (rec, _) = record(Metric::H3Presence, "<body><h1>Only</h1></body>".into()).await;
    assert_eq!(rec, NO_ISSUE);

    let (rec, example) = record(Metric::H3Presence, "<body><h2>Section</h2></body>".into()).await;
    assert_ne!(rec, NO_ISSUE);
    assert_eq!(example, "(no H3 tags found)");
}

#[tokio::test]
async fn test_empty_alt_counted_missing_alt_ignored() {
    let html = r#"<body><img src="/a.png" alt=""><img src="/b.png"><img src="/c.png" alt="Logo"></body>"#;
    let (rec, example) = record(Metric::ImageAltTextPresence, html.into()).await;
    assert!(rec.starts_with("1 image(s) lack alt text"));
    assert!(example.contains("/a.png"));
}

#[tokio::test]
async fn test_banner_polarity() {
    let (rec, example) = record(
        Metric::BannerCta,
        "<body><p>Subscribe to our newsletter</p></body>".into(),
    )
    .await;
    assert_eq!(rec, NO_ISSUE);
    assert_eq!(example, "subscribe");

    let (rec, _) = record(Metric::BannerCta, "<body><p>Just an article</p></body>".into()).await;
    assert_ne!(rec, NO_ISSUE);
}
