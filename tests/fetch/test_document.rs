// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Fetched pages are sanitized before any rule sees them

use fabstir_seo_auditor::{ContentFetcher, FetchConfig, PageSource};

use super::mock_site::{spawn, Step};

const NOISY_PAGE: &str = r#"<!DOCTYPE html>
<html lang="de-AT">
<head>
    <title>Gartenwerkzeuge im Test</title>
    <meta name="description" content="Die besten Werkzeuge für Ihren Garten.">
    <script>trackVisitor();</script>
</head>
<body>
    <header><a href="/home">Startseite</a></header>
    <nav><a href="/shop">Shop</a></nav>
    <h1>Gartenwerkzeuge</h1>
    <p>Spaten und Rechen im Vergleich.</p>
    <form><input name="newsletter"></form>
    <footer>Impressum</footer>
</body>
</html>"#;

#[tokio::test]
async fn test_fetch_returns_sanitized_document() {
    let site = spawn(vec![Step::Html(NOISY_PAGE)]).await;
    let fetcher = ContentFetcher::new(FetchConfig {
        allow_private_hosts: true,
        ..FetchConfig::default()
    });

    let url = site.url("/werkzeuge");
    let doc = fetcher.fetch(&url).await.unwrap();

    assert_eq!(doc.url().as_str(), url);
    assert_eq!(doc.declared_lang(), Some("de-AT"));
    assert_eq!(doc.title(), "Gartenwerkzeuge im Test");
    assert_eq!(doc.meta_description(), "Die besten Werkzeuge für Ihren Garten.");
    assert_eq!(doc.headings(1), vec!["Gartenwerkzeuge"]);

    assert!(doc.anchors().is_empty());
    assert!(doc.text().contains("Spaten und Rechen"));
    assert!(!doc.text().contains("trackVisitor"));
    assert!(!doc.text().contains("Impressum"));
    assert!(!doc.text().contains("Startseite"));
}
