// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Retry and backoff behaviour of the content fetcher

use fabstir_seo_auditor::{ContentFetcher, FetchConfig, FetchError, PageSource};
use std::time::Duration;

use super::mock_site::{spawn, Step};

const PAGE: &str = "<html><head><title>Recovered page</title></head><body><p>Hello</p></body></html>";

fn config(max_retries: u32) -> FetchConfig {
    FetchConfig {
        timeout_secs: 1,
        max_retries,
        initial_backoff_ms: 50,
        backoff_factor: 2,
        allow_private_hosts: true,
        ..FetchConfig::default()
    }
}

#[tokio::test]
async fn test_recovers_after_three_rate_limits() {
    let site = spawn(vec![
        Step::RateLimited(None),
        Step::RateLimited(None),
        Step::RateLimited(None),
        Step::Html(PAGE),
    ])
    .await;
    let fetcher = ContentFetcher::new(config(3));

    let html = fetcher.fetch_html(&site.url("/page")).await.unwrap();
    assert!(html.contains("Recovered page"));
    assert_eq!(site.hits(), 4);

    // Waits of 50, 100 and 200ms between attempts
    let gaps = site.gaps();
    assert_eq!(gaps.len(), 3);
    assert!(gaps[0] >= Duration::from_millis(50));
    assert!(gaps[1] >= Duration::from_millis(100));
    assert!(gaps[2] >= Duration::from_millis(200));
}

#[tokio::test]
async fn test_persistent_rate_limit_exhausts_retries() {
    let site = spawn(vec![Step::RateLimited(None)]).await;
    let fetcher = ContentFetcher::new(config(3));

    let result = fetcher.fetch_html(&site.url("/page")).await;
    match result {
        Err(FetchError::RetriesExhausted { attempts, last, .. }) => {
            assert_eq!(attempts, 4);
            assert!(last.contains("429"));
        }
        other => panic!("expected RetriesExhausted, got {:?}", other),
    }
    assert_eq!(site.hits(), 4);
}

#[tokio::test]
async fn test_retry_after_header_is_honoured() {
    let site = spawn(vec![Step::RateLimited(Some(1)), Step::Html(PAGE)]).await;
    let fetcher = ContentFetcher::new(config(3));

    fetcher.fetch_html(&site.url("/page")).await.unwrap();
    assert_eq!(site.hits(), 2);
    assert!(site.gaps()[0] >= Duration::from_secs(1));
}

#[tokio::test]
async fn test_timeouts_exhaust_retries() {
    let site = spawn(vec![Step::Stall(Duration::from_secs(3))]).await;
    let fetcher = ContentFetcher::new(config(2));

    let result = fetcher.fetch_html(&site.url("/slow")).await;
    assert!(matches!(
        result,
        Err(FetchError::RetriesExhausted { attempts: 3, .. })
    ));
    assert_eq!(site.hits(), 3);
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let site = spawn(vec![Step::Status(404), Step::Html(PAGE)]).await;
    let fetcher = ContentFetcher::new(config(3));

    let result = fetcher.fetch(&site.url("/gone")).await;
    assert!(matches!(result, Err(FetchError::HttpStatus(404, _))));
    assert_eq!(site.hits(), 1);
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let site = spawn(vec![Step::Status(503), Step::Html(PAGE)]).await;
    let fetcher = ContentFetcher::new(config(3));

    let result = fetcher.fetch_html(&site.url("/down")).await;
    assert!(matches!(result, Err(FetchError::HttpStatus(503, _))));
    assert_eq!(site.hits(), 1);
}

#[tokio::test]
async fn test_private_host_blocked_without_opt_in() {
    let site = spawn(vec![Step::Html(PAGE)]).await;
    let fetcher = ContentFetcher::new(FetchConfig::default());

    let result = fetcher.fetch(&site.url("/page")).await;
    assert!(matches!(result, Err(FetchError::UnsafeUrl(_))));
    assert_eq!(site.hits(), 0);
}
