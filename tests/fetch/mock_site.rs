// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Scripted HTTP server answering each request with the next scripted step

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum Step {
    Html(&'static str),
    Status(u16),
    RateLimited(Option<u64>),
    Stall(Duration),
}

pub struct MockSite {
    pub base_url: String,
    steps: Vec<Step>,
    hits: AtomicUsize,
    arrivals: Mutex<Vec<Instant>>,
}

impl MockSite {
    /// Number of requests received so far
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Gaps between consecutive request arrivals
    pub fn gaps(&self) -> Vec<Duration> {
        let arrivals = self.arrivals.lock().unwrap();
        arrivals.windows(2).map(|w| w[1] - w[0]).collect()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn respond(State(site): State<Arc<MockSite>>) -> Response {
    let n = site.hits.fetch_add(1, Ordering::SeqCst);
    site.arrivals.lock().unwrap().push(Instant::now());

    // The last step repeats forever
    let step = site
        .steps
        .get(n)
        .or_else(|| site.steps.last())
        .cloned()
        .unwrap_or(Step::Status(500));

    match step {
        Step::Html(body) => (StatusCode::OK, [(header::CONTENT_TYPE, "text/html")], body).into_response(),
        Step::Status(code) => StatusCode::from_u16(code).unwrap().into_response(),
        Step::RateLimited(Some(secs)) => (
            StatusCode::TOO_MANY_REQUESTS,
            [(header::RETRY_AFTER, secs.to_string())],
        )
            .into_response(),
        Step::RateLimited(None) => StatusCode::TOO_MANY_REQUESTS.into_response(),
        Step::Stall(delay) => {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, "too late").into_response()
        }
    }
}

/// Start a scripted server on an ephemeral local port
pub async fn spawn(steps: Vec<Step>) -> Arc<MockSite> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let site = Arc::new(MockSite {
        base_url: format!("http://{}", addr),
        steps,
        hits: AtomicUsize::new(0),
        arrivals: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/", get(respond))
        .route("/*path", get(respond))
        .with_state(site.clone());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    site
}
