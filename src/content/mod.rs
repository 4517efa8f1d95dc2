// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page fetching and normalisation
//!
//! Retrieves a page with bounded retry/backoff, strips boilerplate and
//! produces the immutable document every rule evaluator reads.
//!
//! ## Architecture
//!
//! ```text
//! URL → ContentFetcher (retry on 429 / network) → HTML → strip_noise → PageDocument
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let fetcher = ContentFetcher::new(FetchConfig::from_env());
//! let document = fetcher.fetch("https://example.com").await?;
//! println!("{}", document.title());
//! ```

pub mod config;
pub mod document;
pub mod fetcher;
pub mod sanitize;

pub use config::FetchConfig;
pub use document::{PageAnchor, PageDocument, PageImage};
pub use fetcher::{ContentFetcher, FetchError, PageSource};
pub use sanitize::{strip_noise, NOISE_ELEMENTS};
