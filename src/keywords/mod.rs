// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-URL keyword assignments loaded from a CSV table

pub mod table;

pub use table::{KeywordAssignment, KeywordTable, KeywordTableError};
