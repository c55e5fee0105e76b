// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Elasticsearch API client for Sift.
//!
//! This crate provides a typed Rust client for the Elasticsearch REST API,
//! encapsulating HTTP communication, the search query DSL body used by the
//! Sift search endpoint, and response parsing. All retrieval semantics
//! (fuzzy matching, phrase-prefix matching, highlighting, scoring) live on
//! the engine side; this client only shapes requests and responses.

pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::EsClient;
pub use error::EsError;
pub use query::search_body;
pub use types::{BulkDoc, EsBulkResponse, EsHit, EsHits, EsSearchResponse, EsTotal};
