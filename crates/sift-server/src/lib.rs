// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Sift product search API server.
//!
//! This crate provides a thin HTTP front-end over an Elasticsearch index:
//! one paginated full-text search endpoint plus a health check. All
//! retrieval semantics are delegated to the engine; the server validates
//! parameters, shapes the query body, and reshapes the engine's response
//! into pages.

pub mod api;
pub mod api_docs;
pub mod error;
pub mod pagination;
pub mod routes;

pub use api::{create_app_state, create_router, ensure_index, AppState};
pub use api_docs::ApiDoc;
pub use error::{ServerError, StartupError};
pub use sift_config::AppConfig;
