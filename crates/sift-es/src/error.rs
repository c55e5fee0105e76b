// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Elasticsearch client.

use thiserror::Error;

/// Errors that can occur when interacting with Elasticsearch.
#[derive(Debug, Error)]
pub enum EsError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Authentication with the engine failed.
	#[error("Elasticsearch rejected the configured credentials")]
	Unauthorized,

	/// The engine rejected the request body (HTTP 400).
	#[error("Elasticsearch rejected the request: {reason}")]
	BadRequest { reason: String },

	/// One or more documents in a bulk request were rejected.
	#[error("Bulk indexing failed: {failed} of {total} documents rejected")]
	Bulk { failed: usize, total: usize },

	/// Invalid or unparseable response from the engine.
	#[error("Invalid response from Elasticsearch: {0}")]
	InvalidResponse(String),

	/// The engine returned an unexpected error status.
	#[error("Elasticsearch API error: {status} - {message}")]
	ApiError { status: u16, message: String },
}

impl EsError {
	/// True when the engine could not be reached at all.
	///
	/// The search endpoint maps these to 503; everything else is either the
	/// caller's fault (400) or unexpected (500).
	pub fn is_connection(&self) -> bool {
		matches!(self, EsError::Network(_) | EsError::Timeout)
	}
}
