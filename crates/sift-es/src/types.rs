// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Wire types for the Elasticsearch REST API.
//!
//! Only the parts of the engine's responses that Sift consumes are modelled;
//! everything else is ignored during deserialization.

use serde::Deserialize;
use serde_json::Value;

/// A document submitted through the bulk API.
#[derive(Debug, Clone)]
pub struct BulkDoc {
	pub id: String,
	pub source: Value,
}

/// Response body of `POST /{index}/_search`.
#[derive(Debug, Clone, Deserialize)]
pub struct EsSearchResponse {
	pub took: Option<u64>,
	pub hits: EsHits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EsHits {
	pub total: EsTotal,
	#[serde(default)]
	pub hits: Vec<EsHit>,
}

/// Total hit count. `relation` is "eq" or "gte" depending on whether the
/// engine tracked the exact total.
#[derive(Debug, Clone, Deserialize)]
pub struct EsTotal {
	pub value: u64,
	pub relation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EsHit {
	#[serde(rename = "_id")]
	pub id: String,
	#[serde(rename = "_score")]
	pub score: Option<f64>,
	#[serde(rename = "_source", default)]
	pub source: Value,
	#[serde(default)]
	pub highlight: Option<serde_json::Map<String, Value>>,
}

/// Response body of `POST /_bulk`.
#[derive(Debug, Clone, Deserialize)]
pub struct EsBulkResponse {
	#[serde(default)]
	pub errors: bool,
	#[serde(default)]
	pub items: Vec<Value>,
}

impl EsBulkResponse {
	/// Number of items whose operation carries an `error` object.
	pub fn failed_count(&self) -> usize {
		self.items
			.iter()
			.filter_map(|item| item.as_object())
			.filter_map(|ops| ops.values().next())
			.filter(|op| op.get("error").is_some())
			.count()
	}
}

/// Error envelope the engine attaches to non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct EsErrorBody {
	pub error: Option<EsErrorCause>,
	pub status: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EsErrorCause {
	#[serde(rename = "type")]
	pub kind: Option<String>,
	pub reason: Option<String>,
}
