// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Elasticsearch client implementation.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use sift_common_secret::SecretString;
use tracing::{debug, error, instrument, trace};

use crate::error::EsError;
use crate::types::{BulkDoc, EsBulkResponse, EsErrorBody, EsSearchResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const NDJSON: &str = "application/x-ndjson";

/// Client for the Elasticsearch REST API.
///
/// Requests are single round trips; there is no retry layer. Connection
/// reuse is a transport concern owned by the underlying pool.
#[derive(Debug, Clone)]
pub struct EsClient {
	http_client: Client,
	base_url: String,
	username: Option<String>,
	password: Option<SecretString>,
}

impl EsClient {
	/// Creates a new client for the engine at `base_url`
	/// (e.g. `http://localhost:9200`).
	pub fn new(base_url: impl Into<String>) -> Self {
		let http_client = sift_common_http::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()
			.expect("failed to build HTTP client");

		Self {
			http_client,
			base_url: base_url.into().trim_end_matches('/').to_string(),
			username: None,
			password: None,
		}
	}

	/// Attaches HTTP Basic credentials to every request.
	pub fn with_basic_auth(mut self, username: impl Into<String>, password: SecretString) -> Self {
		self.username = Some(username.into());
		self.password = Some(password);
		self
	}

	/// Sets a custom request timeout.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.http_client = sift_common_http::builder()
			.timeout(timeout)
			.build()
			.expect("failed to build HTTP client");
		self
	}

	/// The engine base URL this client talks to.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn url(&self, path: &str) -> String {
		format!("{}/{}", self.base_url, path.trim_start_matches('/'))
	}

	fn authed(&self, request: RequestBuilder) -> RequestBuilder {
		match (&self.username, &self.password) {
			(Some(user), Some(pass)) => request.basic_auth(user, Some(pass.expose())),
			_ => request,
		}
	}

	async fn send(&self, request: RequestBuilder) -> Result<Response, EsError> {
		let response = request.send().await.map_err(|e| {
			if e.is_timeout() {
				error!("Request to Elasticsearch timed out");
				return EsError::Timeout;
			}
			error!(error = %e, "Network error during Elasticsearch request");
			EsError::Network(e)
		})?;

		trace!(status = %response.status(), "Received response from Elasticsearch");
		Ok(response)
	}

	/// Turn a non-success response into the matching error class.
	async fn fail(response: Response) -> EsError {
		let status = response.status();
		let body = response.text().await.unwrap_or_default();
		let reason = extract_reason(&body);

		match status {
			StatusCode::BAD_REQUEST => {
				error!(reason = %reason, "Elasticsearch rejected the request");
				EsError::BadRequest { reason }
			}
			StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
				error!(status = status.as_u16(), "Unauthorized Elasticsearch request");
				EsError::Unauthorized
			}
			_ => {
				error!(status = status.as_u16(), message = %reason, "Elasticsearch API error");
				EsError::ApiError {
					status: status.as_u16(),
					message: reason,
				}
			}
		}
	}

	/// `GET /` - verify the engine is reachable.
	pub async fn ping(&self) -> Result<(), EsError> {
		let response = self.send(self.authed(self.http_client.get(self.url("/")))).await?;
		if response.status().is_success() {
			Ok(())
		} else {
			Err(Self::fail(response).await)
		}
	}

	/// `HEAD /{index}` - whether the index exists.
	pub async fn index_exists(&self, index: &str) -> Result<bool, EsError> {
		let response = self
			.send(self.authed(self.http_client.head(self.url(index))))
			.await?;

		match response.status() {
			status if status.is_success() => Ok(true),
			StatusCode::NOT_FOUND => Ok(false),
			_ => Err(Self::fail(response).await),
		}
	}

	/// `PUT /{index}` - create the index with the given settings/mappings body.
	#[instrument(skip(self, body), fields(index = %index))]
	pub async fn create_index(&self, index: &str, body: &Value) -> Result<(), EsError> {
		debug!("Creating index");
		let response = self
			.send(self.authed(self.http_client.put(self.url(index)).json(body)))
			.await?;

		if response.status().is_success() {
			Ok(())
		} else {
			Err(Self::fail(response).await)
		}
	}

	/// `DELETE /{index}` - drop the index. An absent index is not an error.
	#[instrument(skip(self), fields(index = %index))]
	pub async fn delete_index(&self, index: &str) -> Result<(), EsError> {
		let response = self
			.send(self.authed(self.http_client.delete(self.url(index))))
			.await?;

		match response.status() {
			status if status.is_success() => {
				debug!("Deleted index");
				Ok(())
			}
			StatusCode::NOT_FOUND => {
				debug!("Index absent, nothing to delete");
				Ok(())
			}
			_ => Err(Self::fail(response).await),
		}
	}

	/// `POST /_bulk` - index a batch of documents.
	///
	/// Returns the number of documents submitted. Any rejected item fails
	/// the whole call; there is no partial-retry.
	#[instrument(skip(self, documents), fields(index = %index, count = documents.len()))]
	pub async fn bulk(&self, index: &str, documents: &[BulkDoc]) -> Result<usize, EsError> {
		if documents.is_empty() {
			return Ok(0);
		}

		let mut body = String::new();
		for doc in documents {
			let action = serde_json::json!({"index": {"_index": index, "_id": doc.id}});
			body.push_str(&action.to_string());
			body.push('\n');
			body.push_str(&doc.source.to_string());
			body.push('\n');
		}

		debug!("Sending bulk request");
		let response = self
			.send(self.authed(
				self.http_client
					.post(self.url("_bulk"))
					.header(CONTENT_TYPE, NDJSON)
					.body(body),
			))
			.await?;

		if !response.status().is_success() {
			return Err(Self::fail(response).await);
		}

		let text = response.text().await.map_err(EsError::Network)?;
		let bulk: EsBulkResponse = serde_json::from_str(&text).map_err(|e| {
			error!(error = %e, "Failed to parse bulk response");
			EsError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		if bulk.errors {
			let failed = bulk.failed_count();
			error!(failed, total = documents.len(), "Bulk request rejected documents");
			return Err(EsError::Bulk {
				failed,
				total: documents.len(),
			});
		}

		debug!(indexed = documents.len(), "Bulk request completed");
		Ok(documents.len())
	}

	/// `POST /{index}/_search` - execute a query DSL body.
	#[instrument(skip(self, body), fields(index = %index))]
	pub async fn search(&self, index: &str, body: &Value) -> Result<EsSearchResponse, EsError> {
		debug!(url = %self.url(index), "Sending search request");
		trace!(body = %body, "Search body");

		let response = self
			.send(self.authed(
				self.http_client
					.post(self.url(&format!("{index}/_search")))
					.json(body),
			))
			.await?;

		if !response.status().is_success() {
			return Err(Self::fail(response).await);
		}

		let text = response.text().await.map_err(EsError::Network)?;
		let parsed: EsSearchResponse = serde_json::from_str(&text).map_err(|e| {
			error!(error = %e, "Failed to parse search response");
			EsError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		debug!(
			total = parsed.hits.total.value,
			returned = parsed.hits.hits.len(),
			"Search completed"
		);
		Ok(parsed)
	}
}

/// Pull the human-readable reason out of an engine error body, falling back
/// to the raw body.
fn extract_reason(body: &str) -> String {
	serde_json::from_str::<EsErrorBody>(body)
		.ok()
		.and_then(|parsed| parsed.error)
		.and_then(|cause| cause.reason)
		.unwrap_or_else(|| body.to_string())
}
