// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Full-text search HTTP handler.

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use sift_es::query::search_body;

use crate::api::AppState;
use crate::error::{ErrorResponse, ServerError};
use crate::pagination::{total_pages, SearchParams};

/// One search hit, with the engine's `_source` passed through verbatim.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchHitBody {
	pub id: String,
	pub score: Option<f64>,
	pub source: Value,
	/// Highlighted snippets keyed by field name; empty object when the
	/// engine produced none for this hit.
	pub highlights: Value,
}

/// Page-shaped search response.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponseBody {
	pub total: u64,
	pub hits: Vec<SearchHitBody>,
	pub page: u32,
	pub page_size: u32,
	pub total_pages: u64,
}

#[utoipa::path(
    get,
    path = "/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Search results page", body = SearchResponseBody),
        (status = 400, description = "Invalid query or pagination parameters", body = ErrorResponse),
        (status = 503, description = "Search engine unavailable", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "search"
)]
#[tracing::instrument(
	skip(state),
	fields(
		query = %params.query,
		page = ?params.page,
		page_size = ?params.page_size
	)
)]
/// GET /search - paginated fuzzy + phrase-prefix search over the index.
pub async fn search(
	State(state): State<AppState>,
	Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponseBody>, ServerError> {
	// Validation happens before the engine is contacted.
	let window = params
		.window()
		.map_err(|e| ServerError::BadRequest(e.to_string()))?;

	let body = search_body(&params.query, window.from_offset(), window.size());
	let response = state.es.search(&state.index, &body).await?;

	let total = response.hits.total.value;
	let hits = response
		.hits
		.hits
		.into_iter()
		.map(|hit| SearchHitBody {
			id: hit.id,
			score: hit.score,
			source: hit.source,
			highlights: hit
				.highlight
				.map(Value::Object)
				.unwrap_or_else(|| Value::Object(Default::default())),
		})
		.collect();

	Ok(Json(SearchResponseBody {
		total,
		hits,
		page: window.page,
		page_size: window.page_size,
		total_pages: total_pages(total, window.page_size),
	}))
}
