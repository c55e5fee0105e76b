// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router assembly.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use sift_config::AppConfig;
use sift_es::EsClient;

use crate::error::StartupError;
use crate::routes;

/// Application state shared across handlers.
///
/// Immutable after startup: one engine client and the target index name.
#[derive(Clone)]
pub struct AppState {
	pub es: Arc<EsClient>,
	pub index: String,
}

/// Creates the application state from resolved configuration.
///
/// Fails when no index name is configured; the index-existence check is
/// separate (it needs the engine) - see [`ensure_index`].
pub fn create_app_state(config: &AppConfig) -> Result<AppState, StartupError> {
	let index = config.require_index()?.to_string();

	let mut es = EsClient::new(config.elasticsearch.base_url());
	if let (Some(username), Some(password)) = (
		&config.elasticsearch.username,
		&config.elasticsearch.password,
	) {
		es = es.with_basic_auth(username.clone(), password.clone());
	}

	Ok(AppState {
		es: Arc::new(es),
		index,
	})
}

/// Fail-fast startup check: the target index must already exist.
///
/// There is no lazy index creation; operators run sift-migrate first.
pub async fn ensure_index(state: &AppState) -> Result<(), StartupError> {
	if state.es.index_exists(&state.index).await? {
		tracing::debug!(index = %state.index, "target index exists");
		Ok(())
	} else {
		Err(StartupError::IndexMissing(state.index.clone()))
	}
}

/// Creates the HTTP router.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/search", get(routes::search::search))
		.route("/health", get(routes::health::health_check))
		.with_state(state)
}
