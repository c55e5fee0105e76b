// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health check HTTP handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	Unhealthy,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
	pub status: HealthStatus,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub detail: Option<String>,
}

impl ComponentHealth {
	fn healthy() -> Self {
		Self {
			status: HealthStatus::Healthy,
			detail: None,
		}
	}

	fn unhealthy(detail: impl Into<String>) -> Self {
		Self {
			status: HealthStatus::Unhealthy,
			detail: Some(detail.into()),
		}
	}
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthComponents {
	pub elasticsearch: ComponentHealth,
	pub index: ComponentHealth,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub timestamp: String,
	pub version: sift_common_version::HealthVersionInfo,
	pub components: HealthComponents,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "System is healthy", body = HealthResponse),
        (status = 503, description = "System is unhealthy", body = HealthResponse)
    ),
    tag = "health"
)]
/// GET /health - engine reachability and index existence.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	let elasticsearch = match state.es.ping().await {
		Ok(()) => ComponentHealth::healthy(),
		Err(e) => ComponentHealth::unhealthy(e.to_string()),
	};

	// Only worth checking the index when the engine answered at all.
	let index = if elasticsearch.status == HealthStatus::Healthy {
		match state.es.index_exists(&state.index).await {
			Ok(true) => ComponentHealth::healthy(),
			Ok(false) => ComponentHealth::unhealthy(format!("index '{}' does not exist", state.index)),
			Err(e) => ComponentHealth::unhealthy(e.to_string()),
		}
	} else {
		ComponentHealth::unhealthy("engine unreachable".to_string())
	};

	let status = if elasticsearch.status == HealthStatus::Healthy
		&& index.status == HealthStatus::Healthy
	{
		HealthStatus::Healthy
	} else {
		HealthStatus::Unhealthy
	};

	let http_status = match status {
		HealthStatus::Healthy => StatusCode::OK,
		HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
	};

	let response = HealthResponse {
		status,
		timestamp: chrono::Utc::now().to_rfc3339(),
		version: sift_common_version::HealthVersionInfo::current(),
		components: HealthComponents {
			elasticsearch,
			index,
		},
	};

	(http_status, Json(response))
}
