// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types and their HTTP mappings.
//!
//! The search endpoint has exactly three user-visible failure classes:
//! the engine was unreachable (503), the request was invalid (400), and
//! everything else (500).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sift_es::EsError;
use thiserror::Error;
use utoipa::ToSchema;

/// JSON body returned for every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

/// Request-scoped errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ServerError {
	/// The search engine could not be reached.
	#[error("search engine unavailable: {0}")]
	Unavailable(String),

	/// The request was malformed (parameter validation or engine rejection).
	#[error("invalid search request: {0}")]
	BadRequest(String),

	/// Anything unexpected.
	#[error("internal server error: {0}")]
	Internal(String),
}

impl ServerError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			ServerError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
			ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
			ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn code(&self) -> &'static str {
		match self {
			ServerError::Unavailable(_) => "unavailable",
			ServerError::BadRequest(_) => "bad_request",
			ServerError::Internal(_) => "internal_error",
		}
	}
}

impl From<EsError> for ServerError {
	fn from(err: EsError) -> Self {
		if err.is_connection() {
			return ServerError::Unavailable(err.to_string());
		}
		match err {
			EsError::BadRequest { reason } => ServerError::BadRequest(reason),
			other => ServerError::Internal(other.to_string()),
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let status = self.status_code();
		let body = ErrorResponse {
			error: self.code().to_string(),
			message: self.to_string(),
		};
		(status, Json(body)).into_response()
	}
}

/// Errors that prevent the server from starting at all.
#[derive(Debug, Error)]
pub enum StartupError {
	#[error(transparent)]
	Config(#[from] sift_config::ConfigError),

	/// The target index must exist before the server accepts traffic;
	/// there is no lazy index creation.
	#[error("index '{0}' does not exist; run sift-migrate before starting the server")]
	IndexMissing(String),

	#[error(transparent)]
	Engine(#[from] EsError),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn connection_errors_map_to_503() {
		let err: ServerError = EsError::Timeout.into();
		assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
	}

	#[test]
	fn engine_rejection_maps_to_400() {
		let err: ServerError = EsError::BadRequest {
			reason: "unknown field [frm]".to_string(),
		}
		.into();
		assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
		assert!(err.to_string().contains("unknown field [frm]"));
	}

	#[test]
	fn anything_else_maps_to_500() {
		let unauthorized: ServerError = EsError::Unauthorized.into();
		assert_eq!(
			unauthorized.status_code(),
			StatusCode::INTERNAL_SERVER_ERROR
		);

		let api_error: ServerError = EsError::ApiError {
			status: 502,
			message: "bad gateway".to_string(),
		}
		.into();
		assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

		let invalid: ServerError = EsError::InvalidResponse("not json".to_string()).into();
		assert_eq!(invalid.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn validation_failure_maps_to_400() {
		let err = ServerError::BadRequest("page must be >= 1".to_string());
		assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
	}
}
