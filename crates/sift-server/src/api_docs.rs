// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! OpenAPI document for the Sift search API.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::routes::health::{ComponentHealth, HealthComponents, HealthResponse, HealthStatus};
use crate::routes::search::{SearchHitBody, SearchResponseBody};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::search::search,
        crate::routes::health::health_check,
    ),
    components(schemas(
        SearchResponseBody,
        SearchHitBody,
        ErrorResponse,
        HealthResponse,
        HealthComponents,
        ComponentHealth,
        HealthStatus,
        sift_common_version::HealthVersionInfo,
    )),
    tags(
        (name = "search", description = "Full-text product search"),
        (name = "health", description = "Service health")
    ),
    info(
        title = "Sift Search API",
        description = "Paginated full-text search over the product catalog index"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn openapi_document_includes_both_paths() {
		let doc = ApiDoc::openapi();
		assert!(doc.paths.paths.contains_key("/search"));
		assert!(doc.paths.paths.contains_key("/health"));
	}
}
