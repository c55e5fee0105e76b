// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Static index mapping for the product catalog.

use serde_json::{json, Value};

/// Index creation body: the declared field mapping for product documents.
///
/// `category` is an object field so that queries can address
/// `category.name` directly.
pub fn product_index_body() -> Value {
	json!({
		"mappings": {
			"properties": {
				"id": {"type": "integer"},
				"name": {"type": "text"},
				"description": {"type": "text"},
				"category": {
					"properties": {
						"id": {"type": "integer"},
						"name": {"type": "text"}
					}
				},
				"tags": {"type": "text"},
				"indexed_at": {"type": "date"}
			}
		}
	})
}
