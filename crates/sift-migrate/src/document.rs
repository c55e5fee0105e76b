// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Row-to-document transformation.

use serde::Serialize;
use sift_es::BulkDoc;

/// A product row as read from the source database. The `tags` column is a
/// comma-joined aggregate produced by the fetch query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
	pub id: i64,
	pub name: String,
	pub description: Option<String>,
	pub category_id: Option<i64>,
	pub category_name: Option<String>,
	pub tags: Option<String>,
}

/// The index document shape. Field names line up with the index mapping and
/// the search fields (`name`, `description`, `category.name`, `tags`).
#[derive(Debug, Clone, Serialize)]
pub struct ProductDocument {
	pub id: i64,
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<CategoryDocument>,
	pub tags: Vec<String>,
	pub indexed_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDocument {
	pub id: i64,
	pub name: String,
}

impl ProductDocument {
	pub fn from_row(row: ProductRow, indexed_at: &str) -> Self {
		let category = match (row.category_id, row.category_name) {
			(Some(id), Some(name)) => Some(CategoryDocument { id, name }),
			_ => None,
		};

		Self {
			id: row.id,
			name: row.name,
			description: row.description,
			category,
			tags: row.tags.as_deref().map(split_tags).unwrap_or_default(),
			indexed_at: indexed_at.to_string(),
		}
	}

	/// Pair the document with its engine id for bulk submission.
	pub fn to_bulk_doc(&self) -> Result<BulkDoc, serde_json::Error> {
		Ok(BulkDoc {
			id: self.id.to_string(),
			source: serde_json::to_value(self)?,
		})
	}
}

/// Split a comma-joined tag aggregate, trimming whitespace and dropping
/// empties and duplicates (first occurrence wins).
fn split_tags(raw: &str) -> Vec<String> {
	let mut tags: Vec<String> = Vec::new();
	for tag in raw.split(',') {
		let tag = tag.trim();
		if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
			tags.push(tag.to_string());
		}
	}
	tags
}
