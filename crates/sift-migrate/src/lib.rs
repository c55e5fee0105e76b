// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! One-shot migration from the catalog database into the search index.
//!
//! Strictly linear: read every product row, transform each into the index
//! document shape, recreate the index with its static mapping, and bulk-load
//! the documents in batches. Any failure aborts the run.

pub mod document;
pub mod error;
pub mod mapping;
pub mod source;

use sqlx::SqlitePool;
use tracing::{debug, info};

use sift_es::{BulkDoc, EsClient};

use crate::document::ProductDocument;
use crate::error::Result;

/// Counters reported after a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationSummary {
	pub rows_read: usize,
	pub documents_indexed: usize,
	pub batches: usize,
}

/// Run the migration: the index is rebuilt from scratch on every run.
#[tracing::instrument(skip(es, pool), fields(index = %index, batch_size))]
pub async fn run_migration(
	es: &EsClient,
	pool: &SqlitePool,
	index: &str,
	batch_size: usize,
) -> Result<MigrationSummary> {
	let rows = source::fetch_products(pool).await?;
	let rows_read = rows.len();
	info!(rows = rows_read, "read products from source database");

	let indexed_at = chrono::Utc::now().to_rfc3339();
	let documents: Vec<BulkDoc> = rows
		.into_iter()
		.map(|row| ProductDocument::from_row(row, &indexed_at).to_bulk_doc())
		.collect::<std::result::Result<_, _>>()?;

	es.delete_index(index).await?;
	es.create_index(index, &mapping::product_index_body()).await?;
	info!(index = %index, "index recreated");

	let mut documents_indexed = 0;
	let mut batches = 0;
	for chunk in documents.chunks(batch_size.max(1)) {
		documents_indexed += es.bulk(index, chunk).await?;
		batches += 1;
		debug!(indexed = documents_indexed, batches, "bulk batch submitted");
	}

	info!(
		rows = rows_read,
		indexed = documents_indexed,
		batches,
		"migration complete"
	);

	Ok(MigrationSummary {
		rows_read,
		documents_indexed,
		batches,
	})
}
