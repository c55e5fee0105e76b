// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Source database access.
//!
//! The migration only ever reads; the catalog database is owned by another
//! system. A missing database aborts the run instead of being created.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::str::FromStr;

use crate::document::ProductRow;
use crate::error::{MigrateError, Result};

/// Open a read-only pool against the source database.
#[tracing::instrument(skip(database_url))]
pub async fn open_pool(database_url: &str) -> Result<SqlitePool> {
	let options = SqliteConnectOptions::from_str(database_url)
		.map_err(|e| MigrateError::InvalidDatabaseUrl(e.to_string()))?
		.create_if_missing(false)
		.read_only(true);

	let pool = SqlitePool::connect_with(options).await?;

	tracing::debug!("source database pool created");
	Ok(pool)
}

/// Read every product with its category and aggregated tags in one pass.
pub async fn fetch_products(pool: &SqlitePool) -> Result<Vec<ProductRow>> {
	let rows = sqlx::query_as::<_, ProductRow>(
		r#"
		SELECT p.id,
		       p.name,
		       p.description,
		       c.id AS category_id,
		       c.name AS category_name,
		       (SELECT group_concat(t.name, ',')
		          FROM product_tags pt
		          JOIN tags t ON t.id = pt.tag_id
		         WHERE pt.product_id = p.id) AS tags
		  FROM products p
		  LEFT JOIN categories c ON c.id = p.category_id
		 ORDER BY p.id
		"#,
	)
	.fetch_all(pool)
	.await?;

	Ok(rows)
}
