// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Integration tests for the migration run.
//!
//! Tests use a tempfile-backed SQLite catalog and a mock engine on an
//! ephemeral port, covering:
//! - Row fetching with category join and tag aggregation
//! - Index recreation with the static mapping
//! - Batched bulk loading and the run summary
//! - Abort-on-failure behavior

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use axum::{
	extract::Json,
	http::StatusCode,
	routing::{delete, post},
	Router,
};
use serde_json::{json, Value};
use sift_es::EsClient;
use sift_migrate::{run_migration, source};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tempfile::TempDir;

#[derive(Clone, Default)]
struct EngineLog {
	deletes: Arc<Mutex<usize>>,
	create_bodies: Arc<Mutex<Vec<Value>>>,
	bulk_payloads: Arc<Mutex<Vec<String>>>,
}

/// Spawns a mock engine that accepts index admin and bulk calls.
async fn spawn_mock_engine(log: EngineLog, bulk_response: Value) -> String {
	let deletes = log.deletes.clone();
	let create_bodies = log.create_bodies.clone();
	let bulk_payloads = log.bulk_payloads.clone();
	let bulk_response = Arc::new(bulk_response);

	let app = Router::new()
		.route(
			"/products",
			delete(move || {
				let deletes = deletes.clone();
				async move {
					*deletes.lock().unwrap() += 1;
					StatusCode::OK
				}
			})
			.put(move |Json(body): Json<Value>| {
				let create_bodies = create_bodies.clone();
				async move {
					create_bodies.lock().unwrap().push(body);
					Json(json!({"acknowledged": true}))
				}
			}),
		)
		.route(
			"/_bulk",
			post(move |body: String| {
				let bulk_payloads = bulk_payloads.clone();
				let bulk_response = bulk_response.clone();
				async move {
					bulk_payloads.lock().unwrap().push(body);
					Json((*bulk_response).clone())
				}
			}),
		);

	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		axum::serve(listener, app).await.unwrap();
	});

	format!("http://{addr}")
}

/// Creates a catalog database with `count` products, two categories and a
/// few tags, and returns its URL.
async fn seed_catalog(dir: &TempDir, count: usize) -> String {
	let path = dir.path().join("catalog.db");
	let url = format!("sqlite:{}", path.display());

	let options = SqliteConnectOptions::from_str(&url)
		.unwrap()
		.create_if_missing(true);
	let pool = SqlitePool::connect_with(options).await.unwrap();

	sqlx::query("CREATE TABLE categories (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
		.execute(&pool)
		.await
		.unwrap();
	sqlx::query(
		"CREATE TABLE products (
			id INTEGER PRIMARY KEY,
			name TEXT NOT NULL,
			description TEXT,
			category_id INTEGER REFERENCES categories(id)
		)",
	)
	.execute(&pool)
	.await
	.unwrap();
	sqlx::query("CREATE TABLE tags (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
		.execute(&pool)
		.await
		.unwrap();
	sqlx::query("CREATE TABLE product_tags (product_id INTEGER NOT NULL, tag_id INTEGER NOT NULL)")
		.execute(&pool)
		.await
		.unwrap();

	sqlx::query("INSERT INTO categories (id, name) VALUES (1, 'Electronics'), (2, 'Books')")
		.execute(&pool)
		.await
		.unwrap();
	sqlx::query("INSERT INTO tags (id, name) VALUES (1, 'mobile'), (2, 'touchscreen')")
		.execute(&pool)
		.await
		.unwrap();

	for i in 1..=count {
		sqlx::query("INSERT INTO products (id, name, description, category_id) VALUES (?, ?, ?, ?)")
			.bind(i as i64)
			.bind(format!("Product {i}"))
			.bind(format!("Description {i}"))
			.bind(if i % 2 == 0 { 2i64 } else { 1i64 })
			.execute(&pool)
			.await
			.unwrap();
	}

	// First product carries both tags.
	sqlx::query("INSERT INTO product_tags (product_id, tag_id) VALUES (1, 1), (1, 2)")
		.execute(&pool)
		.await
		.unwrap();

	pool.close().await;
	url
}

fn bulk_ok() -> Value {
	json!({"took": 1, "errors": false, "items": []})
}

// ============================================================================
// Source reading
// ============================================================================

#[tokio::test]
async fn test_fetch_products_joins_category_and_aggregates_tags() {
	let dir = TempDir::new().unwrap();
	let url = seed_catalog(&dir, 3).await;
	let pool = source::open_pool(&url).await.unwrap();

	let rows = source::fetch_products(&pool).await.unwrap();
	assert_eq!(rows.len(), 3);

	let first = &rows[0];
	assert_eq!(first.id, 1);
	assert_eq!(first.name, "Product 1");
	assert_eq!(first.category_name.as_deref(), Some("Electronics"));
	let mut tags: Vec<&str> = first.tags.as_deref().unwrap().split(',').collect();
	tags.sort_unstable();
	assert_eq!(tags, vec!["mobile", "touchscreen"]);

	// Untagged products read back with no aggregate at all.
	assert!(rows[1].tags.is_none());
}

#[tokio::test]
async fn test_open_pool_rejects_missing_database() {
	let dir = TempDir::new().unwrap();
	let url = format!("sqlite:{}", dir.path().join("absent.db").display());
	let result = source::open_pool(&url).await;
	assert!(result.is_err());
}

// ============================================================================
// Full run
// ============================================================================

#[tokio::test]
async fn test_run_rebuilds_index_and_bulk_loads_in_batches() {
	let dir = TempDir::new().unwrap();
	let url = seed_catalog(&dir, 5).await;
	let pool = source::open_pool(&url).await.unwrap();

	let log = EngineLog::default();
	let base_url = spawn_mock_engine(log.clone(), bulk_ok()).await;
	let es = EsClient::new(&base_url);

	let summary = run_migration(&es, &pool, "products", 2).await.unwrap();

	assert_eq!(summary.rows_read, 5);
	assert_eq!(summary.documents_indexed, 5);
	assert_eq!(summary.batches, 3);

	// Index dropped then recreated with the declared mapping.
	assert_eq!(*log.deletes.lock().unwrap(), 1);
	let create_bodies = log.create_bodies.lock().unwrap();
	assert_eq!(create_bodies.len(), 1);
	let properties = &create_bodies[0]["mappings"]["properties"];
	assert_eq!(properties["name"]["type"], "text");
	assert_eq!(properties["category"]["properties"]["name"]["type"], "text");

	// 5 documents in batches of 2 -> payloads of 2, 2, 1 documents.
	let payloads = log.bulk_payloads.lock().unwrap();
	assert_eq!(payloads.len(), 3);
	let docs_in = |payload: &str| payload.lines().count() / 2;
	assert_eq!(docs_in(&payloads[0]), 2);
	assert_eq!(docs_in(&payloads[1]), 2);
	assert_eq!(docs_in(&payloads[2]), 1);

	// Action lines address the target index with the row id.
	let first_action: Value = serde_json::from_str(payloads[0].lines().next().unwrap()).unwrap();
	assert_eq!(first_action["index"]["_index"], "products");
	assert_eq!(first_action["index"]["_id"], "1");

	// Source lines carry the document shape.
	let first_doc: Value = serde_json::from_str(payloads[0].lines().nth(1).unwrap()).unwrap();
	assert_eq!(first_doc["name"], "Product 1");
	assert_eq!(first_doc["category"]["name"], "Electronics");
	assert!(first_doc["indexed_at"].is_string());
}

#[tokio::test]
async fn test_run_aborts_when_bulk_rejects_documents() {
	let dir = TempDir::new().unwrap();
	let url = seed_catalog(&dir, 3).await;
	let pool = source::open_pool(&url).await.unwrap();

	let rejection = json!({
		"took": 1,
		"errors": true,
		"items": [
			{"index": {"_id": "1", "status": 201}},
			{"index": {"_id": "2", "status": 400, "error": {"type": "mapper_parsing_exception", "reason": "bad field"}}}
		]
	});
	let base_url = spawn_mock_engine(EngineLog::default(), rejection).await;
	let es = EsClient::new(&base_url);

	let result = run_migration(&es, &pool, "products", 500).await;
	assert!(result.is_err());
	assert!(result.unwrap_err().to_string().contains("Bulk indexing failed"));
}

#[tokio::test]
async fn test_run_aborts_when_engine_is_unreachable() {
	let dir = TempDir::new().unwrap();
	let url = seed_catalog(&dir, 1).await;
	let pool = source::open_pool(&url).await.unwrap();

	let es = EsClient::new("http://127.0.0.1:1");
	let result = run_migration(&es, &pool, "products", 500).await;
	assert!(result.is_err());
}
