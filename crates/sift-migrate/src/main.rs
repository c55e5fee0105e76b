// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Sift migration tool binary.

use std::path::PathBuf;

use clap::Parser;
use sift_es::EsClient;
use tracing_subscriber::EnvFilter;

/// Rebuild the Sift search index from the catalog database.
#[derive(Parser, Debug)]
#[command(
	name = "sift-migrate",
	about = "Rebuild the Sift search index from the catalog database",
	version
)]
struct Args {
	/// Documents per bulk request.
	#[arg(long, env = "SIFT_MIGRATE_BATCH_SIZE", default_value_t = 500)]
	batch_size: usize,

	/// Config file path (instead of /etc/sift/config.toml).
	#[arg(long, env = "SIFT_CONFIG_FILE")]
	config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Load .env file if present
	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => sift_config::load_config_with_file(path)?,
		None => sift_config::load_config()?,
	};

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
		)
		.init();

	let index = config.require_index()?.to_string();

	let mut es = EsClient::new(config.elasticsearch.base_url());
	if let (Some(username), Some(password)) = (
		&config.elasticsearch.username,
		&config.elasticsearch.password,
	) {
		es = es.with_basic_auth(username.clone(), password.clone());
	}

	tracing::info!(
		engine = %config.elasticsearch.base_url(),
		index = %index,
		database = %config.database.url,
		batch_size = args.batch_size,
		"starting migration"
	);

	let pool = sift_migrate::source::open_pool(&config.database.url).await?;

	let started = std::time::Instant::now();
	let summary = sift_migrate::run_migration(&es, &pool, &index, args.batch_size).await?;

	tracing::info!(
		rows = summary.rows_read,
		indexed = summary.documents_indexed,
		batches = summary.batches,
		elapsed_ms = started.elapsed().as_millis() as u64,
		"migration finished"
	);

	Ok(())
}
