// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Sift product search API server binary.

use clap::{Parser, Subcommand};
use sift_server::{create_app_state, create_router, ensure_index};
use tower_http::{
	cors::{Any, CorsLayer},
	trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

mod version;

/// Sift server - HTTP search API over the product catalog index.
#[derive(Parser, Debug)]
#[command(
	name = "sift-server",
	about = "Sift product search API server",
	version
)]
struct Args {
	/// Subcommands for sift-server (e.g., `version`)
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version and build information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Parse CLI arguments
	let args = Args::parse();

	// Handle subcommands that should not start the server
	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	// Load configuration
	let config = sift_config::load_config()?;

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
		)
		.init();

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		engine = %config.elasticsearch.base_url(),
		index = ?config.elasticsearch.index,
		"starting sift-server"
	);

	// Fail fast: no index name, or an index that does not exist, means no
	// server. Operators run sift-migrate first.
	let state = create_app_state(&config)?;
	ensure_index(&state).await?;

	let app = create_router(state)
		.layer(TraceLayer::new_for_http())
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods(Any)
				.allow_headers(Any),
		);

	// Start server
	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	// Run server with graceful shutdown
	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
