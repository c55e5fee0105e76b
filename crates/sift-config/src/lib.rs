// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for Sift binaries.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`SIFT_*`)
//!
//! # Usage
//!
//! ```ignore
//! use sift_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::AppConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
	pub http: HttpConfig,
	pub elasticsearch: EsConfig,
	pub database: DatabaseConfig,
	pub logging: LoggingConfig,
}

impl AppConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}

	/// The configured index name, or a validation error when unset.
	///
	/// Both the server and the migration tool fail fast on a missing index
	/// name rather than inventing one.
	pub fn require_index(&self) -> Result<&str, ConfigError> {
		self.elasticsearch
			.index
			.as_deref()
			.ok_or_else(|| {
				ConfigError::Validation(
					"SIFT_ES_INDEX must be set to the target index name".to_string(),
				)
			})
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`SIFT_*`)
/// 2. Config file (`/etc/sift/config.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<AppConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<AppConfig, ConfigError> {
	let mut merged = AppConfigLayer::default();
	merged.merge(EnvSource.load()?);
	finalize(merged)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<AppConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<AppConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = AppConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: AppConfigLayer) -> Result<AppConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let elasticsearch = layer.elasticsearch.unwrap_or_default().finalize();
	let database = layer.database.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	info!(
		host = %http.host,
		port = http.port,
		engine = %elasticsearch.base_url(),
		index = ?elasticsearch.index,
		credentials_configured = elasticsearch.has_credentials(),
		database = %database.url,
		"Sift configuration loaded"
	);

	Ok(AppConfig {
		http,
		elasticsearch,
		database,
		logging,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_socket_addr() {
		let config = AppConfig {
			http: HttpConfig {
				host: "127.0.0.1".to_string(),
				port: 9000,
			},
			..Default::default()
		};
		assert_eq!(config.socket_addr(), "127.0.0.1:9000");
	}

	#[test]
	fn test_require_index_rejects_unset() {
		let config = AppConfig::default();
		let result = config.require_index();
		assert!(result.is_err());
		assert!(result.unwrap_err().to_string().contains("SIFT_ES_INDEX"));
	}

	#[test]
	fn test_require_index_returns_configured_name() {
		let config = AppConfig {
			elasticsearch: EsConfig {
				index: Some("products".to_string()),
				..Default::default()
			},
			..Default::default()
		};
		assert_eq!(config.require_index().unwrap(), "products");
	}

	#[test]
	fn test_finalize_applies_defaults() {
		let config = finalize(AppConfigLayer::default()).unwrap();
		assert_eq!(config.http.port, 8001);
		assert_eq!(config.elasticsearch.port, 9200);
		assert_eq!(config.database.url, "sqlite:./database.sqlite");
		assert_eq!(config.logging.level, "info");
	}
}
