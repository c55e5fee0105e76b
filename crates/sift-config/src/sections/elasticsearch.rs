// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Elasticsearch connection configuration section.

use serde::Deserialize;
use sift_common_secret::SecretString;

/// Elasticsearch configuration (runtime, fully resolved).
///
/// `index` has no default on purpose: both binaries refuse to run against
/// an unnamed index.
#[derive(Debug, Clone)]
pub struct EsConfig {
	pub scheme: String,
	pub host: String,
	pub port: u16,
	pub username: Option<String>,
	pub password: Option<SecretString>,
	pub index: Option<String>,
}

impl Default for EsConfig {
	fn default() -> Self {
		Self {
			scheme: "http".to_string(),
			host: "localhost".to_string(),
			port: 9200,
			username: None,
			password: None,
			index: None,
		}
	}
}

impl EsConfig {
	/// Engine base URL, e.g. `http://localhost:9200`.
	pub fn base_url(&self) -> String {
		format!("{}://{}:{}", self.scheme, self.host, self.port)
	}

	/// Whether HTTP Basic credentials are fully configured.
	pub fn has_credentials(&self) -> bool {
		self.username.is_some() && self.password.is_some()
	}
}

/// Elasticsearch configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EsConfigLayer {
	#[serde(default)]
	pub scheme: Option<String>,
	#[serde(default)]
	pub host: Option<String>,
	#[serde(default)]
	pub port: Option<u16>,
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub password: Option<SecretString>,
	#[serde(default)]
	pub index: Option<String>,
}

impl EsConfigLayer {
	pub fn merge(&mut self, other: EsConfigLayer) {
		if other.scheme.is_some() {
			self.scheme = other.scheme;
		}
		if other.host.is_some() {
			self.host = other.host;
		}
		if other.port.is_some() {
			self.port = other.port;
		}
		if other.username.is_some() {
			self.username = other.username;
		}
		if other.password.is_some() {
			self.password = other.password;
		}
		if other.index.is_some() {
			self.index = other.index;
		}
	}

	pub fn finalize(self) -> EsConfig {
		let defaults = EsConfig::default();
		EsConfig {
			scheme: self.scheme.unwrap_or(defaults.scheme),
			host: self.host.unwrap_or(defaults.host),
			port: self.port.unwrap_or(defaults.port),
			username: self.username,
			password: self.password,
			index: self.index.filter(|i| !i.is_empty()),
		}
	}
}
