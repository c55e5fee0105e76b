// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Migration errors. Any of these aborts the run; there is no partial-retry
//! or resumption.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrateError {
	#[error("Database error: {0}")]
	Db(#[from] sqlx::Error),

	#[error("Invalid database URL: {0}")]
	InvalidDatabaseUrl(String),

	#[error(transparent)]
	Engine(#[from] sift_es::EsError),

	#[error(transparent)]
	Config(#[from] sift_config::ConfigError),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MigrateError>;
