// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Environment-variable secret loading with `*_FILE` indirection.

use std::path::PathBuf;

use crate::SecretString;

/// Errors from [`load_secret_env`].
#[derive(Debug, thiserror::Error)]
pub enum SecretEnvError {
	/// The `*_FILE` variant pointed at a file that could not be read.
	#[error("failed to read secret file {path}: {source}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Load a secret from the environment.
///
/// Checks `{name}_FILE` first (the value is read from that file with
/// trailing whitespace stripped), then `{name}` directly. Empty values are
/// treated as unset. Returns `Ok(None)` when neither variable is present.
pub fn load_secret_env(name: &str) -> Result<Option<SecretString>, SecretEnvError> {
	let file_var = format!("{name}_FILE");
	if let Some(path) = std::env::var(&file_var).ok().filter(|v| !v.is_empty()) {
		let path = PathBuf::from(path);
		let contents =
			std::fs::read_to_string(&path).map_err(|source| SecretEnvError::FileRead {
				path: path.clone(),
				source,
			})?;
		return Ok(Some(SecretString::new(
			contents.trim_end_matches(['\r', '\n']).to_string(),
		)));
	}

	Ok(std::env::var(name)
		.ok()
		.filter(|v| !v.is_empty())
		.map(SecretString::new))
}
