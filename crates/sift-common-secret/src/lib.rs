// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Secret handling primitives for Sift.
//!
//! This crate provides:
//! - [`Secret<T>`]: a wrapper type that prevents accidental logging of
//!   sensitive values (Debug/Display render as [`REDACTED`], memory is
//!   zeroized on drop)
//! - [`load_secret_env`]: helper for loading secrets from environment
//!   variables with `*_FILE` indirection support

pub mod env;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

pub use env::{load_secret_env, SecretEnvError};

/// Placeholder emitted wherever a secret would otherwise be printed.
pub const REDACTED: &str = "[REDACTED]";

/// Wrapper for sensitive values.
///
/// The inner value is only reachable through [`Secret::expose`], which keeps
/// accidental leaks greppable. Debug, Display, and Serialize all emit
/// [`REDACTED`]; the inner value is zeroized when the wrapper is dropped.
pub struct Secret<T: Zeroize>(T);

/// The common case: a secret string (API keys, passwords).
pub type SecretString = Secret<String>;

impl<T: Zeroize> Secret<T> {
	pub fn new(value: T) -> Self {
		Self(value)
	}

	/// Borrow the inner value. Call sites are expected to be deliberate.
	pub fn expose(&self) -> &T {
		&self.0
	}
}

impl<T: Zeroize> Drop for Secret<T> {
	fn drop(&mut self) {
		self.0.zeroize();
	}
}

impl<T: Zeroize + Clone> Clone for Secret<T> {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}

impl<T: Zeroize> fmt::Debug for Secret<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T: Zeroize> fmt::Display for Secret<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T: Zeroize> Serialize for Secret<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(REDACTED)
	}
}

impl<'de, T: Zeroize + Deserialize<'de>> Deserialize<'de> for Secret<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		T::deserialize(deserializer).map(Secret::new)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn debug_is_redacted() {
		let secret = SecretString::new("hunter2".to_string());
		assert_eq!(format!("{secret:?}"), REDACTED);
		assert_eq!(format!("{secret}"), REDACTED);
	}

	#[test]
	fn expose_returns_inner_value() {
		let secret = SecretString::new("hunter2".to_string());
		assert_eq!(secret.expose(), "hunter2");
	}

	#[test]
	fn serialize_is_redacted() {
		let secret = SecretString::new("hunter2".to_string());
		let json = serde_json::to_string(&secret).unwrap();
		assert_eq!(json, format!("\"{REDACTED}\""));
	}

	#[test]
	fn deserialize_reads_plain_value() {
		let secret: SecretString = serde_json::from_str("\"hunter2\"").unwrap();
		assert_eq!(secret.expose(), "hunter2");
	}

	#[test]
	fn clone_preserves_value() {
		let secret = SecretString::new("hunter2".to_string());
		let cloned = secret.clone();
		assert_eq!(cloned.expose(), "hunter2");
	}
}
