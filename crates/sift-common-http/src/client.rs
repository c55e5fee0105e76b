// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use reqwest::{Client, ClientBuilder};
use sift_common_version::BuildInfo;
use std::time::Duration;

/// Creates a new HTTP client with the standard Sift User-Agent header.
///
/// The User-Agent format is: `sift/{platform}/{git_sha}`
/// Example: `sift/linux-x86_64/abc1234`
pub fn new_client() -> Client {
	builder().build().expect("failed to build HTTP client")
}

/// Creates a new HTTP client builder with the standard Sift User-Agent header.
///
/// Use this when you need to customize the client (e.g., set timeout).
///
/// # Example
/// ```ignore
/// let client = sift_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a new HTTP client with a custom timeout and the standard User-Agent.
pub fn new_client_with_timeout(timeout: Duration) -> Client {
	builder()
		.timeout(timeout)
		.build()
		.expect("failed to build HTTP client")
}

/// Returns the standard Sift User-Agent string.
///
/// Format: `sift/{platform}/{git_sha}`
pub fn user_agent() -> String {
	let info = BuildInfo::current();
	format!("sift/{}/{}", info.platform, info.git_sha)
}
