// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Build information and version utilities for sift-server.

pub use sift_common_version::BuildInfo;

/// Format version info for display.
pub fn format_version_info() -> String {
	use chrono::{DateTime, Utc};

	let info = BuildInfo::current();

	let built_at = info
		.build_timestamp
		.parse::<i64>()
		.ok()
		.and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));

	let mut output = format!(
		"sift-server version: {}\n\
         Git SHA:             {}\n\
         Built at:            {}\n\
         Platform:            {}",
		info.version,
		info.git_sha,
		built_at
			.map(|t| t.to_rfc3339())
			.unwrap_or_else(|| "unknown".to_string()),
		info.platform,
	);

	if let Some(built_at) = built_at {
		let age = Utc::now().signed_duration_since(built_at);
		if let Ok(std_duration) = age.to_std() {
			output.push_str(&format!(
				"\nBuild age:           {} ({} seconds)",
				humantime::format_duration(std_duration),
				std_duration.as_secs()
			));
		}
	}

	output
}
