// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
	let os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_else(|_| "unknown".to_string());
	let arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_else(|_| "unknown".to_string());
	println!("cargo:rustc-env=SIFT_PLATFORM={os}-{arch}");

	// Short commit of the working tree; empty when not built from a checkout.
	let sha = Command::new("git")
		.args(["rev-parse", "--short", "HEAD"])
		.output()
		.ok()
		.filter(|output| output.status.success())
		.and_then(|output| String::from_utf8(output.stdout).ok())
		.map(|s| s.trim().to_string())
		.unwrap_or_default();
	println!("cargo:rustc-env=SIFT_GIT_SHA={sha}");

	let build_time = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|d| d.as_secs())
		.unwrap_or(0);
	println!("cargo:rustc-env=SIFT_BUILD_TIME={build_time}");

	println!("cargo:rerun-if-changed=build.rs");
}
