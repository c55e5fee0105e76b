// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

pub mod database;
pub mod elasticsearch;
pub mod http;
pub mod logging;

pub use database::{DatabaseConfig, DatabaseConfigLayer};
pub use elasticsearch::{EsConfig, EsConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
