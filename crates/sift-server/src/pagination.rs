// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search pagination: parameter validation and page arithmetic.
//!
//! Unlike clamping-style pagination, out-of-range values here are rejected
//! outright, before any engine call is made.

use serde::Deserialize;
use thiserror::Error;
use utoipa::IntoParams;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Query parameters accepted by `GET /search`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SearchParams {
	/// Free-text search query.
	pub query: String,
	/// Page number, 1-based.
	pub page: Option<u32>,
	/// Results per page, 1-100.
	pub page_size: Option<u32>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
	#[error("page must be >= 1")]
	PageOutOfRange,

	#[error("page_size must be between 1 and 100")]
	PageSizeOutOfRange,
}

/// A validated page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
	pub page: u32,
	pub page_size: u32,
}

impl SearchParams {
	/// Validate pagination parameters, applying defaults for absent ones.
	pub fn window(&self) -> Result<PageWindow, PageError> {
		let page = self.page.unwrap_or(DEFAULT_PAGE);
		if page < 1 {
			return Err(PageError::PageOutOfRange);
		}

		let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
		if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
			return Err(PageError::PageSizeOutOfRange);
		}

		Ok(PageWindow { page, page_size })
	}
}

impl PageWindow {
	/// Offset passed to the engine: `(page - 1) * page_size`.
	pub fn from_offset(&self) -> u64 {
		u64::from(self.page - 1) * u64::from(self.page_size)
	}

	pub fn size(&self) -> u64 {
		u64::from(self.page_size)
	}
}

/// `ceil(total / page_size)`, always derived from the current response.
pub fn total_pages(total: u64, page_size: u32) -> u64 {
	total.div_ceil(u64::from(page_size))
}
