// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer, merged across sources in precedence order.

use serde::Deserialize;

use crate::sections::{DatabaseConfigLayer, EsConfigLayer, HttpConfigLayer, LoggingConfigLayer};

/// One source's view of the configuration. Every field is optional so that
/// higher-precedence sources only override what they actually set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub elasticsearch: Option<EsConfigLayer>,
	#[serde(default)]
	pub database: Option<DatabaseConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl AppConfigLayer {
	pub fn merge(&mut self, other: AppConfigLayer) {
		if let Some(other_http) = other.http {
			self.http
				.get_or_insert_with(Default::default)
				.merge(other_http);
		}
		if let Some(other_es) = other.elasticsearch {
			self.elasticsearch
				.get_or_insert_with(Default::default)
				.merge(other_es);
		}
		if let Some(other_database) = other.database {
			self.database
				.get_or_insert_with(Default::default)
				.merge(other_database);
		}
		if let Some(other_logging) = other.logging {
			self.logging
				.get_or_insert_with(Default::default)
				.merge(other_logging);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_into_empty_layer() {
		let mut base = AppConfigLayer::default();
		base.merge(AppConfigLayer {
			http: Some(HttpConfigLayer {
				port: Some(9000),
				..Default::default()
			}),
			..Default::default()
		});
		assert_eq!(base.http.unwrap().port, Some(9000));
	}

	#[test]
	fn test_merge_overrides_field_by_field() {
		let mut base = AppConfigLayer {
			elasticsearch: Some(EsConfigLayer {
				host: Some("es-old".to_string()),
				index: Some("products".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		base.merge(AppConfigLayer {
			elasticsearch: Some(EsConfigLayer {
				host: Some("es-new".to_string()),
				..Default::default()
			}),
			..Default::default()
		});

		let es = base.elasticsearch.unwrap();
		assert_eq!(es.host.as_deref(), Some("es-new"));
		assert_eq!(es.index.as_deref(), Some("products"));
	}
}
