// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search query DSL construction.
//!
//! The search endpoint issues one fixed query shape: a disjunction of a
//! weighted fuzzy multi-match and a phrase-prefix multi-match over the same
//! fields, with at least one clause required and highlighting on the two
//! display fields.

use serde_json::{json, Value};

/// Fields searched by both clauses. `name` and `description` carry boosts.
pub const SEARCH_FIELDS: [&str; 4] = ["name^3", "description^2", "category.name", "tags"];

/// Fields the engine is asked to highlight.
pub const HIGHLIGHT_FIELDS: [&str; 2] = ["name", "description"];

/// Build the `_search` request body for a free-text query.
///
/// `from` and `size` are passed through verbatim; the caller owns the
/// page-to-offset arithmetic.
pub fn search_body(query: &str, from: u64, size: u64) -> Value {
	json!({
		"query": {
			"bool": {
				"should": [
					{
						"multi_match": {
							"query": query,
							"fields": SEARCH_FIELDS,
							"fuzziness": "AUTO"
						}
					},
					{
						// The wildcard wrapping is intentional: together with
						// phrase_prefix it matches fields starting with the
						// query phrase.
						"multi_match": {
							"query": format!("*{query}*"),
							"fields": SEARCH_FIELDS,
							"type": "phrase_prefix"
						}
					}
				],
				"minimum_should_match": 1
			}
		},
		"from": from,
		"size": size,
		"highlight": {
			"fields": {
				"name": {},
				"description": {}
			}
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn body_carries_offset_and_size() {
		let body = search_body("phon", 10, 10);
		assert_eq!(body["from"], 10);
		assert_eq!(body["size"], 10);
	}

	#[test]
	fn fuzzy_clause_uses_weighted_fields() {
		let body = search_body("phon", 0, 10);
		let fuzzy = &body["query"]["bool"]["should"][0]["multi_match"];
		assert_eq!(fuzzy["query"], "phon");
		assert_eq!(fuzzy["fuzziness"], "AUTO");
		assert_eq!(
			fuzzy["fields"],
			json!(["name^3", "description^2", "category.name", "tags"])
		);
	}

	#[test]
	fn prefix_clause_wraps_query_in_wildcards() {
		let body = search_body("phon", 0, 10);
		let prefix = &body["query"]["bool"]["should"][1]["multi_match"];
		assert_eq!(prefix["query"], "*phon*");
		assert_eq!(prefix["type"], "phrase_prefix");
		assert_eq!(prefix["fields"], body["query"]["bool"]["should"][0]["multi_match"]["fields"]);
	}

	#[test]
	fn at_least_one_clause_must_match() {
		let body = search_body("anything", 0, 10);
		assert_eq!(body["query"]["bool"]["minimum_should_match"], 1);
	}

	#[test]
	fn highlight_covers_name_and_description() {
		let body = search_body("phon", 0, 10);
		let fields = body["highlight"]["fields"].as_object().unwrap();
		for field in HIGHLIGHT_FIELDS {
			assert!(fields.contains_key(field), "missing highlight field {field}");
		}
		assert_eq!(fields.len(), HIGHLIGHT_FIELDS.len());
	}
}
