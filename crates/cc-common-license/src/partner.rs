// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Query parameters forwarded to public domain partner pages.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Parameters a partner may pass through the public domain chooser.
pub const PARTNER_PARAMS: &[&str] = &["lang", "partner", "exit_url", "stylesheet"];

/// Keep only the entries of `map` whose key is listed in `keys`.
///
/// Listed keys missing from `map` are ignored.
pub fn subset_map(map: &BTreeMap<String, String>, keys: &[&str]) -> BTreeMap<String, String> {
	keys
		.iter()
		.filter_map(|key| map.get_key_value(*key))
		.map(|(k, v)| (k.clone(), v.clone()))
		.collect()
}

/// Encode the partner parameters of `params` as a query string.
///
/// Unknown parameters are dropped.
///
/// ```
/// use std::collections::BTreeMap;
/// use cc_common_license::partner::partner_query_string;
///
/// let params = BTreeMap::from([
///     ("lang".to_string(), "en".to_string()),
///     ("floobie".to_string(), "blech".to_string()),
/// ]);
/// assert_eq!(partner_query_string(&params), "lang=en");
/// ```
pub fn partner_query_string(params: &BTreeMap<String, String>) -> String {
	let mut serializer = form_urlencoded::Serializer::new(String::new());
	for (key, value) in subset_map(params, PARTNER_PARAMS) {
		serializer.append_pair(&key, &value);
	}
	serializer.finish()
}
