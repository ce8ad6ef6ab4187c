// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale negotiation.

use std::env;

use crate::identity::parse_locale_identity;
use crate::languages::LANGUAGES;

/// Default locale used as fallback.
pub const DEFAULT_LOCALE: &str = "en";

/// Environment variable holding the server's default locale.
const DEFAULT_LOCALE_ENV: &str = "CC_DEFAULT_LOCALE";

/// Pick the active language that best serves a request.
///
/// Resolution order (highest to lowest priority):
/// 1. Each entry of `best_matches` in order (e.g., an `Accept-Language`
///    header's best matches), first as `language_TERRITORY`, then as the
///    bare language
/// 2. `server_default` (if active)
/// 3. Fallback to English ("en")
///
/// Entries that are not locale tags at all are skipped.
///
/// # Example
///
/// ```
/// use cc_common_locale::negotiate_locale;
///
/// assert_eq!(negotiate_locale(&["pt-br", "en"], "en"), "pt_BR");
/// assert_eq!(negotiate_locale(&["de-AT"], "en"), "de");
/// assert_eq!(negotiate_locale(&["tlh"], "es"), "es");
/// assert_eq!(negotiate_locale(&[], "invalid"), "en");
/// ```
pub fn negotiate_locale(best_matches: &[&str], server_default: &str) -> &'static str {
	for tag in best_matches {
		if let Some(code) = active_code(tag) {
			return code;
		}
	}

	active_code(server_default).unwrap_or(DEFAULT_LOCALE)
}

/// Read the server default locale from `CC_DEFAULT_LOCALE`.
///
/// Unset or inactive values fall back to [`DEFAULT_LOCALE`].
pub fn default_locale_from_env() -> &'static str {
	default_locale_from(env::var(DEFAULT_LOCALE_ENV).ok().as_deref())
}

fn default_locale_from(value: Option<&str>) -> &'static str {
	match value {
		Some(tag) => active_code(tag).unwrap_or_else(|| {
			tracing::warn!(
				locale = tag,
				"{DEFAULT_LOCALE_ENV} is not an active language, using {DEFAULT_LOCALE}"
			);
			DEFAULT_LOCALE
		}),
		None => DEFAULT_LOCALE,
	}
}

fn active_code(tag: &str) -> Option<&'static str> {
	let identity = parse_locale_identity(tag).ok()?;
	let full = identity.license_style();
	lookup(&full).or_else(|| lookup(&identity.language))
}

fn lookup(code: &str) -> Option<&'static str> {
	LANGUAGES.iter().find(|l| l.code == code).map(|l| l.code)
}
