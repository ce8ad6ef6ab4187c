// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::error::LocaleError;
use crate::identity::parse_locale_identity;

/// Convert a locale tag to the `language_TERRITORY` form used by license
/// descriptions.
///
/// Script and variant are dropped. A tag without a territory yields the bare
/// lowercase language. The result is stable under repeated normalization.
///
/// ```
/// use cc_common_locale::normalize_locale_style;
///
/// assert_eq!(normalize_locale_style("en-US").unwrap(), "en_US");
/// assert_eq!(normalize_locale_style("EN-us").unwrap(), "en_US");
/// assert_eq!(normalize_locale_style("en").unwrap(), "en");
/// ```
pub fn normalize_locale_style(tag: &str) -> Result<String, LocaleError> {
	Ok(parse_locale_identity(tag)?.license_style())
}
