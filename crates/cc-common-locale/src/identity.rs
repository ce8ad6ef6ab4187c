// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale tag segmentation.
//!
//! Tags are split on `-` and `_` and each subtag is classified by its shape:
//!
//! | Shape | Component | Output case |
//! |-------|-----------|-------------|
//! | first subtag, 2-3 letters | language | lowercase |
//! | 4 letters, before territory | script | as given |
//! | 2 letters or 3 digits | territory | uppercase |
//! | 4+ alphanumerics | variant | as given |
//!
//! Only a missing or misshapen language subtag is an error. Subtags that fit
//! no slot are skipped.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::LocaleError;

static SUBTAG_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]").unwrap());
static LANGUAGE_SUBTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}$").unwrap());
static SCRIPT_SUBTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]{4}$").unwrap());
static TERRITORY_SUBTAG: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(?:[A-Za-z]{2}|[0-9]{3})$").unwrap());
static VARIANT_SUBTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{4,}$").unwrap());

/// Structured components of a locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocaleIdentity {
	/// ISO 639 language code, always lowercase.
	pub language: String,
	/// ISO 3166 region or UN M.49 area code, uppercase.
	pub territory: Option<String>,
	/// ISO 15924 script code.
	pub script: Option<String>,
	/// Variant such as `POSIX`.
	pub variant: Option<String>,
}

impl LocaleIdentity {
	/// Returns the `language_TERRITORY` spelling used by license descriptions.
	pub fn license_style(&self) -> String {
		match &self.territory {
			Some(territory) => format!("{}_{}", self.language, territory),
			None => self.language.clone(),
		}
	}
}

impl FromStr for LocaleIdentity {
	type Err = LocaleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_locale_identity(s)
	}
}

/// Parse a locale tag into its language, script, territory and variant.
///
/// # Errors
///
/// Returns [`LocaleError::MalformedLocaleTag`] if the first subtag is not a
/// two or three letter language code.
///
/// # Example
///
/// ```
/// use cc_common_locale::parse_locale_identity;
///
/// let identity = parse_locale_identity("en-US_POSIX").unwrap();
/// assert_eq!(identity.language, "en");
/// assert_eq!(identity.territory.as_deref(), Some("US"));
/// assert_eq!(identity.variant.as_deref(), Some("POSIX"));
/// assert_eq!(identity.script, None);
/// ```
pub fn parse_locale_identity(tag: &str) -> Result<LocaleIdentity, LocaleError> {
	let mut subtags = SUBTAG_SEPARATOR.split(tag.trim());

	let language = match subtags.next() {
		Some(subtag) if LANGUAGE_SUBTAG.is_match(subtag) => subtag.to_ascii_lowercase(),
		_ => {
			tracing::debug!(tag, "locale tag has no language subtag");
			return Err(LocaleError::MalformedLocaleTag(tag.to_string()));
		}
	};

	let mut identity = LocaleIdentity {
		language,
		territory: None,
		script: None,
		variant: None,
	};

	for subtag in subtags {
		// Nothing may follow a variant.
		if identity.variant.is_some() {
			break;
		}

		if identity.script.is_none() && identity.territory.is_none() && SCRIPT_SUBTAG.is_match(subtag)
		{
			identity.script = Some(subtag.to_string());
		} else if identity.territory.is_none() && TERRITORY_SUBTAG.is_match(subtag) {
			identity.territory = Some(subtag.to_ascii_uppercase());
		} else if VARIANT_SUBTAG.is_match(subtag) {
			identity.variant = Some(subtag.to_string());
		} else {
			tracing::debug!(tag, subtag, "skipping unrecognised locale subtag");
		}
	}

	Ok(identity)
}
