// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Text direction support.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LocaleError;
use crate::identity::{parse_locale_identity, LocaleIdentity};

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	/// Left-to-right (e.g., English, Spanish)
	Ltr,
	/// Right-to-left (e.g., Arabic, Hebrew)
	Rtl,
}

impl Direction {
	/// Returns the HTML `dir` attribute value.
	pub fn as_html_dir(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_html_dir())
	}
}

/// Language codes written right-to-left, with their English names.
pub const RTL_LANGUAGES: &[(&str, &str)] = &[
	("ar", "Arabic"),
	("arc", "Aramaic"),
	("ckb", "Central Kurdish"),
	("dv", "Divehi"),
	("fa", "Persian"),
	("he", "Hebrew"),
	("iw", "Hebrew (legacy code)"),
	("ks", "Kashmiri"),
	("ps", "Pashto"),
	("sd", "Sindhi"),
	("ug", "Uyghur"),
	("ur", "Urdu"),
	("yi", "Yiddish"),
];

/// Either a raw locale tag or an already parsed identity.
#[derive(Debug, Clone, Copy)]
pub enum LocaleRef<'a> {
	Tag(&'a str),
	Identity(&'a LocaleIdentity),
}

impl<'a> From<&'a str> for LocaleRef<'a> {
	fn from(tag: &'a str) -> Self {
		LocaleRef::Tag(tag)
	}
}

impl<'a> From<&'a String> for LocaleRef<'a> {
	fn from(tag: &'a String) -> Self {
		LocaleRef::Tag(tag)
	}
}

impl<'a> From<&'a LocaleIdentity> for LocaleRef<'a> {
	fn from(identity: &'a LocaleIdentity) -> Self {
		LocaleRef::Identity(identity)
	}
}

/// Check whether a lowercase language code is written right-to-left.
///
/// Returns `false` for unknown codes.
pub fn is_rtl(language: &str) -> bool {
	RTL_LANGUAGES.iter().any(|(code, _)| *code == language)
}

/// Determine the reading direction of a locale.
///
/// Unknown languages read left-to-right.
///
/// # Errors
///
/// Returns [`LocaleError::MalformedLocaleTag`] if a raw tag has no
/// recognisable language subtag. Parsed identities never fail.
///
/// # Example
///
/// ```
/// use cc_common_locale::{resolve_text_orientation, Direction};
///
/// assert_eq!(resolve_text_orientation("he-il").unwrap(), Direction::Rtl);
/// assert_eq!(resolve_text_orientation("foo-bar").unwrap(), Direction::Ltr);
/// ```
pub fn resolve_text_orientation<'a>(
	locale: impl Into<LocaleRef<'a>>,
) -> Result<Direction, LocaleError> {
	let direction = match locale.into() {
		LocaleRef::Tag(tag) => direction_of(&parse_locale_identity(tag)?),
		LocaleRef::Identity(identity) => direction_of(identity),
	};
	Ok(direction)
}

fn direction_of(identity: &LocaleIdentity) -> Direction {
	if is_rtl(&identity.language) {
		Direction::Rtl
	} else {
		Direction::Ltr
	}
}
