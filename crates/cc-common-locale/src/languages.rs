// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalog of the languages the license chooser is offered in.

use serde::Serialize;

/// A supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
	/// Code in license style (`pt_BR`, `en`)
	pub code: &'static str,
	/// English name of the language
	pub name: &'static str,
}

const fn entry(code: &'static str, name: &'static str) -> LanguageEntry {
	LanguageEntry { code, name }
}

/// All active languages, ordered by code.
pub const LANGUAGES: &[LanguageEntry] = &[
	entry("af", "Afrikaans"),
	entry("ar", "Arabic"),
	entry("be", "Belarusian"),
	entry("bg", "Bulgarian"),
	entry("ca", "Catalan"),
	entry("cs", "Czech"),
	entry("da", "Danish"),
	entry("de", "German"),
	entry("el", "Greek"),
	entry("en", "English"),
	entry("eo", "Esperanto"),
	entry("es", "Spanish"),
	entry("et", "Estonian"),
	entry("eu", "Basque"),
	entry("fa", "Persian"),
	entry("fi", "Finnish"),
	entry("fr", "French"),
	entry("gl", "Galician"),
	entry("he", "Hebrew"),
	entry("hr", "Croatian"),
	entry("hu", "Hungarian"),
	entry("id", "Indonesian"),
	entry("is", "Icelandic"),
	entry("it", "Italian"),
	entry("ja", "Japanese"),
	entry("ko", "Korean"),
	entry("lt", "Lithuanian"),
	entry("lv", "Latvian"),
	entry("mk", "Macedonian"),
	entry("ms", "Malay"),
	entry("nl", "Dutch"),
	entry("no", "Norwegian"),
	entry("pl", "Polish"),
	entry("pt", "Portuguese"),
	entry("pt_BR", "Portuguese (Brazil)"),
	entry("ro", "Romanian"),
	entry("ru", "Russian"),
	entry("sk", "Slovak"),
	entry("sl", "Slovenian"),
	entry("sr", "Serbian"),
	entry("sv", "Swedish"),
	entry("th", "Thai"),
	entry("tr", "Turkish"),
	entry("uk", "Ukrainian"),
	entry("zh_CN", "Chinese (Simplified)"),
	entry("zh_TW", "Chinese (Traditional)"),
];

/// Get all active languages.
pub fn list_active_languages() -> &'static [LanguageEntry] {
	LANGUAGES
}

/// Look up the English name of an active language.
///
/// Returns `None` if the code is not active.
pub fn language_name(code: &str) -> Option<&'static str> {
	LANGUAGES.iter().find(|l| l.code == code).map(|l| l.name)
}

/// Check if a license-style code is an active language.
pub fn is_active(code: &str) -> bool {
	LANGUAGES.iter().any(|l| l.code == code)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::style::normalize_locale_style;

	#[test]
	fn test_english_is_active() {
		assert!(list_active_languages().contains(&LanguageEntry {
			code: "en",
			name: "English",
		}));
	}

	#[test]
	fn test_ordered_by_code() {
		let codes: Vec<_> = LANGUAGES.iter().map(|l| l.code).collect();
		let mut sorted = codes.clone();
		sorted.sort_unstable();
		assert_eq!(codes, sorted);
	}

	#[test]
	fn test_codes_are_unique() {
		let mut codes: Vec<_> = LANGUAGES.iter().map(|l| l.code).collect();
		codes.dedup();
		assert_eq!(codes.len(), LANGUAGES.len());
	}

	#[test]
	fn test_codes_are_in_license_style() {
		for language in LANGUAGES {
			assert_eq!(
				normalize_locale_style(language.code).unwrap(),
				language.code,
				"{} is not normalized",
				language.code
			);
		}
	}

	#[test]
	fn test_language_name() {
		assert_eq!(language_name("he"), Some("Hebrew"));
		assert_eq!(language_name("pt_BR"), Some("Portuguese (Brazil)"));
		assert_eq!(language_name("xx"), None);
	}

	#[test]
	fn test_is_active() {
		assert!(is_active("en"));
		assert!(is_active("zh_CN"));
		assert!(!is_active("zh-CN"));
		assert!(!is_active(""));
	}
}
