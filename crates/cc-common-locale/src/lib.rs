// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale handling for the CC engine.
//!
//! This crate turns loosely formatted locale tags (`en-US_POSIX`, `he-il`,
//! `EN-us`) into structured identities and answers the questions the
//! license chooser needs about them:
//!
//! - which components a tag carries ([`parse_locale_identity`])
//! - which way its text reads ([`resolve_text_orientation`])
//! - how the license descriptions spell it ([`normalize_locale_style`])
//! - which languages are offered at all ([`list_active_languages`])
//!
//! # Example
//!
//! ```
//! use cc_common_locale::{
//!     normalize_locale_style, parse_locale_identity, resolve_text_orientation, Direction,
//! };
//!
//! let identity = parse_locale_identity("en-US_POSIX").unwrap();
//! assert_eq!(identity.language, "en");
//! assert_eq!(identity.territory.as_deref(), Some("US"));
//!
//! assert_eq!(resolve_text_orientation("he-il").unwrap(), Direction::Rtl);
//! assert_eq!(normalize_locale_style("EN-us").unwrap(), "en_US");
//! ```

mod direction;
mod error;
mod identity;
mod languages;
mod resolve;
mod style;

pub use direction::{is_rtl, resolve_text_orientation, Direction, LocaleRef, RTL_LANGUAGES};
pub use error::LocaleError;
pub use identity::{parse_locale_identity, LocaleIdentity};
pub use languages::{is_active, language_name, list_active_languages, LanguageEntry, LANGUAGES};
pub use resolve::{default_locale_from_env, negotiate_locale, DEFAULT_LOCALE};
pub use style::normalize_locale_style;
