// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors produced while interpreting a locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
	/// The leading language subtag could not be identified.
	#[error("malformed locale tag: {0:?}")]
	MalformedLocaleTag(String),
}
