// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LicenseError>;

/// Errors that can occur while reading license documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LicenseError {
	/// The probe selected no node, or the node lacks the attribute.
	#[error("attribute {attribute:?} not found at {xpath}")]
	AttributeNotFound { xpath: String, attribute: String },

	/// The license document is not well-formed XML.
	#[error("invalid license document: {0}")]
	Parse(String),

	/// The XPath expression could not be compiled or evaluated.
	#[error("XPath error in {xpath}: {message}")]
	XPath { xpath: String, message: String },
}
