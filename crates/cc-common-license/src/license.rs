// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::document::{get_attribute, DocumentTree, RdfDocument};
use crate::error::Result;

/// A license whose description can be probed.
pub trait LicenseHandle {
	/// Short license code, e.g. `by-nc-sa`.
	fn code(&self) -> &str;

	/// The license's RDF description.
	fn document_tree(&self) -> &dyn DocumentTree;
}

/// A license backed by a parsed CC REL document.
#[derive(Debug)]
pub struct RdfLicense {
	code: String,
	document: RdfDocument,
}

impl RdfLicense {
	/// Parse the RDF/XML description of the license identified by `code`.
	///
	/// # Errors
	///
	/// Returns [`LicenseError::Parse`](crate::LicenseError::Parse) if the
	/// description is not well-formed.
	pub fn parse(code: impl Into<String>, rdf: &str) -> Result<Self> {
		Ok(Self {
			code: code.into(),
			document: RdfDocument::parse(rdf)?,
		})
	}

	/// The license URI from `cc:License/@rdf:about`.
	pub fn uri(&self) -> Result<String> {
		get_attribute(&self.document, "/rdf:RDF/cc:License", "rdf:about")
	}
}

impl LicenseHandle for RdfLicense {
	fn code(&self) -> &str {
		&self.code
	}

	fn document_tree(&self) -> &dyn DocumentTree {
		&self.document
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::LicenseError;

	#[test]
	fn test_uri() {
		let license = RdfLicense::parse(
			"publicdomain",
			r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
			            xmlns:cc="http://creativecommons.org/ns#">
			  <cc:License rdf:about="http://creativecommons.org/publicdomain/zero/1.0/" />
			</rdf:RDF>"#,
		)
		.unwrap();

		assert_eq!(license.code(), "publicdomain");
		assert_eq!(
			license.uri().unwrap(),
			"http://creativecommons.org/publicdomain/zero/1.0/"
		);
	}

	#[test]
	fn test_uri_missing() {
		let license = RdfLicense::parse("x", "<rdf/>").unwrap();
		assert!(matches!(
			license.uri(),
			Err(LicenseError::AttributeNotFound { .. })
		));
	}

	#[test]
	fn test_parse_error() {
		assert!(matches!(
			RdfLicense::parse("by", "not xml"),
			Err(LicenseError::Parse(_))
		));
	}
}
