// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! License condition extraction.

use serde::{Deserialize, Serialize};

use crate::document::{get_attribute, DocumentTree};
use crate::error::{LicenseError, Result};
use crate::license::LicenseHandle;

/// Attribute on a condition node holding its display title.
pub const TITLE_ATTRIBUTE: &str = "dc:title";

/// Attribute on a condition node holding its short explanation.
pub const BRIEF_ATTRIBUTE: &str = "dc:description";

/// One legal condition attached to a license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionDescriptor {
	pub char_title: String,
	pub char_brief: String,
	pub icon_name: String,
	pub char_code: String,
	/// CURIE relating the license to the condition, e.g. `cc:requires`.
	pub predicate: String,
	pub object: String,
}

/// A kind of condition the engine knows how to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionCategory {
	pub code: &'static str,
	pub icon_name: &'static str,
	pub predicate: &'static str,
	pub object: &'static str,
	/// Selects the condition node only when it carries both
	/// [`TITLE_ATTRIBUTE`] and [`BRIEF_ATTRIBUTE`].
	pub xpath: &'static str,
}

/// Known condition categories in output order.
pub const CONDITION_CATEGORIES: &[ConditionCategory] = &[
	ConditionCategory {
		code: "by",
		icon_name: "by",
		predicate: "cc:requires",
		object: "http://creativecommons.org/ns#Attribution",
		xpath: "/rdf:RDF/cc:License/cc:requires[@rdf:resource='http://creativecommons.org/ns#Attribution'][@dc:title and @dc:description]",
	},
	ConditionCategory {
		code: "nc",
		icon_name: "nc",
		predicate: "cc:prohibits",
		object: "http://creativecommons.org/ns#CommercialUse",
		xpath: "/rdf:RDF/cc:License/cc:prohibits[@rdf:resource='http://creativecommons.org/ns#CommercialUse'][@dc:title and @dc:description]",
	},
	ConditionCategory {
		code: "sa",
		icon_name: "sa",
		predicate: "cc:requires",
		object: "http://creativecommons.org/ns#ShareAlike",
		xpath: "/rdf:RDF/cc:License/cc:requires[@rdf:resource='http://creativecommons.org/ns#ShareAlike'][@dc:title and @dc:description]",
	},
	ConditionCategory {
		code: "nd",
		icon_name: "nd",
		predicate: "cc:prohibits",
		object: "http://creativecommons.org/ns#DerivativeWorks",
		xpath: "/rdf:RDF/cc:License/cc:prohibits[@rdf:resource='http://creativecommons.org/ns#DerivativeWorks'][@dc:title and @dc:description]",
	},
];

impl ConditionCategory {
	/// Build this category's descriptor from `tree`.
	///
	/// # Errors
	///
	/// Returns [`LicenseError::AttributeNotFound`] if the license does not
	/// carry this condition, or carries it without a title and brief.
	pub fn probe<T: DocumentTree + ?Sized>(&self, tree: &T) -> Result<ConditionDescriptor> {
		let char_title = get_attribute(tree, self.xpath, TITLE_ATTRIBUTE)?;
		let char_brief = get_attribute(tree, self.xpath, BRIEF_ATTRIBUTE)?;

		Ok(ConditionDescriptor {
			char_title,
			char_brief,
			icon_name: self.icon_name.to_string(),
			char_code: self.code.to_string(),
			predicate: self.predicate.to_string(),
			object: self.object.to_string(),
		})
	}
}

/// List the conditions a license carries.
///
/// Output follows [`CONDITION_CATEGORIES`] order regardless of where the
/// conditions appear in the document. Categories the license lacks are left
/// out, so the list may be empty.
///
/// # Errors
///
/// Only structural failures propagate, such as a probe the document tree
/// cannot evaluate. A missing condition is never an error.
#[tracing::instrument(name = "extract_license_conditions", skip(license), fields(code = %license.code()))]
pub fn extract_license_conditions<H>(license: &H) -> Result<Vec<ConditionDescriptor>>
where
	H: LicenseHandle + ?Sized,
{
	let tree = license.document_tree();
	let mut conditions = Vec::with_capacity(CONDITION_CATEGORIES.len());

	for category in CONDITION_CATEGORIES {
		match category.probe(tree) {
			Ok(descriptor) => conditions.push(descriptor),
			Err(LicenseError::AttributeNotFound { attribute, .. }) => {
				tracing::debug!(category = category.code, %attribute, "condition not present");
			}
			Err(e) => return Err(e),
		}
	}

	tracing::debug!(count = conditions.len(), "extracted license conditions");
	Ok(conditions)
}
