// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! License metadata for the CC engine.
//!
//! Licenses are described in RDF/XML using the CC REL vocabulary. This crate
//! reads the handful of facts the engine needs out of those documents through
//! fixed XPath probes:
//!
//! - [`DocumentTree`]: anything that can answer "value of attribute X on the
//!   node selected by XPath Y"
//! - [`LicenseHandle`]: a license exposing its document tree
//! - [`extract_license_conditions`]: the ordered list of conditions
//!   (attribution, non-commercial, ...) a license carries
//!
//! # Example
//!
//! ```
//! use cc_common_license::{extract_license_conditions, RdfLicense};
//!
//! let rdf = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
//!                       xmlns:cc="http://creativecommons.org/ns#"
//!                       xmlns:dc="http://purl.org/dc/elements/1.1/">
//!   <cc:License rdf:about="http://creativecommons.org/licenses/by/4.0/">
//!     <cc:requires rdf:resource="http://creativecommons.org/ns#Attribution"
//!                  dc:title="Attribution" dc:description="Give credit." />
//!   </cc:License>
//! </rdf:RDF>"#;
//!
//! let license = RdfLicense::parse("by", rdf).unwrap();
//! let conditions = extract_license_conditions(&license).unwrap();
//! assert_eq!(conditions.len(), 1);
//! assert_eq!(conditions[0].char_code, "by");
//! ```

mod conditions;
mod document;
mod error;
mod license;
pub mod partner;

pub use conditions::{
	extract_license_conditions, ConditionCategory, ConditionDescriptor, BRIEF_ATTRIBUTE,
	CONDITION_CATEGORIES, TITLE_ATTRIBUTE,
};
pub use document::{get_attribute, DocumentTree, RdfDocument, NAMESPACES};
pub use error::{LicenseError, Result};
pub use license::{LicenseHandle, RdfLicense};
