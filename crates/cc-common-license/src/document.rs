// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XPath-addressable document trees.

use std::fmt;

use sxd_document::{parser, Package};
use sxd_xpath::nodeset::Node;
use sxd_xpath::{Context, Factory, Value, XPath};

use crate::error::{LicenseError, Result};

/// Prefixes bound in every XPath evaluated against an [`RdfDocument`].
pub const NAMESPACES: &[(&str, &str)] = &[
	("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
	("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
	("cc", "http://creativecommons.org/ns#"),
	("dc", "http://purl.org/dc/elements/1.1/"),
	("dcterms", "http://purl.org/dc/terms/"),
];

/// A document that can be probed with XPath.
pub trait DocumentTree {
	/// Evaluate `xpath` and read `attribute` from the first selected node in
	/// document order.
	///
	/// Returns `Ok(None)` when no node matches or the node lacks the
	/// attribute. Errors are reserved for expressions that cannot be compiled
	/// or evaluated.
	fn find_attribute(&self, xpath: &str, attribute: &str) -> Result<Option<String>>;
}

/// Read a single attribute, treating absence as an error.
///
/// # Errors
///
/// Returns [`LicenseError::AttributeNotFound`] if the expression selects
/// nothing or the selected node has no such attribute.
///
/// # Example
///
/// ```
/// use cc_common_license::{get_attribute, RdfDocument};
///
/// let tree = RdfDocument::parse(r#"<foo><bar><baz basil="herb" /></bar></foo>"#).unwrap();
/// assert_eq!(get_attribute(&tree, "/foo/bar/baz", "basil").unwrap(), "herb");
/// ```
pub fn get_attribute<T>(tree: &T, xpath: &str, attribute: &str) -> Result<String>
where
	T: DocumentTree + ?Sized,
{
	tree
		.find_attribute(xpath, attribute)?
		.ok_or_else(|| LicenseError::AttributeNotFound {
			xpath: xpath.to_string(),
			attribute: attribute.to_string(),
		})
}

/// An RDF/XML document held in memory.
///
/// The tree is owned and not `Sync`; parse one per thread.
pub struct RdfDocument {
	package: Package,
}

impl RdfDocument {
	/// Parse an XML string.
	///
	/// # Errors
	///
	/// Returns [`LicenseError::Parse`] if the text is not well-formed XML.
	pub fn parse(xml: &str) -> Result<Self> {
		let package = parser::parse(xml).map_err(|e| LicenseError::Parse(format!("{e:?}")))?;
		Ok(Self { package })
	}
}

impl fmt::Debug for RdfDocument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RdfDocument").finish_non_exhaustive()
	}
}

impl DocumentTree for RdfDocument {
	fn find_attribute(&self, xpath: &str, attribute: &str) -> Result<Option<String>> {
		let document = self.package.as_document();
		let context = namespace_context();

		let Some(node) = first_node(&context, xpath, document.root())? else {
			return Ok(None);
		};

		let value = match first_node(&context, &format!("@{attribute}"), node)? {
			Some(Node::Attribute(attr)) => Some(attr.value().to_string()),
			_ => None,
		};
		Ok(value)
	}
}

fn namespace_context<'d>() -> Context<'d> {
	let mut context = Context::new();
	for (prefix, uri) in NAMESPACES {
		context.set_namespace(prefix, uri);
	}
	context
}

fn compile(xpath: &str) -> Result<XPath> {
	Factory::new()
		.build(xpath)
		.map_err(|e| LicenseError::XPath {
			xpath: xpath.to_string(),
			message: e.to_string(),
		})?
		.ok_or_else(|| LicenseError::XPath {
			xpath: xpath.to_string(),
			message: "empty expression".to_string(),
		})
}

fn first_node<'d, N>(context: &Context<'d>, xpath: &str, node: N) -> Result<Option<Node<'d>>>
where
	N: Into<Node<'d>>,
{
	let value = compile(xpath)?
		.evaluate(context, node)
		.map_err(|e| LicenseError::XPath {
			xpath: xpath.to_string(),
			message: e.to_string(),
		})?;

	match value {
		Value::Nodeset(nodes) => Ok(nodes.document_order_first()),
		_ => Err(LicenseError::XPath {
			xpath: xpath.to_string(),
			message: "expression does not select nodes".to_string(),
		}),
	}
}
