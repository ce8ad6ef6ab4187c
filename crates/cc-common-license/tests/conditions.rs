// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use cc_common_license::{extract_license_conditions, ConditionDescriptor, LicenseHandle, RdfLicense};

const BY: &str = include_str!("fixtures/by.rdf");
const BY_NC_SA: &str = include_str!("fixtures/by-nc-sa.rdf");
const BY_ND: &str = include_str!("fixtures/by-nd.rdf");
const PUBLICDOMAIN: &str = include_str!("fixtures/publicdomain.rdf");

const ATTRIBUTION_BRIEF: &str = "You must attribute the work in the manner specified \
	by the author or licensor (but not in any way that suggests \
	that they endorse you or your use of the work).";

fn codes(conditions: &[ConditionDescriptor]) -> Vec<&str> {
	conditions.iter().map(|c| c.char_code.as_str()).collect()
}

#[test]
fn attribution_only_license() {
	let license = RdfLicense::parse("by", BY).unwrap();
	let conditions = extract_license_conditions(&license).unwrap();

	assert_eq!(
		conditions,
		vec![ConditionDescriptor {
			char_title: "Attribution".to_string(),
			char_brief: ATTRIBUTION_BRIEF.to_string(),
			icon_name: "by".to_string(),
			char_code: "by".to_string(),
			predicate: "cc:requires".to_string(),
			object: "http://creativecommons.org/ns#Attribution".to_string(),
		}]
	);
}

#[test]
fn conditions_follow_category_order_not_document_order() {
	let license = RdfLicense::parse("by-nc-sa", BY_NC_SA).unwrap();
	let conditions = extract_license_conditions(&license).unwrap();

	assert_eq!(codes(&conditions), vec!["by", "nc", "sa"]);
	assert_eq!(conditions[1].char_title, "Noncommercial");
	assert_eq!(conditions[1].predicate, "cc:prohibits");
	assert_eq!(
		conditions[2].object,
		"http://creativecommons.org/ns#ShareAlike"
	);
}

#[test]
fn no_derivatives_license() {
	let license = RdfLicense::parse("by-nd", BY_ND).unwrap();
	let conditions = extract_license_conditions(&license).unwrap();

	assert_eq!(codes(&conditions), vec!["by", "nd"]);
	assert_eq!(conditions[1].char_title, "No Derivative Works");
	assert_eq!(
		conditions[1].object,
		"http://creativecommons.org/ns#DerivativeWorks"
	);
}

#[test]
fn condition_node_without_brief_is_not_selected() {
	let rdf = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
	                      xmlns:cc="http://creativecommons.org/ns#"
	                      xmlns:dc="http://purl.org/dc/elements/1.1/">
	  <cc:License rdf:about="http://creativecommons.org/licenses/by-sa/3.0/">
	    <cc:requires rdf:resource="http://creativecommons.org/ns#Attribution"
	                 dc:title="Attribution"/>
	    <cc:requires rdf:resource="http://creativecommons.org/ns#ShareAlike"
	                 dc:title="Share Alike"
	                 dc:description="Share under the same terms."/>
	  </cc:License>
	</rdf:RDF>"#;

	let license = RdfLicense::parse("by-sa", rdf).unwrap();
	let conditions = extract_license_conditions(&license).unwrap();

	assert_eq!(codes(&conditions), vec!["sa"]);
}

#[test]
fn license_without_conditions_yields_empty_list() {
	let license = RdfLicense::parse("CC0", PUBLICDOMAIN).unwrap();
	assert!(extract_license_conditions(&license).unwrap().is_empty());
}

#[test]
fn extraction_is_repeatable() {
	let license = RdfLicense::parse("by-nc-sa", BY_NC_SA).unwrap();
	let first = extract_license_conditions(&license).unwrap();
	let second = extract_license_conditions(&license).unwrap();
	assert_eq!(first, second);
}

#[test]
fn handles_work_as_trait_objects() {
	let licenses: Vec<Box<dyn LicenseHandle>> = vec![
		Box::new(RdfLicense::parse("by", BY).unwrap()),
		Box::new(RdfLicense::parse("CC0", PUBLICDOMAIN).unwrap()),
	];

	let counts: Vec<_> = licenses
		.iter()
		.map(|l| extract_license_conditions(l.as_ref()).unwrap().len())
		.collect();
	assert_eq!(counts, vec![1, 0]);
}

#[test]
fn descriptors_serialize_with_field_names() {
	let license = RdfLicense::parse("by", BY).unwrap();
	let conditions = extract_license_conditions(&license).unwrap();
	let json = serde_json::to_value(&conditions).unwrap();

	assert_eq!(json[0]["char_code"], "by");
	assert_eq!(json[0]["icon_name"], "by");
	assert_eq!(json[0]["predicate"], "cc:requires");
}
