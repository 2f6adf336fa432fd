//! Top-level document: `apiVersion`, `kind`, `metadata`, `spec`.

use crate::podlint::parser::Node;
use crate::podlint::rules::{
    API_VERSIONS, FieldRule, KINDS, Shape, apply_rules, check_one_of, metadata, spec,
};
use crate::podlint::types::Diagnostics;

const DOCUMENT_RULES: &[FieldRule] = &[
    FieldRule::required("apiVersion", Shape::String, check_api_version),
    FieldRule::required("kind", Shape::String, check_kind),
    FieldRule::required("metadata", Shape::Object, metadata::validate_metadata),
    FieldRule::required("spec", Shape::Object, spec::validate_spec),
];

/// Validate one document root.
pub fn validate_document(doc: &Node, sink: &mut Diagnostics) {
    if !doc.is_mapping() {
        sink.push(doc.line, "top-level document must be a mapping (object)");
        return;
    }
    apply_rules(DOCUMENT_RULES, doc, sink);
}

fn check_api_version(node: &Node, sink: &mut Diagnostics) {
    check_one_of(node, "apiVersion", API_VERSIONS, sink);
}

fn check_kind(node: &Node, sink: &mut Diagnostics) {
    check_one_of(node, "kind", KINDS, sink);
}
