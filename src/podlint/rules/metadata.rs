//! `metadata` section: name, namespace and labels.

use crate::podlint::parser::Node;
use crate::podlint::rules::{FieldRule, Shape, apply_rules, shape_only};
use crate::podlint::types::Diagnostics;

const METADATA_RULES: &[FieldRule] = &[
    // An empty name is caught as missing by the presence check.
    FieldRule::required("name", Shape::String, shape_only),
    FieldRule::optional("namespace", Shape::String, shape_only),
    FieldRule::optional("labels", Shape::Object, check_labels),
];

pub fn validate_metadata(metadata: &Node, sink: &mut Diagnostics) {
    apply_rules(METADATA_RULES, metadata, sink);
}

/// Every label key and value must be a scalar.
fn check_labels(labels: &Node, sink: &mut Diagnostics) {
    for (key, value) in labels.as_mapping().unwrap_or_default() {
        if !key.is_scalar() {
            sink.push(key.line, "labels key must be string");
        }
        if !value.is_scalar() {
            sink.push(value.line, "labels value must be string");
        }
    }
}
