//! `resources` with its `limits` and `requests` quantities.

use crate::podlint::checks::{self, UnitSet};
use crate::podlint::parser::Node;
use crate::podlint::rules::{FieldRule, Shape, apply_rules};
use crate::podlint::types::Diagnostics;

const RESOURCES_RULES: &[FieldRule] = &[
    FieldRule::optional("limits", Shape::Object, validate_quantities),
    FieldRule::optional("requests", Shape::Object, validate_quantities),
];

const QUANTITY_RULES: &[FieldRule] = &[
    FieldRule::optional("cpu", Shape::Integer, check_cpu),
    FieldRule::optional("memory", Shape::String, check_memory),
];

pub fn validate_resources(resources: &Node, sink: &mut Diagnostics) {
    apply_rules(RESOURCES_RULES, resources, sink);
}

fn validate_quantities(quantities: &Node, sink: &mut Diagnostics) {
    apply_rules(QUANTITY_RULES, quantities, sink);
}

/// Whole cores, no upper bound.
fn check_cpu(node: &Node, sink: &mut Diagnostics) {
    sink.record(checks::int_in_range(node, "cpu", 0, None));
}

fn check_memory(node: &Node, sink: &mut Diagnostics) {
    sink.record(checks::quantity(node, "memory", UnitSet::Binary));
}
