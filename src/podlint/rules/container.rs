//! A single entry of `spec.containers`.

use crate::podlint::checks;
use crate::podlint::parser::Node;
use crate::podlint::rules::{FieldRule, IMAGE_PREFIX, Shape, apply_rules, ports, probe, resources};
use crate::podlint::types::Diagnostics;

const CONTAINER_RULES: &[FieldRule] = &[
    FieldRule::required("name", Shape::String, check_name),
    FieldRule::required("image", Shape::String, check_image),
    FieldRule::optional("ports", Shape::Array, ports::validate_ports),
    FieldRule::optional("readinessProbe", Shape::Object, probe::validate_probe),
    FieldRule::optional("livenessProbe", Shape::Object, probe::validate_probe),
    FieldRule::required("resources", Shape::Object, resources::validate_resources),
];

/// Validate one container; a non-mapping entry is reported and skipped.
pub fn validate_container(container: &Node, sink: &mut Diagnostics) {
    if !container.is_mapping() {
        sink.push(container.line, "container must be object");
        return;
    }
    apply_rules(CONTAINER_RULES, container, sink);
}

fn check_name(node: &Node, sink: &mut Diagnostics) {
    sink.record(checks::identifier(node, "name"));
}

fn check_image(node: &Node, sink: &mut Diagnostics) {
    sink.record(checks::tagged_reference(node, "image", IMAGE_PREFIX));
}
