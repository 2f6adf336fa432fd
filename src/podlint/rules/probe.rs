//! `readinessProbe` / `livenessProbe`.

use crate::podlint::checks;
use crate::podlint::parser::Node;
use crate::podlint::rules::{FieldRule, Shape, apply_rules, check_port};
use crate::podlint::types::Diagnostics;

const PROBE_RULES: &[FieldRule] = &[FieldRule::required(
    "httpGet",
    Shape::Object,
    validate_http_get,
)];

const HTTP_GET_RULES: &[FieldRule] = &[
    FieldRule::required("path", Shape::String, check_path),
    FieldRule::required("port", Shape::Integer, check_http_port),
];

pub fn validate_probe(probe: &Node, sink: &mut Diagnostics) {
    apply_rules(PROBE_RULES, probe, sink);
}

fn validate_http_get(http_get: &Node, sink: &mut Diagnostics) {
    apply_rules(HTTP_GET_RULES, http_get, sink);
}

fn check_path(node: &Node, sink: &mut Diagnostics) {
    sink.record(checks::absolute_path(node, "path"));
}

fn check_http_port(node: &Node, sink: &mut Diagnostics) {
    check_port(node, "port", sink);
}
