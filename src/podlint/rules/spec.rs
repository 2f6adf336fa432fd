//! `spec` section: target OS and the container list.

use crate::podlint::checks;
use crate::podlint::parser::{Node, NodeKind};
use crate::podlint::rules::{FieldRule, OS_NAMES, Shape, apply_rules, container};
use crate::podlint::types::Diagnostics;

const SPEC_RULES: &[FieldRule] = &[
    FieldRule::optional("os", Shape::Any, check_os),
    FieldRule::required("containers", Shape::Array, check_containers),
];

pub fn validate_spec(spec: &Node, sink: &mut Diagnostics) {
    apply_rules(SPEC_RULES, spec, sink);
}

/// `os` is either a bare name or a mapping with a `name` field.
fn check_os(os: &Node, sink: &mut Diagnostics) {
    let name = match &os.kind {
        NodeKind::Scalar(_) => os,
        NodeKind::Mapping(_) => match os.entry("name") {
            None => {
                sink.push(os.line, "os.name is required");
                return;
            }
            Some((key, value)) if value.is_empty_scalar() => {
                sink.push(key.line, "os.name is required");
                return;
            }
            Some((_, value)) if !value.is_scalar() => {
                sink.push(value.line, "os.name must be string");
                return;
            }
            Some((_, value)) => value,
        },
        NodeKind::Sequence(_) => {
            sink.push(os.line, "os must be string or object");
            return;
        }
    };
    // An empty bare value means no OS was selected.
    if name.is_empty_scalar() {
        return;
    }
    sink.record(checks::one_of(name, "os", OS_NAMES));
}

fn check_containers(containers: &Node, sink: &mut Diagnostics) {
    let items = containers.as_sequence().unwrap_or_default();
    if items.is_empty() {
        sink.push(containers.line, "containers must not be empty");
    }
    for item in items {
        container::validate_container(item, sink);
    }
}
