//! Schema rules for Pod manifests.
//!
//! The schema is fixed, so each section is a small static table of
//! [`FieldRule`]s applied in declaration order. A rule checks presence,
//! then shape, then hands the value to its content check, which may recurse
//! into the next section.

use crate::podlint::checks;
use crate::podlint::parser::Node;
use crate::podlint::types::Diagnostics;

pub mod container;
pub mod document;
pub mod metadata;
pub mod ports;
pub mod probe;
pub mod resources;
pub mod spec;

/// Accepted `apiVersion`.
pub const API_VERSIONS: &[&str] = &["v1"];
/// Accepted `kind`.
pub const KINDS: &[&str] = &["Pod"];
/// Registry every container image must come from.
pub const IMAGE_PREFIX: &str = "registry.bigbrother.io/";
/// Accepted `spec.os` names.
pub const OS_NAMES: &[&str] = &["linux", "windows"];
/// Accepted port protocols.
pub const PROTOCOLS: &[&str] = &["TCP", "UDP"];
pub const MIN_PORT: i64 = 1;
pub const MAX_PORT: i64 = 65535;

/// Content check run on a value whose shape already matched.
pub type ContentCheck = fn(&Node, &mut Diagnostics);

/// Structural expectation for a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Any scalar.
    String,
    /// A scalar; the integer kind itself is checked by the content check.
    Integer,
    Object,
    Array,
    /// No structural expectation; the content check decides.
    Any,
}

impl Shape {
    pub fn matches(&self, node: &Node) -> bool {
        match self {
            Self::String | Self::Integer => node.is_scalar(),
            Self::Object => node.is_mapping(),
            Self::Array => node.is_sequence(),
            Self::Any => true,
        }
    }

    /// Scalar shapes treat an empty value as a missing one. Collections
    /// report it as a shape mismatch instead.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::String | Self::Integer)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "int",
            Self::Object => "object",
            Self::Array => "array",
            Self::Any => "any",
        }
    }
}

/// Static description of one field of a section.
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub key: &'static str,
    pub required: bool,
    pub shape: Shape,
    pub check: ContentCheck,
}

impl FieldRule {
    pub const fn required(key: &'static str, shape: Shape, check: ContentCheck) -> Self {
        Self {
            key,
            required: true,
            shape,
            check,
        }
    }

    pub const fn optional(key: &'static str, shape: Shape, check: ContentCheck) -> Self {
        Self {
            key,
            required: false,
            shape,
            check,
        }
    }

    /// Check this field of `parent`.
    ///
    /// A shape mismatch is reported once and skips the content check.
    pub fn apply(&self, parent: &Node, sink: &mut Diagnostics) {
        let Some(value) = presence(parent, self.key, self.required, self.shape.is_scalar(), sink)
        else {
            return;
        };
        if !self.shape.matches(value) {
            sink.report(checks::must_be(value, self.key, self.shape.as_str()));
            return;
        }
        (self.check)(value, sink);
    }
}

/// Apply every rule of a section, in order.
pub fn apply_rules(rules: &[FieldRule], parent: &Node, sink: &mut Diagnostics) {
    for rule in rules {
        rule.apply(parent, sink);
    }
}

/// Resolve `field` in `parent`, reporting it if it is required but missing.
///
/// A missing key is reported at the parent's line; a key with an empty value
/// at the key's line. Present values are returned as-is: their content is
/// the caller's business.
pub fn evaluate<'a>(
    parent: &'a Node,
    field: &str,
    required: bool,
    sink: &mut Diagnostics,
) -> Option<&'a Node> {
    presence(parent, field, required, true, sink)
}

fn presence<'a>(
    parent: &'a Node,
    field: &str,
    required: bool,
    empty_is_missing: bool,
    sink: &mut Diagnostics,
) -> Option<&'a Node> {
    match parent.entry(field) {
        None => {
            if required {
                sink.push(parent.line, format!("{} is required", field));
            }
            None
        }
        Some((key, value)) if required && empty_is_missing && value.is_empty_scalar() => {
            sink.push(key.line, format!("{} is required", field));
            None
        }
        Some((_, value)) => Some(value),
    }
}

/// Content check for fields that only need the right shape.
pub fn shape_only(_node: &Node, _sink: &mut Diagnostics) {}

/// `apiVersion`/`kind` style check against an accepted set.
pub(crate) fn check_one_of(node: &Node, field: &str, allowed: &[&str], sink: &mut Diagnostics) {
    sink.record(checks::one_of(node, field, allowed));
}

/// Shared port rule for `containerPort` and `httpGet.port`.
pub(crate) fn check_port(node: &Node, field: &str, sink: &mut Diagnostics) {
    sink.record(checks::int_in_range(node, field, MIN_PORT, Some(MAX_PORT)));
}
