//! Scalar checkers.
//!
//! Standalone predicates over a single value node. Each returns the
//! diagnostic to report on failure, attributed to the value's line; the
//! caller decides where it goes.

use std::sync::LazyLock;

use regex::Regex;

use crate::podlint::parser::{Node, ScalarKind};
use crate::podlint::types::Diagnostic;

// ============================================================================
// Patterns
// ============================================================================

/// Lowercase alphanumerics separated by single underscores (e.g. "web_app_2").
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(_[a-z0-9]+)*$").unwrap());

static BINARY_QUANTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(Ki|Mi|Gi|Ti|Pi|Ei)$").unwrap());

static DECIMAL_QUANTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(K|M|G|T|P|E)$").unwrap());

static ANY_QUANTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(Ki|Mi|Gi|Ti|Pi|Ei|K|M|G|T|P|E)$").unwrap());

/// Unit vocabulary accepted by [`quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSet {
    /// Ki, Mi, Gi, Ti, Pi, Ei
    Binary,
    /// K, M, G, T, P, E
    Decimal,
    /// Either of the above.
    Any,
}

impl UnitSet {
    fn regex(&self) -> &'static Regex {
        match self {
            Self::Binary => &BINARY_QUANTITY_REGEX,
            Self::Decimal => &DECIMAL_QUANTITY_REGEX,
            Self::Any => &ANY_QUANTITY_REGEX,
        }
    }
}

// ============================================================================
// Message helpers
// ============================================================================

pub fn must_be(node: &Node, field: &str, what: &str) -> Diagnostic {
    Diagnostic::new(node.line, format!("{} must be {}", field, what))
}

pub fn invalid_format(node: &Node, field: &str, text: &str) -> Diagnostic {
    Diagnostic::new(node.line, format!("{} has invalid format '{}'", field, text))
}

pub fn unsupported_value(node: &Node, field: &str, text: &str) -> Diagnostic {
    Diagnostic::new(
        node.line,
        format!("{} has unsupported value '{}'", field, text),
    )
}

/// Text of a scalar, or a "must be string" diagnostic.
pub fn string<'a>(node: &'a Node, field: &str) -> Result<&'a str, Diagnostic> {
    node.as_str().ok_or_else(|| must_be(node, field, "string"))
}

// ============================================================================
// Checkers
// ============================================================================

/// Integer-kind scalar within `min..=max` (`max: None` means unbounded).
///
/// A quoted number is not an integer. The range is only checked once the
/// kind is right.
pub fn int_in_range(
    node: &Node,
    field: &str,
    min: i64,
    max: Option<i64>,
) -> Result<i64, Diagnostic> {
    let value = match node.as_scalar().map(|s| s.kind) {
        Some(ScalarKind::Integer(value)) => value,
        _ => return Err(must_be(node, field, "int")),
    };
    if value < min || max.is_some_and(|max| value > max) {
        return Err(Diagnostic::new(
            node.line,
            format!("{} value out of range", field),
        ));
    }
    Ok(value)
}

/// Digits followed by exactly one unit from `units` (e.g. "512Mi").
pub fn quantity<'a>(node: &'a Node, field: &str, units: UnitSet) -> Result<&'a str, Diagnostic> {
    let text = string(node, field)?;
    if units.regex().is_match(text) {
        Ok(text)
    } else {
        Err(invalid_format(node, field, text))
    }
}

/// `prefix` followed by `name:tag`, both sides of the colon non-empty.
pub fn tagged_reference<'a>(
    node: &'a Node,
    field: &str,
    prefix: &str,
) -> Result<&'a str, Diagnostic> {
    let text = string(node, field)?;
    let valid = text.strip_prefix(prefix).is_some_and(has_inner_colon);
    if valid {
        Ok(text)
    } else {
        Err(invalid_format(node, field, text))
    }
}

fn has_inner_colon(rest: &str) -> bool {
    rest.char_indices()
        .any(|(idx, c)| c == ':' && idx > 0 && idx + 1 < rest.len())
}

/// Lowercase identifier segmented by single underscores.
pub fn identifier<'a>(node: &'a Node, field: &str) -> Result<&'a str, Diagnostic> {
    let text = string(node, field)?;
    if IDENTIFIER_REGEX.is_match(text) {
        Ok(text)
    } else {
        Err(invalid_format(node, field, text))
    }
}

/// Exact, case-sensitive membership in `allowed`.
pub fn one_of<'a>(node: &'a Node, field: &str, allowed: &[&str]) -> Result<&'a str, Diagnostic> {
    let text = string(node, field)?;
    if allowed.contains(&text) {
        Ok(text)
    } else {
        Err(unsupported_value(node, field, text))
    }
}

/// Non-empty path starting with `/`.
pub fn absolute_path<'a>(node: &'a Node, field: &str) -> Result<&'a str, Diagnostic> {
    let text = string(node, field)?;
    if text.starts_with('/') {
        Ok(text)
    } else {
        Err(invalid_format(node, field, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i64) -> Node {
        Node::scalar(value.to_string(), ScalarKind::Integer(value), 3)
    }

    fn text(value: &str) -> Node {
        Node::scalar(value, ScalarKind::String, 3)
    }

    #[test]
    fn test_int_in_range_bounds() {
        assert_eq!(int_in_range(&int(1), "port", 1, Some(65535)), Ok(1));
        assert_eq!(int_in_range(&int(65535), "port", 1, Some(65535)), Ok(65535));

        let low = int_in_range(&int(0), "port", 1, Some(65535)).unwrap_err();
        assert_eq!(low, Diagnostic::new(3, "port value out of range"));
        let high = int_in_range(&int(65536), "port", 1, Some(65535)).unwrap_err();
        assert_eq!(high.message, "port value out of range");
    }

    #[test]
    fn test_int_in_range_rejects_quoted_number() {
        let err = int_in_range(&text("80"), "containerPort", 1, Some(65535)).unwrap_err();
        assert_eq!(err.message, "containerPort must be int");
    }

    #[test]
    fn test_int_in_range_rejects_non_scalar() {
        let err = int_in_range(&Node::mapping(Vec::new(), 9), "cpu", 0, None).unwrap_err();
        assert_eq!(err, Diagnostic::new(9, "cpu must be int"));
    }

    #[test]
    fn test_int_in_range_unbounded() {
        assert!(int_in_range(&int(1_000_000), "cpu", 0, None).is_ok());
        assert!(int_in_range(&int(-1), "cpu", 0, None).is_err());
    }

    #[test]
    fn test_quantity_units() {
        assert!(quantity(&text("512Mi"), "memory", UnitSet::Binary).is_ok());
        assert!(quantity(&text("1Ei"), "memory", UnitSet::Binary).is_ok());
        assert!(quantity(&text("512"), "memory", UnitSet::Binary).is_err());
        assert!(quantity(&text("512mi"), "memory", UnitSet::Binary).is_err());
        assert!(quantity(&text("512M"), "memory", UnitSet::Binary).is_err());
        assert!(quantity(&text("1.5Gi"), "memory", UnitSet::Binary).is_err());
        assert!(quantity(&text("-1Gi"), "memory", UnitSet::Binary).is_err());

        assert!(quantity(&text("512M"), "memory", UnitSet::Decimal).is_ok());
        assert!(quantity(&text("512Mi"), "memory", UnitSet::Decimal).is_err());
        assert!(quantity(&text("512M"), "memory", UnitSet::Any).is_ok());
        assert!(quantity(&text("512Mi"), "memory", UnitSet::Any).is_ok());
    }

    #[test]
    fn test_quantity_message() {
        let err = quantity(&text("512"), "memory", UnitSet::Binary).unwrap_err();
        assert_eq!(err.message, "memory has invalid format '512'");
    }

    #[test]
    fn test_tagged_reference() {
        let prefix = "registry.bigbrother.io/";
        assert!(tagged_reference(&text("registry.bigbrother.io/app:latest"), "image", prefix).is_ok());
        assert!(tagged_reference(&text("registry.bigbrother.io/team/app:1.2"), "image", prefix).is_ok());
        assert!(tagged_reference(&text("registry.bigbrother.io/app"), "image", prefix).is_err());
        assert!(tagged_reference(&text("registry.bigbrother.io/app:"), "image", prefix).is_err());
        assert!(tagged_reference(&text("registry.bigbrother.io/:latest"), "image", prefix).is_err());
        assert!(tagged_reference(&text("other.io/app:latest"), "image", prefix).is_err());
        assert!(tagged_reference(&text("registry.bigbrother.io/"), "image", prefix).is_err());
    }

    #[test]
    fn test_identifier() {
        for ok in ["web", "web_app", "a1_b2_c3", "123"] {
            assert!(identifier(&text(ok), "name").is_ok(), "{ok} should pass");
        }
        for bad in ["Web", "web-app", "_web", "web_", "web__app", ""] {
            assert!(identifier(&text(bad), "name").is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn test_one_of_is_case_sensitive() {
        assert!(one_of(&text("TCP"), "protocol", &["TCP", "UDP"]).is_ok());
        let err = one_of(&text("tcp"), "protocol", &["TCP", "UDP"]).unwrap_err();
        assert_eq!(err.message, "protocol has unsupported value 'tcp'");
    }

    #[test]
    fn test_absolute_path() {
        assert!(absolute_path(&text("/healthz"), "path").is_ok());
        assert!(absolute_path(&text("healthz"), "path").is_err());
        assert!(absolute_path(&text(""), "path").is_err());
    }

    #[test]
    fn test_text_checkers_reject_collections() {
        let seq = Node::sequence(Vec::new(), 4);
        assert_eq!(
            identifier(&seq, "name").unwrap_err(),
            Diagnostic::new(4, "name must be string")
        );
    }
}
