//! YAML parser for Pod manifests.
//!
//! Builds a line-annotated [`Node`] tree per document from `yaml-rust2`'s
//! event stream. Scalar kinds are resolved from syntax here, so a quoted
//! `"80"` stays a string for every later check.

pub mod node;

pub use node::{Node, NodeKind, Scalar, ScalarKind};

use std::collections::HashMap;

use yaml_rust2::Yaml;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser, Tag};
use yaml_rust2::scanner::{Marker, ScanError, TScalarStyle};

/// Error type for parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{message}")]
    Syntax { line: u32, message: String },
}

impl ParseError {
    /// Best-effort source line of the error.
    pub fn line(&self) -> u32 {
        match self {
            Self::Syntax { line, .. } => *line,
        }
    }
}

impl From<ScanError> for ParseError {
    fn from(err: ScanError) -> Self {
        Self::Syntax {
            line: (err.marker().line() as u32).max(1),
            message: err.info().to_string(),
        }
    }
}

/// Handle the parser gives `!!` tags once resolved.
const CORE_TAG_PREFIX: &str = "tag:yaml.org,2002:";

/// Parse every document in `content`.
///
/// Documents without content (an empty stream, comments only, a trailing
/// `---`) are dropped, so such input yields an empty list.
pub fn parse_documents(content: &str) -> Result<Vec<Node>, ParseError> {
    let mut builder = TreeBuilder::default();
    let mut parser = Parser::new_from_str(content);
    parser.load(&mut builder, true)?;
    Ok(builder.documents)
}

/// Infer the kind of a scalar from its tag and presentation.
///
/// A core-schema tag (`!!str`, `!!int`, ...) decides the kind. Otherwise only
/// plain scalars are resolved; quoted and block scalars are strings.
fn infer_kind(text: &str, style: TScalarStyle, tag: Option<&Tag>) -> ScalarKind {
    if let Some(kind) = tag.and_then(|tag| tagged_kind(text, tag)) {
        return kind;
    }
    if style != TScalarStyle::Plain {
        return ScalarKind::String;
    }
    match text {
        "" | "~" | "null" | "Null" | "NULL" => return ScalarKind::Null,
        _ => {}
    }
    match Yaml::from_str(text) {
        Yaml::Integer(value) => ScalarKind::Integer(value),
        Yaml::Real(_) => ScalarKind::Float,
        Yaml::Boolean(_) => ScalarKind::Boolean,
        Yaml::Null => ScalarKind::Null,
        _ => ScalarKind::String,
    }
}

/// Kind forced by a core-schema tag. Unknown and local tags fall through.
fn tagged_kind(text: &str, tag: &Tag) -> Option<ScalarKind> {
    if tag.handle != CORE_TAG_PREFIX {
        return None;
    }
    let kind = match tag.suffix.as_str() {
        "str" => ScalarKind::String,
        "int" => match Yaml::from_str(text) {
            Yaml::Integer(value) => ScalarKind::Integer(value),
            _ => ScalarKind::String,
        },
        "float" => ScalarKind::Float,
        "bool" => ScalarKind::Boolean,
        "null" => ScalarKind::Null,
        _ => return None,
    };
    Some(kind)
}

/// A collection whose closing event has not been seen yet.
enum Frame {
    Sequence {
        line: u32,
        anchor: usize,
        items: Vec<Node>,
    },
    Mapping {
        line: u32,
        anchor: usize,
        entries: Vec<(Node, Node)>,
        pending_key: Option<Node>,
    },
}

#[derive(Default)]
struct TreeBuilder {
    documents: Vec<Node>,
    stack: Vec<Frame>,
    anchors: HashMap<usize, Node>,
}

impl TreeBuilder {
    /// Attach a finished node to its parent, or emit it as a document root.
    fn attach(&mut self, node: Node, anchor: usize) {
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }
        match self.stack.last_mut() {
            None => self.documents.push(node),
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping {
                entries,
                pending_key,
                ..
            }) => match pending_key.take() {
                Some(key) => entries.push((key, node)),
                None => *pending_key = Some(node),
            },
        }
    }

    fn close(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let (node, anchor) = match frame {
            Frame::Sequence {
                line,
                anchor,
                items,
            } => (Node::sequence(items, line), anchor),
            Frame::Mapping {
                line,
                anchor,
                entries,
                ..
            } => (Node::mapping(entries, line), anchor),
        };
        self.attach(node, anchor);
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, event: Event, mark: Marker) {
        let line = (mark.line() as u32).max(1);
        match event {
            Event::Scalar(text, style, anchor, tag) => {
                // The parser's stand-in for a missing value is the only
                // plain scalar with empty text.
                let implicit = text.is_empty() && style == TScalarStyle::Plain;
                if implicit && anchor == 0 && tag.is_none() && self.stack.is_empty() {
                    return;
                }
                let kind = infer_kind(&text, style, tag.as_ref());
                let line = match self.stack.last() {
                    Some(Frame::Mapping {
                        pending_key: Some(key),
                        ..
                    }) if implicit => key.line,
                    _ => line,
                };
                self.attach(Node::scalar(text, kind, line), anchor);
            }
            Event::SequenceStart(anchor, _) => self.stack.push(Frame::Sequence {
                line,
                anchor,
                items: Vec::new(),
            }),
            Event::MappingStart(anchor, _) => self.stack.push(Frame::Mapping {
                line,
                anchor,
                entries: Vec::new(),
                pending_key: None,
            }),
            Event::SequenceEnd | Event::MappingEnd => self.close(),
            Event::Alias(id) => {
                let node = self
                    .anchors
                    .get(&id)
                    .cloned()
                    .unwrap_or_else(|| Node::scalar("", ScalarKind::Null, line));
                self.attach(node, 0);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(yaml: &str) -> Node {
        let mut docs = parse_documents(yaml).unwrap();
        assert_eq!(docs.len(), 1);
        docs.remove(0)
    }

    fn kind_of(doc: &Node, key: &str) -> ScalarKind {
        doc.get(key).and_then(Node::as_scalar).unwrap().kind
    }

    #[test]
    fn test_scalar_kinds_follow_syntax() {
        let doc = parse_one(
            r#"plain_int: 80
quoted_int: "80"
single_quoted: '80'
hex: 0x1F
float: 1.5
flag: true
nothing: ~
empty:
word: nginx
"#,
        );
        assert_eq!(kind_of(&doc, "plain_int"), ScalarKind::Integer(80));
        assert_eq!(kind_of(&doc, "quoted_int"), ScalarKind::String);
        assert_eq!(kind_of(&doc, "single_quoted"), ScalarKind::String);
        assert_eq!(kind_of(&doc, "hex"), ScalarKind::Integer(31));
        assert_eq!(kind_of(&doc, "float"), ScalarKind::Float);
        assert_eq!(kind_of(&doc, "flag"), ScalarKind::Boolean);
        assert_eq!(kind_of(&doc, "nothing"), ScalarKind::Null);
        assert_eq!(kind_of(&doc, "empty"), ScalarKind::Null);
        assert_eq!(kind_of(&doc, "word"), ScalarKind::String);
    }

    #[test]
    fn test_core_tags_override_syntax() {
        let doc = parse_one(
            r#"tagged_str: !!str 80
tagged_int: !!int "80"
tagged_bad_int: !!int eighty
tagged_float: !!float 1
tagged_bool: !!bool "true"
tagged_null: !!null ""
local: !custom 80
"#,
        );
        assert_eq!(kind_of(&doc, "tagged_str"), ScalarKind::String);
        assert_eq!(kind_of(&doc, "tagged_int"), ScalarKind::Integer(80));
        assert_eq!(kind_of(&doc, "tagged_bad_int"), ScalarKind::String);
        assert_eq!(kind_of(&doc, "tagged_float"), ScalarKind::Float);
        assert_eq!(kind_of(&doc, "tagged_bool"), ScalarKind::Boolean);
        assert_eq!(kind_of(&doc, "tagged_null"), ScalarKind::Null);
        assert_eq!(kind_of(&doc, "local"), ScalarKind::Integer(80));
    }

    #[test]
    fn test_missing_value_takes_key_line() {
        let doc = parse_one("a: 1
resources:
b: 2
");
        let (key, value) = doc.entry("resources").unwrap();
        assert!(value.is_empty_scalar());
        assert_eq!(value.line, key.line);
    }

    #[test]
    fn test_scalar_lines_are_one_based() {
        let doc = parse_one(
            r#"apiVersion: v1
kind: Pod
metadata:
  name: web
"#,
        );
        assert_eq!(doc.get("apiVersion").unwrap().line, 1);
        assert_eq!(doc.get("kind").unwrap().line, 2);
        let (key, _) = doc.entry("metadata").unwrap();
        assert_eq!(key.line, 3);
        assert_eq!(doc.get("metadata").unwrap().get("name").unwrap().line, 4);
    }

    #[test]
    fn test_preserves_key_order_and_nesting() {
        let doc = parse_one(
            r#"spec:
  containers:
    - name: a
    - name: b
"#,
        );
        let containers = doc
            .get("spec")
            .and_then(|s| s.get("containers"))
            .and_then(Node::as_sequence)
            .unwrap();
        let names: Vec<&str> = containers
            .iter()
            .filter_map(|c| c.get("name").and_then(Node::as_str))
            .collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(containers[1].get("name").unwrap().line, 4);
    }

    #[test]
    fn test_multiple_documents() {
        let docs = parse_documents("kind: Pod\n---\nkind: Pod\n").unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].get("kind").unwrap().line, 3);
    }

    #[test]
    fn test_empty_input_has_no_documents() {
        assert!(parse_documents("").unwrap().is_empty());
        assert!(parse_documents("# only a comment\n").unwrap().is_empty());
        assert!(parse_documents("---\n").unwrap().is_empty());
    }

    #[test]
    fn test_documents_without_content_are_dropped() {
        let docs = parse_documents("kind: Pod\n---\n").unwrap();
        assert_eq!(docs.len(), 1);

        let docs = parse_documents("kind: Pod\n---\n# trailing comment\n---\nkind: Pod\n").unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].get("kind").unwrap().line, 5);
    }

    #[test]
    fn test_explicit_null_document_is_kept() {
        let docs = parse_documents("kind: Pod\n---\n~\n").unwrap();
        assert_eq!(docs.len(), 2);
        assert!(docs[1].is_empty_scalar());
    }

    #[test]
    fn test_alias_resolves_to_anchor() {
        let doc = parse_one(
            r#"base: &port 8080
copy: *port
"#,
        );
        assert_eq!(kind_of(&doc, "copy"), ScalarKind::Integer(8080));
    }

    #[test]
    fn test_syntax_error_reports_line() {
        let err = parse_documents("kind: Pod\nmetadata: [unclosed\n").unwrap_err();
        assert!(err.line() >= 2);
        assert!(!err.to_string().is_empty());
    }
}
