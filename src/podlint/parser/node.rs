//! Line-annotated document tree.
//!
//! Every node records the 1-based source line it started on. Scalars also
//! carry the primitive kind inferred from their literal syntax, which is what
//! type checks consult instead of re-parsing the text.

/// Primitive kind of a scalar, decided by the parser from its tag, quoting
/// and form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarKind {
    Null,
    Boolean,
    Integer(i64),
    Float,
    String,
}

/// A scalar value with its literal text.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    pub text: String,
    pub kind: ScalarKind,
}

/// Structural variant of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Ordered `(key, value)` pairs as they appear in the source.
    Mapping(Vec<(Node, Node)>),
    Sequence(Vec<Node>),
    Scalar(Scalar),
}

/// A node of a parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// 1-based source line.
    pub line: u32,
    pub kind: NodeKind,
}

impl Node {
    pub fn scalar(text: impl Into<String>, kind: ScalarKind, line: u32) -> Self {
        Self {
            line,
            kind: NodeKind::Scalar(Scalar {
                text: text.into(),
                kind,
            }),
        }
    }

    pub fn mapping(entries: Vec<(Node, Node)>, line: u32) -> Self {
        Self {
            line,
            kind: NodeKind::Mapping(entries),
        }
    }

    pub fn sequence(items: Vec<Node>, line: u32) -> Self {
        Self {
            line,
            kind: NodeKind::Sequence(items),
        }
    }

    /// Look up the value for `key` in a mapping node.
    ///
    /// Returns `None` when the key is missing or when this node is not a
    /// mapping at all. Matching is exact and the first occurrence wins.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entry(key).map(|(_, value)| value)
    }

    /// Like [`Node::get`], but also returns the key node.
    pub fn entry(&self, key: &str) -> Option<(&Node, &Node)> {
        let NodeKind::Mapping(entries) = &self.kind else {
            return None;
        };
        entries
            .iter()
            .find(|(k, _)| k.as_scalar().is_some_and(|s| s.text == key))
            .map(|(k, v)| (k, v))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match &self.kind {
            NodeKind::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Text of a scalar node.
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().map(|s| s.text.as_str())
    }

    pub fn as_mapping(&self) -> Option<&[(Node, Node)]> {
        match &self.kind {
            NodeKind::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, NodeKind::Scalar(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self.kind, NodeKind::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self.kind, NodeKind::Sequence(_))
    }

    /// True for a null scalar or a scalar with empty text.
    pub fn is_empty_scalar(&self) -> bool {
        self.as_scalar()
            .is_some_and(|s| s.kind == ScalarKind::Null || s.text.is_empty())
    }
}
