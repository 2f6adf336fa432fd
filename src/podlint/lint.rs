//! Main validation orchestration.
//!
//! Parses the source, walks every document with the schema rules and
//! collects the diagnostics of one file into a [`LintResult`].

use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::podlint::parser::{Node, parse_documents};
use crate::podlint::rules::document::validate_document;
use crate::podlint::types::{Diagnostic, Diagnostics};

/// Label used for content that did not come from a file.
pub const INLINE_LABEL: &str = "<inline>";
/// Label used for standard input.
pub const STDIN_LABEL: &str = "<stdin>";

/// Result of validating one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintResult {
    /// The file label diagnostics are reported against.
    pub file_path: String,
    /// Diagnostics in traversal order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of documents that were validated.
    pub document_count: usize,
}

impl LintResult {
    /// Create a new empty result.
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            diagnostics: Vec::new(),
            document_count: 0,
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Validate manifest text.
pub fn lint(content: &str) -> LintResult {
    lint_with_path(content, INLINE_LABEL)
}

/// Validate manifest text, reporting against `path`.
///
/// A syntax error yields a single `parse error` diagnostic and no
/// validation; an input without documents yields `document is empty`.
pub fn lint_with_path(content: &str, path: &str) -> LintResult {
    match parse_documents(content) {
        Ok(documents) if documents.is_empty() => {
            log::debug!("{}: no documents", path);
            let mut result = LintResult::new(path);
            result.diagnostics.push(Diagnostic::new(1, "document is empty"));
            result
        }
        Ok(documents) => lint_documents(&documents, path),
        Err(err) => {
            log::debug!("{}: parse failed: {}", path, err);
            let mut result = LintResult::new(path);
            result
                .diagnostics
                .push(Diagnostic::new(err.line(), format!("parse error: {}", err)));
            result
        }
    }
}

/// Validate already parsed documents, sharing one sink across them.
pub fn lint_documents(documents: &[Node], path: &str) -> LintResult {
    log::debug!("Validating {} document(s) in {}", documents.len(), path);

    let mut sink = Diagnostics::new();
    for document in documents {
        validate_document(document, &mut sink);
    }

    LintResult {
        file_path: path.to_string(),
        diagnostics: sink.into_vec(),
        document_count: documents.len(),
    }
}

/// Validate a manifest file.
pub fn lint_file(path: &Path) -> Result<LintResult> {
    let content = std::fs::read_to_string(path)?;
    Ok(lint_with_path(&content, &path.display().to_string()))
}

/// Validate a manifest read from `reader` (e.g. stdin).
pub fn lint_reader(mut reader: impl Read, label: &str) -> Result<LintResult> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(lint_with_path(&content, label))
}
