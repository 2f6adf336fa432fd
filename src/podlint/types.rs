//! Core types for the Pod manifest validator.
//!
//! - `Diagnostic` - a single `(line, message)` violation
//! - `Diagnostics` - the ordered sink every validator appends to

use std::fmt;

use serde::Serialize;

/// A validation failure tied to a source line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    /// The line number where the violation occurred (1-indexed).
    pub line: u32,
    /// A human-readable message describing the violation.
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.line, self.message)
    }
}

/// Append-only list of diagnostics in the order they were reported.
///
/// Entries are never deduplicated or sorted. The sink is single-writer; it
/// has no internal locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation at `line`.
    pub fn push(&mut self, line: u32, message: impl Into<String>) {
        self.entries.push(Diagnostic::new(line, message));
    }

    /// Record a prepared diagnostic, e.g. one returned by a checker.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Record the error side of a checker result, if any.
    pub fn record<T>(&mut self, result: Result<T, Diagnostic>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(diagnostic) => {
                self.report(diagnostic);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
