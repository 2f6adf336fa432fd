//! GitHub Actions output formatter.
//!
//! Produces output in GitHub Actions workflow command format:
//! ::error file={name},line={line}::{message}

use crate::podlint::lint::LintResult;

/// Format validation results for GitHub Actions.
pub fn format(results: &[LintResult]) -> String {
    let mut output = String::new();

    for result in results {
        for diagnostic in &result.diagnostics {
            output.push_str(&format!(
                "::error file={},line={}::{}\n",
                result.file_path,
                diagnostic.line,
                escape_github(&diagnostic.message)
            ));
        }
    }

    output
}

/// Escape special characters for GitHub Actions.
fn escape_github(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
