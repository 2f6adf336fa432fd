//! Output formatters for validation results.
//!
//! - Plain - `<file>:<line> <message>`, one diagnostic per line (default)
//! - JSON - Machine-readable JSON output
//! - GitHub - GitHub Actions annotations

pub mod github;
pub mod json;

use serde::{Deserialize, Serialize};

use crate::podlint::lint::LintResult;

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    #[serde(alias = "github-actions")]
    GitHub,
}

impl OutputFormat {
    /// Whether the output belongs on stderr rather than stdout.
    pub fn writes_to_stderr(&self) -> bool {
        matches!(self, Self::Plain)
    }
}

/// Format validation results according to the specified format.
pub fn format_results(results: &[LintResult], format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => format_plain(results),
        OutputFormat::Json => json::format(results),
        OutputFormat::GitHub => github::format(results),
    }
}

fn format_plain(results: &[LintResult]) -> String {
    let mut output = String::new();

    for result in results {
        for diagnostic in &result.diagnostics {
            output.push_str(&format!(
                "{}:{} {}\n",
                result.file_path, diagnostic.line, diagnostic.message
            ));
        }
    }

    output
}
