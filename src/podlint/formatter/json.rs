//! JSON output formatter.

use serde_json::json;

use crate::podlint::lint::LintResult;

/// Format validation results as JSON.
pub fn format(results: &[LintResult]) -> String {
    let output: Vec<serde_json::Value> = results
        .iter()
        .map(|result| {
            json!({
                "filePath": result.file_path,
                "diagnostics": result.diagnostics,
                "documentCount": result.document_count,
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string())
}
