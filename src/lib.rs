//! # yamlvalid
//!
//! A command-line validator for Kubernetes Pod manifests. It checks each
//! document against a fixed schema and reports every violation together with
//! the line it was found on.
//!
//! ## Example
//!
//! ```rust
//! use yamlvalid::podlint::lint_with_path;
//!
//! let result = lint_with_path("apiVersion: v2\n", "pod.yaml");
//! for diagnostic in &result.diagnostics {
//!     println!("{}:{}", result.file_path, diagnostic);
//! }
//! assert!(result.has_failures());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod podlint;

// Re-export commonly used types and functions
pub use error::{Result, YamlvalidError};
pub use handlers::*;
pub use podlint::{Diagnostic, LintResult, OutputFormat, lint, lint_file, lint_with_path};
