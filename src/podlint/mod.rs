//! Podlint: Pod manifest validator
//!
//! Checks Kubernetes-Pod-like YAML manifests against one fixed schema and
//! reports every violation with the line it occurs on. Validation never
//! stops at the first problem: a single run lists everything that is wrong.
//!
//! # Example
//!
//! ```rust
//! use yamlvalid::podlint::lint_with_path;
//!
//! let manifest = r#"
//! apiVersion: v1
//! kind: Pod
//! metadata:
//!   name: web
//! spec:
//!   containers:
//!     - name: web
//!       image: registry.bigbrother.io/web:1.0
//!       ports:
//!         - containerPort: "80"
//!       resources: {}
//! "#;
//!
//! let result = lint_with_path(manifest, "pod.yaml");
//! assert_eq!(result.diagnostics.len(), 1);
//! assert_eq!(result.diagnostics[0].message, "containerPort must be int");
//! ```
//!
//! # Schema
//!
//! | Section   | Field                         | Rule                                          |
//! |-----------|-------------------------------|-----------------------------------------------|
//! | document  | apiVersion, kind              | required, `v1` / `Pod`                        |
//! | metadata  | name, namespace, labels       | name required; labels map scalars to scalars  |
//! | spec      | os, containers                | os `linux`/`windows`; containers non-empty    |
//! | container | name, image                   | snake_case name; `registry.bigbrother.io/x:t` |
//! | ports     | containerPort, protocol       | int 1-65535; `TCP`/`UDP`                      |
//! | probes    | httpGet.path, httpGet.port    | absolute path; int 1-65535                    |
//! | resources | limits/requests cpu, memory   | int >= 0; digits + Ki..Ei                     |

pub mod checks;
pub mod formatter;
pub mod lint;
pub mod parser;
pub mod rules;
pub mod types;

// Re-export main types and functions
pub use formatter::{OutputFormat, format_results};
pub use lint::{LintResult, lint, lint_documents, lint_file, lint_reader, lint_with_path};
pub use parser::{Node, ParseError, parse_documents};
pub use types::{Diagnostic, Diagnostics};
