use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::types::Config;
use crate::error::YamlvalidError;
use crate::podlint::lint::STDIN_LABEL;
use crate::podlint::{self, LintResult, OutputFormat};

/// A single manifest source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// Everything one run produced.
#[derive(Debug, Default)]
pub struct ValidationRun {
    pub results: Vec<LintResult>,
    /// Files that could not be read or walked, with the reason.
    pub errors: Vec<(String, YamlvalidError)>,
}

impl ValidationRun {
    /// True when every input was read and produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.results.iter().all(|r| !r.has_failures())
    }

    pub fn diagnostic_count(&self) -> usize {
        self.results.iter().map(|r| r.diagnostics.len()).sum()
    }
}

/// Validate `paths` and print the report. Returns whether the run was clean.
pub fn handle_validate(
    paths: &[PathBuf],
    format: OutputFormat,
    config: &Config,
) -> crate::Result<bool> {
    let run = run_validation(paths, config);

    for (path, err) in &run.errors {
        eprintln!("{}: {}", path, err);
    }

    let report = podlint::format_results(&run.results, format);
    if format.writes_to_stderr() {
        std::io::stderr().write_all(report.as_bytes())?;
    } else {
        std::io::stdout().write_all(report.as_bytes())?;
    }

    log::info!(
        "Validated {} file(s), {} diagnostic(s)",
        run.results.len(),
        run.diagnostic_count()
    );

    Ok(run.is_clean())
}

/// Validate every input reachable from `paths`.
pub fn run_validation(paths: &[PathBuf], config: &Config) -> ValidationRun {
    let mut run = ValidationRun::default();

    for input in collect_inputs(paths, config, &mut run.errors) {
        let outcome = match &input {
            Input::Stdin => podlint::lint_reader(std::io::stdin().lock(), STDIN_LABEL)
                .map_err(|e| (STDIN_LABEL.to_string(), e)),
            Input::File(path) => {
                log::info!("Validating {}", path.display());
                podlint::lint_file(path).map_err(|e| (path.display().to_string(), e))
            }
        };
        match outcome {
            Ok(result) => run.results.push(result),
            Err(err) => run.errors.push(err),
        }
    }

    run
}

/// Expand `paths` into inputs: `-` is stdin, directories are walked for
/// `.yaml`/`.yml` files, explicit files are taken as given.
pub fn collect_inputs(
    paths: &[PathBuf],
    config: &Config,
    errors: &mut Vec<(String, YamlvalidError)>,
) -> Vec<Input> {
    let mut inputs = Vec::new();

    for path in paths {
        if path.as_os_str() == "-" {
            inputs.push(Input::Stdin);
        } else if path.is_dir() {
            walk_dir(path, config, &mut inputs, errors);
        } else if !is_excluded(path, config) {
            inputs.push(Input::File(path.clone()));
        }
    }

    inputs
}

fn walk_dir(
    dir: &Path,
    config: &Config,
    inputs: &mut Vec<Input>,
    errors: &mut Vec<(String, YamlvalidError)>,
) {
    for entry in walkdir::WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(dir).display().to_string();
                log::warn!("Failed to walk {}: {}", path, e);
                errors.push((
                    path.clone(),
                    YamlvalidError::Walk {
                        path,
                        message: e.to_string(),
                    },
                ));
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || !is_manifest(path) || is_excluded(path, config) {
            continue;
        }
        inputs.push(Input::File(path.to_path_buf()));
    }
}

fn is_manifest(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn is_excluded(path: &Path, config: &Config) -> bool {
    let excluded = config.lint.is_excluded(&path.display().to_string());
    if excluded {
        log::debug!("Skipping excluded {}", path.display());
    }
    excluded
}
