//! VB-011: Task catalog loading and validation.
//!
//! Parses tasks.yaml and validates structural constraints:
//! - Task names are unique and safe as build-target names
//! - Tool identifiers are safe as make variable names
//! - Input paths are relative and free of make metacharacters
//! - Free-form fragments stay on one line

use super::codegen;
use super::types::*;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A validated catalog together with the digest of its source text.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: TaskCatalog,
    pub digest: String,
}

/// Read, parse, and validate a catalog. Any problem is fatal.
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = load_catalog_str(&content)?;
    debug!(
        path = %path.display(),
        tasks = loaded.catalog.tasks.len(),
        digest = %loaded.digest,
        "loaded task catalog"
    );
    Ok(loaded)
}

/// Parse and validate catalog text.
pub fn load_catalog_str(yaml: &str) -> Result<LoadedCatalog> {
    let catalog = parse_catalog(yaml)?;
    let errors = validate_catalog(&catalog);
    if !errors.is_empty() {
        return Err(Error::Invalid {
            count: errors.len(),
            messages: errors.into_iter().map(|e| e.message).collect(),
        });
    }
    Ok(LoadedCatalog {
        catalog,
        digest: catalog_digest(yaml),
    })
}

/// Parse a catalog from a string.
pub fn parse_catalog(yaml: &str) -> Result<TaskCatalog> {
    Ok(serde_yaml_ng::from_str(yaml)?)
}

/// BLAKE3 of the catalog text. Returns `"blake3:{hex}"`.
pub fn catalog_digest(yaml: &str) -> String {
    format!("blake3:{}", blake3::hash(yaml.as_bytes()).to_hex())
}

/// Validate a parsed catalog. Returns a list of errors (empty = valid).
pub fn validate_catalog(catalog: &TaskCatalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (i, task) in catalog.tasks.iter().enumerate() {
        let pos = i + 1;

        // Name
        if task.name.is_empty() {
            errors.push(err(format!("task #{} has an empty name", pos)));
        } else if !task.name.chars().all(is_target_char) {
            errors.push(err(format!(
                "task '{}' name must only contain letters, digits, '_', '.', '+' or '-'",
                task.name
            )));
        }
        if !task.name.is_empty() {
            match seen.get(task.name.as_str()) {
                Some(first) => errors.push(err(format!(
                    "duplicate task name '{}' (tasks #{} and #{})",
                    task.name, first, pos
                ))),
                None => {
                    seen.insert(task.name.as_str(), pos);
                }
            }
        }

        // Tool
        if task.tool.is_empty() {
            errors.push(err(format!("task '{}' has no tool", task.name)));
        } else if !task.tool.chars().all(is_identifier_char) {
            errors.push(err(format!(
                "task '{}' tool '{}' is not a valid identifier",
                task.name, task.tool
            )));
        }

        // Input
        if task.input.is_empty() {
            errors.push(err(format!("task '{}' has no input", task.name)));
        } else if task.input.starts_with('/') {
            errors.push(err(format!(
                "task '{}' input '{}' must be relative to the data directory",
                task.name, task.input
            )));
        } else if task.input.chars().any(is_unsafe_path_char) {
            errors.push(err(format!(
                "task '{}' input '{}' contains whitespace or a make metacharacter",
                task.name, task.input
            )));
        }

        // Free-form fragments
        for (field, value) in [("args", &task.args), ("command", &task.command)] {
            if value.as_deref().is_some_and(|v| v.contains('\n')) {
                errors.push(err(format!(
                    "task '{}' {} must be a single line",
                    task.name, field
                )));
            }
        }

        // vcflib programs become variable names
        if codegen::third_party_family(&task.tool) == Some(ToolFamily::Vcflib) {
            let program = crate::tools::vcflib::program_policy(task);
            if !program.chars().all(is_identifier_char) {
                errors.push(err(format!(
                    "task '{}' vcflib program '{}' is not a valid identifier",
                    task.name, program
                )));
            }
        }
    }

    let layout = &catalog.layout;
    for (field, value) in [
        ("root_dir", &layout.root_dir),
        ("data_dir", &layout.data_dir),
        ("results_dir", &layout.results_dir),
        ("bench_scripts", &layout.bench_scripts),
        ("bin_dir", &layout.bin_dir),
    ] {
        if value.trim().is_empty() || value.contains('\n') {
            errors.push(err(format!(
                "layout.{} must be a non-empty single line",
                field
            )));
        }
    }

    errors
}

fn err(message: String) -> ValidationError {
    ValidationError { message }
}

fn is_target_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-')
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

fn is_unsafe_path_char(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ':' | '#' | '$' | '%' | ';' | '=' | '(' | ')' | '*' | '?' | '[' | ']'
        )
}
