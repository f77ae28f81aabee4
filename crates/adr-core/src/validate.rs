//! Structural checks for ADR documents.
//!
//! Checks are substring-based: a header that only appears inside a code block
//! still counts as present.

use crate::schema::{PLACEHOLDER_MARKER, SECTIONS};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    MissingFile { path: PathBuf },
    Unreadable { path: PathBuf, reason: String },
    MissingSection { header: String },
    UnresolvedPlaceholder,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingFile { path } => {
                write!(f, "File does not exist: {}", path.display())
            }
            ValidationIssue::Unreadable { path, reason } => {
                write!(f, "Could not read file {}: {reason}", path.display())
            }
            ValidationIssue::MissingSection { header } => {
                write!(f, "Missing required section: {header}")
            }
            ValidationIssue::UnresolvedPlaceholder => write!(f, "Contains unfinished TODO items"),
        }
    }
}

/// Validate the document at `path`. An empty result means the document is valid.
///
/// A missing file yields exactly one issue and no further checks.
pub fn validate(path: &Path) -> Vec<ValidationIssue> {
    if !path.exists() {
        return vec![ValidationIssue::MissingFile {
            path: path.to_path_buf(),
        }];
    }
    match std::fs::read_to_string(path) {
        Ok(text) => validate_text(&text),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "failed to read ADR");
            vec![ValidationIssue::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }]
        }
    }
}

/// Validate document text: every schema header present, no placeholder marker.
pub fn validate_text(text: &str) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = SECTIONS
        .iter()
        .map(|s| s.header())
        .filter(|header| !text.contains(header.as_str()))
        .map(|header| ValidationIssue::MissingSection { header })
        .collect();

    if text.contains(PLACEHOLDER_MARKER) {
        issues.push(ValidationIssue::UnresolvedPlaceholder);
    }
    issues
}
