//! Heuristic codebase inspection used to seed draft ADRs.
//!
//! Everything here is glob matching against fixed indicator tables plus a few
//! read-only git queries. Hidden directories and dependency trees
//! (`node_modules`, `target`) are never reported.

pub mod draft;
pub mod git;
pub mod patterns;
pub mod stack;

use crate::error::{AdrError, Result};
use git::{CommitDetail, CommitSummary, GitRepo};
use patterns::{DesignPattern, FileCategory};
use serde::Serialize;
use stack::TechStack;
use std::path::{Component, Path, PathBuf};

pub use draft::generate_draft;

/// Number of architectural commits considered by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

const IGNORED_DIRS: [&str; 2] = ["node_modules", "target"];

#[derive(Debug, Clone, Default, Serialize)]
pub struct CodebaseReport {
    pub stack: TechStack,
    pub file_patterns: Vec<FileCategory>,
    pub design_patterns: Vec<DesignPattern>,
    pub history: Vec<CommitSummary>,
}

pub struct CodebaseAnalyzer {
    root: PathBuf,
    git: GitRepo,
}

impl CodebaseAnalyzer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let git = GitRepo::open(&root);
        Self { root, git }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn git(&self) -> &GitRepo {
        &self.git
    }

    pub fn detect_stack(&self) -> Result<TechStack> {
        stack::detect_stack(&self.root)
    }

    pub fn file_patterns(&self) -> Result<Vec<FileCategory>> {
        patterns::analyze_file_patterns(&self.root)
    }

    pub fn design_patterns(&self) -> Result<Vec<DesignPattern>> {
        patterns::extract_design_patterns(&self.root)
    }

    pub fn history(&self, limit: usize) -> Vec<CommitSummary> {
        self.git.history(limit)
    }

    pub fn commit(&self, rev: &str) -> Option<CommitDetail> {
        self.git.show_commit(rev)
    }

    /// Run every analysis.
    pub fn report(&self) -> Result<CodebaseReport> {
        Ok(CodebaseReport {
            stack: self.detect_stack()?,
            file_patterns: self.file_patterns()?,
            design_patterns: self.design_patterns()?,
            history: self.history(DEFAULT_HISTORY_LIMIT),
        })
    }
}

// ---------------------------------------------------------------------------
// Glob helpers
// ---------------------------------------------------------------------------

fn match_options() -> glob::MatchOptions {
    glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

/// Regular files under `root` matching `pattern`, as sorted root-relative paths.
pub(crate) fn glob_files(root: &Path, pattern: &str) -> Result<Vec<String>> {
    // glob drops leading `./` from its matches, so match against the root without it.
    let root = without_cur_dir(root);
    let full = if root.as_os_str().is_empty() {
        pattern.to_string()
    } else {
        format!(
            "{}/{}",
            glob::Pattern::escape(&root.to_string_lossy()),
            pattern
        )
    };
    let paths = glob::glob_with(&full, match_options()).map_err(|e| AdrError::Glob {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = match entry {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable path");
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        let Ok(rel) = path.strip_prefix(&root) else {
            continue;
        };
        if rel.parent().is_some_and(is_ignored_dir) {
            continue;
        }
        files.push(rel.to_string_lossy().replace('\\', "/"));
    }
    files.sort();
    Ok(files)
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn is_ignored_dir(dir: &Path) -> bool {
    dir.components().any(|c| {
        let name = c.as_os_str().to_string_lossy();
        name.starts_with('.') || IGNORED_DIRS.iter().any(|d| *d == name)
    })
}

/// Root-relative files matching any of `patterns`, de-duplicated, in pattern order.
pub(crate) fn glob_any(root: &Path, patterns: &[&str]) -> Result<Vec<String>> {
    let mut out: Vec<String> = Vec::new();
    for pattern in patterns {
        for file in glob_files(root, pattern)? {
            if !out.contains(&file) {
                out.push(file);
            }
        }
    }
    Ok(out)
}

pub(crate) fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|s| s == item) {
        list.push(item.to_string());
    }
}


#[cfg(test)]
mod tests {
    use super::testutil::touch;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn glob_files_is_relative_and_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/b.py", "");
        touch(dir.path(), "a.py", "");
        touch(dir.path(), "src/deep/c.py", "");
        let files = glob_files(dir.path(), "**/*.py").unwrap();
        assert_eq!(files, ["a.py", "src/b.py", "src/deep/c.py"]);
    }

    #[test]
    fn glob_files_skips_hidden_and_dependency_dirs() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".venv/lib/site.py", "");
        touch(dir.path(), "node_modules/pkg/index.js", "");
        touch(dir.path(), "target/debug/build.rs", "");
        touch(dir.path(), "app.js", "");
        touch(dir.path(), ".env", "");
        assert_eq!(glob_files(dir.path(), "**/.env*").unwrap(), [".env"]);
        assert!(glob_files(dir.path(), "**/*.py").unwrap().is_empty());
        assert!(glob_files(dir.path(), "**/*.rs").unwrap().is_empty());
        assert_eq!(glob_files(dir.path(), "**/*.js").unwrap(), ["app.js"]);
    }

    #[test]
    fn glob_files_finds_dotfiles_outside_hidden_dirs() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".env", "");
        touch(dir.path(), "svc/.env.local", "");
        touch(dir.path(), ".cache/.env", "");
        let files = glob_files(dir.path(), "**/.env*").unwrap();
        assert_eq!(files, [".env", "svc/.env.local"]);
    }

    #[test]
    fn without_cur_dir_strips_dot_components() {
        assert_eq!(without_cur_dir(Path::new(".")), PathBuf::new());
        assert_eq!(without_cur_dir(Path::new("./src/.")), PathBuf::from("src"));
        assert_eq!(without_cur_dir(Path::new("/tmp/x")), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn glob_files_from_dot_root() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.py", "");
        touch(dir.path(), "requirements.txt", "redis\n");
        let prev = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        let files = glob_files(Path::new("."), "**/*.py");
        let nested = glob_files(Path::new("./"), "*.txt");
        let stack = stack::detect_stack(Path::new("."));
        std::env::set_current_dir(prev).unwrap();

        assert_eq!(files.unwrap(), ["a.py"]);
        assert_eq!(nested.unwrap(), ["requirements.txt"]);
        let stack = stack.unwrap();
        assert_eq!(stack.languages, ["Python"]);
        assert_eq!(stack.databases, ["Redis"]);
    }

    #[test]
    fn glob_files_ignores_directories() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("api")).unwrap();
        assert!(glob_files(dir.path(), "**/api").unwrap().is_empty());
    }

    #[test]
    fn bad_pattern_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = glob_files(dir.path(), "[").unwrap_err();
        assert!(matches!(err, AdrError::Glob { .. }));
    }

    #[test]
    fn glob_any_dedups() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "db/schema.sql", "");
        let files = glob_any(dir.path(), &["**/*.sql", "**/db/**/*"]).unwrap();
        assert_eq!(files, ["db/schema.sql"]);
    }

    #[test]
    fn report_on_empty_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let report = CodebaseAnalyzer::new(dir.path()).report().unwrap();
        assert!(report.stack.is_empty());
        assert!(report.file_patterns.iter().all(|c| c.files.is_empty()));
        assert!(report.design_patterns.is_empty());
        assert!(report.history.is_empty());
    }
}
