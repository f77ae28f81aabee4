//! Read-only git queries.
//!
//! When `git` is not on `PATH`, or the directory is not inside a work tree,
//! the repository is marked unavailable and every query returns an empty result.

use crate::error::{AdrError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Message keywords that mark a commit as architecturally relevant.
pub const ARCHITECTURE_KEYWORDS: [&str; 4] = ["architecture", "design", "decision", "refactor"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitSummary {
    pub hash: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitDetail {
    pub hash: String,
    pub message: String,
    pub author: String,
    pub date: String,
    pub files_changed: Vec<String>,
    pub is_architectural: bool,
}

pub fn is_architectural(message: &str) -> bool {
    let lower = message.to_lowercase();
    ARCHITECTURE_KEYWORDS.iter().any(|k| lower.contains(k))
}

#[derive(Debug, Clone)]
pub struct GitRepo {
    path: PathBuf,
    available: bool,
}

impl GitRepo {
    /// Probe for a usable git binary and work tree at `path`.
    pub fn open(path: &Path) -> Self {
        let mut repo = Self {
            path: path.to_path_buf(),
            available: false,
        };
        if which::which("git").is_err() {
            tracing::warn!("git not found on PATH; history analysis disabled");
            return repo;
        }
        match repo.run(&["rev-parse", "--git-dir"]) {
            Ok(_) => repo.available = true,
            Err(e) => tracing::debug!(path = %path.display(), error = %e, "not a git repository"),
        }
        repo
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(?args, cwd = %self.path.display(), "git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .map_err(|e| AdrError::Git {
                command: args.first().unwrap_or(&"").to_string(),
                reason: e.to_string(),
            })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AdrError::Git {
                command: args.first().unwrap_or(&"").to_string(),
                reason: stderr.trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Up to `limit` commits whose message mentions one of the
    /// [`ARCHITECTURE_KEYWORDS`] (case-insensitive), newest first.
    pub fn history(&self, limit: usize) -> Vec<CommitSummary> {
        if !self.available || limit == 0 {
            return Vec::new();
        }
        let limit = limit.to_string();
        let mut args = vec!["log", "--oneline", "--no-color", "-i", "-n", limit.as_str()];
        let greps: Vec<String> = ARCHITECTURE_KEYWORDS
            .iter()
            .map(|k| format!("--grep={k}"))
            .collect();
        args.extend(greps.iter().map(String::as_str));

        match self.run(&args) {
            Ok(out) => parse_oneline(&out),
            Err(e) => {
                tracing::debug!(error = %e, "git log failed");
                Vec::new()
            }
        }
    }

    /// Details for one commit, or `None` when it cannot be resolved.
    pub fn show_commit(&self, rev: &str) -> Option<CommitDetail> {
        if !self.available || rev.is_empty() || rev.starts_with('-') {
            return None;
        }
        let out = self
            .run(&[
                "show",
                "--no-color",
                "--name-only",
                "--format=%H%n%s%n%an%n%ad",
                rev,
            ])
            .map_err(|e| tracing::debug!(rev, error = %e, "git show failed"))
            .ok()?;
        parse_show(&out)
    }
}

fn parse_oneline(out: &str) -> Vec<CommitSummary> {
    out.lines()
        .filter_map(|line| {
            let (hash, message) = line.split_once(' ')?;
            Some(CommitSummary {
                hash: hash.to_string(),
                message: message.to_string(),
            })
        })
        .collect()
}

fn parse_show(out: &str) -> Option<CommitDetail> {
    let mut lines = out.lines();
    let hash = lines.next()?.trim().to_string();
    if hash.is_empty() {
        return None;
    }
    let message = lines.next().unwrap_or_default().to_string();
    let author = lines.next().unwrap_or("Unknown").to_string();
    let date = lines.next().unwrap_or("Unknown").to_string();
    let files_changed = lines
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    Some(CommitDetail {
        is_architectural: is_architectural(&message),
        hash,
        message,
        author,
        date,
        files_changed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args([
                "-c",
                "user.name=Ada",
                "-c",
                "user.email=ada@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap()
            .status;
        assert!(status.success(), "git {args:?} failed");
    }

    fn repo_with_commits() -> Option<TempDir> {
        which::which("git").ok()?;
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init", "-q"]);
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        git(dir.path(), &["add", "a.txt"]);
        git(dir.path(), &["commit", "-q", "-m", "Refactor storage layer"]);
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        git(dir.path(), &["add", "b.txt"]);
        git(dir.path(), &["commit", "-q", "-m", "Fix typo"]);
        Some(dir)
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert!(is_architectural("Redesign the cache"));
        assert!(is_architectural("ARCHITECTURE: split services"));
        assert!(!is_architectural("Bump version"));
    }

    #[test]
    fn parse_oneline_splits_hash() {
        let commits = parse_oneline("abc1234 Refactor store\ndef5678 Design API\n\nbroken\n");
        assert_eq!(
            commits,
            vec![
                CommitSummary {
                    hash: "abc1234".into(),
                    message: "Refactor store".into()
                },
                CommitSummary {
                    hash: "def5678".into(),
                    message: "Design API".into()
                },
            ]
        );
    }

    #[test]
    fn parse_show_reads_files() {
        let out = "deadbeef\nDecision: adopt redis\nAda\nMon Jan 1 10:00:00 2024 +0000\n\nsrc/cache.rs\nCargo.toml\n";
        let detail = parse_show(out).unwrap();
        assert_eq!(detail.hash, "deadbeef");
        assert_eq!(detail.message, "Decision: adopt redis");
        assert_eq!(detail.author, "Ada");
        assert_eq!(detail.files_changed, ["src/cache.rs", "Cargo.toml"]);
        assert!(detail.is_architectural);
    }

    #[test]
    fn parse_show_empty_is_none() {
        assert!(parse_show("").is_none());
    }

    #[test]
    fn non_repository_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let repo = GitRepo::open(dir.path());
        assert!(!repo.is_available());
        assert!(repo.history(10).is_empty());
        assert!(repo.show_commit("HEAD").is_none());
    }

    #[test]
    fn history_filters_architectural_commits() {
        let Some(dir) = repo_with_commits() else {
            return;
        };
        let repo = GitRepo::open(dir.path());
        assert!(repo.is_available());
        let history = repo.history(50);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].message, "Refactor storage layer");
    }

    #[test]
    fn show_commit_lists_changed_files() {
        let Some(dir) = repo_with_commits() else {
            return;
        };
        let repo = GitRepo::open(dir.path());
        let detail = repo.show_commit("HEAD").unwrap();
        assert_eq!(detail.message, "Fix typo");
        assert_eq!(detail.author, "Ada");
        assert_eq!(detail.files_changed, ["b.txt"]);
        assert!(!detail.is_architectural);
        assert!(repo.show_commit("no-such-rev").is_none());
        assert!(repo.show_commit("--help").is_none());
    }
}
