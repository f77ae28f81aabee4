//! A directory of ADR markdown files.

use crate::collect::{collect_and_apply, SectionSource};
use crate::error::Result;
use crate::io;
use crate::paths;
use crate::template::{filename_to_title, generate_template, GeneratedAdr};
use crate::validate::{validate, ValidationIssue};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One stored document, as shown by `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdrEntry {
    pub filename: String,
    pub title: String,
    pub path: PathBuf,
    pub modified: DateTime<Local>,
}

/// Outcome of writing a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedAdr {
    pub filename: String,
    pub path: PathBuf,
    /// A file with the same name existed and was replaced.
    pub overwritten: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub entry: AdrEntry,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct AdrStore {
    dir: PathBuf,
}

impl AdrStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        paths::adr_path(&self.dir, filename)
    }

    /// Render a new ADR for `title`, optionally fill it in from `source`, and write it.
    ///
    /// An existing file with the same derived name is replaced; the result
    /// reports that through `overwritten`.
    pub fn create(
        &self,
        title: &str,
        submitters: &[String],
        source: Option<&mut dyn SectionSource>,
    ) -> Result<CreatedAdr> {
        let mut adr = generate_template(title, submitters);
        if let Some(source) = source {
            adr.body = collect_and_apply(&adr.body, source)?;
        }
        self.write(&adr)
    }

    /// Write an already rendered document into the store.
    pub fn write(&self, adr: &GeneratedAdr) -> Result<CreatedAdr> {
        io::ensure_dir(&self.dir)?;
        let path = self.path_for(&adr.filename);
        let overwritten = path.exists();
        if overwritten {
            tracing::warn!(path = %path.display(), "overwriting existing ADR");
        }
        io::atomic_write(&path, adr.body.as_bytes())?;
        tracing::debug!(path = %path.display(), bytes = adr.body.len(), "wrote ADR");
        Ok(CreatedAdr {
            filename: adr.filename.clone(),
            path,
            overwritten,
        })
    }

    /// Every `*.md` file directly inside the store, newest first.
    /// A missing directory lists as empty.
    pub fn list(&self) -> Result<Vec<AdrEntry>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for dirent in std::fs::read_dir(&self.dir)? {
            let path = dirent?.path();
            if !paths::is_adr_file(&path) {
                continue;
            }
            let meta = std::fs::metadata(&path)?;
            if !meta.is_file() {
                continue;
            }
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                tracing::debug!(path = %path.display(), "skipping non-UTF-8 filename");
                continue;
            };
            entries.push(AdrEntry {
                filename: filename.to_string(),
                title: filename_to_title(filename),
                modified: DateTime::<Local>::from(meta.modified()?),
                path: path.clone(),
            });
        }

        entries.sort_by(|a, b| {
            b.modified
                .cmp(&a.modified)
                .then_with(|| a.filename.cmp(&b.filename))
        });
        Ok(entries)
    }

    /// Validate every listed document.
    pub fn validate_all(&self) -> Result<Vec<ValidationReport>> {
        Ok(self
            .list()?
            .into_iter()
            .map(|entry| {
                let issues = validate(&entry.path);
                ValidationReport { entry, issues }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::PromptCollector;
    use crate::schema::section;
    use std::io::Cursor;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn set_mtime(path: &Path, secs_ago: u64) {
        let when = SystemTime::now() - Duration::from_secs(secs_ago);
        std::fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(when)
            .unwrap();
    }

    #[test]
    fn create_writes_into_nested_dir() {
        let dir = TempDir::new().unwrap();
        let store = AdrStore::new(dir.path().join("docs/adr"));
        let created = store.create("Use Redis For Session Cache", &[], None).unwrap();

        assert_eq!(created.filename, "use-redis-for-session-cache.md");
        assert_eq!(created.path, dir.path().join("docs/adr/use-redis-for-session-cache.md"));
        assert!(!created.overwritten);
        let text = std::fs::read_to_string(&created.path).unwrap();
        assert!(text.starts_with("# Use Redis For Session Cache\n"));
    }

    #[test]
    fn create_twice_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = AdrStore::new(dir.path());
        store.create("Use Redis", &["First".to_string()], None).unwrap();
        let second = store.create("Use Redis", &["Second".to_string()], None).unwrap();

        assert!(second.overwritten);
        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
        let text = std::fs::read_to_string(&second.path).unwrap();
        assert!(text.contains("*   Second"));
        assert!(!text.contains("*   First"));
    }

    #[test]
    fn create_with_collector_fills_sections() {
        let dir = TempDir::new().unwrap();
        let store = AdrStore::new(dir.path());
        let mut out = Vec::new();
        let mut collector =
            PromptCollector::new(Cursor::new("Latency matters.\nEND\n".to_string()), &mut out);
        let created = store
            .create("Use Redis", &[], Some(&mut collector))
            .unwrap();

        let text = std::fs::read_to_string(&created.path).unwrap();
        assert!(text.contains("### Context\nLatency matters.\n"));
        assert!(!text.contains(&section("Context").unwrap().marker().unwrap()));
        assert!(text.contains(&section("Decision").unwrap().marker().unwrap()));
    }

    #[test]
    fn list_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = AdrStore::new(dir.path().join("nope"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn list_empty_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(AdrStore::new(dir.path()).list().unwrap().is_empty());
    }

    #[test]
    fn list_sorts_newest_first_and_ignores_others() {
        let dir = TempDir::new().unwrap();
        let store = AdrStore::new(dir.path());
        let old = store.create("Old Choice", &[], None).unwrap();
        let new = store.create("New Choice", &[], None).unwrap();
        let mid = store.create("Mid Choice", &[], None).unwrap();
        set_mtime(&old.path, 3000);
        set_mtime(&mid.path, 2000);
        set_mtime(&new.path, 1000);

        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        std::fs::create_dir_all(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/deep.md"), "x").unwrap();
        std::fs::create_dir_all(dir.path().join("folder.md")).unwrap();

        let entries = store.list().unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, ["new-choice.md", "mid-choice.md", "old-choice.md"]);
        assert_eq!(entries[0].title, "New Choice");
        assert_eq!(entries[0].path, new.path);
        assert!(entries[0].modified > entries[1].modified);
    }

    #[test]
    fn validate_all_reports_per_file() {
        let dir = TempDir::new().unwrap();
        let store = AdrStore::new(dir.path());
        store.create("Draft", &[], None).unwrap();
        std::fs::write(dir.path().join("broken.md"), "# Broken\n").unwrap();

        let reports = store.validate_all().unwrap();
        assert_eq!(reports.len(), 2);
        let broken = reports.iter().find(|r| r.entry.filename == "broken.md").unwrap();
        assert_eq!(broken.issues.len(), 9);
        let draft = reports.iter().find(|r| r.entry.filename == "draft.md").unwrap();
        assert_eq!(draft.issues, vec![ValidationIssue::UnresolvedPlaceholder]);
        assert!(!draft.is_valid());
    }
}
