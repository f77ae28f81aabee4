use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const DEFAULT_ADR_DIR: &str = "docs/adr";
pub const CONFIG_FILE: &str = ".adr.yaml";
pub const ADR_EXTENSION: &str = "md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn adr_path(dir: &Path, filename: &str) -> PathBuf {
    dir.join(filename)
}

/// True for paths ending in `.md`; the comparison is exact, `.MD` does not count.
pub fn is_adr_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(ADR_EXTENSION)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(config_path(root), PathBuf::from("/tmp/proj/.adr.yaml"));
        assert_eq!(
            adr_path(&root.join(DEFAULT_ADR_DIR), "use-redis.md"),
            PathBuf::from("/tmp/proj/docs/adr/use-redis.md")
        );
    }

    #[test]
    fn adr_file_detection() {
        assert!(is_adr_file(Path::new("docs/adr/use-redis.md")));
        assert!(!is_adr_file(Path::new("docs/adr/notes.txt")));
        assert!(!is_adr_file(Path::new("docs/adr/README")));
    }
}
