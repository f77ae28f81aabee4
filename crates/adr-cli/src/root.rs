use adr_core::paths::CONFIG_FILE;
use std::path::{Path, PathBuf};

/// Resolve the project root.
///
/// Priority:
/// 1. `--root` flag / `ADR_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from the cwd looking for `.adr.yaml`
/// 3. Walk upward from the cwd looking for `.git/`
/// 4. Fall back to the cwd
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_root_from(explicit, &cwd)
}

pub fn resolve_root_from(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    find_upward(cwd, |dir| dir.join(CONFIG_FILE).is_file())
        .or_else(|| find_upward(cwd, |dir| dir.join(".git").exists()))
        .unwrap_or_else(|| cwd.to_path_buf())
}

fn find_upward(start: &Path, found: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    start.ancestors().find(|dir| found(dir)).map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "").unwrap();
        let other = TempDir::new().unwrap();
        assert_eq!(resolve_root_from(Some(other.path()), dir.path()), other.path());
    }

    #[test]
    fn finds_config_above_cwd() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "").unwrap();
        let deep = dir.path().join("src/deep");
        std::fs::create_dir_all(&deep).unwrap();
        assert_eq!(resolve_root_from(None, &deep), dir.path());
    }

    #[test]
    fn config_beats_git() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        let pkg = dir.path().join("services/api");
        std::fs::create_dir_all(&pkg).unwrap();
        std::fs::write(pkg.join(CONFIG_FILE), "").unwrap();
        let deep = pkg.join("src");
        std::fs::create_dir_all(&deep).unwrap();
        assert_eq!(resolve_root_from(None, &deep), pkg);
    }

    #[test]
    fn finds_git_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        let deep = dir.path().join("a/b");
        std::fs::create_dir_all(&deep).unwrap();
        assert_eq!(resolve_root_from(None, &deep), dir.path());
    }
}
