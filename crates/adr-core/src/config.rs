use crate::error::{AdrError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Project settings read from `.adr.yaml` at the project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding ADR files, relative to the project root unless absolute.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Submitters used when none are given on the command line.
    #[serde(default)]
    pub submitters: Vec<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_ADR_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            submitters: Vec::new(),
        }
    }
}

impl Config {
    /// Load `.adr.yaml` from `root`; a missing file yields the defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&data).map_err(|e| AdrError::InvalidConfig {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// ADR directory for this project.
    pub fn adr_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.output_dir.as_os_str().is_empty() {
            warnings.push(ConfigWarning {
                message: "output_dir is empty; ADRs would be written to the project root"
                    .to_string(),
            });
        }

        for (i, s) in self.submitters.iter().enumerate() {
            if s.trim().is_empty() {
                warnings.push(ConfigWarning {
                    message: format!("submitters[{i}] is blank"),
                });
            }
        }

        warnings
    }
}
