pub mod analyze;
pub mod create;
pub mod list;
pub mod validate;

use adr_core::config::Config;
use adr_core::store::AdrStore;
use anyhow::Context as _;
use std::path::PathBuf;

/// Settings shared by every `adr` subcommand.
pub struct Context {
    pub root: PathBuf,
    /// `--output` override for the ADR directory.
    pub output: Option<PathBuf>,
    pub json: bool,
}

impl Context {
    pub fn config(&self) -> anyhow::Result<Config> {
        let config = Config::load(&self.root)
            .with_context(|| format!("failed to load config from {}", self.root.display()))?;
        for warning in config.validate() {
            tracing::warn!("{}", warning.message);
        }
        Ok(config)
    }

    /// The ADR directory: `--output` if given, else the configured directory under the root.
    pub fn adr_dir(&self, config: &Config) -> PathBuf {
        match &self.output {
            Some(dir) => dir.clone(),
            None => config.adr_dir(&self.root),
        }
    }

    pub fn store(&self, config: &Config) -> AdrStore {
        AdrStore::new(self.adr_dir(config))
    }
}
