// Locator module for resolving which opencode config file applies

use crate::config;
use crate::constants;
use std::path::{Path, PathBuf};

/// Resolves project-local and global config paths.
///
/// Nothing is cached: every call checks the filesystem again.
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    project_dir: PathBuf,
    home_dir: PathBuf,
}

impl ConfigLocator {
    pub fn new(project_dir: impl Into<PathBuf>, home_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            home_dir: home_dir.into(),
        }
    }

    /// Locator for the current process (`ODZ_PROJECT_DIR`/`ODZ_HOME` honored).
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(config::project_dir()?, config::home_dir()?))
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// `<project>/opencode.json`, the file created when a project has none.
    pub fn project_config_path(&self) -> PathBuf {
        self.project_dir.join(constants::PROJECT_CONFIG_FILE)
    }

    /// `<home>/.config/opencode/opencode.json`, whether or not it exists.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .join(constants::GLOBAL_CONFIG_DIR)
            .join(constants::GLOBAL_CONFIG_FILE)
    }

    /// First existing project config: `opencode.json`, then `opencode.jsonc`.
    pub fn find_project_config(&self) -> Option<PathBuf> {
        [
            constants::PROJECT_CONFIG_FILE,
            constants::PROJECT_CONFIG_JSONC_FILE,
        ]
        .iter()
        .map(|name| self.project_dir.join(name))
        .find(|path| path.exists())
    }

    /// The global path when `global` is set, otherwise the first existing
    /// project config, if any.
    pub fn locate(&self, global: bool) -> Option<PathBuf> {
        if global {
            Some(self.global_config_path())
        } else {
            self.find_project_config()
        }
    }
}
