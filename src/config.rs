// Config module for resolving the directories the tool works against

use anyhow::Context;
use std::path::PathBuf;

/// Environment variable overriding the project directory (defaults to the cwd).
pub const PROJECT_DIR_ENV: &str = "ODZ_PROJECT_DIR";

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "ODZ_HOME";

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub fn project_dir() -> anyhow::Result<PathBuf> {
    match env_dir(PROJECT_DIR_ENV) {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}

pub fn home_dir() -> anyhow::Result<PathBuf> {
    env_dir(HOME_ENV)
        .or_else(dirs::home_dir)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Could not determine home directory. Set {} to override.",
                HOME_ENV
            )
        })
}
