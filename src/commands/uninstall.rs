// Uninstall command for removing the plugin from an opencode config

use crate::constants;
use crate::document::ConfigDocument;
use crate::locator::ConfigLocator;
use crate::ui;
use anyhow::Context;
use log::{debug, info};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UninstallOutcome {
    /// No project config was found (local mode only).
    NoConfig,
    /// The resolved path does not exist on disk.
    MissingAt(PathBuf),
    NotInstalled(PathBuf),
    Removed(PathBuf),
}

pub fn uninstall(locator: &ConfigLocator, global: bool) -> anyhow::Result<UninstallOutcome> {
    let Some(path) = locator.locate(global) else {
        ui::warning(&format!("No {} found.", constants::PROJECT_CONFIG_FILE));
        return Ok(UninstallOutcome::NoConfig);
    };

    // The global path is returned whether or not it exists.
    if !path.exists() {
        ui::warning(&format!("Config not found: {}", path.display()));
        return Ok(UninstallOutcome::MissingAt(path));
    }

    debug!("Uninstalling from config at {}", path.display());
    let mut document = ConfigDocument::load(&path)?;

    let removed = document
        .remove_entry(constants::PLUGIN_LIST_FIELD, constants::PLUGIN_NAME)
        .with_context(|| format!("Unexpected config layout in {}", path.display()))?;

    if !removed {
        ui::action(&format!(
            "{} is not installed in {}",
            constants::PLUGIN_NAME,
            path.display()
        ));
        return Ok(UninstallOutcome::NotInstalled(path));
    }

    document.save(&path)?;
    info!("Removed '{}' from {}", constants::PLUGIN_NAME, path.display());

    ui::success(&format!(
        "Removed {} from {}",
        constants::PLUGIN_NAME,
        path.display()
    ));
    Ok(UninstallOutcome::Removed(path))
}
