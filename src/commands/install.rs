// Install command for registering the plugin in an opencode config

use crate::constants;
use crate::document::ConfigDocument;
use crate::locator::ConfigLocator;
use crate::ui;
use anyhow::Context;
use log::{debug, info};
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// No project config existed; a fresh `opencode.json` was written.
    Created(PathBuf),
    AlreadyInstalled(PathBuf),
    Installed(PathBuf),
}

pub fn install(locator: &ConfigLocator, global: bool) -> anyhow::Result<InstallOutcome> {
    let Some(path) = locator.locate(global) else {
        return create_project_config(locator);
    };

    debug!("Installing into config at {}", path.display());
    let mut document = ConfigDocument::load(&path)?;

    let added = document
        .ensure_entry(constants::PLUGIN_LIST_FIELD, constants::PLUGIN_NAME)
        .with_context(|| format!("Unexpected config layout in {}", path.display()))?;

    if !added {
        ui::success(&format!(
            "{} is already installed in {}",
            constants::PLUGIN_NAME,
            path.display()
        ));
        return Ok(InstallOutcome::AlreadyInstalled(path));
    }

    document.save(&path)?;
    info!("Added '{}' to {}", constants::PLUGIN_NAME, path.display());

    ui::success(&format!(
        "Installed {} to {}",
        constants::PLUGIN_NAME,
        path.display()
    ));
    print_next_steps()?;

    Ok(InstallOutcome::Installed(path))
}

fn create_project_config(locator: &ConfigLocator) -> anyhow::Result<InstallOutcome> {
    ui::action(&format!(
        "No {} found in {}",
        constants::PROJECT_CONFIG_FILE,
        locator.project_dir().display()
    ));
    ui::dim(&format!(
        "Use --global to install globally, or create {} first.",
        constants::PROJECT_CONFIG_FILE
    ));
    ui::action(&format!(
        "Creating {} in current directory...",
        constants::PROJECT_CONFIG_FILE
    ));

    let path = locator.project_config_path();
    ConfigDocument::with_plugin(constants::PLUGIN_NAME).save(&path)?;
    info!("Created {}", path.display());

    ui::success(&format!(
        "Created {} with plugin enabled",
        constants::PROJECT_CONFIG_FILE
    ));
    Ok(InstallOutcome::Created(path))
}

fn print_next_steps() -> anyhow::Result<()> {
    let agents = json!({
        "agents": {
            "explore": { "model": constants::EXPLORE_AGENT_MODEL },
            "librarian": { "model": constants::LIBRARIAN_AGENT_MODEL },
        }
    });

    ui::plain("");
    ui::action("Zen provider will be disabled on next OpenCode startup.");
    ui::plain("");
    ui::warning("If using oh-my-opencode, also update your agent models:");
    ui::plain(&serde_json::to_string_pretty(&agents)?);
    Ok(())
}
