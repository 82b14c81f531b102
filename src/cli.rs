// CLI module for handling command-line interface

use clap::{Parser, Subcommand};

const WHY_DISABLE_ZEN: &str = "\
Why disable Zen?
  Free models (grok-code, glm-4.7-free, etc.) may collect data for training.
  See: https://opencode.ai/docs/zen/#privacy";

#[derive(Parser)]
#[command(name = "opencode-disable-zen")]
#[command(version, about = "Disable OpenCode Zen for ZDR compliance")]
#[command(after_help = WHY_DISABLE_ZEN)]
pub struct Cli {
    /// Use global config (~/.config/opencode/opencode.json)
    #[arg(short, long, global = true)]
    pub global: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add plugin to opencode.json
    Install,
    /// Remove plugin from opencode.json
    Uninstall,
}
