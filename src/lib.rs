//! Register the `opencode-disable-zen` plugin in OpenCode config files and
//! disable the Zen provider from inside a running host.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod document;
pub mod hook;
pub mod locator;
pub mod marker;
pub mod ui;

pub use document::{ConfigDocument, DocumentError};
pub use hook::DisableZenHook;
pub use locator::ConfigLocator;
