// Commands invoked from the CLI

pub mod install;
pub mod uninstall;

pub use install::{InstallOutcome, install};
pub use uninstall::{UninstallOutcome, uninstall};
