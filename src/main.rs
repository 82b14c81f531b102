use clap::error::{ContextKind, ErrorKind};
use clap::{CommandFactory, Parser};
use opencode_disable_zen::cli::{Cli, Commands};
use opencode_disable_zen::{ConfigLocator, commands, ui};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let locator = ConfigLocator::from_env()?;
    match command {
        Commands::Install => {
            commands::install(&locator, cli.global)?;
        }
        Commands::Uninstall => {
            commands::uninstall(&locator, cli.global)?;
        }
    }

    Ok(())
}

fn parse_failure(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        ErrorKind::InvalidSubcommand => {
            let command = err
                .get(ContextKind::InvalidSubcommand)
                .map(|value| value.to_string())
                .unwrap_or_default();
            ui::error(&format!("Unknown command: {}", command));
            let _ = Cli::command().print_help();
            ExitCode::FAILURE
        }
        _ => {
            let _ = err.print();
            ExitCode::FAILURE
        }
    }
}
