use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

mod cli_bin;

use cli_bin::args::{Cli, Commands};
use cli_bin::commands::{get_command, list_command, set_command};
use dotlist::{Config, DotListError, ErrorSeverity};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let severity = severity_of(&err);
            eprintln!("Error [{}]: {:#}", severity, err);
            ExitCode::from(exit_status(severity))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Get(args) => get_command(args, &config)?,
        Commands::Set(args) => set_command(args, &config)?,
        Commands::List(args) => list_command(args, &config)?,
    }
    Ok(())
}

fn severity_of(err: &anyhow::Error) -> ErrorSeverity {
    if let Some(err) = err.downcast_ref::<DotListError>() {
        err.severity()
    } else if err.downcast_ref::<std::io::Error>().is_some() {
        ErrorSeverity::Critical
    } else {
        ErrorSeverity::High
    }
}

/// 2 stays with clap's usage errors
fn exit_status(severity: ErrorSeverity) -> u8 {
    match severity {
        ErrorSeverity::Medium => 1,
        ErrorSeverity::High => 3,
        ErrorSeverity::Critical => 4,
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    Config::from_yaml_str(&content)
        .with_context(|| format!("invalid config file {}", path.display()))
}
