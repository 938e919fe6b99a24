//! Backup reconciler CLI
//!
//! Command-line front end for manifest-driven backup and restore.

mod cli;
mod commands;
mod error;
mod logging;
mod render;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use backup_core::{Direction, RunStatus};
use backup_fs::RobustnessConfig;
use cli::{Cli, Commands};
use error::Result;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command {
        Some(cmd) => execute_command(cmd, &cli.locations, cli.json),
        None => {
            println!("{} Manifest-driven backup reconciler", "bkp".green().bold());
            println!();
            println!("Run {} for available commands.", "bkp --help".cyan());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn execute_command(cmd: Commands, locations: &cli::LocationArgs, json: bool) -> Result<ExitCode> {
    let status = match cmd {
        Commands::Backup { dry_run, no_fsync } => commands::run_reconcile(
            locations,
            Direction::Forward,
            dry_run,
            robustness(no_fsync),
            json,
        )?,
        Commands::Restore { dry_run, no_fsync } => commands::run_reconcile(
            locations,
            Direction::Reverse,
            dry_run,
            robustness(no_fsync),
            json,
        )?,
        Commands::Plan { direction } => {
            let direction = commands::parse_direction(direction.as_deref())?;
            commands::run_plan(locations, direction, json)?
        }
        Commands::SaveProfile { path, direction } => {
            let direction = commands::parse_direction(direction.as_deref())?;
            commands::run_save_profile(locations, &path, direction)?;
            RunStatus::Clean
        }
    };

    Ok(exit_code(status))
}

fn robustness(no_fsync: bool) -> RobustnessConfig {
    RobustnessConfig {
        enable_fsync: !no_fsync,
    }
}

/// 0 when clean, 1 when a copy failed, 2 when entries need attention.
fn exit_code(status: RunStatus) -> ExitCode {
    match status {
        RunStatus::Clean => ExitCode::SUCCESS,
        RunStatus::Failed => ExitCode::from(1),
        RunStatus::Conflicted | RunStatus::Incomplete => ExitCode::from(2),
    }
}
