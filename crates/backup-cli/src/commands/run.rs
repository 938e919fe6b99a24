//! Backup, restore and plan command implementations

use backup_core::{Direction, FsCopier, FsOracle, Reconciler, RunStatus};
use backup_fs::RobustnessConfig;

use crate::cli::LocationArgs;
use crate::error::Result;
use crate::render::{render_json, render_text};

use super::resolve_profile;

/// Run a reconciliation in a fixed direction and print the report.
///
/// Returns the overall status so `main` can pick the exit code.
pub fn run_reconcile(
    locations: &LocationArgs,
    direction: Direction,
    dry_run: bool,
    robustness: RobustnessConfig,
    json: bool,
) -> Result<RunStatus> {
    let request = resolve_profile(locations, Some(direction))?.into_request();
    let reconciler = Reconciler::with_parts(FsOracle, FsCopier::new(robustness));

    let report = if dry_run {
        reconciler.plan(&request)?
    } else {
        reconciler.run(&request)?
    };

    if json {
        println!("{}", render_json(&report)?);
    } else {
        println!("{}", render_text(&request, &report));
    }

    Ok(report.status())
}

/// Show what a run would do. The direction comes from the argument, then
/// the profile, then defaults to backup.
pub fn run_plan(
    locations: &LocationArgs,
    direction: Option<Direction>,
    json: bool,
) -> Result<RunStatus> {
    let request = resolve_profile(locations, direction)?.into_request();
    let report = Reconciler::new().plan(&request)?;

    if json {
        println!("{}", render_json(&report)?);
    } else {
        println!("{}", render_text(&request, &report));
    }

    Ok(report.status())
}
