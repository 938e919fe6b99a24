//! Human and JSON rendering of reconciliation reports

use colored::Colorize;
use serde::Serialize;

use backup_core::{
    Direction, EntryResult, Outcome, ReconcileReport, ReconcileRequest, RunStatus, Transfer,
};

/// One entry in `--json` output: the integer code plus its readable name.
#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    file: &'a str,
    code: u8,
    outcome: &'static str,
    transfer: &'a Transfer,
}

/// `--json` view of a report. Timestamps are left out so output is stable.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    direction: Direction,
    status: RunStatus,
    dry_run: bool,
    manifest_missing: bool,
    entries: Vec<JsonEntry<'a>>,
}

impl<'a> From<&'a ReconcileReport> for JsonReport<'a> {
    fn from(report: &'a ReconcileReport) -> Self {
        Self {
            direction: report.direction,
            status: report.status(),
            dry_run: report.dry_run,
            manifest_missing: report.manifest_missing,
            entries: report
                .entries
                .iter()
                .map(|entry| JsonEntry {
                    file: &entry.file,
                    code: entry.outcome.code(),
                    outcome: entry.outcome.as_str(),
                    transfer: &entry.transfer,
                })
                .collect(),
        }
    }
}

pub fn render_json(report: &ReconcileReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::from(report))
}

/// Render the report as terminal text, one line per entry plus a summary.
pub fn render_text(request: &ReconcileRequest, report: &ReconcileReport) -> String {
    let mut lines = Vec::new();

    let source = match request.direction {
        Direction::Forward => &request.primary,
        Direction::Reverse => &request.secondary,
    };
    let mode = if report.dry_run { "Planning" } else { "Running" };
    lines.push(format!(
        "{} {} {} from {} ({} -> {})",
        "=>".blue().bold(),
        mode,
        request.direction,
        request.manifest,
        source,
        request.destination
    ));

    if report.manifest_missing {
        lines.push(format!(
            "{} Manifest not found: {}",
            "INCOMPLETE".red().bold(),
            request.manifest
        ));
        return lines.join("\n");
    }

    for entry in &report.entries {
        lines.push(entry_line(entry));
    }

    lines.push(summary_line(report));
    lines.join("\n")
}

fn entry_line(entry: &EntryResult) -> String {
    let label = format!("{:<22}", entry.outcome.as_str());
    let label = match entry.outcome {
        Outcome::CopyPrimaryToDest | Outcome::CopySecondaryToDest => label.green(),
        Outcome::DoNothing => label.dimmed(),
        Outcome::Conflict => label.yellow(),
        Outcome::Impossible | Outcome::DeleteFromDest => label.red(),
    };

    let detail = match &entry.transfer {
        Transfer::NotRequired => String::new(),
        Transfer::DryRun => format!("  {}", "(dry run)".dimmed()),
        Transfer::Copied { bytes } => format!("  copied {} bytes", bytes),
        Transfer::Failed { reason } => format!("  {} {}", "copy failed:".red().bold(), reason),
    };

    format!(
        "   {} {} {}{}",
        entry.outcome.code(),
        label,
        entry.file.cyan(),
        detail
    )
}

fn summary_line(report: &ReconcileReport) -> String {
    let status = match report.status() {
        RunStatus::Clean => "OK".green().bold(),
        RunStatus::Conflicted => "CONFLICT".yellow().bold(),
        RunStatus::Incomplete => "INCOMPLETE".red().bold(),
        RunStatus::Failed => "FAILED".red().bold(),
    };

    format!(
        "{} {} entries: {} copied, {} conflict, {} impossible, {} failed",
        status,
        report.entries.len(),
        report.copied(),
        report.count(Outcome::Conflict),
        report.count(Outcome::Impossible),
        report.failed_transfers().count()
    )
}
