//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Reconcile manifest-listed files between a primary disk, a removable
/// drive and a destination directory
#[derive(Parser, Debug)]
#[command(name = "bkp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub locations: LocationArgs,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the manifest and roots live. Flags override the profile.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationArgs {
    /// Profile file (TOML, JSON or YAML) with default locations
    #[arg(long, global = true, env = "BKP_PROFILE")]
    pub profile: Option<PathBuf>,

    /// Manifest listing the managed filenames [default: Backup.parm]
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Primary root, e.g. the local disk [default: hd]
    #[arg(long, global = true)]
    pub primary: Option<PathBuf>,

    /// Secondary root, e.g. the removable drive [default: pen]
    #[arg(long, global = true)]
    pub secondary: Option<PathBuf>,

    /// Destination root receiving the copies [default: backup-destino]
    #[arg(long, global = true)]
    pub destination: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Copy entries whose primary copy is authoritative
    ///
    /// Examples:
    ///   bkp backup
    ///   bkp backup --primary /home/me/docs --secondary /media/pen
    ///   bkp backup --dry-run --json
    Backup {
        /// Preview outcomes without copying anything
        #[arg(long)]
        dry_run: bool,

        /// Skip fsync after each copy (faster, less durable)
        #[arg(long)]
        no_fsync: bool,
    },

    /// Copy entries whose secondary copy is authoritative
    Restore {
        /// Preview outcomes without copying anything
        #[arg(long)]
        dry_run: bool,

        /// Skip fsync after each copy (faster, less durable)
        #[arg(long)]
        no_fsync: bool,
    },

    /// Show the outcome of every entry without copying
    Plan {
        /// Direction to plan for: backup or restore [default: from profile, else backup]
        #[arg(short, long)]
        direction: Option<String>,
    },

    /// Write the resolved locations to a profile file
    SaveProfile {
        /// Target file; the extension selects the format
        path: PathBuf,

        /// Direction to store: backup or restore
        #[arg(short, long)]
        direction: Option<String>,
    },
}
