use crate::backup::DEFAULT_MAX_BACKUPS;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Strip file specs from Python requirements and update them with rotating backups
#[derive(Parser, Debug, Clone)]
#[command(name = "rqm")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Freeze the environment, strip file specs, and replace the requirements file after confirmation
    Update(UpdateArgs),
    /// Remove old backups, keeping the most recent ones
    Cleanup(CleanupArgs),
    /// Compare two requirements files and report discrepancies
    Compare(CompareArgs),
    /// Write a copy of a requirements file with `@` file specs removed
    Strip(StripArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct UpdateArgs {
    /// Requirements file to update
    #[arg(long, default_value = "requirements.txt")]
    pub input_file: PathBuf,

    /// Temporary file holding the stripped requirements
    #[arg(long, default_value = "requirements_new.txt")]
    pub compare_file: PathBuf,

    /// Backup file suffix
    #[arg(long, default_value = ".bak")]
    pub backup_suffix: String,

    /// Directory holding backups
    #[arg(long, default_value = "backups")]
    pub backup_dir: PathBuf,

    /// Maximum number of backups to keep
    #[arg(long, default_value_t = DEFAULT_MAX_BACKUPS)]
    pub max_backups: usize,

    /// pip executable used to freeze the environment
    #[arg(long, default_value = "pip")]
    pub pip: String,

    /// Use the existing input file instead of running `pip freeze`
    #[arg(long)]
    pub no_freeze: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CleanupArgs {
    /// Maximum number of backups to keep
    #[arg(long, default_value_t = DEFAULT_MAX_BACKUPS)]
    pub max_backups: usize,

    /// Directory holding backups
    #[arg(long, default_value = "backups")]
    pub backup_dir: PathBuf,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CompareArgs {
    /// Original requirements file
    #[arg(value_name = "ORIGINAL")]
    pub original: PathBuf,

    /// New requirements file
    #[arg(value_name = "NEW")]
    pub new: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with an error when discrepancies are found
    #[arg(long)]
    pub check: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct StripArgs {
    /// Requirements file to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}
