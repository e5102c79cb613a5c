use anyhow::{Context, Result};
use clap::Parser;
use rqm::backup::BackupManager;
use rqm::cli::{Args, CleanupArgs, Command, CompareArgs, StripArgs, UpdateArgs};
use rqm::freeze::write_freeze;
use rqm::logging;
use rqm::updater::RequirementsUpdater;
use rqm::{ReportRenderer, compare, strip_file_specs};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }
    let show_colors = !args.no_color;

    match &args.command {
        Command::Update(update) => run_update(update, show_colors),
        Command::Cleanup(cleanup) => run_cleanup(cleanup),
        Command::Compare(compare) => run_compare(compare, show_colors),
        Command::Strip(strip) => run_strip(strip),
    }
}

fn run_update(args: &UpdateArgs, show_colors: bool) -> Result<()> {
    // 1. Capture the environment into the input file
    if args.no_freeze {
        debug!("skipping environment freeze");
    } else {
        write_freeze(&args.pip, &args.input_file)?;
    }

    // 2. Write the stripped copy to compare against
    let content = read_requirements(&args.input_file)?;
    fs::write(&args.compare_file, strip_file_specs(&content)).with_context(|| {
        format!("Failed to write requirements file: {}", args.compare_file.display())
    })?;

    // 3. Report, confirm and swap
    let updater = RequirementsUpdater::new(
        BackupManager::new(args.backup_dir.clone()),
        &args.backup_suffix,
        show_colors,
    );
    updater.run(
        &args.input_file,
        &args.compare_file,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;

    // 4. Rotate backups
    print_removed(&updater.backups().cleanup(args.max_backups)?);

    Ok(())
}

fn run_cleanup(args: &CleanupArgs) -> Result<()> {
    let backups = BackupManager::new(args.backup_dir.clone());
    print_removed(&backups.cleanup(args.max_backups)?);
    Ok(())
}

fn run_compare(args: &CompareArgs, show_colors: bool) -> Result<()> {
    let original = read_requirements(&args.original)?;
    let new = read_requirements(&args.new)?;

    let result = compare(&original, &new);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        ReportRenderer::new(show_colors).render(&result)?;
    }

    if args.check && !result.is_valid {
        anyhow::bail!("Found {} discrepancies", result.discrepancy_count());
    }

    Ok(())
}

fn run_strip(args: &StripArgs) -> Result<()> {
    let stripped = strip_file_specs(&read_requirements(&args.input)?);

    match &args.output {
        Some(path) => {
            fs::write(path, &stripped).with_context(|| {
                format!("Failed to write requirements file: {}", path.display())
            })?;
            debug!(path = %path.display(), "wrote stripped requirements");
        }
        None => print!("{stripped}"),
    }

    Ok(())
}

fn read_requirements(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read requirements file: {}", path.display()))
}

fn print_removed(removed: &[PathBuf]) {
    for path in removed {
        let name = path.file_name().unwrap_or(path.as_os_str());
        println!("Removed old backup: {}", name.to_string_lossy());
    }
}
