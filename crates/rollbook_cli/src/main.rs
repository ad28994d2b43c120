//! RollBook command-line front end.
//!
//! # Responsibility
//! - Map subcommands onto `rollbook_core` record use cases.
//! - Resolve the database location and optional file logging.
//!
//! # Invariants
//! - Every subcommand opens the store, runs one use case and exits.
//! - Failures print the error chain and exit with status 1.

mod config;
mod render;
mod shell;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::Settings;
use log::info;
use render::render_table;
use rollbook_core::db::open_db;
use rollbook_core::{RecordInput, RecordService, SortOrder, SqliteSlotStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rollbook", version, about = "Local student record keeper")]
struct Cli {
    /// SQLite file holding the records (env: ROLLBOOK_DB_PATH).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Absolute directory for rotating log files (env: ROLLBOOK_LOG_DIR).
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new student record.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        roll: String,
        #[arg(long)]
        grade: String,
        #[arg(long, allow_hyphen_values = true)]
        marks: String,
    },
    /// Edit the record with roll ROLL; omitted fields keep their values.
    Edit {
        roll: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "new-roll")]
        new_roll: Option<String>,
        #[arg(long)]
        grade: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        marks: Option<String>,
    },
    /// Delete the record with roll ROLL.
    Delete { roll: String },
    /// List records, optionally filtered by name or roll.
    List {
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Sort stored records and show the new order.
    Sort {
        #[arg(value_enum)]
        key: SortKeyArg,
        /// Sort in descending order.
        #[arg(long)]
        desc: bool,
    },
    /// Delete every stored record.
    Clear {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
    /// Merge records from a CSV file, updating existing rolls.
    Import { file: PathBuf },
    /// Write all records as CSV to FILE or stdout.
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Start an interactive shell with edit mode and toggling sorts.
    Shell,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortKeyArg {
    Marks,
    Roll,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(cli.db, cli.log_dir, cli.log_level);

    if let Some(log_dir) = settings.log_dir.as_deref() {
        rollbook_core::init_logging(&settings.log_level, log_dir)
            .map_err(anyhow::Error::msg)
            .context("failed to initialize logging")?;
    }

    let conn = open_db(&settings.db_path)
        .with_context(|| format!("failed to open `{}`", settings.db_path.display()))?;
    let service = RecordService::new(SqliteSlotStore::new(&conn));
    info!(
        "event=cli_start module=cli status=ok version={}",
        rollbook_core::core_version()
    );

    match cli.command {
        Command::Add {
            name,
            roll,
            grade,
            marks,
        } => {
            let record = service.add_record(&RecordInput::new(name, roll, grade, marks))?;
            println!("Student added: {} ({}).", record.name, record.roll);
        }
        Command::Edit {
            roll,
            name,
            new_roll,
            grade,
            marks,
        } => {
            let current = service
                .get_record(&roll)
                .with_context(|| format!("no record with roll `{roll}`"))?;
            let input = RecordInput::new(
                name.unwrap_or(current.name),
                new_roll.unwrap_or(current.roll),
                grade.unwrap_or(current.grade),
                marks.unwrap_or_else(|| current.marks.to_string()),
            );
            let record = service.update_record(&roll, &input)?;
            println!("Record updated: {} ({}).", record.name, record.roll);
        }
        Command::Delete { roll } => {
            let record = service.delete_record(&roll)?;
            println!("Deleted {} ({}).", record.name, record.roll);
        }
        Command::List { query } => {
            let records = service.search(query.as_deref().unwrap_or_default());
            println!("{}", render_table(&records));
        }
        Command::Sort { key, desc } => {
            let order = if desc {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            let records = match key {
                SortKeyArg::Marks => service.sort_by_marks(order)?,
                SortKeyArg::Roll => service.sort_by_roll(order)?,
            };
            println!("{}", render_table(&records));
        }
        Command::Clear { yes } => {
            if !yes {
                bail!("refusing to clear all records without --yes");
            }
            let removed = service.clear_all()?;
            println!("Cleared {removed} record(s).");
        }
        Command::Import { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read `{}`", file.display()))?;
            let report = service.import_csv(&text)?;
            println!(
                "Imported {} rows (merged): {} updated, {} added, {} skipped.",
                report.processed, report.updated, report.inserted, report.skipped_rows
            );
        }
        Command::Export { output } => {
            let csv = service.export_csv()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &csv)
                        .with_context(|| format!("failed to write `{}`", path.display()))?;
                    println!("Exported to {}.", path.display());
                }
                None => println!("{csv}"),
            }
        }
        Command::Shell => {
            let stdin = std::io::stdin();
            shell::run_shell(&service, stdin.lock(), std::io::stdout())?;
        }
    }

    Ok(())
}
