//! Interactive line-oriented front end.
//!
//! # Responsibility
//! - Drive record use cases from typed commands, one per line.
//! - Own the [`Session`] so edit mode and the sort toggle persist between
//!   commands of one shell run.
//!
//! # Invariants
//! - A failing command prints its error and never ends the loop.
//! - Record fields are entered as one CSV line (`name,roll,grade,marks`).

use crate::render::render_table;
use anyhow::{Context, Result};
use rollbook_core::{
    csv_row, parse_csv_line, RecordInput, RecordService, SaveOutcome, Session, SlotStore,
};
use std::io::{BufRead, Write};

const PROMPT: &str = "rollbook> ";
const HELP: &str = "\
commands:
  list [query]              show records, optionally filtered by name/roll
  add <name,roll,grade,marks>
  edit <roll>               load a record into the edit form
  save <name,roll,grade,marks>
                            add, or update the record being edited
  cancel                    leave edit mode
  delete <roll>
  sort marks|roll           sort, alternating direction on each call
  clear                     delete every record
  import <path>             merge a CSV file by roll
  export [path]             print or write CSV
  help
  quit";

/// Runs the shell until `quit` or end of input.
pub fn run_shell<S, R, W>(service: &RecordService<S>, input: R, mut output: W) -> Result<()>
where
    S: SlotStore,
    R: BufRead,
    W: Write,
{
    let mut session = Session::new();
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("failed to read shell input")?;
        let (command, rest) = split_command(&line);

        match command {
            "" => {}
            "quit" | "exit" => break,
            _ => match execute(service, &mut session, command, rest) {
                Ok(message) => writeln!(output, "{message}")?,
                Err(err) => writeln!(output, "error: {err:#}")?,
            },
        }

        if session.is_editing() {
            write!(output, "[editing {}] ", session.edit_target().unwrap_or_default())?;
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

fn split_command(line: &str) -> (&str, &str) {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    }
}

fn execute<S: SlotStore>(
    service: &RecordService<S>,
    session: &mut Session,
    command: &str,
    args: &str,
) -> Result<String> {
    match command {
        "help" => Ok(HELP.to_string()),
        "list" => Ok(render_table(&service.search(args))),
        "add" => {
            let record = service.add_record(&parse_fields(args)?)?;
            Ok(format!("Student added: {} ({}).", record.name, record.roll))
        }
        "edit" => {
            let record = service.begin_edit(session, args)?;
            Ok(format!("Editing {}", csv_row(&record)))
        }
        "save" => match service.save_from_session(session, &parse_fields(args)?)? {
            SaveOutcome::Added(record) => {
                Ok(format!("Student added: {} ({}).", record.name, record.roll))
            }
            SaveOutcome::Updated(record) => {
                Ok(format!("Record updated: {} ({}).", record.name, record.roll))
            }
        },
        "cancel" => {
            session.cancel_edit();
            Ok("Edit cancelled.".to_string())
        }
        "delete" => {
            let record = service.delete_record(args)?;
            Ok(format!("Deleted {} ({}).", record.name, record.roll))
        }
        "sort" => {
            let view = match args {
                "marks" => service.toggle_sort_by_marks(session)?,
                "roll" => service.toggle_sort_by_roll(session)?,
                other => anyhow::bail!("unknown sort key `{other}`; expected marks|roll"),
            };
            Ok(format!(
                "Sorted by {args} ({:?}).\n{}",
                view.order,
                render_table(&view.records)
            ))
        }
        "clear" => {
            let removed = service.clear_all()?;
            Ok(format!("Cleared {removed} record(s)."))
        }
        "import" => {
            let text = std::fs::read_to_string(args)
                .with_context(|| format!("failed to read `{args}`"))?;
            let report = service.import_csv(&text)?;
            Ok(format!("Imported {} rows (merged).", report.processed))
        }
        "export" => {
            let csv = service.export_csv()?;
            if args.is_empty() {
                Ok(csv)
            } else {
                std::fs::write(args, &csv)
                    .with_context(|| format!("failed to write `{args}`"))?;
                Ok(format!("Exported to {args}."))
            }
        }
        other => anyhow::bail!("unknown command `{other}`; type `help`"),
    }
}

fn parse_fields(args: &str) -> Result<RecordInput> {
    let fields = parse_csv_line(args);
    let [name, roll, grade, marks] = <[String; 4]>::try_from(fields).map_err(|fields| {
        anyhow::anyhow!(
            "expected 4 comma-separated fields (name,roll,grade,marks), got {}",
            fields.len()
        )
    })?;
    Ok(RecordInput::new(name, roll, grade, marks))
}
