//! Line-oriented interactive session.
//!
//! Each input line is one command. Query changes answer with the status line;
//! `list` shows the table. Parsing is separate from execution so the grammar
//! can be tested without a session.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use inv_model::{Record, RecordKey, SortOrder};
use inv_output::{export_selection, local_now, write_export};
use inv_query::Session;

use crate::render::{
    NO_MATCHES_MESSAGE, TableOptions, inventory_table, kits_table, selection_table,
};

pub const HELP_TEXT: &str = "\
Commands:
  list                         show the filtered view
  search [TEXT]                filter by text (no text clears)
  kit [NAME]                   filter by kit (no name clears)
  kits                         list kit names
  sort ORDER                   nsn|description|qty followed by -asc or -desc
  reset                        clear filters and sort by NSN
  select [NSN] [| DESCRIPTION] toggle an item in the selection
  remove [NSN] [| DESCRIPTION] drop an item from the selection
  clear                        empty the selection
  selection                    show selected items
  expand [NSN] [| DESCRIPTION] show or hide full kit text for an item
  export [DIR]                 write selected items to CSV
  status                       show item counts
  help                         show this help
  quit                         leave the shell";

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    List,
    Search(String),
    Kit(String),
    Kits,
    Sort(SortOrder),
    Reset,
    Select(ItemRef),
    Remove(ItemRef),
    Clear,
    Selection,
    Expand(ItemRef),
    Export(Option<PathBuf>),
    Status,
    Help,
    Quit,
}

/// An item named by NSN, optionally narrowed by description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRef {
    pub nsn: String,
    pub description: Option<String>,
}

impl ItemRef {
    fn parse(args: &str) -> Option<Self> {
        let (nsn, description) = match args.split_once('|') {
            Some((nsn, description)) => (nsn.trim(), Some(description.trim().to_string())),
            None => (args.trim(), None),
        };
        if nsn.is_empty() && description.as_deref().is_none_or(str::is_empty) {
            return None;
        }
        Some(Self {
            nsn: nsn.to_string(),
            description,
        })
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{} | {description}", self.nsn),
            None => f.write_str(&self.nsn),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ShellError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),
    #[error("'{0}' needs an NSN or '| DESCRIPTION'")]
    MissingItem(&'static str),
    #[error("'sort' needs an order such as nsn-asc or qty-desc")]
    MissingSort,
    #[error(transparent)]
    Sort(#[from] inv_model::ModelError),
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, ShellError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, args) = match line.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args.trim()),
        None => (line, ""),
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => ShellCommand::List,
        "search" | "find" => ShellCommand::Search(args.to_string()),
        "kit" => ShellCommand::Kit(args.to_string()),
        "kits" => ShellCommand::Kits,
        "sort" => {
            if args.is_empty() {
                return Err(ShellError::MissingSort);
            }
            ShellCommand::Sort(args.parse()?)
        }
        "reset" => ShellCommand::Reset,
        "select" => ShellCommand::Select(ItemRef::parse(args).ok_or(ShellError::MissingItem("select"))?),
        "remove" => ShellCommand::Remove(ItemRef::parse(args).ok_or(ShellError::MissingItem("remove"))?),
        "clear" => ShellCommand::Clear,
        "selection" => ShellCommand::Selection,
        "expand" => ShellCommand::Expand(ItemRef::parse(args).ok_or(ShellError::MissingItem("expand"))?),
        "export" => ShellCommand::Export((!args.is_empty()).then(|| PathBuf::from(args))),
        "status" => ShellCommand::Status,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(ShellError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

/// Settings the shell needs besides the session.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub export_dir: PathBuf,
    pub table: TableOptions,
    /// Print a `> ` prompt before each line.
    pub prompt: bool,
}

/// Runs commands from `input` until `quit` or end of input.
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    options: &ShellOptions,
) -> io::Result<()> {
    if options.prompt {
        writeln!(output, "{}. Type 'help' for commands.", session.status())?;
        write!(output, "> ")?;
        output.flush()?;
    }
    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => {
                debug!(?command, "shell command");
                execute(session, command, output, options)?;
            }
            Ok(None) => {}
            Err(error) => writeln!(output, "{error}")?,
        }
        if options.prompt {
            write!(output, "> ")?;
            output.flush()?;
        }
    }
    Ok(())
}

fn execute<W: Write>(
    session: &mut Session,
    command: ShellCommand,
    output: &mut W,
    options: &ShellOptions,
) -> io::Result<()> {
    match command {
        ShellCommand::List => {
            let view = session.view();
            if view.is_empty() {
                writeln!(output, "{NO_MATCHES_MESSAGE}")?;
            } else {
                writeln!(output, "{}", inventory_table(session, &view, options.table))?;
            }
            writeln!(output, "{}", session.status())
        }
        ShellCommand::Search(term) => {
            session.set_search_term(&term);
            write_status(session, output)
        }
        ShellCommand::Kit(kit) => {
            if !kit.is_empty() && !session.kits().contains(&kit) {
                return writeln!(output, "Unknown kit '{kit}'");
            }
            session.set_kit_filter(&kit);
            write_status(session, output)
        }
        ShellCommand::Kits => {
            if session.kits().is_empty() {
                return writeln!(output, "No kits.");
            }
            writeln!(output, "{}", kits_table(session.kits(), session.records()))
        }
        ShellCommand::Sort(order) => {
            session.set_sort(order);
            writeln!(output, "Sorted by {order}")
        }
        ShellCommand::Reset => {
            session.reset_query();
            write_status(session, output)
        }
        ShellCommand::Select(item) => {
            let Some(key) = resolve(session, &item, output)? else {
                return Ok(());
            };
            match session.toggle_selected(&key) {
                Some(true) => writeln!(output, "Selected {}", describe(&key))?,
                Some(false) => writeln!(output, "Deselected {}", describe(&key))?,
                None => {}
            }
            writeln!(output, "{} selected", session.selection().len())
        }
        ShellCommand::Remove(item) => {
            let keys: Vec<RecordKey> = session
                .selection()
                .iter()
                .filter(|record| {
                    record.nsn() == item.nsn
                        && item
                            .description
                            .as_deref()
                            .is_none_or(|description| record.description() == description)
                })
                .map(Record::key)
                .collect();
            if keys.is_empty() {
                return writeln!(output, "{item} is not selected");
            }
            for key in &keys {
                session.selection_mut().remove_key(key);
            }
            writeln!(output, "Removed {} ({} selected)", keys.len(), session.selection().len())
        }
        ShellCommand::Clear => {
            session.selection_mut().clear();
            writeln!(output, "Selection cleared")
        }
        ShellCommand::Selection => {
            if session.selection().is_empty() {
                return writeln!(output, "Nothing selected.");
            }
            writeln!(output, "{}", selection_table(session.selection()))
        }
        ShellCommand::Expand(item) => {
            let Some(key) = resolve(session, &item, output)? else {
                return Ok(());
            };
            if session.toggle_kits_expanded(&key) {
                writeln!(output, "Showing full kits for {}", describe(&key))
            } else {
                writeln!(output, "Shortening kits for {}", describe(&key))
            }
        }
        ShellCommand::Export(dir) => {
            let Some(document) = export_selection(session.selection().list(), local_now()) else {
                return writeln!(output, "Nothing selected.");
            };
            let dir = dir.unwrap_or_else(|| options.export_dir.clone());
            match write_export(&dir, &document) {
                Ok(path) => writeln!(output, "Exported {} items to {}", document.rows, path.display()),
                Err(error) => {
                    warn!(%error, "export failed");
                    writeln!(output, "Export failed: {error}")
                }
            }
        }
        ShellCommand::Status => write_status(session, output),
        ShellCommand::Help => writeln!(output, "{HELP_TEXT}"),
        ShellCommand::Quit => Ok(()),
    }
}

fn write_status<W: Write>(session: &Session, output: &mut W) -> io::Result<()> {
    let status = session.status();
    writeln!(output, "{status}")?;
    if status.shown == 0 && status.total > 0 {
        writeln!(output, "{NO_MATCHES_MESSAGE}")?;
    }
    Ok(())
}

/// Finds the one record `item` names, reporting misses and ambiguity.
fn resolve<W: Write>(
    session: &Session,
    item: &ItemRef,
    output: &mut W,
) -> io::Result<Option<RecordKey>> {
    if let Some(description) = &item.description {
        let key = RecordKey::new(item.nsn.as_str(), description.as_str());
        if session.find(&key).is_none() {
            writeln!(output, "No item {}", describe(&key))?;
            return Ok(None);
        }
        return Ok(Some(key));
    }
    let matches: Vec<RecordKey> = session.find_by_nsn(&item.nsn).map(Record::key).collect();
    match matches.as_slice() {
        [] => {
            writeln!(output, "No item with NSN {}", item.nsn)?;
            Ok(None)
        }
        [key] => Ok(Some(key.clone())),
        keys => {
            writeln!(output, "NSN {} matches {} items; add '| DESCRIPTION':", item.nsn, keys.len())?;
            for key in keys {
                writeln!(output, "  {}", describe(key))?;
            }
            Ok(None)
        }
    }
}

fn describe(key: &RecordKey) -> String {
    format!("{} | {}", key.nsn, key.description)
}
