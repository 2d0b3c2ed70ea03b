//! Subcommand implementations.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use inv_cli::render::{
    NO_DATA_MESSAGE, NO_MATCHES_MESSAGE, TableOptions, inventory_table, kits_table, view_json,
};
use inv_cli::settings::Settings;
use inv_cli::shell::{ShellOptions, run_shell};
use inv_ingest::{DocumentSource, LoadOutcome, load_from_source};
use inv_model::{QueryUpdate, Record, RecordKey};
use inv_output::{export_selection, local_now, write_export};
use inv_query::Session;
use tracing::{info, warn};

use crate::cli::{ExportArgs, ListArgs, ListFormatArg, QueryArgs, ShellArgs};

/// Resolved settings and document location shared by every subcommand.
pub struct AppContext {
    pub settings: Settings,
    pub source: DocumentSource,
}

impl AppContext {
    fn table_options(&self, full_kits: bool) -> TableOptions {
        TableOptions {
            kit_width: self.settings.kit_width(),
            full_kits,
        }
    }
}

/// Loads the document and applies the query flags.
///
/// Returns `None` after printing the empty-data message when the document has
/// no data rows.
fn open_session(ctx: &AppContext, query: &QueryArgs) -> Result<Option<Session>> {
    let outcome = load_from_source(&ctx.source).context("Error loading data")?;
    let inventory = match outcome {
        LoadOutcome::Loaded(inventory) => inventory,
        LoadOutcome::Empty => {
            println!("{NO_DATA_MESSAGE}");
            return Ok(None);
        }
    };
    let mut session = Session::new(inventory);
    session.set_query(QueryUpdate {
        search_term: query.search.clone(),
        kit_filter: query.kit.clone(),
        sort: Some(query.sort.unwrap_or_else(|| ctx.settings.sort_order())),
    });
    Ok(Some(session))
}

pub fn run_list(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let Some(session) = open_session(ctx, &args.query)? else {
        return Ok(());
    };
    let view = session.view();
    match args.format {
        ListFormatArg::Json => {
            println!("{}", view_json(&view, session.status())?);
        }
        ListFormatArg::Table => {
            if view.is_empty() {
                println!("{NO_MATCHES_MESSAGE}");
            } else {
                let options = ctx.table_options(args.full_kits);
                println!("{}", inventory_table(&session, &view, options));
            }
            println!("{}", session.status());
        }
    }
    Ok(())
}

pub fn run_kits(ctx: &AppContext) -> Result<()> {
    let Some(session) = open_session(ctx, &QueryArgs::default())? else {
        return Ok(());
    };
    if session.kits().is_empty() {
        println!("No kits.");
    } else {
        println!("{}", kits_table(session.kits(), session.records()));
    }
    Ok(())
}

pub fn run_export(ctx: &AppContext, args: &ExportArgs) -> Result<()> {
    if args.nsn.is_empty() && !args.all {
        bail!("nothing to export: pass --nsn or --all");
    }
    let Some(mut session) = open_session(ctx, &args.query)? else {
        return Ok(());
    };

    if args.all {
        let keys: Vec<RecordKey> = session.view().into_iter().map(Record::key).collect();
        for key in &keys {
            if !session.selection().contains_key(&key.nsn, &key.description) {
                session.toggle_selected(key);
            }
        }
    }
    for nsn in &args.nsn {
        let keys: Vec<RecordKey> = session.find_by_nsn(nsn).map(Record::key).collect();
        if keys.is_empty() {
            warn!(%nsn, "no item with this NSN");
            eprintln!("No item with NSN {nsn}");
        }
        for key in &keys {
            session.toggle_selected(key);
        }
    }

    let Some(document) = export_selection(session.selection().list(), local_now()) else {
        println!("Nothing selected.");
        return Ok(());
    };
    if args.stdout {
        let mut stdout = io::stdout().lock();
        stdout.write_all(document.as_bytes())?;
        writeln!(stdout)?;
        return Ok(());
    }
    let dir: PathBuf = args
        .output_dir
        .clone()
        .unwrap_or_else(|| ctx.settings.export_dir.clone());
    let path = write_export(&dir, &document)
        .with_context(|| format!("failed to export to {}", dir.display()))?;
    info!(rows = document.rows, "selection exported");
    println!("Exported {} items to {}", document.rows, path.display());
    Ok(())
}

pub fn run_shell_session(ctx: &AppContext, args: &ShellArgs) -> Result<()> {
    let Some(mut session) = open_session(ctx, &args.query)? else {
        return Ok(());
    };
    let stdin = io::stdin();
    let options = ShellOptions {
        export_dir: ctx.settings.export_dir.clone(),
        table: ctx.table_options(false),
        prompt: stdin.is_terminal(),
    };
    let mut stdout = io::stdout().lock();
    run_shell(&mut session, stdin.lock(), &mut stdout, &options)?;
    Ok(())
}
