//! Scripted shell sessions.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use inv_cli::render::TableOptions;
use inv_cli::shell::{ShellOptions, run_shell};
use inv_model::{Inventory, Record};
use inv_query::Session;

fn session() -> Session {
    Session::new(Inventory::new(vec![
        Record::new("1234-56", "Widget", "EA", "10", "KitA;KitB"),
        Record::new("9999-00", "Gasket", "PG", "2", "KitC"),
        Record::new("1234-56", "Widget, large", "EA", "4", "KitA"),
    ]))
}

fn options(export_dir: PathBuf) -> ShellOptions {
    ShellOptions {
        export_dir,
        table: TableOptions {
            kit_width: 120,
            full_kits: false,
        },
        prompt: false,
    }
}

fn run(session: &mut Session, script: &str, options: &ShellOptions) -> String {
    let mut output = Vec::new();
    run_shell(session, Cursor::new(script), &mut output, options).expect("shell run");
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn query_commands_report_status() {
    let mut session = session();
    let script = "\
status
search widget
kit KitC
kit Nope
reset
sort qty-desc
bogus

quit
status
";
    let transcript = run(&mut session, script, &options(PathBuf::from(".")));
    insta::assert_snapshot!(transcript.trim_end(), @r"
    Showing 3 of 3 items
    Showing 2 of 3 items
    Showing 0 of 3 items
    No items match your search.
    Unknown kit 'Nope'
    Showing 3 of 3 items
    Sorted by qty-desc
    unknown command 'bogus' (type 'help' for a list)
    ");
}

#[test]
fn ambiguous_nsn_asks_for_description() {
    let mut session = session();
    let transcript = run(
        &mut session,
        "select 1234-56\nselect 1234-56 | Widget, large\n",
        &options(PathBuf::from(".")),
    );
    assert!(transcript.contains("NSN 1234-56 matches 2 items"));
    assert!(transcript.contains("Selected 1234-56 | Widget, large"));
    assert_eq!(session.selection().len(), 1);
    assert!(session.selection().contains_key("1234-56", "Widget, large"));
}

#[test]
fn selection_round_trip_through_export() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = session();
    let script = "\
select 9999-00
select 1234-56 | Widget
select 9999-00
select 9999-00
export
";
    let transcript = run(&mut session, script, &options(dir.path().to_path_buf()));
    assert!(transcript.contains("Deselected 9999-00 | Gasket"));
    assert!(transcript.contains("Exported 2 items to"));

    let entries: Vec<_> = fs::read_dir(dir.path())
        .expect("read export dir")
        .map(|entry| entry.expect("dir entry").path())
        .collect();
    assert_eq!(entries.len(), 1);
    let name = entries[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("selected_items_") && name.ends_with(".csv"));

    let contents = fs::read_to_string(&entries[0]).expect("read export");
    assert_eq!(
        contents,
        "NSN,Description,Unit of Measure,Quantity Required,Kit Membership\r\n\
         1234-56,Widget,EA,10,\"KitA;KitB\"\r\n\
         9999-00,Gasket,PG,2,KitC"
    );
}

#[test]
fn export_with_empty_selection_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = session();
    let transcript = run(&mut session, "export\n", &options(dir.path().to_path_buf()));
    assert_eq!(transcript.trim_end(), "Nothing selected.");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn remove_and_clear_edit_the_selection() {
    let mut session = session();
    let transcript = run(
        &mut session,
        "select 9999-00\nselect 1234-56 | Widget\nremove 1234-56\nremove 1234-56\nselection\nclear\nselection\n",
        &options(PathBuf::from(".")),
    );
    assert!(transcript.contains("Removed 1 (1 selected)"));
    assert!(transcript.contains("1234-56 is not selected"));
    assert!(transcript.contains("Gasket"));
    assert!(transcript.trim_end().ends_with("Nothing selected."));
    assert!(session.selection().is_empty());
}

#[test]
fn expand_toggles_full_kit_text() {
    let mut session = session();
    let mut opts = options(PathBuf::from("."));
    opts.table.kit_width = 4;

    let transcript = run(&mut session, "list\n", &opts);
    assert!(transcript.contains("KitA…"));

    let transcript = run(&mut session, "expand 1234-56 | Widget\nlist\n", &opts);
    assert!(transcript.contains("Showing full kits for 1234-56 | Widget"));
    assert!(transcript.contains("KitA;KitB"));
}

#[test]
fn item_without_nsn_is_reachable_by_description() {
    let mut session = Session::new(Inventory::new(vec![
        Record::new("", "Only description", "EA", "1", "KitA;KitB"),
        Record::new("9999-00", "Gasket", "PG", "2", "KitC"),
    ]));
    let mut opts = options(PathBuf::from("."));
    opts.table.kit_width = 4;
    let transcript = run(
        &mut session,
        "select | Only description\nexpand | Only description\nlist\n",
        &opts,
    );
    assert!(transcript.contains("Selected  | Only description"));
    assert!(transcript.contains("KitA;KitB"));
    assert_eq!(session.selection().len(), 1);
    assert!(session.selection().contains_key("", "Only description"));

    let transcript = run(&mut session, "remove | Only description\n", &opts);
    assert!(transcript.contains("Removed 1 (0 selected)"));
    assert!(session.selection().is_empty());
}
