//! Integration tests for the erpview CLI
//!
//! These drive the command functions end to end: every menu entry renders,
//! the export writes a real PDF, and a scripted interactive session walks
//! the menu including the export prompt.

use std::fs;
use std::io::Cursor;

use tempfile::TempDir;

use erpview_cli::{export_command, run_menu, sections_command, view_command, OutputFormat};
use erpview_report::{MenuEntry, SHORTFALLS, REPORT};

#[test]
fn test_every_menu_entry_views_without_error() {
    for entry in MenuEntry::ALL {
        let mut out = Vec::new();
        view_command(entry, OutputFormat::Text, &REPORT, &mut out)
            .unwrap_or_else(|e| panic!("view {entry:?} failed: {e}"));
        assert!(!out.is_empty());
    }
}

#[test]
fn test_view_json_is_valid_json() {
    for entry in MenuEntry::ALL {
        let mut out = Vec::new();
        view_command(entry, OutputFormat::Json, &REPORT, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value.get("title").is_some());
    }
}

#[test]
fn test_view_shortfalls_shows_every_row() {
    let mut out = Vec::new();
    view_command(MenuEntry::ShortfallRisks, OutputFormat::Text, &REPORT, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    for row in &SHORTFALLS {
        assert!(text.contains(row.module));
        assert!(text.contains(row.shortfall));
    }
}

#[test]
fn test_sections_command_lists_the_closed_set() {
    let mut out = Vec::new();
    sections_command(&REPORT, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1 + 7);
    assert!(text.contains("7. Download PDF"));
}

#[test]
fn test_export_writes_a_pdf_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.pdf");

    let mut out = Vec::new();
    let written = export_command(Some(&path), &REPORT, &mut out).unwrap();
    assert_eq!(written, path);

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    let log = String::from_utf8(out).unwrap();
    assert!(log.contains("Export complete!"));
    assert!(log.contains("Type: application/pdf"));
    assert!(log.contains(&format!("Size: {} bytes", bytes.len())));
}

#[test]
fn test_export_is_deterministic_across_runs() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("a.pdf");
    let second = dir.path().join("b.pdf");

    export_command(Some(&first), &REPORT, &mut Vec::new()).unwrap();
    export_command(Some(&second), &REPORT, &mut Vec::new()).unwrap();

    assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
}

#[test]
fn test_menu_session_renders_selected_screens() {
    let dir = TempDir::new().unwrap();
    let export_path = dir.path().join("report.pdf");

    let mut input = Cursor::new(b"4\n1\nq\n".to_vec());
    let mut out = Vec::new();
    run_menu(&mut input, &mut out, &REPORT, &export_path).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Critical Shortfall Report"));
    assert!(text.contains("Manual overhead allocation"));
    assert!(text.contains("Executive Summary"));
    assert!(!export_path.exists(), "nothing selected the export");
}

#[test]
fn test_menu_session_recovers_from_bad_input() {
    let dir = TempDir::new().unwrap();
    let export_path = dir.path().join("report.pdf");

    let mut input = Cursor::new(b"99\nbogus\n2\nq\n".to_vec());
    let mut out = Vec::new();
    run_menu(&mut input, &mut out, &REPORT, &export_path).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Unknown selection: 99"));
    assert!(text.contains("Unknown selection: bogus"));
    assert!(text.contains("Technical & Performance Evaluation"));
}

#[test]
fn test_menu_session_walks_every_entry() {
    // The no-crash property: all seven entries in sequence, then quit.
    let dir = TempDir::new().unwrap();
    let export_path = dir.path().join("report.pdf");

    let mut input = Cursor::new(b"1\n2\n3\n4\n5\n6\n7\nn\nq\n".to_vec());
    let mut out = Vec::new();
    run_menu(&mut input, &mut out, &REPORT, &export_path).unwrap();

    let text = String::from_utf8(out).unwrap();
    for entry in MenuEntry::ALL {
        let screen_title = erpview_screens::screen_for(entry, &REPORT).title;
        assert!(text.contains(&screen_title), "missing screen {screen_title}");
    }
    assert!(!export_path.exists(), "export was declined");
}

#[test]
fn test_menu_export_prompt_generates_the_file() {
    let dir = TempDir::new().unwrap();
    let export_path = dir.path().join("report.pdf");

    let mut input = Cursor::new(b"7\ny\nq\n".to_vec());
    let mut out = Vec::new();
    run_menu(&mut input, &mut out, &REPORT, &export_path).unwrap();

    let bytes = fs::read(&export_path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Saved"));
}

#[test]
fn test_menu_session_ends_cleanly_on_eof() {
    let dir = TempDir::new().unwrap();
    let export_path = dir.path().join("report.pdf");

    let mut input = Cursor::new(Vec::new());
    let mut out = Vec::new();
    run_menu(&mut input, &mut out, &REPORT, &export_path).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("Report Navigation"));
}
