//! Acceptance tests: selection movement, quitting, and status lines.

use crate::model::Dataset;
use crate::config::BrowserConfig;
use crate::test_harness::{fixed_now, AcceptanceTestHarness};
use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};

#[test]
fn arrows_move_selection_and_stop_at_edges() {
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");

    harness.send_key(KeyCode::Up);
    assert_eq!(harness.state().selected_command(), Some("git push"));

    harness.send_keys(&[KeyCode::Down, KeyCode::Down, KeyCode::Down]);
    assert_eq!(harness.state().selected_command(), Some("top"));
    assert_eq!(harness.state().table.cursor(), Some(2));
}

#[test]
fn selection_line_echoes_selected_command() {
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");

    harness.send_key(KeyCode::Down);

    let output = harness.render_to_string();
    assert!(
        output.contains("    Let's go to git pull! (selected)"),
        "{}",
        output
    );
}

#[test]
fn cursor_keeps_index_when_rows_change() {
    // Selection follows the row index, not the record.
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");

    harness.send_key(KeyCode::Down);
    harness.type_text("git");

    assert_eq!(harness.state().table.cursor(), Some(1));
    assert_eq!(harness.state().selected_command(), Some("git pull"));

    harness.type_text(" pus");
    assert_eq!(harness.state().table.cursor(), Some(0));
    assert_eq!(harness.state().selected_command(), Some("git push"));
}

#[test]
fn long_history_scrolls_to_keep_selection_visible() {
    let commands: Vec<String> = (0..10).map(|i| format!("cmd {}", i)).collect();
    let dataset = Dataset::from_commands(commands.iter().map(|c| ("~", c.as_str())), fixed_now());
    // 24 lines leave room for 3 rows
    let mut harness =
        AcceptanceTestHarness::with_dataset(dataset, BrowserConfig::default(), 80, 24)
            .expect("Should build harness");

    harness.send_keys(&[KeyCode::Down; 5]);

    assert_eq!(harness.state().selected_command(), Some("cmd 5"));
    let output = harness.render_to_string();
    assert!(output.contains("> now   ~"), "{}", output);
    assert!(output.contains("cmd 5"), "{}", output);
    assert!(!output.contains("cmd 0"), "{}", output);
}

#[test]
fn esc_quits_from_any_state() {
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");

    harness.type_text("zzz");
    harness.send_key(KeyCode::Down);

    assert!(harness.send_key(KeyCode::Esc));
    assert!(!harness.is_running());
}

#[test]
fn enter_quits() {
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");
    harness.send_key(KeyCode::Down);
    assert!(harness.send_key(KeyCode::Enter));
}

#[test]
fn ctrl_c_quits_mid_query() {
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");
    harness.type_text("gi");
    assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!harness.is_running());
}

#[test]
fn harness_drops_keys_after_quit() {
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");
    harness.send_key(KeyCode::Esc);
    harness.type_text("git");
    assert!(harness.state().query.is_empty());
}

#[test]
fn mouse_line_appears_after_first_mouse_event() {
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");
    assert!(!harness.render_to_string().contains("(X:"));

    harness.click_at(12, 4);
    let output = harness.render_to_string();
    assert!(output.contains("    (X: 12, Y: 4) left press"), "{}", output);

    harness.mouse(MouseEventKind::ScrollDown, 1, 2);
    let output = harness.render_to_string();
    assert!(output.contains("(X: 1, Y: 2) wheel down"), "{}", output);
}

#[test]
fn read_errors_are_shown_and_session_continues() {
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");

    harness.read_error("device not ready");

    assert!(harness.is_running());
    let output = harness.render_to_string();
    assert!(output.contains("error: device not ready"), "{}", output);

    harness.type_text("top");
    assert_eq!(harness.commands(), vec!["top"]);
}
