//! Acceptance tests: typing a query narrows the table.

use crate::config::BrowserConfig;
use crate::filter::{EmptyResultPolicy, NO_MATCHES_TEXT};
use crate::test_harness::{three_commands, AcceptanceTestHarness};
use crossterm::event::{KeyCode, KeyModifiers};

fn harness_with_policy(policy: EmptyResultPolicy) -> AcceptanceTestHarness {
    let config = BrowserConfig {
        empty_result: policy,
        ..BrowserConfig::default()
    };
    AcceptanceTestHarness::with_dataset(three_commands(), config, 80, 24)
        .expect("Should build harness")
}

#[test]
fn typing_git_keeps_both_git_rows_in_order() {
    // GIVEN: "git push", "git pull", "top"
    // WHEN: User types "git"
    // THEN: Two git rows remain, dataset order
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");

    harness.type_text("git");

    assert_eq!(harness.state().query.value(), "git");
    assert_eq!(harness.commands(), vec!["git push", "git pull"]);
    assert!(harness.is_running());
}

#[test]
fn unmatched_query_shows_placeholder_row_by_default() {
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");

    harness.type_text("zzz");

    assert_eq!(harness.commands(), vec![NO_MATCHES_TEXT]);
    let output = harness.render_to_string();
    assert!(output.contains(NO_MATCHES_TEXT), "{}", output);
}

#[test]
fn unmatched_query_with_omit_policy_empties_table() {
    let mut harness = harness_with_policy(EmptyResultPolicy::Omit);

    harness.type_text("zzz");

    assert!(harness.commands().is_empty());
    assert_eq!(harness.state().table.cursor(), None);
    assert_eq!(harness.state().selected_command(), None);

    let output = harness.render_to_string();
    assert!(output.contains("Let's go to ! (selected)"), "{}", output);
}

#[test]
fn clearing_query_restores_all_rows() {
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");

    harness.type_text("zzz");
    harness.send_key_with_mods(KeyCode::Char('u'), KeyModifiers::CONTROL);

    assert!(harness.state().query.is_empty());
    assert_eq!(harness.commands(), vec!["git push", "git pull", "top"]);
}

#[test]
fn backspace_widens_the_match() {
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");

    harness.type_text("git pu");
    harness.type_text("s");
    assert_eq!(harness.commands(), vec!["git push"]);

    harness.send_key(KeyCode::Backspace);
    assert_eq!(harness.commands(), vec!["git push", "git pull"]);
}

#[test]
fn matching_is_case_sensitive() {
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");

    harness.type_text("GIT");

    assert_eq!(harness.commands(), vec![NO_MATCHES_TEXT]);
}

#[test]
fn paste_filters_like_typing() {
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");

    harness.paste("pull");

    assert_eq!(harness.commands(), vec!["git pull"]);
    assert_eq!(harness.state().selected_command(), Some("git pull"));
}

#[test]
fn query_stops_growing_at_capacity() {
    let config = BrowserConfig {
        max_query_length: 3,
        ..BrowserConfig::default()
    };
    let mut harness = AcceptanceTestHarness::with_dataset(three_commands(), config, 80, 24)
        .expect("Should build harness");

    harness.type_text("git push");

    assert_eq!(harness.state().query.value(), "git");
    assert_eq!(harness.commands(), vec!["git push", "git pull"]);
}

#[test]
fn editing_mid_query_filters_on_whole_value() {
    let mut harness = AcceptanceTestHarness::new().expect("Should build harness");

    harness.type_text("gitpull");
    harness.send_keys(&[
        KeyCode::Left,
        KeyCode::Left,
        KeyCode::Left,
        KeyCode::Left,
    ]);
    harness.type_text(" ");

    assert_eq!(harness.state().query.value(), "git pull");
    assert_eq!(harness.commands(), vec!["git pull"]);
}
