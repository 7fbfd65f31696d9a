//! Tests for key handling

use crate::backend::BackendResponse;
use crate::test_utils::test_helpers::{answer, app_with_query, key, key_with_mods, test_app};
use proptest::prelude::*;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_typing_edits_query() {
    let mut harness = test_app();
    for ch in "fuel".chars() {
        harness.app.handle_key_event(key(KeyCode::Char(ch)));
    }
    assert_eq!(harness.app.query(), "fuel");
}

#[test]
fn test_enter_submits() {
    let mut harness = app_with_query("fuel");
    harness.app.handle_key_event(key(KeyCode::Enter));

    assert!(harness.app.form.is_loading());
    assert_eq!(harness.next_request().unwrap().query, "fuel");
    assert_eq!(harness.app.query(), "fuel");
}

#[test]
fn test_enter_on_blank_query_does_nothing() {
    let mut harness = app_with_query("   ");
    harness.app.handle_key_event(key(KeyCode::Enter));

    assert!(!harness.app.form.is_loading());
    assert!(harness.next_request().is_none());
}

#[test]
fn test_input_disabled_while_loading() {
    let mut harness = app_with_query("fuel");
    harness.app.handle_key_event(key(KeyCode::Enter));

    harness.app.handle_key_event(key(KeyCode::Char('x')));
    harness.app.handle_key_event(key(KeyCode::Backspace));

    assert_eq!(harness.app.query(), "fuel");
}

#[test]
fn test_input_enabled_again_after_response() {
    let mut harness = app_with_query("fuel");
    harness.app.handle_key_event(key(KeyCode::Enter));
    let request = harness.next_request().unwrap();
    harness.respond(BackendResponse::Answer {
        request_id: request.request_id,
        answer: answer("ONLINE", "3 fuel cells"),
    });

    harness.app.handle_key_event(key(KeyCode::Char('s')));

    assert_eq!(harness.app.query(), "fuels");
}

#[test]
fn test_esc_quits() {
    let mut harness = test_app();
    harness.app.handle_key_event(key(KeyCode::Esc));
    assert!(harness.app.should_quit());
}

#[test]
fn test_ctrl_c_quits_while_loading() {
    let mut harness = app_with_query("fuel");
    harness.app.handle_key_event(key(KeyCode::Enter));

    harness
        .app
        .handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(harness.app.should_quit());
}

#[test]
fn test_plain_c_is_typed() {
    let mut harness = test_app();
    harness.app.handle_key_event(key(KeyCode::Char('c')));
    assert!(!harness.app.should_quit());
    assert_eq!(harness.app.query(), "c");
}

#[test]
fn test_scroll_keys_do_not_edit_query() {
    let mut harness = app_with_query("fuel");
    for code in [KeyCode::Up, KeyCode::Down, KeyCode::PageUp, KeyCode::PageDown] {
        harness.app.handle_key_event(key(code));
    }
    assert_eq!(harness.app.query(), "fuel");
}

#[test]
fn test_multi_line_paste_does_not_submit() {
    let mut harness = test_app();
    harness
        .app
        .handle_paste_event("how many\nmedkits\r\ndo we have?".to_string());

    assert_eq!(harness.app.query(), "how many medkits do we have?");
    assert!(!harness.app.form.is_loading());
    assert!(harness.next_request().is_none());
}

#[test]
fn test_paste_inserts_at_cursor() {
    let mut harness = app_with_query("fuel ");
    harness.app.handle_paste_event("cells".to_string());
    assert_eq!(harness.app.query(), "fuel cells");
}

#[test]
fn test_paste_ignored_while_loading() {
    let mut harness = app_with_query("fuel");
    harness.app.handle_key_event(key(KeyCode::Enter));

    harness.app.handle_paste_event("cells".to_string());

    assert_eq!(harness.app.query(), "fuel");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Pasted single-line text lands in the query unchanged.
    #[test]
    fn prop_paste_text_insertion_integrity(text in "[a-zA-Z0-9?., ]{0,50}") {
        let mut harness = test_app();
        harness.app.handle_paste_event(text.clone());
        prop_assert_eq!(harness.app.query(), text.as_str());
    }
}
