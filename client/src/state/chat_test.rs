use super::*;
use advisor::{Role, WAITING_TEXT};

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty_and_idle() {
    let state = ChatState::default();
    assert!(state.session.transcript().is_empty());
    assert!(!state.is_waiting());
    assert_eq!(state.view().pending, None);
}

// =============================================================
// submit / finish
// =============================================================

#[test]
fn begin_submit_blank_input_returns_none() {
    let mut state = ChatState::default();
    state.session.set_input("   ");
    assert!(state.begin_submit().is_none());
    assert!(state.session.transcript().is_empty());
}

#[test]
fn begin_submit_returns_request_and_shows_pending_line() {
    let mut state = ChatState::default();
    state.session.set_input("Is gold a hedge?");
    let request = state.begin_submit().expect("request");
    assert_eq!(request.query, "Is gold a hedge?");
    assert!(state.is_waiting());
    assert_eq!(state.view().pending, Some(WAITING_TEXT));
}

#[test]
fn second_submit_while_waiting_is_ignored() {
    let mut state = ChatState::default();
    state.session.set_input("first");
    assert!(state.begin_submit().is_some());
    state.session.set_input("second");
    assert!(state.begin_submit().is_none());
    assert_eq!(state.session.transcript().len(), 1);
}

#[test]
fn finish_with_transport_error_appends_fixed_text() {
    let mut state = ChatState::default();
    state.session.set_input("q");
    state.begin_submit().expect("request");
    state.finish(Err(QueryError::Transport("offline".to_owned())));

    let view = state.view();
    assert_eq!(view.pending, None);
    assert_eq!(view.messages.len(), 2);
    assert_eq!(view.messages[1].role, Role::Bot);
    assert_eq!(state.session.transcript()[1].content(), "❌ Error connecting to backend.");
    assert_eq!(state.session.input(), "");
}

#[test]
fn finish_without_request_leaves_transcript_alone() {
    let mut state = ChatState::default();
    state.finish(Ok(QueryOutcome::Empty));
    assert!(state.session.transcript().is_empty());
}
