use super::*;
use crate::kernel::assistant::{AssistantError, FALLBACK_REPLY};
use crate::kernel::language::default_template;
use crate::kernel::services::ports::settings::Settings;
use crate::kernel::{ChatRole, EditorAction, PendingReply, TerminalLineKind};
use std::time::{Duration, Instant};

fn new_store() -> Store {
    let mut settings = Settings::default();
    settings.assistant.seed = Some(7);
    settings.assistant.delay_min_ms = 10;
    settings.assistant.delay_max_ms = 20;
    Store::new(AppState::new(&settings))
}

fn type_into_assistant(store: &mut Store, text: &str) {
    for ch in text.chars() {
        store.dispatch(Action::AssistantInput(ch));
    }
}

fn scheduled_reply(result: &DispatchResult) -> PendingReply {
    match result.effects.as_slice() {
        [Effect::ScheduleAssistantReply(reply)] => reply.clone(),
        other => panic!("expected a single scheduled reply, got {other:?}"),
    }
}

#[test]
fn initial_state_has_seeded_active_script() {
    let store = new_store();
    let state = store.state();
    assert_eq!(state.workspace.active_path(), Some("src/App.js"));
    assert_eq!(state.workspace.open_paths(), ["src/App.js".to_string()]);
    assert_eq!(state.ui.focus, FocusTarget::Editor);
    assert!(state.assistant.visible);
}

#[test]
fn select_then_close_scenario() {
    let mut store = new_store();
    store.dispatch(Action::CloseFile("src/App.js".to_string()));
    assert_eq!(store.state().workspace.active_path(), None);

    store.dispatch(Action::SelectFile("a.js".to_string()));
    store.dispatch(Action::SelectFile("b.py".to_string()));
    let ws = &store.state().workspace;
    assert_eq!(ws.open_paths(), ["a.js".to_string(), "b.py".to_string()]);
    assert_eq!(ws.active_path(), Some("b.py"));

    store.dispatch(Action::CloseFile("b.py".to_string()));
    let ws = &store.state().workspace;
    assert_eq!(ws.open_paths(), ["a.js".to_string()]);
    assert_eq!(ws.active_path(), Some("a.js"));
    assert_eq!(ws.content("b.py"), Some(default_template("b.py").as_str()));
}

#[test]
fn close_active_file_without_active_is_noop() {
    let mut store = new_store();
    assert!(store.dispatch(Action::CloseActiveFile).state_changed);
    assert!(!store.dispatch(Action::CloseActiveFile).state_changed);
    assert!(store.state().workspace.open_paths().is_empty());
}

#[test]
fn editor_action_writes_through_workspace() {
    let mut store = new_store();
    store.dispatch(Action::SelectFile("notes.txt".to_string()));
    let before = store.state().workspace.content("notes.txt").unwrap().to_string();

    let result = store.dispatch(Action::Editor(EditorAction::InsertChar('x')));
    assert!(result.state_changed);
    assert!(result.effects.is_empty());

    let after = store.state().workspace.content("notes.txt").unwrap();
    assert_eq!(after, format!("x{before}"));
}

#[test]
fn update_content_for_unknown_path_keeps_key_set() {
    let mut store = new_store();
    let before = store.state().workspace.documents_len();
    let result = store.dispatch(Action::UpdateContent {
        path: "ghost.js".to_string(),
        text: "x".to_string(),
    });
    assert!(!result.state_changed);
    assert_eq!(store.state().workspace.documents_len(), before);
}

#[test]
fn explorer_double_click_opens_file() {
    let mut store = new_store();
    let row = store
        .state()
        .explorer
        .rows
        .iter()
        .position(|r| r.name == "index.js")
        .unwrap();
    let now = Instant::now();

    let first = store.dispatch(Action::ExplorerClickRow { row, now });
    assert!(first.state_changed);
    assert_eq!(store.state().workspace.active_path(), Some("src/App.js"));

    store.dispatch(Action::ExplorerClickRow {
        row,
        now: now + Duration::from_millis(100),
    });
    let ws = &store.state().workspace;
    assert_eq!(ws.active_path(), Some("src/index.js"));
    assert_eq!(
        ws.content("src/index.js"),
        Some(default_template("src/index.js").as_str())
    );
}

#[test]
fn explorer_activate_on_folder_toggles_it() {
    let mut store = new_store();
    let before = store.state().explorer.rows.len();

    store.dispatch(Action::ExplorerMoveSelection { delta: 1 });
    let selected = store.state().explorer.selected_row().unwrap();
    assert_eq!(store.state().explorer.rows[selected].name, "public");

    assert!(store.dispatch(Action::ExplorerActivate).state_changed);
    assert_eq!(store.state().explorer.rows.len(), before + 1);
    assert!(store.dispatch(Action::ExplorerCollapse).state_changed);
    assert_eq!(store.state().explorer.rows.len(), before);
}

#[test]
fn terminal_actions_run_commands() {
    let mut store = new_store();
    for ch in "echo Hi There".chars() {
        store.dispatch(Action::TerminalInput(ch));
    }
    assert!(store.dispatch(Action::TerminalSubmit).state_changed);

    let terminal = &store.state().terminal;
    let last = terminal.log().last().unwrap();
    assert_eq!(last.kind, TerminalLineKind::Output);
    assert_eq!(last.text, "Hi There");
    assert!(terminal.input.is_empty());

    assert!(store.dispatch(Action::TerminalHistoryPrev).state_changed);
    assert_eq!(store.state().terminal.input, "echo Hi There");
}

#[test]
fn history_recall_reports_change_only_when_it_moves() {
    let mut store = new_store();
    for line in ["ls", "pwd"] {
        for ch in line.chars() {
            store.dispatch(Action::TerminalInput(ch));
        }
        store.dispatch(Action::TerminalSubmit);
    }

    assert!(store.dispatch(Action::TerminalHistoryPrev).state_changed);
    assert!(store.dispatch(Action::TerminalHistoryPrev).state_changed);
    assert_eq!(store.state().terminal.input, "ls");
    assert!(!store.dispatch(Action::TerminalHistoryPrev).state_changed);

    assert!(store.dispatch(Action::TerminalHistoryNext).state_changed);
    assert!(store.dispatch(Action::TerminalHistoryNext).state_changed);
    assert!(store.state().terminal.input.is_empty());
    assert!(!store.dispatch(Action::TerminalHistoryNext).state_changed);
}

#[test]
fn assistant_submit_schedules_reply() {
    let mut store = new_store();
    type_into_assistant(&mut store, "please review this");

    let result = store.dispatch(Action::AssistantSubmit);
    assert!(result.state_changed);
    let reply = scheduled_reply(&result);
    assert!(reply.delay >= Duration::from_millis(10));
    assert!(reply.delay <= Duration::from_millis(20));
    assert!(store.state().assistant.is_waiting());
    assert!(store.state().assistant.input.is_empty());

    let last = store.state().assistant.transcript().last().unwrap();
    assert_eq!(last.role, ChatRole::User);
    assert_eq!(last.text, "please review this");
}

#[test]
fn blank_assistant_submit_emits_nothing() {
    let mut store = new_store();
    type_into_assistant(&mut store, "   ");
    let result = store.dispatch(Action::AssistantSubmit);
    assert!(result.effects.is_empty());
    assert!(!store.state().assistant.is_waiting());
}

#[test]
fn late_reply_lands_after_panel_is_hidden() {
    let mut store = new_store();
    type_into_assistant(&mut store, "explain this");
    let reply = scheduled_reply(&store.dispatch(Action::AssistantSubmit));

    store.dispatch(Action::AssistantToggle);
    assert!(!store.state().assistant.visible);

    let len = store.state().assistant.transcript().len();
    let result = store.dispatch(Action::AssistantReplyArrived {
        request_id: reply.request_id,
        outcome: reply.outcome.clone(),
    });
    assert!(result.state_changed);
    let transcript = store.state().assistant.transcript();
    assert_eq!(transcript.len(), len + 1);
    assert_eq!(transcript[len].role, ChatRole::Assistant);
    assert_eq!(Ok(transcript[len].text.clone()), reply.outcome);
}

#[test]
fn failed_reply_becomes_fallback_and_unknown_ids_are_dropped() {
    let mut store = new_store();
    type_into_assistant(&mut store, "optimize");
    let reply = scheduled_reply(&store.dispatch(Action::AssistantSubmit));

    let unknown = store.dispatch(Action::AssistantReplyArrived {
        request_id: reply.request_id + 100,
        outcome: Ok("stray".to_string()),
    });
    assert!(!unknown.state_changed);

    store.dispatch(Action::AssistantReplyArrived {
        request_id: reply.request_id,
        outcome: Err(AssistantError::SimulatedFailure),
    });
    let last = store.state().assistant.transcript().last().unwrap();
    assert_eq!(last.text, FALLBACK_REPLY);
    assert!(!store.state().assistant.is_waiting());
}

#[test]
fn full_failure_rate_always_fails() {
    let mut settings = Settings::default();
    settings.assistant.seed = Some(1);
    settings.assistant.failure_rate = 1.0;
    let mut store = Store::new(AppState::new(&settings));

    type_into_assistant(&mut store, "generate a loop");
    let reply = scheduled_reply(&store.dispatch(Action::AssistantSubmit));
    assert_eq!(reply.outcome, Err(AssistantError::SimulatedFailure));
}

#[test]
fn cycle_focus_skips_hidden_assistant() {
    let mut store = new_store();
    store.dispatch(Action::SetFocus(FocusTarget::Terminal));
    store.dispatch(Action::CycleFocus);
    assert_eq!(store.state().ui.focus, FocusTarget::Assistant);

    store.dispatch(Action::AssistantToggle);
    assert_eq!(store.state().ui.focus, FocusTarget::Editor);

    store.dispatch(Action::SetFocus(FocusTarget::Terminal));
    store.dispatch(Action::CycleFocus);
    assert_eq!(store.state().ui.focus, FocusTarget::Explorer);
}

#[test]
fn focusing_hidden_assistant_shows_it() {
    let mut store = new_store();
    store.dispatch(Action::AssistantToggle);
    assert!(store.dispatch(Action::SetFocus(FocusTarget::Assistant)).state_changed);
    assert!(store.state().assistant.visible);
    assert_eq!(store.state().ui.focus, FocusTarget::Assistant);
}

#[test]
fn quit_sets_flag() {
    let mut store = new_store();
    store.dispatch(Action::Quit);
    assert!(store.state().ui.should_quit);
}

#[test]
fn commands_route_to_focused_components() {
    use crate::core::Command;

    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::FocusTerminal));
    assert_eq!(store.state().ui.focus, FocusTarget::Terminal);

    store.dispatch(Action::RunCommand(Command::CloseTab));
    assert_eq!(store.state().workspace.active_path(), None);

    store.dispatch(Action::RunCommand(Command::ExplorerDown));
    let row = store.state().explorer.selected_row().unwrap();
    assert_eq!(store.state().explorer.rows[row].name, "public");

    store.dispatch(Action::RunCommand(Command::Quit));
    assert!(store.state().ui.should_quit);
}

#[test]
fn assistant_scroll_is_bounded_by_view_size() {
    let mut store = new_store();
    let resized = store.dispatch(Action::AssistantSetViewSize {
        width: 30,
        height: 3,
    });
    assert!(resized.state_changed);

    for _ in 0..100 {
        store.dispatch(Action::AssistantScroll { delta: 5 });
    }
    let assistant = &store.state().assistant;
    assert_eq!(assistant.scroll_offset, assistant.max_scroll());
    assert!(!store.dispatch(Action::AssistantScroll { delta: 5 }).state_changed);
    assert!(store.dispatch(Action::AssistantScroll { delta: -1 }).state_changed);
}
