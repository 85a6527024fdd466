use std::time::Instant;

use crate::core::Command;
use crate::kernel::assistant::{AssistantError, RequestId};
use crate::kernel::editor::EditorAction;
use crate::kernel::state::FocusTarget;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    SelectFile(String),
    CloseFile(String),
    SetActiveFile(String),
    UpdateContent {
        path: String,
        text: String,
    },
    CloseActiveFile,
    NextTab,
    PrevTab,
    Editor(EditorAction),
    ExplorerSetViewHeight {
        height: usize,
    },
    ExplorerMoveSelection {
        delta: isize,
    },
    ExplorerScroll {
        delta: isize,
    },
    ExplorerActivate,
    ExplorerCollapse,
    ExplorerClickRow {
        row: usize,
        now: Instant,
    },
    TerminalInput(char),
    TerminalBackspace,
    TerminalCursorLeft,
    TerminalCursorRight,
    TerminalSubmit,
    TerminalHistoryPrev,
    TerminalHistoryNext,
    TerminalScroll {
        delta: isize,
    },
    AssistantInput(char),
    AssistantBackspace,
    AssistantSubmit,
    AssistantScroll {
        delta: isize,
    },
    AssistantSetViewSize {
        width: usize,
        height: usize,
    },
    AssistantReplyArrived {
        request_id: RequestId,
        outcome: Result<String, AssistantError>,
    },
    AssistantToggle,
    SetFocus(FocusTarget),
    CycleFocus,
    Quit,
}
