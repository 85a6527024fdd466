//! Command system: semantic command definitions.
//!
//! Commands are what key bindings resolve to. They carry no knowledge of keys and are
//! reduced by the kernel store.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== Cursor ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,

    // ==================== Editing ====================
    InsertChar(char),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,

    // ==================== Scrolling ====================
    PageUp,
    PageDown,

    // ==================== Tabs ====================
    CloseTab,
    NextTab,
    PrevTab,

    // ==================== Explorer ====================
    ExplorerUp,
    ExplorerDown,
    ExplorerActivate,
    ExplorerCollapse,
    ExplorerScrollUp,
    ExplorerScrollDown,

    // ==================== Terminal ====================
    TerminalSubmit,
    TerminalBackspace,
    TerminalCursorLeft,
    TerminalCursorRight,
    TerminalHistoryPrev,
    TerminalHistoryNext,
    TerminalScrollUp,
    TerminalScrollDown,

    // ==================== Assistant ====================
    AssistantSubmit,
    AssistantBackspace,
    AssistantScrollUp,
    AssistantScrollDown,
    ToggleAssistant,

    // ==================== View ====================
    FocusNext,
    FocusExplorer,
    FocusEditor,
    FocusTerminal,
    FocusAssistant,

    // ==================== System ====================
    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::InsertChar(_) => "insertChar",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::CloseTab => "closeTab",
            Command::NextTab => "nextTab",
            Command::PrevTab => "prevTab",
            Command::ExplorerUp => "explorerUp",
            Command::ExplorerDown => "explorerDown",
            Command::ExplorerActivate => "explorerActivate",
            Command::ExplorerCollapse => "explorerCollapse",
            Command::ExplorerScrollUp => "explorerScrollUp",
            Command::ExplorerScrollDown => "explorerScrollDown",
            Command::TerminalSubmit => "terminalSubmit",
            Command::TerminalBackspace => "terminalBackspace",
            Command::TerminalCursorLeft => "terminalCursorLeft",
            Command::TerminalCursorRight => "terminalCursorRight",
            Command::TerminalHistoryPrev => "terminalHistoryPrev",
            Command::TerminalHistoryNext => "terminalHistoryNext",
            Command::TerminalScrollUp => "terminalScrollUp",
            Command::TerminalScrollDown => "terminalScrollDown",
            Command::AssistantSubmit => "assistantSubmit",
            Command::AssistantBackspace => "assistantBackspace",
            Command::AssistantScrollUp => "assistantScrollUp",
            Command::AssistantScrollDown => "assistantScrollDown",
            Command::ToggleAssistant => "toggleAssistant",
            Command::FocusNext => "focusNext",
            Command::FocusExplorer => "focusExplorer",
            Command::FocusEditor => "focusEditor",
            Command::FocusTerminal => "focusTerminal",
            Command::FocusAssistant => "focusAssistant",
            Command::Quit => "quit",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
