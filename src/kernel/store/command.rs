use crate::core::Command;
use crate::kernel::{Action, EditorAction, FocusTarget};

impl super::Store {
    pub(super) fn dispatch_command(&mut self, command: Command) -> super::DispatchResult {
        let action = match command {
            Command::CursorLeft => Action::Editor(EditorAction::CursorLeft),
            Command::CursorRight => Action::Editor(EditorAction::CursorRight),
            Command::CursorUp => Action::Editor(EditorAction::CursorUp),
            Command::CursorDown => Action::Editor(EditorAction::CursorDown),
            Command::CursorLineStart => Action::Editor(EditorAction::CursorLineStart),
            Command::CursorLineEnd => Action::Editor(EditorAction::CursorLineEnd),
            Command::InsertChar(ch) => Action::Editor(EditorAction::InsertChar(ch)),
            Command::InsertNewline => Action::Editor(EditorAction::InsertNewline),
            Command::InsertTab => Action::Editor(EditorAction::InsertTab),
            Command::DeleteBackward => Action::Editor(EditorAction::DeleteBackward),
            Command::DeleteForward => Action::Editor(EditorAction::DeleteForward),
            Command::PageUp => Action::Editor(EditorAction::Scroll {
                delta: -(self.state.editor.view_height as isize),
            }),
            Command::PageDown => Action::Editor(EditorAction::Scroll {
                delta: self.state.editor.view_height as isize,
            }),
            Command::CloseTab => Action::CloseActiveFile,
            Command::NextTab => Action::NextTab,
            Command::PrevTab => Action::PrevTab,
            Command::ExplorerUp => Action::ExplorerMoveSelection { delta: -1 },
            Command::ExplorerDown => Action::ExplorerMoveSelection { delta: 1 },
            Command::ExplorerActivate => Action::ExplorerActivate,
            Command::ExplorerCollapse => Action::ExplorerCollapse,
            Command::ExplorerScrollUp => Action::ExplorerScroll {
                delta: -(self.state.explorer.view_height as isize),
            },
            Command::ExplorerScrollDown => Action::ExplorerScroll {
                delta: self.state.explorer.view_height as isize,
            },
            Command::TerminalSubmit => Action::TerminalSubmit,
            Command::TerminalBackspace => Action::TerminalBackspace,
            Command::TerminalCursorLeft => Action::TerminalCursorLeft,
            Command::TerminalCursorRight => Action::TerminalCursorRight,
            Command::TerminalHistoryPrev => Action::TerminalHistoryPrev,
            Command::TerminalHistoryNext => Action::TerminalHistoryNext,
            Command::TerminalScrollUp => Action::TerminalScroll { delta: 5 },
            Command::TerminalScrollDown => Action::TerminalScroll { delta: -5 },
            Command::AssistantSubmit => Action::AssistantSubmit,
            Command::AssistantBackspace => Action::AssistantBackspace,
            Command::AssistantScrollUp => Action::AssistantScroll { delta: 5 },
            Command::AssistantScrollDown => Action::AssistantScroll { delta: -5 },
            Command::ToggleAssistant => Action::AssistantToggle,
            Command::FocusNext => Action::CycleFocus,
            Command::FocusExplorer => Action::SetFocus(FocusTarget::Explorer),
            Command::FocusEditor => Action::SetFocus(FocusTarget::Editor),
            Command::FocusTerminal => Action::SetFocus(FocusTarget::Terminal),
            Command::FocusAssistant => Action::SetFocus(FocusTarget::Assistant),
            Command::Quit => Action::Quit,
        };
        self.dispatch(action)
    }
}
