use super::{Action, AppState, Effect, FocusTarget};

mod assistant;
mod command;
mod explorer;
mod terminal;
mod workspace;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::SelectFile(_)
            | Action::CloseFile(_)
            | Action::SetActiveFile(_)
            | Action::UpdateContent { .. }
            | Action::CloseActiveFile
            | Action::NextTab
            | Action::PrevTab => self.reduce_workspace_action(action),
            Action::Editor(editor_action) => DispatchResult::changed(
                self.state
                    .editor
                    .dispatch_action(&mut self.state.workspace, editor_action),
            ),
            Action::ExplorerSetViewHeight { .. }
            | Action::ExplorerMoveSelection { .. }
            | Action::ExplorerScroll { .. }
            | Action::ExplorerActivate
            | Action::ExplorerCollapse
            | Action::ExplorerClickRow { .. } => self.reduce_explorer_action(action),
            Action::TerminalInput(_)
            | Action::TerminalBackspace
            | Action::TerminalCursorLeft
            | Action::TerminalCursorRight
            | Action::TerminalSubmit
            | Action::TerminalHistoryPrev
            | Action::TerminalHistoryNext
            | Action::TerminalScroll { .. } => self.reduce_terminal_action(action),
            Action::AssistantInput(_)
            | Action::AssistantBackspace
            | Action::AssistantSubmit
            | Action::AssistantScroll { .. }
            | Action::AssistantSetViewSize { .. }
            | Action::AssistantReplyArrived { .. }
            | Action::AssistantToggle => self.reduce_assistant_action(action),
            Action::SetFocus(target) => DispatchResult::changed(self.set_focus(target)),
            Action::CycleFocus => {
                let mut next = self.state.ui.focus.next();
                if next == FocusTarget::Assistant && !self.state.assistant.visible {
                    next = next.next();
                }
                DispatchResult::changed(self.set_focus(next))
            }
            Action::Quit => {
                self.state.ui.should_quit = true;
                DispatchResult::changed(true)
            }
        }
    }

    fn set_focus(&mut self, target: FocusTarget) -> bool {
        let mut changed = false;
        if target == FocusTarget::Assistant && !self.state.assistant.visible {
            self.state.assistant.visible = true;
            changed = true;
        }
        if self.state.ui.focus != target {
            self.state.ui.focus = target;
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
