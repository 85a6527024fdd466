use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_terminal_action(&mut self, action: Action) -> super::DispatchResult {
        let terminal = &mut self.state.terminal;
        let state_changed = match action {
            Action::TerminalInput(ch) => terminal.insert_char(ch),
            Action::TerminalBackspace => terminal.backspace(),
            Action::TerminalCursorLeft => terminal.move_input_cursor(-1),
            Action::TerminalCursorRight => terminal.move_input_cursor(1),
            Action::TerminalSubmit => terminal.submit_input(),
            Action::TerminalHistoryPrev => {
                let (cursor, input) = (terminal.history_cursor(), terminal.input.clone());
                terminal.history_prev();
                terminal.history_cursor() != cursor || terminal.input != input
            }
            Action::TerminalHistoryNext => {
                let (cursor, input) = (terminal.history_cursor(), terminal.input.clone());
                terminal.history_next();
                terminal.history_cursor() != cursor || terminal.input != input
            }
            Action::TerminalScroll { delta } => terminal.scroll(delta),
            _ => false,
        };
        super::DispatchResult::changed(state_changed)
    }
}
