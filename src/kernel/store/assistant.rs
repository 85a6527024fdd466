use crate::kernel::language::LanguageId;
use crate::kernel::{Action, Effect, FocusTarget};

impl super::Store {
    pub(super) fn reduce_assistant_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::AssistantInput(ch) => {
                super::DispatchResult::changed(self.state.assistant.insert_char(ch))
            }
            Action::AssistantBackspace => {
                super::DispatchResult::changed(self.state.assistant.backspace())
            }
            Action::AssistantScroll { delta } => {
                super::DispatchResult::changed(self.state.assistant.scroll(delta))
            }
            Action::AssistantSetViewSize { width, height } => super::DispatchResult::changed(
                self.state.assistant.set_view_size(width, height),
            ),
            Action::AssistantSubmit => {
                let workspace = &self.state.workspace;
                let language = workspace
                    .active_path()
                    .map(LanguageId::from_path)
                    .unwrap_or(LanguageId::PlainText);
                let context = workspace.active_content().unwrap_or("");

                let had_input = !self.state.assistant.input.is_empty();
                match self.state.assistant.submit_input(language, context) {
                    Some(reply) => super::DispatchResult {
                        effects: vec![Effect::ScheduleAssistantReply(reply)],
                        state_changed: true,
                    },
                    None => super::DispatchResult::changed(had_input),
                }
            }
            Action::AssistantReplyArrived {
                request_id,
                outcome,
            } => super::DispatchResult::changed(
                self.state.assistant.receive_reply(request_id, outcome),
            ),
            Action::AssistantToggle => {
                let assistant = &mut self.state.assistant;
                assistant.visible = !assistant.visible;
                if !assistant.visible && self.state.ui.focus == FocusTarget::Assistant {
                    self.state.ui.focus = FocusTarget::Editor;
                }
                super::DispatchResult::changed(true)
            }
            _ => super::DispatchResult::changed(false),
        }
    }
}
