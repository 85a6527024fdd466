use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_workspace_action(&mut self, action: Action) -> super::DispatchResult {
        let workspace = &mut self.state.workspace;
        let state_changed = match action {
            Action::SelectFile(path) => {
                let changed = workspace.select_file(&path);
                self.state.explorer.reveal_path(&path);
                changed
            }
            Action::CloseFile(path) => workspace.close_file(&path),
            Action::SetActiveFile(path) => workspace.set_active_file(&path),
            Action::UpdateContent { path, text } => workspace.update_content(&path, text),
            Action::CloseActiveFile => match workspace.active_path().map(str::to_string) {
                Some(path) => workspace.close_file(&path),
                None => false,
            },
            Action::NextTab => workspace.activate_next_tab(),
            Action::PrevTab => workspace.activate_prev_tab(),
            _ => false,
        };

        if state_changed {
            tracing::debug!(
                active = self.state.workspace.active_path().unwrap_or("<none>"),
                open = self.state.workspace.open_paths().len(),
                "workspace updated"
            );
        }

        super::DispatchResult::changed(state_changed)
    }
}
