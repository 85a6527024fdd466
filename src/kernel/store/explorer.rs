use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        let (state_changed, open) = match action {
            Action::ExplorerSetViewHeight { height } => {
                (self.state.explorer.set_view_height(height), None)
            }
            Action::ExplorerMoveSelection { delta } => {
                (self.state.explorer.move_selection(delta), None)
            }
            Action::ExplorerScroll { delta } => (self.state.explorer.scroll(delta), None),
            Action::ExplorerActivate => self.state.explorer.activate_selected(),
            Action::ExplorerCollapse => (self.state.explorer.collapse_selected(), None),
            Action::ExplorerClickRow { row, now } => self.state.explorer.click_row(row, now),
            _ => (false, None),
        };

        let opened = match open {
            Some(path) => {
                tracing::debug!(path = %path, "open from explorer");
                self.state.workspace.select_file(&path)
            }
            None => false,
        };

        super::DispatchResult::changed(state_changed || opened)
    }
}
