use rustc_hash::FxHashMap;
use std::time::Instant;

use crate::kernel::services::ports::settings::{ExplorerSource, Settings};
use crate::models::{FileTree, FileTreeRow, NodeId};

use super::assistant::AssistantState;
use super::editor::EditorState;
use super::terminal::TerminalState;
use super::workspace::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Explorer,
    Editor,
    Terminal,
    Assistant,
}

impl FocusTarget {
    /// Next pane in tab order. Hidden panes are skipped by the caller.
    pub fn next(self) -> Self {
        match self {
            FocusTarget::Explorer => FocusTarget::Editor,
            FocusTarget::Editor => FocusTarget::Terminal,
            FocusTarget::Terminal => FocusTarget::Assistant,
            FocusTarget::Assistant => FocusTarget::Explorer,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: FocusTarget,
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: FocusTarget::Editor,
            should_quit: false,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub ui: UiState,
    pub workspace: Workspace,
    pub explorer: ExplorerState,
    pub editor: EditorState,
    pub terminal: TerminalState,
    pub assistant: AssistantState,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let workspace = Workspace::seeded(settings.workspace.edit_routing);
        let tree = match settings.workspace.explorer {
            ExplorerSource::Sample => FileTree::sample_project(),
            ExplorerSource::Documents => {
                let mut tree = FileTree::from_paths("workspace", workspace.paths());
                if let Some(active) = workspace.active_path() {
                    tree.reveal(active);
                }
                tree
            }
        };

        Self {
            ui: UiState::default(),
            workspace,
            explorer: ExplorerState::new(tree),
            editor: EditorState::new(settings.editor.tab_size),
            terminal: TerminalState::new(
                settings.terminal.prompt.clone(),
                settings.terminal.scrollback_lines,
            ),
            assistant: AssistantState::new(&settings.assistant),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

pub struct ExplorerState {
    tree: FileTree,
    pub view_height: usize,
    pub scroll_offset: usize,
    pub rows: Vec<FileTreeRow>,
    index_by_id: FxHashMap<NodeId, usize>,
    last_click: Option<(Instant, NodeId)>,
}

impl std::fmt::Debug for ExplorerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplorerState")
            .field("scroll_offset", &self.scroll_offset)
            .field("rows_len", &self.rows.len())
            .field("selected", &self.tree.selected())
            .finish()
    }
}

impl ExplorerState {
    const DOUBLE_CLICK_MS: u64 = 300;

    pub fn new(tree: FileTree) -> Self {
        let mut state = Self {
            tree,
            view_height: 10,
            scroll_offset: 0,
            rows: Vec::new(),
            index_by_id: FxHashMap::default(),
            last_click: None,
        };
        state.refresh_rows();
        state
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.tree.selected()
    }

    pub fn selected_row(&self) -> Option<usize> {
        let id = self.tree.selected()?;
        self.index_by_id.get(&id).copied()
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;

        match self.selected_row() {
            Some(index) => self.keep_row_visible(index),
            None => self.clamp_scroll(),
        }

        true
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }

        let Some(current_index) = self.selected_row() else {
            let new_index = if delta < 0 { self.rows.len() - 1 } else { 0 };
            self.tree.set_selected(Some(self.rows[new_index].id));
            self.keep_row_visible(new_index);
            return true;
        };

        let new_index = if delta < 0 {
            current_index.saturating_sub(delta.unsigned_abs())
        } else {
            (current_index + delta as usize).min(self.rows.len() - 1)
        };

        if new_index == current_index {
            return false;
        }

        self.tree.set_selected(Some(self.rows[new_index].id));
        self.keep_row_visible(new_index);
        true
    }

    pub fn scroll(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }

        let max_scroll = self.rows.len().saturating_sub(self.view_height.max(1));
        let prev = self.scroll_offset;

        if delta > 0 {
            self.scroll_offset = (self.scroll_offset + delta as usize).min(max_scroll);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub(delta.unsigned_abs());
        }

        self.scroll_offset != prev
    }

    /// Folders toggle; files yield the workspace path to open.
    pub fn activate_selected(&mut self) -> (bool, Option<String>) {
        let Some(id) = self.tree.selected() else {
            return (false, None);
        };
        self.activate(id)
    }

    pub fn collapse_selected(&mut self) -> bool {
        let Some(id) = self.tree.selected() else {
            return false;
        };
        if self.tree.is_dir(id) && self.tree.is_expanded(id) {
            self.tree.collapse(id);
            self.refresh_rows();
            return true;
        }
        false
    }

    /// Single click selects, a second click on the same row within the double-click
    /// window activates it.
    pub fn click_row(&mut self, row: usize, now: Instant) -> (bool, Option<String>) {
        if row >= self.rows.len() {
            return (false, None);
        }

        let node_id = self.rows[row].id;
        let is_double_click = self.last_click.is_some_and(|(last_time, last_id)| {
            last_id == node_id
                && now.duration_since(last_time).as_millis() as u64 <= Self::DOUBLE_CLICK_MS
        });

        if is_double_click {
            self.last_click = None;
            return self.activate(node_id);
        }

        self.last_click = Some((now, node_id));
        (self.select_row(row), None)
    }

    pub fn select_row(&mut self, row: usize) -> bool {
        if row >= self.rows.len() {
            return false;
        }

        let node_id = self.rows[row].id;
        let prev_selected = self.tree.selected();
        self.tree.set_selected(Some(node_id));
        self.keep_row_visible(row);
        prev_selected != Some(node_id)
    }

    /// Moves the selection to `path` if the tree shows it. Folders above it are expanded.
    pub fn reveal_path(&mut self, path: &str) -> bool {
        if !self.tree.reveal(path) {
            return false;
        }
        self.refresh_rows();
        if let Some(index) = self.selected_row() {
            self.keep_row_visible(index);
        }
        true
    }

    fn activate(&mut self, id: NodeId) -> (bool, Option<String>) {
        if self.tree.is_dir(id) {
            self.tree.toggle_expand(id);
            self.refresh_rows();
            return (true, None);
        }
        (false, Some(self.tree.full_path(id)))
    }

    fn refresh_rows(&mut self) {
        self.rows = self.tree.flatten_for_view();

        self.index_by_id.clear();
        self.index_by_id.reserve(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            self.index_by_id.insert(row.id, i);
        }

        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let view_height = self.view_height.max(1);
        let max_scroll = self.rows.len().saturating_sub(view_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    fn keep_row_visible(&mut self, row_index: usize) {
        let view_height = self.view_height.max(1);

        if row_index < self.scroll_offset {
            self.scroll_offset = row_index;
        } else if row_index >= self.scroll_offset + view_height {
            self.scroll_offset = row_index + 1 - view_height;
        }

        self.clamp_scroll();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
