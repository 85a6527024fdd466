//! Cursor tracking and text edits for the document editor.
//!
//! Documents are plain `String`s owned by [`Workspace`]; every edit here computes the new
//! full text and hands it back through [`Workspace::update_content`].

use rustc_hash::FxHashMap;
use unicode_segmentation::UnicodeSegmentation;

use super::workspace::Workspace;

const DEFAULT_TAB_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorPos {
    pub line: usize,
    /// Column in grapheme clusters.
    pub col: usize,
}

impl CursorPos {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    InsertChar(char),
    InsertText(String),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    Scroll { delta: isize },
    SetViewHeight { height: usize },
}

#[derive(Debug, Clone)]
pub struct EditorState {
    cursors: FxHashMap<String, CursorPos>,
    scroll: FxHashMap<String, usize>,
    pub view_height: usize,
    pub tab_size: usize,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            cursors: FxHashMap::default(),
            scroll: FxHashMap::default(),
            view_height: 20,
            tab_size: DEFAULT_TAB_SIZE,
        }
    }
}

impl EditorState {
    pub fn new(tab_size: usize) -> Self {
        Self {
            tab_size: tab_size.max(1),
            ..Self::default()
        }
    }

    pub fn cursor(&self, path: &str) -> CursorPos {
        self.cursors.get(path).copied().unwrap_or_default()
    }

    pub fn scroll_offset(&self, path: &str) -> usize {
        self.scroll.get(path).copied().unwrap_or(0)
    }

    /// Applies `action` to the active document. Returns whether anything changed.
    pub fn dispatch_action(&mut self, workspace: &mut Workspace, action: EditorAction) -> bool {
        if let EditorAction::SetViewHeight { height } = action {
            let height = height.max(1);
            if self.view_height == height {
                return false;
            }
            self.view_height = height;
            return true;
        }

        let Some(path) = workspace.active_path().map(str::to_string) else {
            return false;
        };
        let Some(text) = workspace.content(&path) else {
            return false;
        };

        let cursor = clamp_cursor(text, self.cursor(&path));

        match action {
            EditorAction::InsertChar(ch) => {
                let mut buf = [0u8; 4];
                self.insert(workspace, &path, cursor, ch.encode_utf8(&mut buf))
            }
            EditorAction::InsertText(s) => self.insert(workspace, &path, cursor, &s),
            EditorAction::InsertNewline => self.insert(workspace, &path, cursor, "\n"),
            EditorAction::InsertTab => {
                let spaces = " ".repeat(self.tab_size);
                self.insert(workspace, &path, cursor, &spaces)
            }
            EditorAction::DeleteBackward => self.delete_backward(workspace, &path, cursor),
            EditorAction::DeleteForward => self.delete_forward(workspace, &path, cursor),
            EditorAction::Scroll { delta } => {
                let max = line_count(text).saturating_sub(1);
                let prev = self.scroll_offset(&path);
                let next = if delta < 0 {
                    prev.saturating_sub(delta.unsigned_abs())
                } else {
                    prev.saturating_add(delta as usize).min(max)
                };
                self.scroll.insert(path, next);
                next != prev
            }
            EditorAction::SetViewHeight { .. } => false,
            movement => {
                let next = move_cursor(text, cursor, &movement);
                self.set_cursor(&path, next)
            }
        }
    }

    fn insert(&mut self, workspace: &mut Workspace, path: &str, cursor: CursorPos, s: &str) -> bool {
        let Some(text) = workspace.content(path) else {
            return false;
        };
        let offset = byte_offset(text, cursor);
        let mut next = String::with_capacity(text.len() + s.len());
        next.push_str(&text[..offset]);
        next.push_str(s);
        next.push_str(&text[offset..]);

        let new_cursor = pos_from_byte(&next, offset + s.len());
        if !workspace.update_content(path, next) {
            return false;
        }
        self.set_cursor(path, new_cursor);
        true
    }

    fn delete_backward(&mut self, workspace: &mut Workspace, path: &str, cursor: CursorPos) -> bool {
        let Some(text) = workspace.content(path) else {
            return false;
        };
        let end = byte_offset(text, cursor);
        if end == 0 {
            return false;
        }
        let start = if cursor.col > 0 {
            line_start(text, cursor.line) + grapheme_byte(line_at(text, cursor.line), cursor.col - 1)
        } else {
            end - 1
        };
        self.remove_range(workspace, path, start, end)
    }

    fn delete_forward(&mut self, workspace: &mut Workspace, path: &str, cursor: CursorPos) -> bool {
        let Some(text) = workspace.content(path) else {
            return false;
        };
        let start = byte_offset(text, cursor);
        if start >= text.len() {
            return false;
        }
        let line = line_at(text, cursor.line);
        let end = if cursor.col < grapheme_len(line) {
            line_start(text, cursor.line) + grapheme_byte(line, cursor.col + 1)
        } else {
            start + 1
        };
        self.remove_range(workspace, path, start, end)
    }

    fn remove_range(
        &mut self,
        workspace: &mut Workspace,
        path: &str,
        start: usize,
        end: usize,
    ) -> bool {
        let Some(text) = workspace.content(path) else {
            return false;
        };
        let mut next = String::with_capacity(text.len());
        next.push_str(&text[..start]);
        next.push_str(&text[end..]);

        let new_cursor = pos_from_byte(&next, start);
        if !workspace.update_content(path, next) {
            return false;
        }
        self.set_cursor(path, new_cursor);
        true
    }

    fn set_cursor(&mut self, path: &str, cursor: CursorPos) -> bool {
        let prev = self.cursors.insert(path.to_string(), cursor);
        let scroll_changed = self.keep_cursor_visible(path, cursor);
        prev != Some(cursor) || scroll_changed
    }

    fn keep_cursor_visible(&mut self, path: &str, cursor: CursorPos) -> bool {
        let height = self.view_height.max(1);
        let prev = self.scroll_offset(path);
        let next = if cursor.line < prev {
            cursor.line
        } else if cursor.line >= prev + height {
            cursor.line + 1 - height
        } else {
            prev
        };
        if next == prev {
            return false;
        }
        self.scroll.insert(path.to_string(), next);
        true
    }
}

fn move_cursor(text: &str, cursor: CursorPos, action: &EditorAction) -> CursorPos {
    let last_line = line_count(text) - 1;
    let line_len = |line: usize| grapheme_len(line_at(text, line));

    match action {
        EditorAction::CursorLeft => {
            if cursor.col > 0 {
                CursorPos::new(cursor.line, cursor.col - 1)
            } else if cursor.line > 0 {
                CursorPos::new(cursor.line - 1, line_len(cursor.line - 1))
            } else {
                cursor
            }
        }
        EditorAction::CursorRight => {
            if cursor.col < line_len(cursor.line) {
                CursorPos::new(cursor.line, cursor.col + 1)
            } else if cursor.line < last_line {
                CursorPos::new(cursor.line + 1, 0)
            } else {
                cursor
            }
        }
        EditorAction::CursorUp if cursor.line > 0 => {
            let line = cursor.line - 1;
            CursorPos::new(line, cursor.col.min(line_len(line)))
        }
        EditorAction::CursorDown if cursor.line < last_line => {
            let line = cursor.line + 1;
            CursorPos::new(line, cursor.col.min(line_len(line)))
        }
        EditorAction::CursorLineStart => CursorPos::new(cursor.line, 0),
        EditorAction::CursorLineEnd => CursorPos::new(cursor.line, line_len(cursor.line)),
        _ => cursor,
    }
}

pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

pub fn line_at(text: &str, line: usize) -> &str {
    text.split('\n').nth(line).unwrap_or("")
}

fn line_start(text: &str, line: usize) -> usize {
    if line == 0 {
        return 0;
    }
    text.match_indices('\n')
        .nth(line - 1)
        .map(|(i, _)| i + 1)
        .unwrap_or(text.len())
}

fn grapheme_len(line: &str) -> usize {
    line.graphemes(true).count()
}

fn grapheme_byte(line: &str, col: usize) -> usize {
    line.grapheme_indices(true)
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

fn clamp_cursor(text: &str, cursor: CursorPos) -> CursorPos {
    let line = cursor.line.min(line_count(text) - 1);
    let col = cursor.col.min(grapheme_len(line_at(text, line)));
    CursorPos::new(line, col)
}

fn byte_offset(text: &str, cursor: CursorPos) -> usize {
    line_start(text, cursor.line) + grapheme_byte(line_at(text, cursor.line), cursor.col)
}

fn pos_from_byte(text: &str, byte: usize) -> CursorPos {
    let byte = byte.min(text.len());
    let prefix = &text[..byte];
    let line = prefix.matches('\n').count();
    let start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
    CursorPos::new(line, grapheme_len(&prefix[start..]))
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/editor.rs"]
mod tests;
