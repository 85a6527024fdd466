//! Key bindings: key → command, with one context per focused pane.

use crate::core::event::{Key, KeyCode};
use crate::core::Command;
use crate::kernel::FocusTarget;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Explorer,
    Editor,
    Terminal,
    Assistant,
}

impl From<FocusTarget> for KeybindingContext {
    fn from(focus: FocusTarget) -> Self {
        match focus {
            FocusTarget::Explorer => Self::Explorer,
            FocusTarget::Editor => Self::Editor,
            FocusTarget::Terminal => Self::Terminal,
            FocusTarget::Assistant => Self::Assistant,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    explorer: FxHashMap<Key, Command>,
    editor: FxHashMap<Key, Command>,
    terminal: FxHashMap<Key, Command>,
    assistant: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self {
            global: default_global_keybindings(),
            explorer: default_explorer_keybindings(),
            editor: default_editor_keybindings(),
            terminal: default_terminal_keybindings(),
            assistant: default_assistant_keybindings(),
        }
    }

    /// Context bindings shadow global ones.
    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            other => self.bindings(other).get(key).or_else(|| self.global.get(key)),
        }
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Explorer => &self.explorer,
            KeybindingContext::Editor => &self.editor,
            KeybindingContext::Terminal => &self.terminal,
            KeybindingContext::Assistant => &self.assistant,
        }
    }

    /// First key bound to `command` in `context`, for hints in the status bar.
    pub fn key_for(&self, context: KeybindingContext, command: &Command) -> Option<Key> {
        let mut keys: Vec<Key> = self
            .bindings(context)
            .iter()
            .filter(|(_, c)| *c == command)
            .map(|(k, _)| *k)
            .collect();
        keys.sort_by_key(|k| k.to_string());
        keys.into_iter().next()
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('w')), Command::CloseTab);
    bindings.insert(Key::alt(KeyCode::Right), Command::NextTab);
    bindings.insert(Key::alt(KeyCode::Left), Command::PrevTab);
    bindings.insert(Key::ctrl(KeyCode::PageDown), Command::NextTab);
    bindings.insert(Key::ctrl(KeyCode::PageUp), Command::PrevTab);

    bindings.insert(Key::simple(KeyCode::F(6)), Command::FocusNext);
    bindings.insert(Key::simple(KeyCode::BackTab), Command::FocusNext);
    bindings.insert(Key::simple(KeyCode::Esc), Command::FocusEditor);
    bindings.insert(Key::ctrl(KeyCode::Char('e')), Command::FocusExplorer);
    bindings.insert(Key::ctrl(KeyCode::Char('j')), Command::FocusTerminal);
    bindings.insert(Key::ctrl(KeyCode::Char('l')), Command::FocusAssistant);
    bindings.insert(Key::ctrl(KeyCode::Char('k')), Command::ToggleAssistant);
    bindings.insert(Key::alt(KeyCode::Char('1')), Command::FocusExplorer);
    bindings.insert(Key::alt(KeyCode::Char('2')), Command::FocusEditor);
    bindings.insert(Key::alt(KeyCode::Char('3')), Command::FocusTerminal);
    bindings.insert(Key::alt(KeyCode::Char('4')), Command::FocusAssistant);

    bindings
}

fn default_explorer_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::simple(KeyCode::Up), Command::ExplorerUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::ExplorerDown);
    bindings.insert(Key::simple(KeyCode::Char('k')), Command::ExplorerUp);
    bindings.insert(Key::simple(KeyCode::Char('j')), Command::ExplorerDown);
    bindings.insert(Key::simple(KeyCode::Enter), Command::ExplorerActivate);
    bindings.insert(Key::simple(KeyCode::Right), Command::ExplorerActivate);
    bindings.insert(Key::simple(KeyCode::Left), Command::ExplorerCollapse);
    bindings.insert(Key::simple(KeyCode::PageUp), Command::ExplorerScrollUp);
    bindings.insert(Key::simple(KeyCode::PageDown), Command::ExplorerScrollDown);

    bindings
}

fn default_editor_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
    bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    bindings.insert(Key::simple(KeyCode::Tab), Command::InsertTab);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);
    bindings.insert(Key::simple(KeyCode::PageUp), Command::PageUp);
    bindings.insert(Key::simple(KeyCode::PageDown), Command::PageDown);

    bindings
}

fn default_terminal_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::simple(KeyCode::Enter), Command::TerminalSubmit);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::TerminalBackspace);
    bindings.insert(Key::simple(KeyCode::Left), Command::TerminalCursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::TerminalCursorRight);
    bindings.insert(Key::simple(KeyCode::Up), Command::TerminalHistoryPrev);
    bindings.insert(Key::simple(KeyCode::Down), Command::TerminalHistoryNext);
    bindings.insert(Key::simple(KeyCode::PageUp), Command::TerminalScrollUp);
    bindings.insert(Key::simple(KeyCode::PageDown), Command::TerminalScrollDown);

    bindings
}

fn default_assistant_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(4);

    bindings.insert(Key::simple(KeyCode::Enter), Command::AssistantSubmit);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::AssistantBackspace);
    bindings.insert(Key::simple(KeyCode::PageUp), Command::AssistantScrollUp);
    bindings.insert(Key::simple(KeyCode::PageDown), Command::AssistantScrollDown);

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
