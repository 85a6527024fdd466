use super::Workbench;
use crate::core::event::{InputEvent, Key, KeyEvent, MouseAction, MousePosition};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::{Action as KernelAction, EditorAction, FocusTarget};
use crate::tui::view::EventResult;
use crossterm::event::MouseEvent;
use ratatui::layout::Rect;
use std::time::Instant;

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key_event) => handle_key(workbench, key_event),
        InputEvent::Paste(text) => handle_paste(workbench, text),
        InputEvent::Mouse(mouse_event) => handle_mouse(workbench, mouse_event),
        InputEvent::Resize(..) => EventResult::Consumed,
        InputEvent::Other => EventResult::Ignored,
    }
}

fn handle_key(workbench: &mut Workbench, key_event: &KeyEvent) -> EventResult {
    let key = Key::from(*key_event);
    let focus = workbench.focus();
    let context = KeybindingContext::from(focus);

    if let Some(command) = workbench.keybindings.resolve(context, &key).cloned() {
        tracing::trace!(key = %key, command = command.name(), "key resolved");
        let _ = workbench.dispatch_kernel(KernelAction::RunCommand(command));
        if workbench.should_quit() {
            return EventResult::Quit;
        }
        return EventResult::Consumed;
    }

    let Some(ch) = key.typed_char() else {
        return EventResult::Ignored;
    };
    let action = match focus {
        FocusTarget::Editor => KernelAction::RunCommand(Command::InsertChar(ch)),
        FocusTarget::Terminal => KernelAction::TerminalInput(ch),
        FocusTarget::Assistant => KernelAction::AssistantInput(ch),
        FocusTarget::Explorer => return EventResult::Ignored,
    };
    EventResult::from_changed(workbench.dispatch_kernel(action))
}

/// Pasted text lands in whichever pane has focus. Single-line inputs drop line breaks and
/// other control characters.
fn handle_paste(workbench: &mut Workbench, text: &str) -> EventResult {
    let mut changed = false;
    match workbench.focus() {
        FocusTarget::Editor => {
            let text = text.replace("\r\n", "\n").replace('\r', "\n");
            changed = workbench.dispatch_kernel(KernelAction::Editor(EditorAction::InsertText(text)));
        }
        FocusTarget::Terminal => {
            for ch in text.chars().filter(|c| !c.is_control()) {
                changed |= workbench.dispatch_kernel(KernelAction::TerminalInput(ch));
            }
        }
        FocusTarget::Assistant => {
            for ch in text.chars().filter(|c| !c.is_control()) {
                changed |= workbench.dispatch_kernel(KernelAction::AssistantInput(ch));
            }
        }
        FocusTarget::Explorer => {}
    }
    EventResult::from_changed(changed)
}

fn handle_mouse(workbench: &mut Workbench, event: &MouseEvent) -> EventResult {
    let pos = MousePosition::from_event(event);
    let Some(target) = pane_at(workbench, pos) else {
        return EventResult::Ignored;
    };

    match MouseAction::from(event.kind) {
        MouseAction::Click => EventResult::from_changed(click(workbench, target, pos)),
        MouseAction::ScrollUp => {
            EventResult::from_changed(scroll(workbench, target, -super::MOUSE_SCROLL_STEP))
        }
        MouseAction::ScrollDown => {
            EventResult::from_changed(scroll(workbench, target, super::MOUSE_SCROLL_STEP))
        }
        MouseAction::Ignored => EventResult::Ignored,
    }
}

fn pane_at(workbench: &Workbench, pos: MousePosition) -> Option<FocusTarget> {
    let panes = [
        (workbench.last_explorer_area, FocusTarget::Explorer),
        (workbench.last_editor_area, FocusTarget::Editor),
        (workbench.last_terminal_area, FocusTarget::Terminal),
        (workbench.last_assistant_area, FocusTarget::Assistant),
    ];
    panes
        .into_iter()
        .find(|(area, _)| area.is_some_and(|a| rect_contains(a, pos)))
        .map(|(_, target)| target)
}

fn click(workbench: &mut Workbench, target: FocusTarget, pos: MousePosition) -> bool {
    let mut changed = workbench.dispatch_kernel(KernelAction::SetFocus(target));

    match target {
        FocusTarget::Explorer => {
            let Some(inner) = workbench.last_explorer_inner_area else {
                return changed;
            };
            if !rect_contains(inner, pos) {
                return changed;
            }
            let row = (pos.y - inner.y) as usize + workbench.state().explorer.scroll_offset;
            changed |= workbench.dispatch_kernel(KernelAction::ExplorerClickRow {
                row,
                now: Instant::now(),
            });
        }
        FocusTarget::Editor => {
            let hit = workbench
                .last_tab_hits
                .iter()
                .find(|hit| rect_contains(hit.area, pos))
                .map(|hit| hit.path.clone());
            if let Some(path) = hit {
                changed |= workbench.dispatch_kernel(KernelAction::SetActiveFile(path));
            }
        }
        FocusTarget::Terminal | FocusTarget::Assistant => {}
    }

    changed
}

/// `delta` follows the wheel: negative scrolls towards the top of the content.
fn scroll(workbench: &mut Workbench, target: FocusTarget, delta: isize) -> bool {
    let action = match target {
        FocusTarget::Explorer => KernelAction::ExplorerScroll { delta },
        FocusTarget::Editor => KernelAction::Editor(EditorAction::Scroll { delta }),
        // Terminal and assistant offsets count back from the newest line.
        FocusTarget::Terminal => KernelAction::TerminalScroll { delta: -delta },
        FocusTarget::Assistant => KernelAction::AssistantScroll { delta: -delta },
    };
    workbench.dispatch_kernel(action)
}

fn rect_contains(area: Rect, pos: MousePosition) -> bool {
    pos.x >= area.x
        && pos.x < area.x.saturating_add(area.width)
        && pos.y >= area.y
        && pos.y < area.y.saturating_add(area.height)
}
