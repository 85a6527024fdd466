//! Workbench: owns the kernel store and routes input, rendering and runtime messages.

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime, KeybindingService};
use crate::kernel::services::ports::settings::Settings;
use crate::kernel::{Action as KernelAction, AppState, FocusTarget, Store};
use crate::tui::view::{EventResult, View};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

mod input;
mod render;
mod tick;

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const EXPLORER_WIDTH_PERCENT: u16 = 20;
const EXPLORER_MIN_WIDTH: u16 = 22;
const ASSISTANT_WIDTH_PERCENT: u16 = 30;
const ASSISTANT_MIN_WIDTH: u16 = 28;
const TERMINAL_MIN_HEIGHT: u16 = 6;
const MOUSE_SCROLL_STEP: isize = 3;
const LOG_BUFFER_CAP: usize = 2000;
const MAX_LOG_DRAIN_PER_TICK: usize = 1024;
const MAX_MESSAGE_DRAIN_PER_TICK: usize = 64;

/// A clickable tab in the editor tab strip.
#[derive(Debug, Clone)]
struct TabHit {
    area: Rect,
    path: String,
}

pub struct Workbench {
    store: Store,
    keybindings: KeybindingService,
    theme: UiTheme,
    runtime: AsyncRuntime,
    log_rx: Option<Receiver<String>>,
    logs: VecDeque<String>,
    show_line_numbers: bool,
    last_explorer_area: Option<Rect>,
    last_explorer_inner_area: Option<Rect>,
    last_editor_area: Option<Rect>,
    last_tab_hits: Vec<TabHit>,
    last_terminal_area: Option<Rect>,
    last_assistant_area: Option<Rect>,
    last_cursor: Option<(u16, u16)>,
}

impl Workbench {
    pub fn new(
        settings: &Settings,
        runtime: AsyncRuntime,
        log_rx: Option<Receiver<String>>,
    ) -> Self {
        let store = Store::new(AppState::new(settings));
        tracing::info!(
            documents = store.state().workspace.documents_len(),
            routing = ?settings.workspace.edit_routing,
            explorer = ?settings.workspace.explorer,
            "workbench ready"
        );

        Self {
            store,
            keybindings: KeybindingService::new(),
            theme: UiTheme::from_settings(&settings.theme),
            runtime,
            log_rx,
            logs: VecDeque::with_capacity(LOG_BUFFER_CAP.min(256)),
            show_line_numbers: settings.editor.show_line_numbers,
            last_explorer_area: None,
            last_explorer_inner_area: None,
            last_editor_area: None,
            last_tab_hits: Vec::new(),
            last_terminal_area: None,
            last_assistant_area: None,
            last_cursor: None,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    pub fn logs(&self) -> impl Iterator<Item = &str> {
        self.logs.iter().map(String::as_str)
    }

    /// Turns a runtime completion into the matching kernel action.
    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::AssistantReply {
                request_id,
                outcome,
            } => self.dispatch_kernel(KernelAction::AssistantReplyArrived {
                request_id,
                outcome,
            }),
        }
    }

    /// Reduces `action`, runs the effects it produced and reports whether a redraw is due.
    pub(super) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.runtime.run_effect(effect);
        }
        result.state_changed
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        self.last_cursor
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
