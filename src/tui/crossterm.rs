//! Event polling over crossterm.

use crate::core::event::{InputEvent, KeyEventKind};
use std::io;
use std::time::Duration;

/// Waits up to `timeout` for the next terminal event. Key releases are dropped so each
/// key press is seen once on terminals that report both edges.
pub fn poll_event(timeout: Duration) -> io::Result<Option<InputEvent>> {
    if !crossterm::event::poll(timeout)? {
        return Ok(None);
    }
    Ok(filter_event(crossterm::event::read()?.into()))
}

pub fn filter_event(event: InputEvent) -> Option<InputEvent> {
    match event {
        InputEvent::Key(key) if key.kind == KeyEventKind::Release => None,
        InputEvent::Other => None,
        other => Some(other),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
