//! Core framework.
//!
//! - Command: semantic commands
//! - Event: normalized input events (requires the `tui` feature)

pub mod command;
#[cfg(feature = "tui")]
pub mod event;

pub use command::Command;
#[cfg(feature = "tui")]
pub use event::{InputEvent, Key, MouseAction, MousePosition};
