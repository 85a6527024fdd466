//! zide - a mock IDE in the terminal
//!
//! Modules:
//! - core: commands and input events
//! - kernel: headless state core (Workspace, Terminal, Assistant, Store)
//! - models: data models (FileTree)
//! - app: application layer (Workbench, theme)
//! - tui: terminal integration (event polling, terminal restore, View)

pub mod core;
pub mod kernel;
pub mod models;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
