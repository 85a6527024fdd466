//! Application layer: workbench and theme.

pub mod theme;
pub mod workbench;

pub use theme::UiTheme;
pub use workbench::Workbench;
