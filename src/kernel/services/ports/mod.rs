//! Service ports: data contracts shared by the kernel and the adapters.

pub mod settings;

pub use settings::{
    AssistantSettings, EditorSettings, ExplorerSource, Settings, TerminalSettings,
    ThemeSettings, WorkspaceSettings,
};
