use serde::{Deserialize, Serialize};

use crate::kernel::workspace::EditRouting;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub workspace: WorkspaceSettings,
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub terminal: TerminalSettings,
    #[serde(default)]
    pub assistant: AssistantSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
}

/// What the explorer tree shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplorerSource {
    /// Fixed sample project, independent of the document map.
    #[default]
    Sample,
    /// Built from the workspace document keys at startup.
    Documents,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    pub edit_routing: EditRouting,
    pub explorer: ExplorerSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub tab_size: usize,
    pub show_line_numbers: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_size: 4,
            show_line_numbers: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalSettings {
    pub prompt: String,
    /// `0` keeps every line.
    pub scrollback_lines: usize,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            prompt: "$".to_string(),
            scrollback_lines: 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
    pub failure_rate: f64,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            seed: None,
            delay_min_ms: 800,
            delay_max_ms: 2000,
            failure_rate: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_bg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            focus_border: Some("cyan".to_string()),
            inactive_border: Some("dark_gray".to_string()),
            accent_fg: Some("yellow".to_string()),
            header_fg: Some("cyan".to_string()),
            muted_fg: Some("dark_gray".to_string()),
            error_fg: Some("red".to_string()),
            user_fg: Some("green".to_string()),
            assistant_fg: Some("magenta".to_string()),
            selected_bg: Some("dark_gray".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
