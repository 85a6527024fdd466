//! UI theme: every configurable colour in one place instead of scattered through rendering.

use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub accent_fg: Color,
    pub header_fg: Color,
    pub muted_fg: Color,
    pub error_fg: Color,
    pub user_fg: Color,
    pub assistant_fg: Color,
    pub selected_bg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            inactive_border: Color::DarkGray,
            accent_fg: Color::Yellow,
            header_fg: Color::Cyan,
            muted_fg: Color::DarkGray,
            error_fg: Color::Red,
            user_fg: Color::Green,
            assistant_fg: Color::Magenta,
            selected_bg: Color::DarkGray,
        }
    }
}

impl UiTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme
    }

    /// Overrides every colour the settings name. Unknown colour names are logged and
    /// leave the default in place.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let slots: [(&mut Color, &Option<String>, &str); 9] = [
            (&mut self.focus_border, &settings.focus_border, "focus_border"),
            (&mut self.inactive_border, &settings.inactive_border, "inactive_border"),
            (&mut self.accent_fg, &settings.accent_fg, "accent_fg"),
            (&mut self.header_fg, &settings.header_fg, "header_fg"),
            (&mut self.muted_fg, &settings.muted_fg, "muted_fg"),
            (&mut self.error_fg, &settings.error_fg, "error_fg"),
            (&mut self.user_fg, &settings.user_fg, "user_fg"),
            (&mut self.assistant_fg, &settings.assistant_fg, "assistant_fg"),
            (&mut self.selected_bg, &settings.selected_bg, "selected_bg"),
        ];

        for (slot, value, key) in slots {
            let Some(value) = value.as_deref() else {
                continue;
            };
            match parse_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(key, value, "unknown theme colour"),
            }
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        let color = if focused {
            self.focus_border
        } else {
            self.inactive_border
        };
        Style::default().fg(color)
    }

    pub fn title(&self, focused: bool) -> Style {
        let style = Style::default().fg(self.header_fg);
        if focused {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted_fg)
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let c = match v.to_ascii_lowercase().replace('-', "_").as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        "light_red" => Color::LightRed,
        "light_green" => Color::LightGreen,
        "light_yellow" => Color::LightYellow,
        "light_blue" => Color::LightBlue,
        "light_magenta" => Color::LightMagenta,
        "light_cyan" => Color::LightCyan,
        other => Color::Indexed(other.parse::<u8>().ok()?),
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
