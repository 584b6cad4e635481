use ratatui::style::Color;

use crate::io::Config;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Color,
    pub done: Color,
    pub open: Color,
    pub dim: Color,
    pub stamp: Color,
    pub selection_bg: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // ANSI-256 palette so the defaults track the user's terminal scheme
        Theme {
            header: Color::Indexed(205),
            done: Color::Indexed(2),
            open: Color::Indexed(208),
            dim: Color::Indexed(241),
            stamp: Color::Indexed(243),
            selection_bg: Color::Indexed(240),
            warning: Color::Indexed(1),
        }
    }
}

/// Parse a hex color string like "#FFAA00" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the optional config, falling back to defaults
    pub fn from_config(config: &Config) -> Self {
        let mut theme = Theme::default();

        // Apply color overrides from [colors]
        for (key, value) in &config.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "header" => theme.header = color,
                    "done" => theme.done = color,
                    "open" => theme.open = color,
                    "dim" => theme.dim = color,
                    "stamp" => theme.stamp = color,
                    "selection_bg" => theme.selection_bg = color,
                    "warning" => theme.warning = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Get the color for a task row given its completion state
    pub fn task_color(&self, completed: bool) -> Color {
        if completed { self.done } else { self.open }
    }
}
