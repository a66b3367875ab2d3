use std::fmt::Display;
use std::path::Path;

use inksac::prelude::*;

/// Terminal styling for the prompt, banners and error lines. Falls back to
/// plain text when color is disabled or unsupported.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub fn new(color: bool) -> Self {
        if !color {
            return Self::plain();
        }
        let supported = check_color_support()
            .map(|support| !matches!(support, ColorSupport::NoColor))
            .unwrap_or(false);
        Self {
            enabled: supported,
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if !self.enabled {
            return text.to_string();
        }

        let style = Style::builder().foreground(color).bold().build();
        text.style(style).to_string()
    }

    pub fn prompt(&self, cwd: &Path) -> String {
        format!(
            "{} {} ",
            self.paint(&cwd.display().to_string(), Color::Green),
            self.paint(">:", Color::Blue)
        )
    }

    /// One line, prefixed so it stands apart from command output.
    pub fn error_line(&self, error: &dyn Display) -> String {
        format!("{} {}", self.paint("ksh:", Color::Red), error)
    }
}
