//! Terminal rendering of markdown output.
//!
//! Rich mode styles headers, bold text and tables with termimad; plain mode
//! prints the markdown unchanged, which is what scripts and tests read.

use termimad::{MadSkin, crossterm::style::Color};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);

        Self { rich_enabled, skin }
    }

    /// Formats markdown for the terminal without printing it.
    pub fn format(&self, markdown: &str) -> String {
        if self.rich_enabled {
            self.skin.term_text(markdown).to_string()
        } else {
            markdown.to_string()
        }
    }

    /// Prints markdown to stdout.
    pub fn render(&self, markdown: &str) {
        print!("{}", self.format(markdown));
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
