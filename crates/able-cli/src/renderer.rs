//! Terminal rendering for transcript output.
//!
//! Transcript text is markdown: `##`/`###`/`####` headers for messages, plans
//! and steps, and `**bold**` spans inside message text. With color enabled
//! termimad styles the spans; `--no-color` strips the markup so piped output
//! reads as plain text.

use able_core::markup;
use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    // Headers keep their hashes.
                    println!("\x1b[36m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{}", Self::plain(markdown));
        }
        Ok(())
    }

    /// Prints a single line followed by a newline.
    pub fn line(&self, text: &str) -> Result<()> {
        self.render(&format!("{text}\n"))
    }

    /// Drops inline markup, keeping headers and list markers so message and
    /// step numbers stay visible.
    fn plain(markdown: &str) -> String {
        markup::to_plain(markdown)
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
