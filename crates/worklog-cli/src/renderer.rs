//! Markdown skin for terminal output.
//!
//! List and status output is markdown. In rich mode it is styled line by
//! line with termimad; in plain mode (`--no-color`, or anything piped) the
//! text is written out untouched so the bytes match the underlying Display
//! implementations.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

enum RenderMode {
    Rich(Box<MadSkin>),
    Plain,
}

/// Writes command output to stdout, styled or verbatim.
pub struct TerminalRenderer {
    mode: RenderMode,
}

impl TerminalRenderer {
    /// Build a renderer; `rich` selects styled output.
    pub fn new(rich: bool) -> Self {
        let mode = if rich {
            RenderMode::Rich(Box::new(report_skin()))
        } else {
            RenderMode::Plain
        };
        Self { mode }
    }

    /// Write markdown to stdout through the active mode.
    ///
    /// Rich output is styled per line; header lines keep their hash prefix
    /// and only gain color. Plain output is byte-identical to the input.
    pub fn render(&self, markdown: &str) -> Result<()> {
        match &self.mode {
            RenderMode::Rich(skin) => {
                for line in markdown.lines() {
                    if line.starts_with('#') {
                        println!("\x1b[36m{line}\x1b[0m");
                    } else {
                        skin.print_inline(line);
                        println!();
                    }
                }
            }
            RenderMode::Plain => print!("{markdown}"),
        }
        Ok(())
    }

    /// Write text exactly as given, bypassing markdown styling.
    ///
    /// The report preview is a copy-paste artifact; styling would change
    /// its bytes, so it is written verbatim in both modes.
    pub fn render_raw(&self, text: &str) -> Result<()> {
        print!("{text}");
        Ok(())
    }
}

/// Skin used for rich list and status output.
fn report_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(Color::Cyan);
    skin.bold.set_fg(Color::Yellow);
    skin.italic.set_fg(Color::Magenta);
    skin.inline_code.set_bg(Color::AnsiValue(238));
    skin
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_selected_by_flag() {
        let renderer = TerminalRenderer::new(false);
        assert!(matches!(renderer.mode, RenderMode::Plain));
    }

    #[test]
    fn rich_mode_is_the_default() {
        assert!(matches!(
            TerminalRenderer::default().mode,
            RenderMode::Rich(_)
        ));
        assert!(matches!(
            TerminalRenderer::new(true).mode,
            RenderMode::Rich(_)
        ));
    }
}
