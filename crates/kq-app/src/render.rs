use std::io::Write;

use anyhow::Context;
use unicode_width::UnicodeWidthStr;

/// Anything that can show the quiz title and the current text
pub trait Renderer {
    fn render(&mut self, title: &str, text: &str) -> anyhow::Result<()>;
}

/// Draws the quiz as a framed block of centered lines
pub struct TerminalRenderer<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self { out, width }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, title: &str, text: &str) -> anyhow::Result<()> {
        // Grow the frame instead of clipping wide text
        let inner = self
            .width
            .saturating_sub(2)
            .max(title.width() + 2)
            .max(text.width() + 2);
        let border = format!("+{}+", "-".repeat(inner));

        let mut frame = Vec::with_capacity(5);
        frame.push(border.clone());
        frame.push(centered(title, inner));
        frame.push(centered("", inner));
        frame.push(centered(text, inner));
        frame.push(border);

        for line in frame {
            writeln!(self.out, "{line}").context("failed to write quiz frame")?;
        }
        self.out.flush().context("failed to flush terminal")?;
        Ok(())
    }
}

fn centered(text: &str, inner: usize) -> String {
    let padding = inner.saturating_sub(text.width());
    let left = padding / 2;
    format!("|{}{text}{}|", " ".repeat(left), " ".repeat(padding - left))
}
