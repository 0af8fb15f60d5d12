use crossterm::style::Stylize;
use std::io::{self, IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Search,
    Success,
    Warning,
    Failure,
    Attention,
}

impl Status {
    fn glyph(self) -> &'static str {
        match self {
            Status::Search => "🔍",
            Status::Success => "✅",
            Status::Warning => "⚠️",
            Status::Failure => "❌",
            Status::Attention => "⚡",
        }
    }
}

/// Operator-facing output. Everything the operator reads goes through here;
/// developer diagnostics go to `tracing` on stderr instead.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        let mut console = Self::new(io::stdout());
        console.color = console.out.is_terminal();
        console
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out, color: false }
    }

    pub fn status(&mut self, status: Status, msg: &str) -> io::Result<()> {
        let glyph = status.glyph();
        if self.color {
            let styled = match status {
                Status::Success => glyph.green(),
                Status::Warning | Status::Attention => glyph.yellow(),
                Status::Failure => glyph.red(),
                Status::Search => glyph.cyan(),
            };
            writeln!(self.out, "{} {}", styled, msg)
        } else {
            writeln!(self.out, "{} {}", glyph, msg)
        }
    }

    pub fn line(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{}", msg)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Print without a newline so the answer lands on the same line.
    pub fn prompt(&mut self, msg: &str) -> io::Result<()> {
        write!(self.out, "{}", msg)?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
