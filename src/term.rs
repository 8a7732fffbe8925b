use crate::error::Result;

use std::io::{Stdout, Write, stdout};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

/// Owns the terminal output. Generic over the writer so frames can be
/// captured in memory.
pub struct TermManager<W: Write = Stdout> {
    out: W,
}

impl TermManager<Stdout> {
    pub fn new() -> Self {
        TermManager { out: stdout() }
    }
}

impl Default for TermManager<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TermManager<W> {
    pub fn with_writer(out: W) -> Self {
        TermManager { out }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.out, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.out, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.out, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Clears the screen and writes every line of `frame` from the top-left
    /// corner, followed by the status line.
    pub fn draw_frame(&mut self, frame: &str, status: &str) -> Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        // Raw mode does not return the carriage on '\n'
        for line in frame.lines() {
            queue!(self.out, style::Print(line), cursor::MoveToNextLine(1))?;
        }
        queue!(self.out, style::Print(status))?;

        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
