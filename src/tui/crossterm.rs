use std::io::Write;

use crossterm::{cursor, style, terminal, QueueableCommand};

use crate::engine::tile::{Pip, Tile};
use crate::error::Result;
use crate::tui::colors::pip_color;
use crate::tui::renderer::Renderer;
use crate::tui::table::{SnakeView, Table};

/// Width used when the terminal size cannot be queried, e.g. when output is piped.
const DEFAULT_WIDTH: usize = 70;

pub(crate) struct Crossterm<W: Write> {
    w: W,
    width: usize,
}

impl<W: Write> Crossterm<W> {
    pub(crate) fn new(w: W) -> Self {
        let width = terminal::size()
            .map(|(cols, _)| (cols as usize).min(DEFAULT_WIDTH))
            .unwrap_or(DEFAULT_WIDTH);
        Self::with_width(w, width)
    }

    pub(crate) fn with_width(w: W, width: usize) -> Self {
        Self { w, width }
    }
}

impl<W: Write> Renderer for Crossterm<W> {
    fn render(&mut self, table: &Table) -> Result<()> {
        self.w.queue(terminal::Clear(terminal::ClearType::All))?;
        self.w.queue(cursor::MoveTo(0, 0))?;
        self.w.queue(style::ResetColor)?;

        let rule: char = boxy::Char::horizontal(boxy::Weight::Doubled).into();
        self.line(&rule.to_string().repeat(self.width))?;
        self.line(&format!("Stock size: {}", table.stock_size))?;
        self.line(&format!("Computer pieces: {}", table.computer_pieces))?;
        self.line("")?;

        match &table.snake {
            SnakeView::Whole(tiles) => self.tiles(tiles)?,
            SnakeView::Elided { head, tail } => {
                self.tiles(head)?;
                self.w.queue(style::Print("..."))?;
                self.tiles(tail)?;
            }
        }
        self.line("")?;
        self.line("")?;

        self.line("Your pieces:")?;
        for (i, t) in table.hand.iter().enumerate() {
            self.w.queue(style::Print(format!("{}: ", i + 1)))?;
            self.tile(t)?;
            self.line("")?;
        }
        self.line("")?;

        for l in textwrap::wrap(&format!("Status: {}", table.status), self.width) {
            self.line(&l)?;
        }
        self.w.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        for l in textwrap::wrap(message, self.width) {
            self.line(&l)?;
        }
        self.w.flush()?;
        Ok(())
    }
}

impl<W: Write> Crossterm<W> {
    fn line(&mut self, s: &str) -> Result<()> {
        self.w.queue(style::Print(s))?;
        self.w.queue(style::Print("\n"))?;
        Ok(())
    }

    fn tiles(&mut self, tiles: &[Tile]) -> Result<()> {
        for t in tiles {
            self.tile(t)?;
        }
        Ok(())
    }

    fn tile(&mut self, t: &Tile) -> Result<()> {
        self.w.queue(style::Print("["))?;
        self.pip(t.left())?;
        self.w.queue(style::Print(", "))?;
        self.pip(t.right())?;
        self.w.queue(style::Print("]"))?;
        Ok(())
    }

    fn pip(&mut self, pip: Pip) -> Result<()> {
        self.w.queue(style::SetForegroundColor(pip_color(pip)))?;
        self.w.queue(style::SetAttribute(style::Attribute::Bold))?;
        self.w.queue(style::Print(pip))?;
        self.w.queue(style::SetAttribute(style::Attribute::Reset))?;
        self.w.queue(style::ResetColor)?;
        Ok(())
    }
}
