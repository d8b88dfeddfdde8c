use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType},
};
use readily_core::{
    render::{ContextWindow, Display, StatusLine},
    text_policy::{progress_bar, status_help},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Crossterm-backed [`Display`]. Draw calls are queued and flushed once the
/// unit row is written, so each frame reaches the terminal in one burst.
pub struct TerminalDisplay<W: Write = Stdout> {
    out: W,
    columns: u16,
    rows: u16,
    /// Re-query the terminal size on every full clear.
    track_terminal: bool,
}

impl TerminalDisplay<Stdout> {
    pub fn stdout() -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        Ok(Self {
            out: io::stdout(),
            columns,
            rows,
            track_terminal: true,
        })
    }
}

impl<W: Write> TerminalDisplay<W> {
    #[cfg(test)]
    fn with_size(out: W, columns: u16, rows: u16) -> Self {
        Self {
            out,
            columns,
            rows,
            track_terminal: false,
        }
    }

    fn refresh_size(&mut self) -> io::Result<()> {
        if self.track_terminal {
            (self.columns, self.rows) = terminal::size()?;
        }
        Ok(())
    }

    fn unit_row(&self) -> u16 {
        self.rows / 2
    }

    fn centered_column(&self, text_width: usize) -> u16 {
        let free = usize::from(self.columns).saturating_sub(text_width);
        u16::try_from(free / 2).unwrap_or(0)
    }

    fn clear_row(&mut self, row: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(0, row), Clear(ClearType::CurrentLine))
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    type Error = io::Error;

    fn clear(&mut self) -> io::Result<()> {
        self.refresh_size()?;
        queue!(self.out, Clear(ClearType::All))
    }

    fn write(&mut self, text: &str, column: u16, row: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(column, row), Print(text))
    }

    fn write_status_line(&mut self, status: &StatusLine<'_>) -> io::Result<()> {
        if self.rows < 2 {
            return Ok(());
        }
        let bottom = self.rows - 1;

        let help = status_help(status.mode);
        if !help.is_empty() {
            let column = self.centered_column(help.width());
            self.write(&help, column, bottom - 1)?;
        }

        self.write(status.spinner(), 0, bottom)?;

        let bar = progress_bar(status.cursor, status.max_offset);
        let column = self.centered_column(bar.width());
        self.write(&bar, column, bottom)?;

        let label_width = u16::try_from(status.rate_label.width()).unwrap_or(u16::MAX);
        let column = self.columns.saturating_sub(label_width);
        self.write(status.rate_label, column, bottom)
    }

    fn write_display_unit(&mut self, text: &str) -> io::Result<()> {
        let row = self.unit_row();
        let column = self.centered_column(text.width());
        self.clear_row(row)?;
        queue!(self.out, MoveTo(column, row), Print(text))?;
        self.out.flush()
    }

    fn write_display_unit_with_context(&mut self, context: &ContextWindow<'_>) -> io::Result<()> {
        let row = self.unit_row();
        let unit_column = self.centered_column(context.unit.width());
        let before_width = u16::try_from(context.before.width()).unwrap_or(u16::MAX);

        self.clear_row(row)?;
        queue!(
            self.out,
            MoveTo(unit_column.saturating_sub(before_width), row),
            Print(&context.before),
            SetAttribute(Attribute::Bold),
            Print(context.unit),
            SetAttribute(Attribute::Reset),
            Print(&context.after),
        )?;
        self.out.flush()
    }

    fn clear_display_unit(&mut self) -> io::Result<()> {
        let row = self.unit_row();
        self.clear_row(row)?;
        self.out.flush()
    }

    fn measure_display_width(&self, ch: char) -> u8 {
        match ch.width() {
            Some(2) => 2,
            _ => 1,
        }
    }

    fn width(&self) -> u16 {
        self.columns
    }
}
