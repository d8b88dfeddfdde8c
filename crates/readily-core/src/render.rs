//! View models and the display interface consumed by the reader.

/// Braille frames cycled once per presented unit.
pub const SPINNER_FRAMES: [&str; 4] = ["⠁", "⠈", "⠐", "⠂"];

/// What the status line should explain.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusMode<'a> {
    Playing,
    Paused,
    ComposingRate,
    Searching { term: &'a str },
}

/// Bottom-of-screen status: rate, help, progress, spinner.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StatusLine<'a> {
    pub rate_label: &'a str,
    pub mode: StatusMode<'a>,
    pub cursor: usize,
    pub max_offset: usize,
    pub spinner_frame: usize,
}

impl StatusLine<'_> {
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

/// The current unit with the surrounding text, already clipped to fit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContextWindow<'a> {
    pub before: String,
    pub unit: &'a str,
    pub after: String,
}

/// Render target for the reader. Implemented by the terminal host.
pub trait Display {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Write raw text at a cell position.
    fn write(&mut self, text: &str, column: u16, row: u16) -> Result<(), Self::Error>;

    fn write_status_line(&mut self, status: &StatusLine<'_>) -> Result<(), Self::Error>;

    /// Write `text` centered on the unit row.
    fn write_display_unit(&mut self, text: &str) -> Result<(), Self::Error>;

    fn write_display_unit_with_context(
        &mut self,
        context: &ContextWindow<'_>,
    ) -> Result<(), Self::Error>;

    fn clear_display_unit(&mut self) -> Result<(), Self::Error>;

    /// Terminal columns taken by `ch`: 1 or 2.
    fn measure_display_width(&self, ch: char) -> u8;

    /// Screen width in columns.
    fn width(&self) -> u16;
}
