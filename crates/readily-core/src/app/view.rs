impl<IN> ReaderApp<IN>
where
    IN: CommandSource,
{
    /// Redraw the whole screen from the current state.
    pub fn render<D: Display>(&self, display: &mut D) -> Result<(), D::Error> {
        display.clear()?;

        if let Some(notice) = self.playback.notice {
            display.write(notice, 0, 0)?;
        }

        let rate_label = rate_label(self.playback.rate, self.playback.single_character);
        let term: String = self.search_term().iter().collect();
        display.write_status_line(&StatusLine {
            rate_label: &rate_label,
            mode: self.status_mode(&term),
            cursor: self.playback.cursor,
            max_offset: self.playback.max_offset,
            spinner_frame: self.playback.spinner_frame,
        })?;

        if let UiState::ComposingRate { entry } = self.playback.ui {
            let panel = rate_entry_label(entry, self.playback.single_character);
            return display.write_display_unit(&panel);
        }

        if self.playback.phase == UnitPhase::Blank {
            return display.clear_display_unit();
        }

        let Some(unit) = &self.playback.current else {
            return Ok(());
        };

        if self.playback.context {
            let window = self.context_window(unit, display);
            display.write_display_unit_with_context(&window)
        } else {
            display.write_display_unit(&unit.text)
        }
    }

    fn status_mode<'a>(&self, term: &'a str) -> StatusMode<'a> {
        match self.playback.ui {
            UiState::Searching { .. } => StatusMode::Searching { term },
            UiState::ComposingRate { .. } => StatusMode::ComposingRate,
            UiState::Normal if self.playback.paused => StatusMode::Paused,
            UiState::Normal => StatusMode::Playing,
        }
    }

    /// Text on either side of `unit`, each side clipped to half of the columns
    /// the unit leaves free.
    fn context_window<'a, D: Display>(&self, unit: &'a DisplayUnit, display: &D) -> ContextWindow<'a> {
        let chars = self.text.as_chars();
        let column_width = |ch: char| usize::from(display.measure_display_width(ch));

        let unit_width: usize = unit.text.chars().map(column_width).sum();
        let side = usize::from(display.width()).saturating_sub(unit_width) / 2;

        let start = unit.start_offset.min(chars.len());
        let mut before = Vec::new();
        let mut used = 0usize;
        for &ch in chars[..start].iter().rev() {
            let width = column_width(ch);
            if used + width > side {
                break;
            }
            used += width;
            before.push(flatten_for_row(ch));
        }

        let end = unit.end_offset().min(chars.len());
        let mut after = String::new();
        used = 0;
        for &ch in &chars[end..] {
            let width = column_width(ch);
            if used + width > side {
                break;
            }
            used += width;
            after.push(flatten_for_row(ch));
        }

        ContextWindow {
            before: before.into_iter().rev().collect(),
            unit: &unit.text,
            after,
        }
    }
}
