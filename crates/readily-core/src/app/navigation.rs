impl<IN> ReaderApp<IN>
where
    IN: CommandSource,
{
    /// Jump to the start of the current sentence, or of the previous one when
    /// already there. Only lands on units that start before the current one.
    fn jump_sentence_backward(&mut self) {
        let starting = self.playback.cursor;
        let reference = self.current_start();
        let mut limit = reference;

        loop {
            let found = last_index_any(&self.text.as_chars()[..limit], SENTENCE_TERMINATORS);
            let Some(index) = found else {
                self.reseat(0);
                break;
            };

            self.reseat(index + 1);
            if self.current_start() < reference {
                break;
            }
            // Widen past the terminator just used.
            limit = index;
        }

        debug!(
            "nav: sentence backward cursor={} -> {} from_unit={}",
            starting, self.playback.cursor, reference
        );
    }

    /// Start of the unit on screen, or the cursor when nothing is shown.
    fn current_start(&self) -> usize {
        self.playback
            .current
            .as_ref()
            .map_or(self.playback.cursor, |unit| unit.start_offset)
    }

    /// Jump past the next sentence terminator. Stays put at the last sentence.
    fn jump_sentence_forward(&mut self) {
        let starting = self.playback.cursor;
        // Skip one so a terminator sitting on the cursor does not match again.
        let from = starting.saturating_add(1).min(self.playback.max_offset);

        let found = index_any(&self.text.as_chars()[from..], SENTENCE_TERMINATORS);
        match found {
            Some(relative) => {
                self.reseat(from + relative + 1);
                debug!(
                    "nav: sentence forward cursor={} -> {}",
                    starting, self.playback.cursor
                );
            }
            None => debug!("nav: sentence forward cursor={} no terminator", starting),
        }
    }

    fn search_from_anchor(&mut self) {
        if let Some(anchor) = self.search_anchor() {
            self.search_from(anchor);
        }
    }

    /// Seat the cursor on the first match of the term at or after `from`.
    fn search_from(&mut self, from: usize) {
        let found = match &self.playback.ui {
            UiState::Searching { term, .. } if !term.is_empty() => {
                find_term(self.text.as_chars(), term, from)
            }
            _ => return,
        };

        match found {
            Some(offset) => {
                debug!("search: match from={} at={}", from, offset);
                self.reseat(offset);
            }
            None => {
                debug!("search: no match from={}", from);
                self.playback.notice = Some(NOTICE_NO_MATCH);
            }
        }
    }
}
