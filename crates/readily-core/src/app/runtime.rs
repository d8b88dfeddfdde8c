/// Full interval of one unit at `rate` units per minute, rounded to the
/// nearest millisecond.
pub fn unit_interval_ms(rate: u32) -> u64 {
    let rate = u64::from(rate.max(1));
    (60_000 + rate / 2) / rate
}

impl<IN> ReaderApp<IN>
where
    IN: CommandSource,
{
    /// Present every unit of the text, reacting to commands once per tick.
    pub fn run<D, C>(&mut self, display: &mut D, clock: &mut C) -> Result<RunOutcome, D::Error>
    where
        D: Display,
        C: Clock,
    {
        info!(
            "reader: start chars={} rate={} single_character={} context={} tick_ms={}",
            self.playback.max_offset,
            self.playback.rate,
            self.playback.single_character,
            self.playback.context,
            self.tick_ms()
        );

        while self.advance() {
            self.playback.spinner_frame = self.playback.spinner_frame.wrapping_add(1);

            for phase in [UnitPhase::Visible, UnitPhase::Blank] {
                if self.phase_duration_ms(phase) == 0 {
                    continue;
                }

                self.playback.phase = phase;
                self.render(display)?;
                if let Some(outcome) = self.wait(display, clock)? {
                    return Ok(outcome);
                }
            }
        }

        self.playback.phase = UnitPhase::Visible;
        info!("reader: end of text after {} units", self.playback.spinner_frame);
        Ok(RunOutcome::Finished)
    }

    /// Time `phase` stays on screen at the current rate and mode.
    pub fn phase_duration_ms(&self, phase: UnitPhase) -> u64 {
        let total = unit_interval_ms(self.playback.rate);
        let blank = if self.playback.single_character && !self.playback.context {
            total * BLANK_PERCENT / 100
        } else {
            0
        };

        match phase {
            UnitPhase::Visible => total - blank,
            UnitPhase::Blank => blank,
        }
    }

    /// Tick period rounded to the nearest millisecond (17 ms at 60 Hz).
    pub fn tick_ms(&self) -> u64 {
        let hz = u64::from(self.config.tick_hz.max(1));
        ((1_000 + hz / 2) / hz).max(1)
    }

    /// Wait out the current phase one tick at a time. Paused ticks do not
    /// count down, and a restarting command resets the countdown.
    fn wait<D, C>(&mut self, display: &mut D, clock: &mut C) -> Result<Option<RunOutcome>, D::Error>
    where
        D: Display,
        C: Clock,
    {
        let mut remaining = self.phase_duration_ms(self.playback.phase) as i64;

        while remaining > 0 {
            let started_ms = clock.now_ms();

            let batch = match self.process_inputs() {
                Ok(batch) => batch,
                Err(err) => {
                    info!("reader: input closed err={:?}", err);
                    return Ok(Some(RunOutcome::InputClosed));
                }
            };

            if batch.redraw {
                // A unit reached by navigation must be seen, not blanked.
                if batch.restart && self.playback.phase == UnitPhase::Blank {
                    self.playback.phase = UnitPhase::Visible;
                }
                self.render(display)?;
                if batch.restart {
                    remaining = self.phase_duration_ms(self.playback.phase) as i64;
                }
            }

            clock.sleep_ms(self.tick_ms());

            if !self.playback.paused {
                remaining -= clock.now_ms().saturating_sub(started_ms) as i64;
            }
        }

        Ok(None)
    }
}
