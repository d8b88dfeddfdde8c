impl<IN> ReaderApp<IN>
where
    IN: CommandSource,
{
    /// Drain everything pending, in the order the source yields it.
    pub fn process_inputs(&mut self) -> Result<InputBatch, IN::Error> {
        let mut batch = InputBatch::default();

        while let Some(input) = self.input.poll_input()? {
            let effect = match input {
                Input::Command(command) => self.apply_command(command),
                Input::SearchChar(ch) => self.apply_search_char(ch),
            };
            batch.absorb(effect);
        }

        Ok(batch)
    }

    pub fn apply_command(&mut self, command: Command) -> CommandEffect {
        self.playback.notice = None;

        let effect = match self.playback.ui {
            UiState::Normal => self.apply_normal_command(command),
            UiState::ComposingRate { entry } => self.apply_rate_entry_command(entry, command),
            UiState::Searching { .. } => self.apply_search_command(command),
        };

        debug!(
            "input: command={:?} effect={:?} cursor={} rate={} paused={}",
            command, effect, self.playback.cursor, self.playback.rate, self.playback.paused
        );
        effect
    }

    /// Characters only matter while searching; anything else is dropped.
    pub fn apply_search_char(&mut self, ch: char) -> CommandEffect {
        let UiState::Searching { term, .. } = &mut self.playback.ui else {
            return CommandEffect::Ignored;
        };

        if term.push(ch).is_err() {
            debug!("search: term full, dropped {:?}", ch);
            return CommandEffect::Ignored;
        }

        self.playback.notice = None;
        self.search_from_anchor();
        CommandEffect::Restart
    }

    fn apply_normal_command(&mut self, command: Command) -> CommandEffect {
        match command {
            Command::TogglePause => {
                self.playback.paused = !self.playback.paused;
                CommandEffect::Restart
            }
            Command::SpeedIncrease => self.adjust_rate(true),
            Command::SpeedDecrease => self.adjust_rate(false),
            Command::ToggleSingleCharacterMode => {
                self.playback.single_character = !self.playback.single_character;
                CommandEffect::Restart
            }
            Command::ToggleContextMode => {
                self.playback.context = !self.playback.context;
                CommandEffect::Restart
            }
            Command::Digit(digit) if digit <= 9 => {
                self.playback.paused = true;
                if digit != 0 {
                    self.playback.ui = UiState::ComposingRate {
                        entry: u32::from(digit),
                    };
                }
                CommandEffect::Redraw
            }
            Command::JumpSentenceBackward => {
                self.jump_sentence_backward();
                CommandEffect::Restart
            }
            Command::JumpSentenceForward => {
                self.jump_sentence_forward();
                CommandEffect::Restart
            }
            Command::EnterSearch => {
                // The unit on screen is the first candidate.
                let anchor = self.current_start();
                self.playback.paused = true;
                self.playback.ui = UiState::Searching {
                    term: SearchTerm::new(),
                    anchor,
                };
                debug!("search: enter anchor={}", anchor);
                CommandEffect::Restart
            }
            Command::Resize => CommandEffect::Redraw,
            Command::Digit(_)
            | Command::Confirm
            | Command::Backspace
            | Command::FindNextMatch => CommandEffect::Ignored,
        }
    }

    fn apply_rate_entry_command(&mut self, entry: u32, command: Command) -> CommandEffect {
        match command {
            Command::Digit(digit) if digit <= 9 => {
                self.playback.paused = true;
                if entry < RATE_ENTRY_LIMIT {
                    self.playback.ui = UiState::ComposingRate {
                        entry: entry * 10 + u32::from(digit),
                    };
                }
                CommandEffect::Redraw
            }
            Command::Backspace => {
                let entry = entry / 10;
                self.playback.ui = if entry == 0 {
                    UiState::Normal
                } else {
                    UiState::ComposingRate { entry }
                };
                CommandEffect::Redraw
            }
            Command::Confirm => {
                self.playback.rate = entry.clamp(self.config.min_rate, self.config.max_rate);
                self.playback.ui = UiState::Normal;
                info!("reader: rate set to {}", self.playback.rate);
                CommandEffect::Restart
            }
            Command::Resize => CommandEffect::Redraw,
            _ => CommandEffect::Ignored,
        }
    }

    fn apply_search_command(&mut self, command: Command) -> CommandEffect {
        match command {
            Command::Confirm => {
                debug!("search: leave cursor={}", self.playback.cursor);
                self.playback.ui = UiState::Normal;
                CommandEffect::Restart
            }
            Command::Backspace => {
                if let UiState::Searching { term, .. } = &mut self.playback.ui {
                    term.pop();
                }
                self.search_from_anchor();
                CommandEffect::Restart
            }
            Command::FindNextMatch => {
                self.search_from(self.playback.cursor);
                CommandEffect::Restart
            }
            // The search key types a literal slash once a search is open.
            Command::EnterSearch => self.apply_search_char('/'),
            Command::Resize => CommandEffect::Redraw,
            _ => CommandEffect::Ignored,
        }
    }

    fn adjust_rate(&mut self, increase: bool) -> CommandEffect {
        let next = if increase {
            self.playback
                .rate
                .saturating_add(self.config.rate_step)
                .min(self.config.max_rate)
        } else {
            self.playback
                .rate
                .saturating_sub(self.config.rate_step)
                .max(self.config.min_rate)
        };

        if next == self.playback.rate {
            return CommandEffect::Ignored;
        }

        self.playback.rate = next;
        CommandEffect::Restart
    }
}
