use std::collections::VecDeque;

use super::{Command, CommandSource};

/// A [`ScriptedInput`] ran out of ticks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScriptEnded;

#[derive(Debug, Default)]
struct TickBatch {
    commands: VecDeque<Command>,
    chars: VecDeque<char>,
}

/// Deterministic input source that replays one batch per reader tick.
///
/// A tick ends when the reader finds the character queue empty; the next poll
/// starts the following batch. Once every batch is consumed the source reports
/// [`ScriptEnded`], which the reader treats like a closed queue.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    batches: VecDeque<TickBatch>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a tick carrying `commands`.
    pub fn tick(mut self, commands: &[Command]) -> Self {
        self.batches.push_back(TickBatch {
            commands: commands.iter().copied().collect(),
            chars: VecDeque::new(),
        });
        self
    }

    /// Queue a tick carrying typed search characters.
    pub fn typed(mut self, text: &str) -> Self {
        self.batches.push_back(TickBatch {
            commands: VecDeque::new(),
            chars: text.chars().collect(),
        });
        self
    }

    /// Queue `count` ticks with no input.
    pub fn idle(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.batches.push_back(TickBatch::default());
        }
        self
    }

    pub fn remaining_ticks(&self) -> usize {
        self.batches.len()
    }
}

impl CommandSource for ScriptedInput {
    type Error = ScriptEnded;

    fn poll_command(&mut self) -> Result<Option<Command>, Self::Error> {
        let batch = self.batches.front_mut().ok_or(ScriptEnded)?;
        Ok(batch.commands.pop_front())
    }

    fn poll_search_char(&mut self) -> Result<Option<char>, Self::Error> {
        let batch = self.batches.front_mut().ok_or(ScriptEnded)?;
        match batch.chars.pop_front() {
            Some(ch) => Ok(Some(ch)),
            None => {
                self.batches.pop_front();
                Ok(None)
            }
        }
    }
}
