//! Reader state machine: command dispatch, navigation, pacing and rendering.

use log::{debug, info};

use crate::{
    clock::Clock,
    content::{
        BoundaryPolicy, DisplayUnit, SENTENCE_TERMINATORS, TextBuffer, find_term, index_any,
        last_index_any, next_unit,
    },
    input::{Command, CommandSource, Input},
    render::{ContextWindow, Display, StatusLine, StatusMode},
    text_policy::{flatten_for_row, rate_entry_label, rate_label},
};

const SEARCH_TERM_CAPACITY: usize = 64;
/// Rate entry stops accepting digits at five digits.
const RATE_ENTRY_LIMIT: u32 = 10_000;
const BLANK_PERCENT: u64 = 20;
const NOTICE_NO_MATCH: &str = "No match";

type SearchTerm = heapless::Vec<char, SEARCH_TERM_CAPACITY>;

/// How the reader splits text into units.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UnitMode {
    /// Characters when the first code point is double width, words otherwise.
    #[default]
    Auto,
    Words,
    Characters,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub rate: u32,
    pub min_rate: u32,
    pub max_rate: u32,
    pub rate_step: u32,
    pub unit_mode: UnitMode,
    pub context: bool,
    pub tick_hz: u32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            rate: 300,
            min_rate: 5,
            max_rate: 2_000,
            rate_step: 5,
            unit_mode: UnitMode::Auto,
            context: false,
            tick_hz: 60,
        }
    }
}

impl ReaderConfig {
    fn normalized(mut self) -> Self {
        if self.max_rate < self.min_rate {
            core::mem::swap(&mut self.max_rate, &mut self.min_rate);
        }
        self.min_rate = self.min_rate.max(1);
        self.max_rate = self.max_rate.max(self.min_rate);
        self.rate = self.rate.clamp(self.min_rate, self.max_rate);
        self.rate_step = self.rate_step.max(1);
        self.tick_hz = self.tick_hz.clamp(1, 1_000);
        self
    }
}

/// Which part of a unit's interval is on screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnitPhase {
    Visible,
    /// Gap between characters in single-character mode.
    Blank,
}

/// What a single command did to the reader.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommandEffect {
    Ignored,
    /// Screen changed, unit timer keeps running.
    Redraw,
    /// Screen changed and the unit interval starts over.
    Restart,
}

/// Combined effect of everything drained in one tick.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InputBatch {
    pub redraw: bool,
    pub restart: bool,
}

impl InputBatch {
    fn absorb(&mut self, effect: CommandEffect) {
        match effect {
            CommandEffect::Ignored => {}
            CommandEffect::Redraw => self.redraw = true,
            CommandEffect::Restart => {
                self.redraw = true;
                self.restart = true;
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunOutcome {
    /// Every unit of the text was presented.
    Finished,
    /// The command source went away; the host is shutting down.
    InputClosed,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum UiState {
    Normal,
    ComposingRate { entry: u32 },
    Searching { term: SearchTerm, anchor: usize },
}

/// Everything the reader mutates while playing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlaybackState {
    pub paused: bool,
    /// Units per minute.
    pub rate: u32,
    pub single_character: bool,
    pub context: bool,
    pub cursor: usize,
    pub max_offset: usize,
    pub current: Option<DisplayUnit>,
    pub phase: UnitPhase,
    pub spinner_frame: usize,
    /// One-line notice shown until the next handled command.
    pub notice: Option<&'static str>,
    ui: UiState,
}

pub struct ReaderApp<IN>
where
    IN: CommandSource,
{
    text: TextBuffer,
    input: IN,
    config: ReaderConfig,
    playback: PlaybackState,
}

impl<IN> ReaderApp<IN>
where
    IN: CommandSource,
{
    /// `display` is only consulted once, to guess the unit mode from the
    /// width of the first code point when the config leaves it on `Auto`.
    pub fn new<D: Display>(text: TextBuffer, input: IN, config: ReaderConfig, display: &D) -> Self {
        let config = config.normalized();
        let single_character = match config.unit_mode {
            UnitMode::Auto => text
                .first()
                .is_some_and(|ch| display.measure_display_width(ch) == 2),
            UnitMode::Words => false,
            UnitMode::Characters => true,
        };
        debug!(
            "reader: init chars={} rate={} unit_mode={:?} single_character={} context={}",
            text.len(),
            config.rate,
            config.unit_mode,
            single_character,
            config.context
        );

        let max_offset = text.len();
        Self {
            text,
            input,
            playback: PlaybackState {
                paused: true,
                rate: config.rate,
                single_character,
                context: config.context,
                cursor: 0,
                max_offset,
                current: None,
                phase: UnitPhase::Visible,
                spinner_frame: 0,
                notice: None,
                ui: UiState::Normal,
            },
            config,
        }
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn text(&self) -> &TextBuffer {
        &self.text
    }

    /// Digits typed so far for a new rate, `0` when not composing.
    pub fn rate_entry(&self) -> u32 {
        match self.playback.ui {
            UiState::ComposingRate { entry } => entry,
            _ => 0,
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.playback.ui, UiState::Searching { .. })
    }

    pub fn search_term(&self) -> &[char] {
        match &self.playback.ui {
            UiState::Searching { term, .. } => term.as_slice(),
            _ => &[],
        }
    }

    pub fn search_anchor(&self) -> Option<usize> {
        match &self.playback.ui {
            UiState::Searching { anchor, .. } => Some(*anchor),
            _ => None,
        }
    }

    /// Move to the next unit. Returns `false` once the text is exhausted.
    pub fn advance(&mut self) -> bool {
        let policy = BoundaryPolicy::from_single_character(self.playback.single_character);
        match next_unit(self.text.as_chars(), self.playback.cursor, policy) {
            Some((unit, cursor)) => {
                self.playback.cursor = cursor;
                self.playback.current = Some(unit);
                true
            }
            None => {
                self.playback.cursor = self.playback.max_offset;
                self.playback.current = None;
                false
            }
        }
    }

    /// Put the cursor at `offset` and derive the unit found there.
    fn reseat(&mut self, offset: usize) {
        self.playback.cursor = offset.min(self.playback.max_offset);
        self.advance();
    }
}

include!("input.rs");
include!("navigation.rs");
include!("runtime.rs");
include!("view.rs");

#[cfg(test)]
mod tests;
