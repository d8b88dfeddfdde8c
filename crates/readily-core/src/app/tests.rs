use super::*;
use crate::{
    clock::ManualClock,
    content::DecodePolicy,
    input::{COMMAND_QUEUE_CAPACITY, Command, QueueClosed, ScriptedInput, command_queue},
    render::{ContextWindow, Display, StatusLine},
};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Frame {
    Clear,
    Write(String),
    Status { rate: String, cursor: usize },
    Unit(String),
    UnitWithContext {
        before: String,
        unit: String,
        after: String,
    },
    ClearUnit,
}

struct RecordingDisplay {
    width: u16,
    frames: Vec<Frame>,
}

impl RecordingDisplay {
    fn new() -> Self {
        Self {
            width: 80,
            frames: Vec::new(),
        }
    }

    /// Unit-row frames with consecutive repeats collapsed.
    fn unit_row(&self) -> Vec<Frame> {
        let mut row: Vec<Frame> = Vec::new();
        for frame in &self.frames {
            if matches!(
                frame,
                Frame::Unit(_) | Frame::UnitWithContext { .. } | Frame::ClearUnit
            ) && row.last() != Some(frame)
            {
                row.push(frame.clone());
            }
        }
        row
    }

    fn last_unit(&self) -> Option<&str> {
        self.frames.iter().rev().find_map(|frame| match frame {
            Frame::Unit(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Display for RecordingDisplay {
    type Error = core::convert::Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.frames.push(Frame::Clear);
        Ok(())
    }

    fn write(&mut self, text: &str, _column: u16, _row: u16) -> Result<(), Self::Error> {
        self.frames.push(Frame::Write(text.to_string()));
        Ok(())
    }

    fn write_status_line(&mut self, status: &StatusLine<'_>) -> Result<(), Self::Error> {
        self.frames.push(Frame::Status {
            rate: status.rate_label.to_string(),
            cursor: status.cursor,
        });
        Ok(())
    }

    fn write_display_unit(&mut self, text: &str) -> Result<(), Self::Error> {
        self.frames.push(Frame::Unit(text.to_string()));
        Ok(())
    }

    fn write_display_unit_with_context(
        &mut self,
        context: &ContextWindow<'_>,
    ) -> Result<(), Self::Error> {
        self.frames.push(Frame::UnitWithContext {
            before: context.before.clone(),
            unit: context.unit.to_string(),
            after: context.after.clone(),
        });
        Ok(())
    }

    fn clear_display_unit(&mut self) -> Result<(), Self::Error> {
        self.frames.push(Frame::ClearUnit);
        Ok(())
    }

    fn measure_display_width(&self, ch: char) -> u8 {
        if ('\u{3000}'..='\u{9FFF}').contains(&ch) || ('\u{FF01}'..='\u{FF60}').contains(&ch) {
            2
        } else {
            1
        }
    }

    fn width(&self) -> u16 {
        self.width
    }
}

#[derive(Debug, Eq, PartialEq)]
struct DisplayGone;

struct FailingDisplay;

impl Display for FailingDisplay {
    type Error = DisplayGone;

    fn clear(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write(&mut self, _text: &str, _column: u16, _row: u16) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write_status_line(&mut self, _status: &StatusLine<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write_display_unit(&mut self, _text: &str) -> Result<(), Self::Error> {
        Err(DisplayGone)
    }

    fn write_display_unit_with_context(
        &mut self,
        _context: &ContextWindow<'_>,
    ) -> Result<(), Self::Error> {
        Err(DisplayGone)
    }

    fn clear_display_unit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn measure_display_width(&self, _ch: char) -> u8 {
        1
    }

    fn width(&self) -> u16 {
        80
    }
}

fn buffer(text: &str) -> TextBuffer {
    TextBuffer::from_bytes(text.as_bytes(), DecodePolicy::Strict).unwrap()
}

fn make_app_with(text: &str, input: ScriptedInput, config: ReaderConfig) -> ReaderApp<ScriptedInput> {
    ReaderApp::new(buffer(text), input, config, &RecordingDisplay::new())
}

fn make_app(text: &str) -> ReaderApp<ScriptedInput> {
    make_app_with(text, ScriptedInput::new(), ReaderConfig::default())
}

fn send(app: &mut ReaderApp<ScriptedInput>, commands: &[Command]) {
    for &command in commands {
        app.apply_command(command);
    }
}

fn type_term(app: &mut ReaderApp<ScriptedInput>, term: &str) {
    for ch in term.chars() {
        app.apply_search_char(ch);
    }
}

fn current_unit<IN: CommandSource>(app: &ReaderApp<IN>) -> Option<(&str, usize)> {
    app.playback()
        .current
        .as_ref()
        .map(|unit| (unit.text.as_str(), unit.start_offset))
}

#[test]
fn starts_paused_at_default_rate() {
    let app = make_app("hello world");
    let playback = app.playback();
    assert!(playback.paused);
    assert_eq!(playback.rate, 300);
    assert_eq!(playback.cursor, 0);
    assert_eq!(playback.max_offset, 11);
    assert_eq!(app.rate_entry(), 0);
    assert!(!app.is_searching());
}

#[test]
fn interval_shrinks_as_rate_grows() {
    assert_eq!(unit_interval_ms(300), 200);
    assert!(unit_interval_ms(600) < unit_interval_ms(300));
    assert!(unit_interval_ms(300) < unit_interval_ms(150));
    assert_eq!(unit_interval_ms(7), 8_571);
    assert_eq!(unit_interval_ms(0), 60_000);

    let mut previous = u64::MAX;
    for rate in 1..=2_000 {
        let interval = unit_interval_ms(rate);
        assert!(interval <= previous);
        previous = interval;
    }
}

#[test]
fn wide_first_character_selects_single_character_mode() {
    let app = make_app("日本語のテキスト");
    assert!(app.playback().single_character);

    let app = make_app("plain text");
    assert!(!app.playback().single_character);

    let forced = ReaderConfig {
        unit_mode: UnitMode::Words,
        ..ReaderConfig::default()
    };
    let app = make_app_with("日本語", ScriptedInput::new(), forced);
    assert!(!app.playback().single_character);
}

#[test]
fn toggle_stays_authoritative_after_auto_guess() {
    let mut app = make_app("日本語 text");
    send(&mut app, &[Command::ToggleSingleCharacterMode]);
    assert!(!app.playback().single_character);

    assert!(app.advance());
    assert_eq!(current_unit(&app), Some(("日本語", 0)));
    assert!(!app.playback().single_character);
}

#[test]
fn config_is_normalized() {
    let config = ReaderConfig {
        rate: 9_000,
        min_rate: 500,
        max_rate: 100,
        tick_hz: 0,
        ..ReaderConfig::default()
    };
    let app = make_app_with("x", ScriptedInput::new(), config);
    assert_eq!(app.config().min_rate, 100);
    assert_eq!(app.config().max_rate, 500);
    assert_eq!(app.playback().rate, 500);
    assert_eq!(app.tick_ms(), 1_000);
}

#[test]
fn tick_rounds_to_nearest_millisecond() {
    let tick_for = |tick_hz| {
        let config = ReaderConfig {
            tick_hz,
            ..ReaderConfig::default()
        };
        make_app_with("x", ScriptedInput::new(), config).tick_ms()
    };
    assert_eq!(tick_for(60), 17);
    assert_eq!(tick_for(30), 33);
    assert_eq!(tick_for(1_000), 1);
}

#[test]
fn typed_rate_is_committed_on_confirm() {
    let config = ReaderConfig {
        rate: 250,
        ..ReaderConfig::default()
    };
    let mut app = make_app_with("text", ScriptedInput::new(), config);
    send(&mut app, &[Command::TogglePause]);
    assert!(!app.playback().paused);

    assert_eq!(app.apply_command(Command::Digit(3)), CommandEffect::Redraw);
    assert!(app.playback().paused);
    assert_eq!(app.apply_command(Command::Digit(0)), CommandEffect::Redraw);
    assert_eq!(app.apply_command(Command::Digit(0)), CommandEffect::Redraw);
    assert_eq!(app.rate_entry(), 300);
    assert_eq!(app.playback().rate, 250);

    assert_eq!(app.apply_command(Command::Confirm), CommandEffect::Restart);
    assert_eq!(app.playback().rate, 300);
    assert_eq!(app.rate_entry(), 0);
}

#[test]
fn backspaced_rate_entry_leaves_rate_unchanged() {
    let mut app = make_app("text");
    send(&mut app, &[Command::Digit(5), Command::Backspace]);
    assert_eq!(app.rate_entry(), 0);
    assert_eq!(app.apply_command(Command::Confirm), CommandEffect::Ignored);
    assert_eq!(app.playback().rate, 300);
}

#[test]
fn backspace_drops_last_digit_only() {
    let mut app = make_app("text");
    send(&mut app, &[Command::Digit(4), Command::Digit(2), Command::Backspace]);
    assert_eq!(app.rate_entry(), 4);
    send(&mut app, &[Command::Digit(5), Command::Confirm]);
    assert_eq!(app.playback().rate, 45);
}

#[test]
fn rate_entry_ignores_other_commands() {
    let mut app = make_app("one. two.");
    send(&mut app, &[Command::Digit(4)]);
    assert_eq!(app.apply_command(Command::SpeedIncrease), CommandEffect::Ignored);
    assert_eq!(app.apply_command(Command::TogglePause), CommandEffect::Ignored);
    assert_eq!(app.apply_command(Command::JumpSentenceForward), CommandEffect::Ignored);
    assert_eq!(app.apply_command(Command::Resize), CommandEffect::Redraw);
    assert_eq!(app.rate_entry(), 4);
    assert_eq!(app.playback().rate, 300);
    assert!(app.playback().paused);
    assert_eq!(app.playback().cursor, 0);
}

#[test]
fn committed_rate_is_clamped() {
    let mut app = make_app("text");
    send(
        &mut app,
        &[
            Command::Digit(9),
            Command::Digit(9),
            Command::Digit(9),
            Command::Digit(9),
            Command::Digit(9),
            Command::Digit(9),
            Command::Digit(9),
        ],
    );
    assert_eq!(app.rate_entry(), 99_999);
    send(&mut app, &[Command::Confirm]);
    assert_eq!(app.playback().rate, app.config().max_rate);

    send(&mut app, &[Command::Digit(1), Command::Confirm]);
    assert_eq!(app.playback().rate, app.config().min_rate);
}

#[test]
fn zero_digit_pauses_without_composing() {
    let mut app = make_app("text");
    send(&mut app, &[Command::TogglePause, Command::Digit(0)]);
    assert!(app.playback().paused);
    assert_eq!(app.rate_entry(), 0);
}

#[test]
fn speed_steps_are_clamped() {
    let config = ReaderConfig {
        rate: 12,
        min_rate: 5,
        max_rate: 20,
        ..ReaderConfig::default()
    };
    let mut app = make_app_with("text", ScriptedInput::new(), config);

    assert_eq!(app.apply_command(Command::SpeedIncrease), CommandEffect::Restart);
    assert_eq!(app.playback().rate, 17);
    send(&mut app, &[Command::SpeedIncrease]);
    assert_eq!(app.playback().rate, 20);
    assert_eq!(app.apply_command(Command::SpeedIncrease), CommandEffect::Ignored);

    send(&mut app, &[Command::SpeedDecrease, Command::SpeedDecrease, Command::SpeedDecrease]);
    assert_eq!(app.playback().rate, 5);
    assert_eq!(app.apply_command(Command::SpeedDecrease), CommandEffect::Ignored);
}

#[test]
fn sentence_backward_from_start_stays_at_start() {
    let mut app = make_app("First sentence. Second one.");
    send(&mut app, &[Command::JumpSentenceBackward]);
    assert_eq!(current_unit(&app), Some(("First", 0)));

    send(&mut app, &[Command::JumpSentenceBackward]);
    assert_eq!(current_unit(&app), Some(("First", 0)));
}

#[test]
fn sentence_backward_from_terminated_unit_never_moves_forward() {
    let mut app = make_app("Hello world. Foo bar. Baz qux.");
    app.advance();
    app.advance();
    assert_eq!(current_unit(&app), Some(("world.", 6)));

    send(&mut app, &[Command::JumpSentenceBackward]);
    assert_eq!(current_unit(&app), Some(("Hello", 0)));

    send(&mut app, &[Command::JumpSentenceForward]);
    app.advance();
    assert_eq!(current_unit(&app), Some(("bar.", 17)));

    send(&mut app, &[Command::JumpSentenceBackward]);
    assert_eq!(current_unit(&app), Some(("Foo", 13)));
}

#[test]
fn sentence_backward_steps_through_previous_sentences() {
    let mut app = make_app("Hello world. Foo bar. Baz qux.");
    while app.advance() {
        if current_unit(&app).map(|(text, _)| text) == Some("qux.") {
            break;
        }
    }

    send(&mut app, &[Command::JumpSentenceBackward]);
    assert_eq!(current_unit(&app), Some(("Baz", 22)));

    send(&mut app, &[Command::JumpSentenceBackward]);
    assert_eq!(current_unit(&app), Some(("Foo", 13)));

    send(&mut app, &[Command::JumpSentenceBackward]);
    assert_eq!(current_unit(&app), Some(("Hello", 0)));
}

#[test]
fn sentence_backward_from_exhausted_text_finds_last_sentence() {
    let mut app = make_app("Hello world. Foo bar.");
    while app.advance() {}
    assert_eq!(app.playback().cursor, 21);

    send(&mut app, &[Command::JumpSentenceBackward]);
    assert_eq!(current_unit(&app), Some(("Foo", 13)));
}

#[test]
fn sentence_forward_stops_at_last_sentence() {
    let mut app = make_app("Hello world. Foo bar. Baz.");
    send(&mut app, &[Command::JumpSentenceForward]);
    assert_eq!(current_unit(&app), Some(("Foo", 13)));

    send(&mut app, &[Command::JumpSentenceForward]);
    assert_eq!(current_unit(&app), Some(("Baz.", 22)));

    let cursor = app.playback().cursor;
    send(&mut app, &[Command::JumpSentenceForward]);
    assert_eq!(app.playback().cursor, cursor);
    assert_eq!(current_unit(&app), Some(("Baz.", 22)));
}

#[test]
fn sentence_jumps_understand_other_scripts() {
    let mut app = make_app("你好。世界！再见");
    assert!(app.playback().single_character);

    send(&mut app, &[Command::JumpSentenceForward]);
    assert_eq!(current_unit(&app), Some(("世", 3)));

    send(&mut app, &[Command::JumpSentenceForward]);
    assert_eq!(current_unit(&app), Some(("再", 6)));
}

#[test]
fn incremental_search_then_find_next() {
    let mut app = make_app("the quick fox. the slow fox.");
    assert_eq!(app.apply_command(Command::EnterSearch), CommandEffect::Restart);
    assert!(app.is_searching());
    assert_eq!(app.search_anchor(), Some(0));

    type_term(&mut app, "the");
    assert_eq!(app.search_term(), &['t', 'h', 'e']);
    assert_eq!(current_unit(&app), Some(("the", 0)));

    send(&mut app, &[Command::FindNextMatch]);
    assert_eq!(current_unit(&app), Some(("the", 15)));

    send(&mut app, &[Command::FindNextMatch]);
    assert_eq!(current_unit(&app), Some(("the", 15)));
    assert_eq!(app.playback().notice, Some(NOTICE_NO_MATCH));
}

#[test]
fn typing_refines_from_the_anchor() {
    let mut app = make_app("the quick fox. the slow fox.");
    send(&mut app, &[Command::EnterSearch]);

    type_term(&mut app, "f");
    assert_eq!(current_unit(&app), Some(("fox.", 10)));

    type_term(&mut app, "ox. the s");
    assert_eq!(current_unit(&app), Some(("fox.", 10)));

    send(&mut app, &[Command::Backspace]);
    assert_eq!(app.search_term().len(), 9);
    assert_eq!(current_unit(&app), Some(("fox.", 10)));
}

#[test]
fn search_miss_keeps_cursor() {
    let mut app = make_app("the quick fox.");
    app.advance();
    let before = app.playback().clone();

    send(&mut app, &[Command::EnterSearch]);
    type_term(&mut app, "zebra");
    assert_eq!(app.playback().cursor, before.cursor);
    assert_eq!(app.playback().current, before.current);
    assert_eq!(app.playback().notice, Some(NOTICE_NO_MATCH));
}

#[test]
fn confirm_leaves_search_at_reached_position() {
    let mut app = make_app("alpha beta gamma");
    send(&mut app, &[Command::EnterSearch]);
    assert!(app.playback().paused);
    type_term(&mut app, "gam");
    send(&mut app, &[Command::Confirm]);

    assert!(!app.is_searching());
    assert!(app.search_term().is_empty());
    assert_eq!(current_unit(&app), Some(("gamma", 11)));
    assert_eq!(app.playback().cursor, 16);
}

#[test]
fn search_ignores_playback_commands() {
    let mut app = make_app("alpha beta");
    send(&mut app, &[Command::EnterSearch]);
    assert_eq!(app.apply_command(Command::SpeedIncrease), CommandEffect::Ignored);
    assert_eq!(app.apply_command(Command::Digit(4)), CommandEffect::Ignored);
    assert_eq!(app.rate_entry(), 0);
    assert_eq!(app.playback().rate, 300);
}

#[test]
fn search_key_types_a_slash_once_searching() {
    let mut app = make_app("see src/main.rs for details");
    send(&mut app, &[Command::EnterSearch]);
    type_term(&mut app, "src");
    assert_eq!(app.apply_command(Command::EnterSearch), CommandEffect::Restart);
    type_term(&mut app, "main");

    assert!(app.is_searching());
    assert_eq!(app.search_term().iter().collect::<String>(), "src/main");
    assert_eq!(current_unit(&app), Some(("src/main.rs", 4)));
}

#[test]
fn search_starts_at_the_unit_on_screen() {
    let input = ScriptedInput::new()
        .idle(3)
        .tick(&[Command::EnterSearch])
        .typed("the")
        .idle(2);
    let mut app = make_app_with("the quick fox. the slow fox.", input, ReaderConfig::default());
    let mut display = RecordingDisplay::new();
    let mut clock = ManualClock::new();

    let outcome = app.run(&mut display, &mut clock).unwrap();

    assert_eq!(outcome, RunOutcome::InputClosed);
    assert_eq!(app.search_anchor(), Some(0));
    assert_eq!(current_unit(&app), Some(("the", 0)));

    send(&mut app, &[Command::FindNextMatch]);
    assert_eq!(current_unit(&app), Some(("the", 15)));
}

#[test]
fn search_during_playback_anchors_on_shown_unit() {
    let mut app = make_app("alpha beta alpha");
    send(&mut app, &[Command::TogglePause]);
    app.advance();
    app.advance();
    assert_eq!(current_unit(&app), Some(("beta", 6)));

    send(&mut app, &[Command::EnterSearch]);
    assert!(app.playback().paused);
    assert_eq!(app.search_anchor(), Some(6));

    type_term(&mut app, "beta");
    assert_eq!(current_unit(&app), Some(("beta", 6)));
}

#[test]
fn queued_keys_apply_in_send_order() {
    let (sender, receiver) = command_queue(COMMAND_QUEUE_CAPACITY);
    let mut app = ReaderApp::new(
        buffer("xyz abc"),
        receiver,
        ReaderConfig::default(),
        &RecordingDisplay::new(),
    );

    // `x` arrives before the search opens and must not join the term.
    sender.send_search_char('x').unwrap();
    sender.send_command(Command::EnterSearch).unwrap();
    for ch in "abc".chars() {
        sender.send_search_char(ch).unwrap();
    }
    sender.send_command(Command::Confirm).unwrap();

    let batch = app.process_inputs().unwrap();
    assert!(batch.restart);
    assert!(!app.is_searching());
    assert_eq!(current_unit(&app), Some(("abc", 4)));

    drop(sender);
    assert_eq!(app.process_inputs(), Err(QueueClosed));
}

#[test]
fn characters_outside_search_are_discarded() {
    let input = ScriptedInput::new()
        .typed("xyz")
        .tick(&[Command::EnterSearch])
        .typed("beta");
    let mut app = make_app_with("alpha beta", input, ReaderConfig::default());

    assert_eq!(app.process_inputs(), Ok(InputBatch::default()));
    assert!(!app.is_searching());

    let batch = app.process_inputs().unwrap();
    assert!(batch.restart);
    assert!(app.search_term().is_empty());

    app.process_inputs().unwrap();
    assert_eq!(app.search_term().iter().collect::<String>(), "beta");
    assert_eq!(current_unit(&app), Some(("beta", 6)));
}

#[test]
fn rate_entry_batch_redraws_without_restart() {
    let input = ScriptedInput::new()
        .tick(&[Command::Digit(1), Command::Digit(2)])
        .tick(&[Command::Confirm]);
    let mut app = make_app_with("alpha", input, ReaderConfig::default());

    assert_eq!(
        app.process_inputs(),
        Ok(InputBatch {
            redraw: true,
            restart: false
        })
    );
    assert_eq!(
        app.process_inputs(),
        Ok(InputBatch {
            redraw: true,
            restart: true
        })
    );
    assert_eq!(app.playback().rate, 12);
}

#[test]
fn pause_freezes_progress() {
    let input = ScriptedInput::new().idle(100);
    let mut app = make_app_with("alpha beta gamma", input, ReaderConfig::default());
    let mut display = RecordingDisplay::new();
    let mut clock = ManualClock::new();

    let outcome = app.run(&mut display, &mut clock).unwrap();

    assert_eq!(outcome, RunOutcome::InputClosed);
    assert_eq!(clock.sleeps(), 100);
    assert_eq!(clock.now_ms(), 1_700);
    assert_eq!(current_unit(&app), Some(("alpha", 0)));
    assert_eq!(app.playback().cursor, 5);
}

#[test]
fn unpausing_resumes_without_jumping() {
    let input = ScriptedInput::new()
        .idle(50)
        .tick(&[Command::TogglePause])
        .idle(5);
    let mut app = make_app_with("alpha beta gamma", input, ReaderConfig::default());
    let mut display = RecordingDisplay::new();
    let mut clock = ManualClock::new();

    app.run(&mut display, &mut clock).unwrap();

    assert!(!app.playback().paused);
    assert_eq!(current_unit(&app), Some(("alpha", 0)));
}

#[test]
fn playing_advances_one_unit_per_interval() {
    // 200 ms per unit at 17 ms ticks is 12 ticks per unit.
    let input = ScriptedInput::new().tick(&[Command::TogglePause]).idle(30);
    let mut app = make_app_with("alpha beta gamma", input, ReaderConfig::default());
    let mut display = RecordingDisplay::new();
    let mut clock = ManualClock::new();

    let outcome = app.run(&mut display, &mut clock).unwrap();

    assert_eq!(outcome, RunOutcome::InputClosed);
    assert_eq!(current_unit(&app), Some(("gamma", 11)));
    assert_eq!(
        display.unit_row(),
        vec![
            Frame::Unit("alpha".to_string()),
            Frame::Unit("beta".to_string()),
            Frame::Unit("gamma".to_string()),
        ]
    );
}

#[test]
fn run_finishes_at_end_of_text() {
    let input = ScriptedInput::new().tick(&[Command::TogglePause]).idle(60);
    let mut app = make_app_with("one two", input, ReaderConfig::default());
    let mut display = RecordingDisplay::new();
    let mut clock = ManualClock::new();

    let outcome = app.run(&mut display, &mut clock).unwrap();

    assert_eq!(outcome, RunOutcome::Finished);
    assert_eq!(display.last_unit(), Some("two"));
    assert_eq!(app.playback().current, None);
    assert_eq!(app.playback().cursor, app.playback().max_offset);
    assert_eq!(app.playback().spinner_frame, 2);
}

#[test]
fn single_characters_get_a_blank_interstitial() {
    let config = ReaderConfig {
        unit_mode: UnitMode::Characters,
        ..ReaderConfig::default()
    };
    let app = make_app_with("ab", ScriptedInput::new(), config);
    assert_eq!(app.phase_duration_ms(UnitPhase::Visible), 160);
    assert_eq!(app.phase_duration_ms(UnitPhase::Blank), 40);

    let input = ScriptedInput::new().tick(&[Command::TogglePause]).idle(40);
    let mut app = make_app_with("ab", input, config);
    let mut display = RecordingDisplay::new();
    let mut clock = ManualClock::new();

    let outcome = app.run(&mut display, &mut clock).unwrap();

    assert_eq!(outcome, RunOutcome::Finished);
    assert_eq!(
        display.unit_row(),
        vec![
            Frame::Unit("a".to_string()),
            Frame::ClearUnit,
            Frame::Unit("b".to_string()),
            Frame::ClearUnit,
        ]
    );
}

#[test]
fn context_mode_has_no_blank_phase() {
    let config = ReaderConfig {
        unit_mode: UnitMode::Characters,
        context: true,
        ..ReaderConfig::default()
    };
    let app = make_app_with("ab", ScriptedInput::new(), config);
    assert_eq!(app.phase_duration_ms(UnitPhase::Visible), 200);
    assert_eq!(app.phase_duration_ms(UnitPhase::Blank), 0);
}

#[test]
fn context_window_surrounds_the_unit() {
    let mut app = make_app("one two\nthree");
    send(&mut app, &[Command::ToggleContextMode]);
    app.advance();
    app.advance();

    let mut display = RecordingDisplay::new();
    app.render(&mut display).unwrap();
    assert_eq!(
        display.unit_row(),
        vec![Frame::UnitWithContext {
            before: "one ".to_string(),
            unit: "two".to_string(),
            after: " three".to_string(),
        }]
    );
}

#[test]
fn context_window_is_clipped_to_width() {
    let mut app = make_app("aaaaaaaaaa bb cccccccccc");
    send(&mut app, &[Command::ToggleContextMode]);
    app.advance();
    app.advance();

    let mut display = RecordingDisplay::new();
    display.width = 10;
    app.render(&mut display).unwrap();
    assert_eq!(
        display.unit_row(),
        vec![Frame::UnitWithContext {
            before: "aaa ".to_string(),
            unit: "bb".to_string(),
            after: " ccc".to_string(),
        }]
    );
}

#[test]
fn rate_panel_replaces_unit_while_composing() {
    let mut app = make_app("alpha");
    app.advance();
    send(&mut app, &[Command::Digit(4), Command::Digit(2)]);

    let mut display = RecordingDisplay::new();
    app.render(&mut display).unwrap();
    assert_eq!(display.last_unit(), Some("New words per min: 42"));
    assert!(display.frames.contains(&Frame::Status {
        rate: "300 words per min".to_string(),
        cursor: 5,
    }));
}

#[test]
fn notice_is_written_and_cleared() {
    let mut app = make_app("alpha");
    send(&mut app, &[Command::EnterSearch]);
    type_term(&mut app, "zz");

    let mut display = RecordingDisplay::new();
    app.render(&mut display).unwrap();
    assert!(display.frames.contains(&Frame::Write(NOTICE_NO_MATCH.to_string())));

    send(&mut app, &[Command::Resize]);
    assert_eq!(app.playback().notice, None);
}

#[test]
fn display_errors_stop_the_run() {
    let input = ScriptedInput::new().idle(3);
    let mut app = ReaderApp::new(buffer("alpha"), input, ReaderConfig::default(), &FailingDisplay);
    let mut clock = ManualClock::new();

    assert_eq!(app.run(&mut FailingDisplay, &mut clock), Err(DisplayGone));
    assert_eq!(clock.sleeps(), 0);
}
