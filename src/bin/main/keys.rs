use std::time::Duration;

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use readily_core::input::{Command, CommandSender};

/// How long one terminal poll blocks before the engine status is checked.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// What a single terminal event asks for.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KeyAction {
    pub command: Option<Command>,
    /// Raw character for the search term; ignored by the reader outside search.
    /// `/` travels as `EnterSearch`, which types a slash once a search is open.
    pub search_char: Option<char>,
    pub quit: bool,
}

/// Why the input loop stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputExit {
    /// The user asked to quit.
    Quit,
    /// The engine stopped on its own.
    EngineStopped,
}

pub fn translate_event(event: &Event) -> KeyAction {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Resize(_, _) => KeyAction {
            command: Some(Command::Resize),
            ..KeyAction::default()
        },
        _ => KeyAction::default(),
    }
}

pub fn translate_key(key: &KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::default();
    }

    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    let command = match key.code {
        KeyCode::Esc => return quit(),
        KeyCode::Char('c') if control => return quit(),
        KeyCode::Char(_) if control => return KeyAction::default(),
        KeyCode::Char(ch) => return translate_char(ch),
        KeyCode::Enter => Command::Confirm,
        KeyCode::Backspace => Command::Backspace,
        KeyCode::Left => Command::JumpSentenceBackward,
        KeyCode::Right => Command::JumpSentenceForward,
        KeyCode::Tab => Command::FindNextMatch,
        _ => return KeyAction::default(),
    };

    KeyAction {
        command: Some(command),
        ..KeyAction::default()
    }
}

fn translate_char(ch: char) -> KeyAction {
    let command = match ch {
        ' ' => Some(Command::TogglePause),
        '+' | '=' => Some(Command::SpeedIncrease),
        '-' => Some(Command::SpeedDecrease),
        'w' => Some(Command::ToggleSingleCharacterMode),
        'c' => Some(Command::ToggleContextMode),
        '/' => Some(Command::EnterSearch),
        '0'..='9' => ch.to_digit(10).map(|digit| Command::Digit(digit as u8)),
        _ => None,
    };

    KeyAction {
        command,
        search_char: (ch != '/' && !ch.is_control()).then_some(ch),
        quit: false,
    }
}

fn quit() -> KeyAction {
    KeyAction {
        quit: true,
        ..KeyAction::default()
    }
}

/// Forward terminal events to the engine until the user quits or the engine
/// reports that it stopped. Dropping `sender` on return closes the queue.
pub fn run_input_loop(sender: CommandSender, engine_status: &Receiver<()>) -> Result<InputExit> {
    loop {
        // A dropped sender means the engine thread is gone as well.
        if !matches!(engine_status.try_recv(), Err(TryRecvError::Empty)) {
            return Ok(InputExit::EngineStopped);
        }

        if !event::poll(INPUT_POLL).context("failed to poll terminal events")? {
            continue;
        }

        let event = event::read().context("failed to read terminal event")?;
        let action = translate_event(&event);
        if action.quit {
            debug!("keys: quit");
            return Ok(InputExit::Quit);
        }

        let delivered = action
            .command
            .map_or(Ok(()), |command| sender.send_command(command))
            .and_then(|()| {
                action
                    .search_char
                    .map_or(Ok(()), |ch| sender.send_search_char(ch))
            });
        if delivered.is_err() {
            return Ok(InputExit::EngineStopped);
        }
    }
}
