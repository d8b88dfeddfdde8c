//! Bounded FIFO channels between the input thread and the reader.
//!
//! Every item is stamped from one counter shared by both channels, so the
//! reader can merge commands and search characters back into send order.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded};
use thiserror::Error;

use super::{Command, CommandSource, Input};

/// Room for a burst of key presses.
pub const COMMAND_QUEUE_CAPACITY: usize = 64;

/// The other end of the queue was dropped.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("command queue closed")]
pub struct QueueClosed;

type Stamped<T> = (u64, T);

pub fn command_queue(capacity: usize) -> (CommandSender, CommandReceiver) {
    let (command_tx, command_rx) = bounded(capacity);
    let (char_tx, char_rx) = bounded(capacity);

    (
        CommandSender {
            commands: command_tx,
            chars: char_tx,
            sequence: Arc::new(AtomicU64::new(0)),
        },
        CommandReceiver {
            commands: command_rx,
            chars: char_rx,
            next_command: None,
            next_char: None,
        },
    )
}

/// Producer half, owned by the input thread.
///
/// Sends block while the queue is full so nothing is dropped or reordered.
#[derive(Clone, Debug)]
pub struct CommandSender {
    commands: Sender<Stamped<Command>>,
    chars: Sender<Stamped<char>>,
    sequence: Arc<AtomicU64>,
}

impl CommandSender {
    pub fn send_command(&self, command: Command) -> Result<(), QueueClosed> {
        let stamp = self.next_stamp();
        self.commands.send((stamp, command)).map_err(|_| QueueClosed)
    }

    pub fn send_search_char(&self, ch: char) -> Result<(), QueueClosed> {
        let stamp = self.next_stamp();
        self.chars.send((stamp, ch)).map_err(|_| QueueClosed)
    }

    fn next_stamp(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }
}

/// Consumer half, owned by the reader.
#[derive(Debug)]
pub struct CommandReceiver {
    commands: Receiver<Stamped<Command>>,
    chars: Receiver<Stamped<char>>,
    next_command: Option<Stamped<Command>>,
    next_char: Option<Stamped<char>>,
}

/// Move the channel head into `slot` unless one is already held there.
/// Errors only when the slot stays empty and the senders are gone.
fn fill_slot<T>(
    rx: &Receiver<Stamped<T>>,
    slot: &mut Option<Stamped<T>>,
) -> Result<(), QueueClosed> {
    if slot.is_none() {
        match rx.try_recv() {
            Ok(item) => *slot = Some(item),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => return Err(QueueClosed),
        }
    }
    Ok(())
}

impl CommandSource for CommandReceiver {
    type Error = QueueClosed;

    fn poll_command(&mut self) -> Result<Option<Command>, Self::Error> {
        fill_slot(&self.commands, &mut self.next_command)?;
        Ok(self.next_command.take().map(|(_, command)| command))
    }

    fn poll_search_char(&mut self) -> Result<Option<char>, Self::Error> {
        fill_slot(&self.chars, &mut self.next_char)?;
        Ok(self.next_char.take().map(|(_, ch)| ch))
    }

    fn poll_input(&mut self) -> Result<Option<Input>, Self::Error> {
        let mut closed = fill_slot(&self.commands, &mut self.next_command).is_err();
        closed |= fill_slot(&self.chars, &mut self.next_char).is_err();
        // A command stamped before the character may land between the two looks.
        closed &= fill_slot(&self.commands, &mut self.next_command).is_err();

        let take_command = match (&self.next_command, &self.next_char) {
            (Some((command_stamp, _)), Some((char_stamp, _))) => command_stamp < char_stamp,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) if closed => return Err(QueueClosed),
            (None, None) => return Ok(None),
        };

        let input = if take_command {
            self.next_command.take().map(|(_, command)| Input::Command(command))
        } else {
            self.next_char.take().map(|(_, ch)| Input::SearchChar(ch))
        };
        Ok(input)
    }
}
