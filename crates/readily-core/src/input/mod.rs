//! Input abstraction layer.

mod mock;
pub mod queue;

pub use mock::{ScriptEnded, ScriptedInput};
pub use queue::{COMMAND_QUEUE_CAPACITY, CommandReceiver, CommandSender, QueueClosed, command_queue};

/// Logical actions consumed by the reader app.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    TogglePause,
    SpeedIncrease,
    SpeedDecrease,
    ToggleSingleCharacterMode,
    ToggleContextMode,
    /// One decimal digit, `0..=9`.
    Digit(u8),
    Confirm,
    Backspace,
    JumpSentenceBackward,
    JumpSentenceForward,
    EnterSearch,
    FindNextMatch,
    /// The terminal changed size; only a redraw is needed.
    Resize,
}

/// One item taken from a [`CommandSource`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Input {
    Command(Command),
    SearchChar(char),
}

/// Polled command provider.
///
/// Commands and search characters travel separately. [`poll_input`] yields
/// them merged; sources that can tell the send order apart must merge in that
/// order.
///
/// [`poll_input`]: CommandSource::poll_input
pub trait CommandSource {
    type Error: core::fmt::Debug;

    fn poll_command(&mut self) -> Result<Option<Command>, Self::Error>;

    fn poll_search_char(&mut self) -> Result<Option<char>, Self::Error>;

    /// Next pending item. Defaults to every pending command before any
    /// pending character.
    fn poll_input(&mut self) -> Result<Option<Input>, Self::Error> {
        if let Some(command) = self.poll_command()? {
            return Ok(Some(Input::Command(command)));
        }
        Ok(self.poll_search_char()?.map(Input::SearchChar))
    }
}
