//! Text buffers and segmentation for RSVP rendering.

use std::io::{self, Read};

use log::debug;
use thiserror::Error;

mod terminators;
pub mod text_utils;

pub use terminators::{SENTENCE_TERMINATORS, is_punctuation, is_sentence_terminator};
pub use text_utils::{BoundaryPolicy, find_term, index_any, last_index_any, next_unit};

const BYTE_ORDER_MARK: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Reasons a text could not be turned into a [`TextBuffer`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("No content")]
    Empty,

    #[error("Could not read input: {0}")]
    Read(#[from] io::Error),

    #[error("Input is not valid UTF-8 (first bad byte at offset {offset})")]
    InvalidEncoding { offset: usize },
}

/// How undecodable byte sequences are treated at load time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DecodePolicy {
    #[default]
    Strict,
    /// Replace invalid sequences with U+FFFD.
    Lossy,
}

/// One chunk of text shown at once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisplayUnit {
    pub text: String,
    /// Buffer index of the unit's first code point.
    pub start_offset: usize,
}

impl DisplayUnit {
    /// Buffer index one past the unit's last code point.
    pub fn end_offset(&self) -> usize {
        self.start_offset + self.text.chars().count()
    }
}

/// Immutable code-point buffer. All offsets into it count `char`s, never bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextBuffer {
    chars: Vec<char>,
}

impl TextBuffer {
    pub fn from_bytes(bytes: &[u8], policy: DecodePolicy) -> Result<Self, LoadError> {
        let bytes = strip_byte_order_mark(bytes);
        if bytes.is_empty() {
            return Err(LoadError::Empty);
        }

        let chars: Vec<char> = match policy {
            DecodePolicy::Strict => std::str::from_utf8(bytes)
                .map_err(|err| LoadError::InvalidEncoding {
                    offset: err.valid_up_to(),
                })?
                .chars()
                .collect(),
            DecodePolicy::Lossy => String::from_utf8_lossy(bytes).chars().collect(),
        };

        debug!(
            "content: loaded bytes={} chars={} policy={:?}",
            bytes.len(),
            chars.len(),
            policy
        );
        Ok(Self { chars })
    }

    /// Reads `reader` to end-of-stream before decoding.
    pub fn from_reader<R: Read>(mut reader: R, policy: DecodePolicy) -> Result<Self, LoadError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes, policy)
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn first(&self) -> Option<char> {
        self.chars.first().copied()
    }
}

fn strip_byte_order_mark(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(&BYTE_ORDER_MARK[..]).unwrap_or(bytes)
}
