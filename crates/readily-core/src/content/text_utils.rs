use super::{DisplayUnit, is_punctuation};

/// Where one display unit ends and the next begins.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoundaryPolicy {
    /// Maximal runs of non-whitespace.
    Words,
    /// One non-punctuation code point plus any punctuation that trails it.
    Characters,
}

impl BoundaryPolicy {
    pub const fn from_single_character(single_character: bool) -> Self {
        if single_character {
            Self::Characters
        } else {
            Self::Words
        }
    }

    fn is_boundary(self, ch: char) -> bool {
        ch.is_whitespace() || (matches!(self, Self::Characters) && !is_punctuation(ch))
    }
}

/// Next display unit at or after `cursor`, plus the cursor to resume from.
///
/// Leading whitespace is skipped. The boundary code point is not consumed:
/// the returned cursor sits on it. Returns `None` once only whitespace is left.
pub fn next_unit(
    text: &[char],
    mut cursor: usize,
    policy: BoundaryPolicy,
) -> Option<(DisplayUnit, usize)> {
    let mut unit = String::new();
    let mut start_offset = None;

    while cursor < text.len() {
        let ch = text[cursor];
        if start_offset.is_some() && policy.is_boundary(ch) {
            break;
        }

        if !ch.is_whitespace() {
            start_offset.get_or_insert(cursor);
            unit.push(ch);
        }
        cursor += 1;
    }

    start_offset.map(|start_offset| {
        (
            DisplayUnit {
                text: unit,
                start_offset,
            },
            cursor,
        )
    })
}

/// Index of the first code point of `text` found in `set`.
pub fn index_any(text: &[char], set: &[char]) -> Option<usize> {
    text.iter().position(|ch| set.contains(ch))
}

/// Index of the last code point of `text` found in `set`.
pub fn last_index_any(text: &[char], set: &[char]) -> Option<usize> {
    text.iter().rposition(|ch| set.contains(ch))
}

/// First offset `>= from` where `term` occurs verbatim. Empty terms never match.
pub fn find_term(text: &[char], term: &[char], from: usize) -> Option<usize> {
    if term.is_empty() || from >= text.len() {
        return None;
    }

    text[from..]
        .windows(term.len())
        .position(|window| window == term)
        .map(|relative| from + relative)
}
