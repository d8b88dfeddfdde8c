//! Shared text shaping policies for the status line and unit row.

use crate::render::StatusMode;

/// Cells in the progress bar. Each cell holds two half steps.
pub const PROGRESS_CELLS: usize = 32;

const PROGRESS_FULL: char = '⠿';
const PROGRESS_HALF: char = '⠇';

pub fn unit_noun(single_character: bool) -> &'static str {
    if single_character {
        "characters"
    } else {
        "words"
    }
}

/// `"300 words per min"`.
pub fn rate_label(rate: u32, single_character: bool) -> String {
    format!("{rate} {} per min", unit_noun(single_character))
}

/// Panel shown in place of the unit while a new rate is typed.
pub fn rate_entry_label(entry: u32, single_character: bool) -> String {
    format!("New {} per min: {entry}", unit_noun(single_character))
}

pub fn status_help(mode: StatusMode<'_>) -> String {
    match mode {
        StatusMode::Searching { term } => format!("[Search: {term}]"),
        StatusMode::ComposingRate => "[Press Enter to set the rate.]".to_string(),
        StatusMode::Paused => "[Press SPC to start.]".to_string(),
        StatusMode::Playing => String::new(),
    }
}

/// Fixed-width braille bar for `completed / total`, rounded to half cells.
pub fn progress_bar(completed: usize, total: usize) -> String {
    let half_steps = PROGRESS_CELLS * 2;
    let filled = if total == 0 {
        0
    } else {
        let ratio = completed.min(total) as f64 / total as f64;
        (ratio * half_steps as f64).round() as usize
    };

    let mut bar = String::with_capacity(PROGRESS_CELLS * 3);
    let full = filled / 2;
    for _ in 0..full {
        bar.push(PROGRESS_FULL);
    }
    if full * 2 < filled {
        bar.push(PROGRESS_HALF);
    }

    let used = full + usize::from(full * 2 < filled);
    for _ in used..PROGRESS_CELLS {
        bar.push(' ');
    }
    bar
}

/// Replaces line breaks and other controls so context text stays on one row.
pub fn flatten_for_row(ch: char) -> char {
    if ch.is_control() || ch.is_whitespace() {
        ' '
    } else {
        ch
    }
}
