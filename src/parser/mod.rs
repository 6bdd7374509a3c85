//! Parser module — comment block extraction and tag splitting.

pub mod block;
pub mod segment;

use crate::model::Line;

/// Strip carriage returns and split into numbered lines.
///
/// Borrows from `input`, so callers normalise first with [`normalize`].
pub fn lines(input: &str) -> Vec<Line<'_>> {
    input
        .split('\n')
        .enumerate()
        .map(|(i, text)| Line {
            number: i + 1,
            text,
        })
        .collect()
}

/// Remove every `\r` from the input text.
pub fn normalize(input: &str) -> String {
    input.replace('\r', "")
}
