//! Character-level line formatting.
//!
//! OpenNMT reads whitespace separated tokens and drops examples with an empty source,
//! so every character becomes a token, spaces are rendered as [SPACE_PLACEHOLDER]
//! and each line starts with [BEGIN_MARKER].
use itertools::Itertools;

pub const BEGIN_MARKER: &str = "<BEG>";
pub const SPACE_PLACEHOLDER: char = '_';

/// Format a sentence into a newline-terminated, character-tokenized line.
pub fn format_line(sentence: &str) -> String {
    let chars = sentence
        .chars()
        .map(|c| if c == ' ' { SPACE_PLACEHOLDER } else { c })
        .join(" ");
    format!("{} {}\n", BEGIN_MARKER, chars)
}
