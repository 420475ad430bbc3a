//! String length measurements.
//!
//! Three notions of length matter when laying text out: bytes (storage),
//! runes (Unicode scalar values), and terminal cells (what the user sees).
//! Cell counts come from `unicode-width`, with one deliberate adjustment:
//! pictographs in the supplementary symbol planes are counted as a single
//! cell. Terminals disagree about how wide those are, and many still draw
//! them in one cell, so the narrow reading is the one kept here.
//!
//! Multi-line helpers treat `\n` as the only line separator, and a single
//! trailing newline does not start an extra empty line.

use std::ops::RangeInclusive;

use unicode_width::UnicodeWidthChar;

const NARROW_PICTOGRAPHS: RangeInclusive<char> = '\u{1F000}'..='\u{1FAFF}';

/// Length of `s` in bytes.
pub fn string_bytes(s: &str) -> usize {
    s.len()
}

/// Number of Unicode scalar values in `s`.
pub fn string_runes(s: &str) -> usize {
    s.chars().count()
}

/// Terminal display cells taken by `s`.
///
/// Combining marks and default-ignorable characters take no space, East
/// Asian wide characters take two.
pub fn string_cells(s: &str) -> usize {
    s.chars().map(char_cells).sum()
}

fn char_cells(c: char) -> usize {
    if NARROW_PICTOGRAPHS.contains(&c) {
        return 1;
    }
    c.width().unwrap_or(0)
}

/// Splits `s` into lines on `\n`, dropping the empty line a trailing
/// newline would otherwise produce.
pub fn lines(s: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = s.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

fn longest_line_by(s: &str, measure: fn(&str) -> usize) -> (usize, usize) {
    let lines = lines(s);
    let longest = lines.iter().map(|line| measure(line)).max().unwrap_or(0);
    (lines.len(), longest)
}

/// Line count and the byte length of the longest line.
pub fn longest_line_len(s: &str) -> (usize, usize) {
    longest_line_by(s, string_bytes)
}

/// Line count and the rune count of the longest line.
pub fn longest_line_runes(s: &str) -> (usize, usize) {
    longest_line_by(s, string_runes)
}

/// Line count and the cell width of the longest line.
pub fn longest_line_cells(s: &str) -> (usize, usize) {
    longest_line_by(s, string_cells)
}
