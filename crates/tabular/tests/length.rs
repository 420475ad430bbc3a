//! String measurement tables.

use tabular::length::{
    lines, longest_line_cells, longest_line_len, longest_line_runes, string_bytes, string_cells,
    string_runes,
};

struct Measured {
    input: &'static str,
    bytes: usize,
    runes: usize,
    cells: usize,
}

const SINGLE_LINE: &[Measured] = &[
    Measured { input: "", bytes: 0, runes: 0, cells: 0 },
    Measured { input: "a", bytes: 1, runes: 1, cells: 1 },
    Measured { input: " b", bytes: 2, runes: 2, cells: 2 },
    Measured { input: "£", bytes: 2, runes: 1, cells: 1 },
    Measured { input: "⌘€", bytes: 6, runes: 2, cells: 2 },
    Measured { input: "á", bytes: 2, runes: 1, cells: 1 },
    // combining acute accent
    Measured { input: "\u{301}a", bytes: 3, runes: 2, cells: 1 },
    // fullwidth latin small letter a
    Measured { input: "ａ", bytes: 3, runes: 1, cells: 2 },
    // left-to-right embedding
    Measured { input: "\u{202A}", bytes: 3, runes: 1, cells: 0 },
    Measured { input: "a\u{A0}b", bytes: 4, runes: 3, cells: 3 },
    Measured { input: "a\u{2002}b", bytes: 5, runes: 3, cells: 3 },
    Measured { input: "a\u{2003}b", bytes: 5, runes: 3, cells: 3 },
    // zero width space
    Measured { input: "a\u{200B}b", bytes: 5, runes: 3, cells: 2 },
    // ideographic space
    Measured { input: "a\u{3000}b", bytes: 5, runes: 3, cells: 4 },
    // flexed biceps: drawn two cells wide by most terminals, counted as one
    Measured { input: "\u{1F4AA}", bytes: 4, runes: 1, cells: 1 },
];

#[test]
fn single_line_measures() {
    for m in SINGLE_LINE {
        assert_eq!(string_bytes(m.input), m.bytes, "bytes of {:?}", m.input);
        assert_eq!(string_runes(m.input), m.runes, "runes of {:?}", m.input);
        assert_eq!(string_cells(m.input), m.cells, "cells of {:?}", m.input);
    }
}

struct MeasuredLines {
    input: &'static str,
    lines: usize,
    bytes: usize,
    runes: usize,
    cells: usize,
}

const MULTI_LINE: &[MeasuredLines] = &[
    MeasuredLines { input: "", lines: 0, bytes: 0, runes: 0, cells: 0 },
    MeasuredLines { input: "\n", lines: 1, bytes: 0, runes: 0, cells: 0 },
    MeasuredLines { input: "\n\n", lines: 2, bytes: 0, runes: 0, cells: 0 },
    MeasuredLines { input: "a\n", lines: 1, bytes: 1, runes: 1, cells: 1 },
    MeasuredLines { input: "a\n\n", lines: 2, bytes: 1, runes: 1, cells: 1 },
    MeasuredLines { input: "\nbbb", lines: 2, bytes: 3, runes: 3, cells: 3 },
    MeasuredLines { input: "\nb\n", lines: 2, bytes: 1, runes: 1, cells: 1 },
    MeasuredLines { input: "a\nbb\nc", lines: 3, bytes: 2, runes: 2, cells: 2 },
    MeasuredLines { input: "\u{301}a\nb", lines: 2, bytes: 3, runes: 2, cells: 1 },
    MeasuredLines { input: "ａ\nbb", lines: 2, bytes: 3, runes: 2, cells: 2 },
    MeasuredLines { input: "\u{1F4AA}\nｂ", lines: 2, bytes: 4, runes: 1, cells: 2 },
];

#[test]
fn longest_line_measures() {
    for m in MULTI_LINE {
        assert_eq!(longest_line_len(m.input), (m.lines, m.bytes), "bytes of {:?}", m.input);
        assert_eq!(longest_line_runes(m.input), (m.lines, m.runes), "runes of {:?}", m.input);
        assert_eq!(longest_line_cells(m.input), (m.lines, m.cells), "cells of {:?}", m.input);
    }
}

#[test]
fn extra_trailing_newlines_become_empty_lines() {
    assert_eq!(lines("x\n\n\n"), vec!["x", "", ""]);
    assert_eq!(lines("x\ny"), vec!["x", "y"]);
}
