//! GitHub-flavored Markdown tables.
//!
//! GFM tables need a header row, and their cells can't hold newlines or
//! unescaped pipes. Cell text is HTML-escaped, with `|` and newlines written
//! as character references, so a table stays a table whatever the data.
//! Separators are skipped.
//!
//! Column alignment comes from the static [`ALIGNMENT`](tabular::ALIGNMENT)
//! property of each column, else the default column, and is written both
//! into the control row and as padding of the cells.

use std::io::Write;
use std::ops::{Deref, DerefMut};

use tabular::align::static_alignment;
use tabular::length;
use tabular::{Alignment, Cell, Row, Table};

use crate::error::{RenderError, Result};
use crate::traits::RenderTable;

/// A table written as a Markdown table.
#[derive(Debug)]
pub struct MarkdownTable {
    table: Table,
}

impl MarkdownTable {
    pub fn new() -> Self {
        MarkdownTable::wrap(Table::new())
    }

    pub fn wrap(table: Table) -> Self {
        MarkdownTable { table }
    }

    pub fn into_table(self) -> Table {
        self.table
    }

    pub fn render(&mut self) -> Result<String> {
        RenderTable::render(self)
    }

    pub fn render_to(&mut self, w: &mut dyn Write) -> Result<()> {
        self.table.invoke_render_callbacks();
        let table = &self.table;
        let n_columns = table.n_columns();
        if n_columns < 1 {
            return Err(RenderError::NoColumns);
        }
        let header = table
            .header_row()
            .ok_or(RenderError::MissingHeaders("markdown tables"))?;
        log::debug!("markdown render of {} rows, {} columns", table.n_rows(), n_columns);

        let body: Vec<&Row> = table.all_rows().iter().filter(|row| !row.is_separator()).collect();
        let mut widths = vec![0; n_columns];
        for row in std::iter::once(header).chain(body.iter().copied()) {
            if row.len() > n_columns {
                return Err(RenderError::TooManyCells {
                    row: row.row_number(),
                    cells: row.len(),
                    columns: n_columns,
                });
            }
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.terminal_cell_width());
            }
        }

        let mut alignments = Vec::with_capacity(n_columns);
        for number in 1..=n_columns {
            alignments.push(column_alignment(table, number)?);
        }

        let mut out = String::new();
        push_row(&mut out, header.cells(), &widths, &alignments);
        out.push('|');
        for (width, alignment) in widths.iter().zip(&alignments) {
            let dashes = "-".repeat((*width).max(3));
            match alignment {
                Alignment::Right => out.push_str(&format!(" {dashes}:")),
                Alignment::Center => out.push_str(&format!(":{dashes}:")),
                _ => out.push_str(&format!(" {dashes} ")),
            }
            out.push('|');
        }
        out.push('\n');
        for row in body {
            push_row(&mut out, row.cells(), &widths, &alignments);
        }

        w.write_all(out.as_bytes())?;
        Ok(())
    }
}

impl Default for MarkdownTable {
    fn default() -> Self {
        MarkdownTable::new()
    }
}

impl Deref for MarkdownTable {
    type Target = Table;

    fn deref(&self) -> &Table {
        &self.table
    }
}

impl DerefMut for MarkdownTable {
    fn deref_mut(&mut self) -> &mut Table {
        &mut self.table
    }
}

impl RenderTable for MarkdownTable {
    fn render_to(&mut self, w: &mut dyn Write) -> Result<()> {
        MarkdownTable::render_to(self, w)
    }
}

/// Renders `table` as Markdown.
pub fn render(table: &mut Table) -> Result<String> {
    let mut wrapped = MarkdownTable::wrap(std::mem::take(table));
    let out = wrapped.render();
    *table = wrapped.into_table();
    out
}

/// Writes `table` to `w` as Markdown.
pub fn render_to(table: &mut Table, w: &mut dyn Write) -> Result<()> {
    let mut wrapped = MarkdownTable::wrap(std::mem::take(table));
    let out = wrapped.render_to(w);
    *table = wrapped.into_table();
    out
}

fn column_alignment(table: &Table, number: usize) -> Result<Alignment> {
    if let Some(column) = table.column(number) {
        if let Some(alignment) = static_alignment(column)? {
            return Ok(alignment);
        }
    }
    Ok(static_alignment(table.default_column())?.unwrap_or_default())
}

fn push_row(out: &mut String, cells: &[Cell], widths: &[usize], alignments: &[Alignment]) {
    if cells.is_empty() {
        out.push('|');
    }
    for (i, cell) in cells.iter().enumerate() {
        out.push_str(if i == 0 { "| " } else { " | " });
        out.push_str(&padded(cell, widths[i], alignments[i]));
    }
    if !cells.is_empty() {
        out.push_str(" |");
    }
    for _ in cells.len()..widths.len() {
        out.push_str(" |");
    }
    out.push('\n');
}

fn padded(cell: &Cell, width: usize, alignment: Alignment) -> String {
    let text = escape(cell.as_str());
    let pad = width.saturating_sub(length::string_cells(&text));
    match alignment {
        Alignment::Right => format!("{}{text}", " ".repeat(pad)),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(pad - left))
        }
        _ => format!("{text}{}", " ".repeat(pad)),
    }
}

/// HTML-escapes `text`, then writes pipes and newlines as character
/// references.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            '|' => out.push_str("&#x7c;"),
            '\n' => out.push_str("&#x0a;"),
            _ => out.push(c),
        }
    }
    out
}
