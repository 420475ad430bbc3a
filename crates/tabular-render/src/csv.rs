//! Comma-separated values output.
//!
//! Every field is quoted, with embedded quotes doubled and embedded newlines
//! kept as they are. Rows shorter than the table are padded with empty
//! fields. Separators have no CSV form and are skipped.

use std::io::Write;
use std::ops::{Deref, DerefMut};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tabular::{Cell, Table};

use crate::error::{RenderError, Result};
use crate::traits::RenderTable;

/// A table with the options for writing it as CSV.
#[derive(Debug)]
pub struct CsvTable {
    table: Table,
    delimiter: u8,
}

impl CsvTable {
    pub fn new() -> Self {
        CsvTable::wrap(Table::new())
    }

    pub fn wrap(table: Table) -> Self {
        CsvTable {
            table,
            delimiter: b',',
        }
    }

    pub fn into_table(self) -> Table {
        self.table
    }

    /// Uses `delimiter` between fields instead of a comma.
    pub fn set_delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    pub fn render(&mut self) -> Result<String> {
        RenderTable::render(self)
    }

    pub fn render_to(&mut self, w: &mut dyn Write) -> Result<()> {
        self.table.invoke_render_callbacks();
        let n_columns = self.table.n_columns();
        if n_columns < 1 {
            return Err(RenderError::NoColumns);
        }
        log::debug!("csv render of {} rows, {} columns", self.table.n_rows(), n_columns);

        let mut out = WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(w);

        let header = self.table.header_row().into_iter();
        let body = self.table.all_rows().iter().filter(|row| !row.is_separator());
        for row in header.chain(body) {
            let cells = row.cells();
            if cells.len() > n_columns {
                return Err(RenderError::TooManyCells {
                    row: row.row_number(),
                    cells: cells.len(),
                    columns: n_columns,
                });
            }
            let fields = cells
                .iter()
                .map(Cell::as_str)
                .chain(std::iter::repeat("").take(n_columns - cells.len()));
            out.write_record(fields)?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for CsvTable {
    fn default() -> Self {
        CsvTable::new()
    }
}

impl Deref for CsvTable {
    type Target = Table;

    fn deref(&self) -> &Table {
        &self.table
    }
}

impl DerefMut for CsvTable {
    fn deref_mut(&mut self) -> &mut Table {
        &mut self.table
    }
}

impl RenderTable for CsvTable {
    fn render_to(&mut self, w: &mut dyn Write) -> Result<()> {
        CsvTable::render_to(self, w)
    }
}

/// Renders `table` as CSV with the default options.
pub fn render(table: &mut Table) -> Result<String> {
    let mut wrapped = CsvTable::wrap(std::mem::take(table));
    let out = wrapped.render();
    *table = wrapped.into_table();
    out
}

/// Writes `table` to `w` as CSV with the default options.
pub fn render_to(table: &mut Table, w: &mut dyn Write) -> Result<()> {
    let mut wrapped = CsvTable::wrap(std::mem::take(table));
    let out = wrapped.render_to(w);
    *table = wrapped.into_table();
    out
}
