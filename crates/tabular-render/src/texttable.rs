//! Tables drawn on a grid of fixed-width character cells.
//!
//! [`TextTable`] wraps a [`Table`] with the options for drawing it on a
//! terminal: the border [`Decoration`] and optional table colors.
//!
//! ```rust
//! use tabular::values;
//! use tabular_render::TextTable;
//!
//! let mut t = TextTable::new();
//! t.add_headers(["n", "name"]);
//! t.add_row_items(values![1, "one"]);
//! assert_eq!(
//!     t.render().unwrap(),
//!     "┏━━━┳━━━━━━┓\n┃ n ┃ name ┃\n┣━━━╇━━━━━━┫\n┃ 1 │ one  ┃\n┗━━━┷━━━━━━┛\n"
//! );
//! ```
//!
//! # Layout
//!
//! Columns are as wide as their widest cell. Every alignment other than
//! left puts an anchor in the cell: its end when right aligned, its middle
//! when centered, the last period or comma, or whatever offset an alignment
//! function returns. Cells line up on their anchors, so such a column is as
//! wide as its longest text before the anchor plus its longest text from
//! the anchor on. A multi-line cell takes one line of
//! output per line of text; shorter cells in the same row are padded with
//! blank lines.
//!
//! Columns and rows with the [`OMIT`] property set to `true` are left out.
//! A column's omission comes from the column itself, else from the default
//! column.
//!
//! # Colors
//!
//! A foreground and background color can be set for the whole table. The
//! background covers only the cells unless it is made solid, in which case
//! it also covers the borders. Cells, rows and columns may carry their own
//! [`FG_COLOR`] and [`BG_COLOR`] properties, which win over the table's.

use std::io::Write;
use std::ops::{Deref, DerefMut};

use tabular::align::resolve_alignment;
use tabular::{
    Alignment, Cell, Color, PropertyKey, PropertyOwner, ResolvedAlignment, Row, Table,
    BG_COLOR, ERASE_TO_EOL, FG_COLOR, OMIT, RESET,
};

use crate::decoration::{self, Decoration, Emitter, WidthString};
use crate::dimensions::{register_dimension_setter, CellDimensions};
use crate::error::{RenderError, Result};
use crate::traits::RenderTable;

/// A table with the options for drawing it as text.
#[derive(Debug)]
pub struct TextTable {
    table: Table,
    decoration: Decoration,
    fg: Option<Color>,
    bg: Option<Color>,
    bg_solid: bool,
    to_eol: bool,
}

impl TextTable {
    pub fn new() -> Self {
        TextTable::wrap(Table::new())
    }

    /// Wraps an existing table, drawn with the default decoration.
    pub fn wrap(mut table: Table) -> Self {
        if let Err(err) = register_dimension_setter(&mut table) {
            table.add_error(err);
        }
        TextTable {
            table,
            decoration: decoration::named(decoration::DEFAULT_DECORATION),
            fg: None,
            bg: None,
            bg_solid: false,
            to_eol: false,
        }
    }

    pub fn into_table(self) -> Table {
        self.table
    }

    pub fn decoration(&self) -> &Decoration {
        &self.decoration
    }

    pub fn set_decoration(&mut self, decoration: Decoration) -> &mut Self {
        self.decoration = decoration;
        self
    }

    /// Selects a registered decoration by name.
    ///
    /// An unknown name still replaces the decoration, with the empty one, so
    /// that rendering fails instead of quietly using some other style.
    pub fn set_decoration_named(&mut self, name: &str) -> Result<&mut Self> {
        self.decoration = decoration::named(name);
        if self.decoration.is_empty() {
            log::warn!("unknown decoration {name:?} selected");
            return Err(RenderError::UnknownDecoration(name.to_string()));
        }
        log::debug!("decoration {name:?} selected");
        Ok(self)
    }

    pub fn set_fg_color(&mut self, color: Color) -> &mut Self {
        self.fg = Some(color);
        self
    }

    pub fn set_bg_color(&mut self, color: Color) -> &mut Self {
        self.bg = Some(color);
        self
    }

    /// Extends the background color over the borders as well as the cells.
    pub fn set_bg_solid(&mut self, solid: bool) -> &mut Self {
        self.bg_solid = solid;
        self
    }

    /// Clears to the end of the terminal line before resetting colors, so a
    /// colored background runs on past the table.
    pub fn set_to_eol(&mut self, to_eol: bool) -> &mut Self {
        self.to_eol = to_eol;
        self
    }

    pub fn fg_color(&self) -> Option<Color> {
        self.fg
    }

    pub fn bg_color(&self) -> Option<Color> {
        self.bg
    }

    pub fn render(&mut self) -> Result<String> {
        RenderTable::render(self)
    }

    /// Draws the table into `w`, stopping at the first error.
    pub fn render_to(&mut self, w: &mut dyn Write) -> Result<()> {
        if self.decoration.is_empty() {
            return Err(RenderError::NoDecoration);
        }
        log::debug!(
            "text render of {} rows, {} columns",
            self.table.n_rows(),
            self.table.n_columns()
        );
        self.table.invoke_render_callbacks();

        let palette = Palette::new(self.fg, self.bg, self.bg_solid, self.to_eol);
        let layout = Layout::prepare(&self.table, &palette)?;
        let emitter = self.decoration.for_column_widths(layout.widths());
        layout.emit(&emitter, &palette, w)
    }
}

impl Default for TextTable {
    fn default() -> Self {
        TextTable::new()
    }
}

impl Deref for TextTable {
    type Target = Table;

    fn deref(&self) -> &Table {
        &self.table
    }
}

impl DerefMut for TextTable {
    fn deref_mut(&mut self) -> &mut Table {
        &mut self.table
    }
}

impl RenderTable for TextTable {
    fn render_to(&mut self, w: &mut dyn Write) -> Result<()> {
        TextTable::render_to(self, w)
    }
}

/// Renders `table` with the default text options.
pub fn render(table: &mut Table) -> Result<String> {
    let mut wrapped = TextTable::wrap(std::mem::take(table));
    let out = wrapped.render();
    *table = wrapped.into_table();
    out
}

/// Writes `table` to `w` with the default text options.
pub fn render_to(table: &mut Table, w: &mut dyn Write) -> Result<()> {
    let mut wrapped = TextTable::wrap(std::mem::take(table));
    let out = wrapped.render_to(w);
    *table = wrapped.into_table();
    out
}

/// Escape sequences for the table colors.
struct Palette {
    fg: Option<Color>,
    bg: Option<Color>,
    line_bg: Option<Color>,
    line_start: String,
    to_eol: bool,
}

impl Palette {
    fn new(fg: Option<Color>, bg: Option<Color>, solid: bool, to_eol: bool) -> Self {
        let line_bg = if solid { bg } else { None };
        Palette {
            fg,
            bg,
            line_bg,
            line_start: escapes(fg, line_bg),
            to_eol,
        }
    }

    /// The escapes opening a cell colored differently from its line.
    fn cell_start(&self, fg: Option<Color>, bg: Option<Color>) -> Option<String> {
        let fg = fg.or(self.fg);
        let bg = bg.or(self.bg);
        if fg == self.fg && bg == self.line_bg {
            None
        } else {
            Some(escapes(fg, bg))
        }
    }

    fn finish_line(&self, line: &str) -> String {
        if self.line_start.is_empty() {
            return format!("{line}\n");
        }
        let eol = if self.to_eol { ERASE_TO_EOL } else { "" };
        format!("{}{line}{eol}{RESET}\n", self.line_start)
    }
}

fn escapes(fg: Option<Color>, bg: Option<Color>) -> String {
    let mut out = String::new();
    if let Some(fg) = fg {
        out.push_str(&fg.ansi_escape_fg());
    }
    if let Some(bg) = bg {
        out.push_str(&bg.ansi_escape_bg());
    }
    out
}

/// Where a cell sits in its column: flush left, or lined up with the other
/// cells of the column at an offset into its text.
#[derive(Debug, Clone, Copy)]
enum Anchor {
    Left,
    At(usize),
}

/// A cell measured and ready to be placed in its column.
struct Placed {
    lines: Vec<WidthString>,
    width: usize,
    anchor: Anchor,
    /// Escapes around the text when the cell's colors differ from its line.
    colors: Option<(String, String)>,
}

enum Prepared {
    Rule,
    Cells(Vec<Option<Placed>>),
}

#[derive(Debug, Default, Clone, Copy)]
struct ColumnWidth {
    plain: usize,
    to_left: usize,
    to_right: usize,
}

impl ColumnWidth {
    fn total(&self) -> usize {
        self.plain.max(self.to_left + self.to_right)
    }

    fn fit(&mut self, placed: &Placed) {
        match placed.anchor {
            Anchor::At(offset) => {
                self.to_left = self.to_left.max(offset);
                self.to_right = self.to_right.max(placed.width.saturating_sub(offset));
            }
            Anchor::Left => self.plain = self.plain.max(placed.width),
        }
    }

    fn left_pad(&self, placed: &Placed) -> usize {
        match placed.anchor {
            Anchor::Left => 0,
            Anchor::At(offset) => self.to_left.saturating_sub(offset),
        }
    }
}

/// Everything needed to draw a table, gathered in one pass over it.
struct Layout {
    columns: Vec<ColumnWidth>,
    header: Option<Vec<Option<Placed>>>,
    body: Vec<Prepared>,
}

impl Layout {
    fn prepare(table: &Table, palette: &Palette) -> Result<Layout> {
        let n_columns = table.n_columns();
        let has_content = table.header_row().is_some() || table.n_rows() > 0;
        if n_columns == 0 && has_content {
            return Err(RenderError::NoColumns);
        }

        let mut visible = Vec::with_capacity(n_columns);
        for number in 1..=n_columns {
            if !column_omitted(table, number)? {
                visible.push(number);
            }
        }
        if visible.is_empty() && has_content {
            return Err(RenderError::NoColumnsToDisplay);
        }

        let mut layout = Layout {
            columns: vec![ColumnWidth::default(); visible.len()],
            header: None,
            body: Vec::with_capacity(table.n_rows()),
        };

        if let Some(header) = table.header_row() {
            if !row_omitted(header)? {
                let cells = place_row(table, header, &visible, palette)?;
                layout.fit(&cells);
                layout.header = Some(cells);
            }
        }
        for row in table.all_rows() {
            if row_omitted(row)? {
                continue;
            }
            if row.is_separator() {
                layout.body.push(Prepared::Rule);
                continue;
            }
            let cells = place_row(table, row, &visible, palette)?;
            layout.fit(&cells);
            layout.body.push(Prepared::Cells(cells));
        }
        Ok(layout)
    }

    fn fit(&mut self, cells: &[Option<Placed>]) {
        for (column, placed) in self.columns.iter_mut().zip(cells) {
            if let Some(placed) = placed {
                column.fit(placed);
            }
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.columns.iter().map(ColumnWidth::total).collect()
    }

    /// Physical lines of one row, each a list of padded cell parts.
    fn row_lines(&self, cells: &[Option<Placed>]) -> Vec<Vec<WidthString>> {
        let height = cells
            .iter()
            .flatten()
            .map(|placed| placed.lines.len())
            .max()
            .unwrap_or(0)
            .max(1);

        (0..height)
            .map(|l| {
                self.columns
                    .iter()
                    .zip(cells)
                    .map(|(column, placed)| match placed {
                        Some(placed) => match placed.lines.get(l) {
                            Some(line) => place_line(column, placed, line),
                            None => WidthString::blank(),
                        },
                        None => WidthString::blank(),
                    })
                    .collect()
            })
            .collect()
    }

    fn emit(&self, emitter: &Emitter<'_>, palette: &Palette, w: &mut dyn Write) -> Result<()> {
        let mut put = |line: Option<String>| -> Result<()> {
            if let Some(line) = line {
                w.write_all(palette.finish_line(&line).as_bytes())?;
            }
            Ok(())
        };

        match &self.header {
            Some(header) => {
                put(emitter.line_header_top())?;
                for parts in self.row_lines(header) {
                    put(Some(emitter.header_line_rendered(&parts)))?;
                }
                put(emitter.line_header_body_sep())?;
            }
            None => put(emitter.line_body_top())?,
        }

        for row in &self.body {
            match row {
                Prepared::Rule => put(emitter.line_separator())?,
                Prepared::Cells(cells) => {
                    for parts in self.row_lines(cells) {
                        put(Some(emitter.body_line_rendered(&parts)))?;
                    }
                }
            }
        }

        put(emitter.line_bottom())
    }
}

fn place_line(column: &ColumnWidth, placed: &Placed, line: &WidthString) -> WidthString {
    let pad = column.left_pad(placed);
    let mut text = " ".repeat(pad);
    match &placed.colors {
        Some((start, end)) => {
            text.insert_str(0, start);
            text.push_str(&line.text);
            text.push_str(end);
        }
        None => text.push_str(&line.text),
    }
    WidthString::new(text, pad + line.width)
}

fn place_row(table: &Table, row: &Row, visible: &[usize], palette: &Palette) -> Result<Vec<Option<Placed>>> {
    if row.len() > table.n_columns() {
        return Err(RenderError::TooManyCells {
            row: row.row_number(),
            cells: row.len(),
            columns: table.n_columns(),
        });
    }
    let mut placed = Vec::with_capacity(visible.len());
    for &number in visible {
        placed.push(match row.cell(number) {
            Some(cell) => Some(place_cell(table, row, cell, palette)?),
            None => None,
        });
    }
    Ok(placed)
}

fn place_cell(table: &Table, row: &Row, cell: &Cell, palette: &Palette) -> Result<Placed> {
    let dims = CellDimensions::of(cell);
    let anchor = match resolve_alignment(cell, Some(row), Some(table)) {
        ResolvedAlignment::Static(Alignment::Left) => Anchor::Left,
        anchored => Anchor::At(anchored.offset_for(cell)),
    };

    let fg = cell_color(table, row, cell, &FG_COLOR)?;
    let bg = cell_color(table, row, cell, &BG_COLOR)?;
    let colors = palette
        .cell_start(fg, bg)
        .map(|start| (start, format!("{RESET}{}", palette.line_start)));

    Ok(Placed {
        lines: dims.lines,
        width: dims.width,
        anchor,
        colors,
    })
}

fn color_owners<'t>(table: &'t Table, row: &'t Row, cell: &'t Cell) -> Vec<&'t dyn PropertyOwner> {
    let mut owners: Vec<&dyn PropertyOwner> = vec![cell, row];
    if let Some(column) = table.column(cell.column_number()) {
        owners.push(column);
    }
    owners.push(table.default_column());
    owners
}

/// The nearest color under `key`: cell, row, column, then default column.
fn cell_color(table: &Table, row: &Row, cell: &Cell, key: &PropertyKey) -> Result<Option<Color>> {
    for owner in color_owners(table, row, cell) {
        if let Some(color) = owner.properties().expect_as::<Color>(key, owner.owner_label())? {
            return Ok(Some(*color));
        }
    }
    Ok(None)
}

fn column_omitted(table: &Table, number: usize) -> Result<bool> {
    if let Some(column) = table.column(number) {
        if let Some(omit) = column.properties().expect_as::<bool>(&OMIT, column.owner_label())? {
            return Ok(*omit);
        }
    }
    let default = table.default_column();
    Ok(default
        .properties()
        .expect_as::<bool>(&OMIT, default.owner_label())?
        .copied()
        .unwrap_or(false))
}

fn row_omitted(row: &Row) -> Result<bool> {
    Ok(row
        .properties()
        .expect_as::<bool>(&OMIT, row.owner_label())?
        .copied()
        .unwrap_or(false))
}
