//! Cell alignment.
//!
//! Alignment is set as a property on a cell, row, column, the default
//! column or the table, and resolved for a cell by checking those owners in
//! that order. At each owner an alignment function wins over a static
//! [`Alignment`]; the first owner with either decides. With nothing set, a
//! cell is left-aligned.
//!
//! A resolved alignment yields an offset: the number of terminal cells from
//! the left edge of the cell's text to its anchor point. Renderers line up
//! anchors within a column.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{Result, TableError};
use crate::length;
use crate::property::{PropertyKey, PropertyOwner};
use crate::row::Row;
use crate::table::{RowPosition, Table};

/// Property holding a static [`Alignment`].
pub const ALIGNMENT: PropertyKey = PropertyKey::new("alignment", "static");

/// Property holding an [`AlignmentFn`].
pub const ALIGNMENT_FN: PropertyKey = PropertyKey::new("alignment", "func");

/// Offset of a cell's anchor point, in terminal cells from the left.
pub type AlignmentOffset = usize;

/// Computes the anchor offset for a cell.
pub type AlignmentFn = Rc<dyn Fn(&Cell) -> AlignmentOffset>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    /// Line up on the last `.` in the text.
    Period,
    /// Line up on the last `,` in the text.
    Comma,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Period => "period",
            Alignment::Comma => "comma",
        }
    }

    /// Anchor offset of `cell` under this alignment.
    ///
    /// Multi-line cells have no single anchor character, so period and comma
    /// alignment put them at offset 0, as does a missing anchor character.
    pub fn offset_for(&self, cell: &Cell) -> AlignmentOffset {
        let width = cell.terminal_cell_width();
        match self {
            Alignment::Left => 0,
            Alignment::Center => width / 2,
            Alignment::Right => width,
            Alignment::Period => anchor_offset(cell, '.'),
            Alignment::Comma => anchor_offset(cell, ','),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn anchor_offset(cell: &Cell, anchor: char) -> AlignmentOffset {
    if cell.height() > 1 {
        return 0;
    }
    let text = cell.as_str();
    text.rfind(anchor).map_or(0, |at| length::string_cells(&text[..at]))
}

/// The alignment that applies to a cell.
#[derive(Clone)]
pub enum ResolvedAlignment {
    Static(Alignment),
    Func(AlignmentFn),
}

impl ResolvedAlignment {
    pub fn offset_for(&self, cell: &Cell) -> AlignmentOffset {
        match self {
            ResolvedAlignment::Static(alignment) => alignment.offset_for(cell),
            ResolvedAlignment::Func(f) => f(cell),
        }
    }
}

impl Default for ResolvedAlignment {
    fn default() -> Self {
        ResolvedAlignment::Static(Alignment::Left)
    }
}

impl fmt::Debug for ResolvedAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedAlignment::Static(alignment) => write!(f, "Static({alignment})"),
            ResolvedAlignment::Func(_) => f.write_str("Func(..)"),
        }
    }
}

/// Sets a static alignment on `owner`.
pub fn set_alignment(owner: &mut dyn PropertyOwner, alignment: Alignment) {
    owner.properties_mut().set(ALIGNMENT, alignment);
}

/// Sets an alignment function on `owner`; it takes precedence over any
/// static alignment on the same owner.
pub fn set_alignment_fn<F>(owner: &mut dyn PropertyOwner, f: F)
where
    F: Fn(&Cell) -> AlignmentOffset + 'static,
{
    let f: AlignmentFn = Rc::new(f);
    owner.properties_mut().set(ALIGNMENT_FN, f);
}

/// The static alignment set directly on `owner`, ignoring functions and
/// every other owner.
pub fn static_alignment(owner: &dyn PropertyOwner) -> Result<Option<Alignment>> {
    Ok(owner
        .properties()
        .expect_as::<Alignment>(&ALIGNMENT, owner.owner_label())?
        .copied())
}

fn alignment_of(owner: &dyn PropertyOwner) -> Result<Option<ResolvedAlignment>> {
    let properties = owner.properties();
    if let Some(f) = properties.expect_as::<AlignmentFn>(&ALIGNMENT_FN, owner.owner_label())? {
        return Ok(Some(ResolvedAlignment::Func(Rc::clone(f))));
    }
    Ok(static_alignment(owner)?.map(ResolvedAlignment::Static))
}

/// Resolves the alignment of `cell`, consulting the cell, then `row`, then
/// (given a table) the cell's column, the default column and the table.
///
/// A property of the wrong type is recorded as an error against the row,
/// or the table without a row, and the cell falls back to left alignment.
pub fn resolve_alignment(cell: &Cell, row: Option<&Row>, table: Option<&Table>) -> ResolvedAlignment {
    let mut owners: Vec<&dyn PropertyOwner> = vec![cell];
    if let Some(row) = row {
        owners.push(row);
    }
    if let Some(table) = table {
        if cell.column_number() > 0 {
            if let Some(column) = table.column(cell.column_number()) {
                owners.push(column);
            }
        }
        owners.push(table.default_column());
        owners.push(table);
    }

    for owner in owners {
        match alignment_of(owner) {
            Ok(Some(alignment)) => return alignment,
            Ok(None) => {}
            Err(err) => {
                log::warn!("alignment of cell {}: {}", cell.location(), err);
                match (row, table) {
                    (Some(row), _) => row.add_error(err),
                    (None, Some(table)) => table.add_error(err),
                    (None, None) => {}
                }
                return ResolvedAlignment::default();
            }
        }
    }
    ResolvedAlignment::default()
}

/// Anchor offset of `cell` under its resolved alignment.
pub fn resolve_alignment_offset(cell: &Cell, row: Option<&Row>, table: Option<&Table>) -> AlignmentOffset {
    resolve_alignment(cell, row, table).offset_for(cell)
}

impl Table {
    /// The alignment of the cell at `position`, 1-based `column`.
    pub fn alignment_for(&self, position: RowPosition, column: usize) -> Result<ResolvedAlignment> {
        let row = self.row_at(position);
        let cell = row.and_then(|row| row.cell(column)).ok_or(TableError::NoSuchCell {
            row: row.map_or(0, Row::row_number),
            column,
        })?;
        Ok(resolve_alignment(cell, row, Some(self)))
    }

    /// The anchor offset of the cell at `position`, 1-based `column`.
    pub fn alignment_offset(&self, position: RowPosition, column: usize) -> Result<AlignmentOffset> {
        let alignment = self.alignment_for(position, column)?;
        let row = self.row_at(position);
        let cell = row.and_then(|row| row.cell(column)).ok_or(TableError::NoSuchCell {
            row: row.map_or(0, Row::row_number),
            column,
        })?;
        Ok(alignment.offset_for(cell))
    }
}
