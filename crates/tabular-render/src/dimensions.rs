//! Cell measurements cached as properties during a render pass.
//!
//! The text renderer registers [`set_dimensions`] as a render-time callback
//! for every cell of the table, so each cell carries its width, height and
//! measured lines by the time the renderer walks the table.

use std::rc::Rc;

use tabular::length;
use tabular::{
    CallbackHost, CallbackTarget, CallbackTime, Cell, PropertyKey, PropertyOwner, Table, TableError,
};

use crate::decoration::WidthString;

/// Property holding a cell's [`CellDimensions`].
pub const DIMENSIONS: PropertyKey = PropertyKey::new("render", "dimensions");

/// Marks a table whose cells are already measured at render time.
const DIMENSION_SETTER: PropertyKey = PropertyKey::new("render", "dimension-setter");

/// Width, height and lines of a cell, in terminal cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellDimensions {
    pub width: usize,
    pub height: usize,
    /// Exactly `height` entries; missing lines are blank.
    pub lines: Vec<WidthString>,
}

impl CellDimensions {
    pub fn measure(cell: &Cell) -> Self {
        let height = cell.height();
        let mut lines: Vec<WidthString> = cell
            .lines()
            .into_iter()
            .take(height)
            .map(|line| WidthString::new(line, length::string_cells(line)))
            .collect();
        lines.resize_with(height, WidthString::default);
        CellDimensions {
            width: cell.terminal_cell_width(),
            height,
            lines,
        }
    }

    /// The cached dimensions of `cell`, measuring it when none are cached.
    pub fn of(cell: &Cell) -> CellDimensions {
        match cell.properties().get_as::<CellDimensions>(&DIMENSIONS) {
            Some(dims) => dims.clone(),
            None => CellDimensions::measure(cell),
        }
    }
}

/// Stores the measurements of a cell in its [`DIMENSIONS`] property.
pub fn set_dimensions(owner: &mut dyn PropertyOwner) -> tabular::Result<()> {
    let dims = match owner.as_cell() {
        Some(cell) => CellDimensions::measure(cell),
        None => return Err(TableError::NotACell(owner.owner_kind())),
    };
    owner.set_property_value(DIMENSIONS, Some(Rc::new(dims)));
    Ok(())
}

/// Has every cell of `table` measured during render passes.
///
/// Registering twice is harmless; the callback is only added once.
pub fn register_dimension_setter(table: &mut Table) -> tabular::Result<()> {
    if table.properties().contains(&DIMENSION_SETTER) {
        return Ok(());
    }
    table.register_property_callback(
        CallbackHost::Table,
        CallbackTarget::Cell,
        CallbackTime::Render,
        set_dimensions,
    )?;
    table.set_property(DIMENSION_SETTER, true);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabular::{values, CellLocation};

    #[test]
    fn measures_lines() {
        let dims = CellDimensions::measure(&Cell::new("ab\n£\n"));
        assert_eq!(dims.width, 2);
        assert_eq!(dims.height, 2);
        assert_eq!(dims.lines, vec![WidthString::new("ab", 2), WidthString::new("£", 1)]);
    }

    #[test]
    fn empty_cell_has_no_lines() {
        let dims = CellDimensions::measure(&Cell::new(()));
        assert_eq!(dims, CellDimensions::default());
    }

    #[test]
    fn render_pass_caches_dimensions() {
        let mut t = Table::new();
        t.add_row_items(values!["one", "three\nlines\nhere"]);
        register_dimension_setter(&mut t).unwrap();
        register_dimension_setter(&mut t).unwrap();
        t.invoke_render_callbacks();
        assert!(t.errors().is_none());

        let cell = t.cell_at(CellLocation::new(1, 2)).unwrap();
        let dims = cell.properties().get_as::<CellDimensions>(&DIMENSIONS).unwrap();
        assert_eq!(dims.height, 3);
        assert_eq!(dims.width, 5);
    }

    #[test]
    fn refuses_non_cells() {
        let mut t = Table::new();
        assert!(matches!(
            set_dimensions(&mut t),
            Err(TableError::NotACell(tabular::OwnerKind::Table))
        ));
    }
}
