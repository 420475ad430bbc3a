//! Table rows.

use std::rc::Rc;

use crate::callback::{self, CallbackSet, CallbackTarget, CallbackTime, PropertyCallback};
use crate::cell::{Cell, CellLocation};
use crate::error::{ErrorContainer, Result, TableError};
use crate::property::{OwnerKind, Properties, PropertyOwner};
use crate::value::Value;

/// A row of cells, or a separator.
///
/// Rows are built on their own and then handed to a table. A row keeps its
/// own error list until it is added, after which errors recorded on the row
/// go straight to the table.
#[derive(Debug, Default)]
pub struct Row {
    cells: Vec<Cell>,
    separator: bool,
    errors: ErrorContainer,
    properties: Properties,
    cell_callbacks: CallbackSet,
    itself_callbacks: CallbackSet,
    row_num: usize,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty row with room for `capacity` cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Row {
            cells: Vec::with_capacity(capacity),
            ..Row::default()
        }
    }

    /// A row of cells built from `items`.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut row = Row::new();
        for item in items {
            row.add(Cell::new(item));
        }
        row
    }

    /// A separator row: a horizontal rule with no cells.
    pub fn separator() -> Self {
        Row {
            separator: true,
            ..Row::default()
        }
    }

    /// Appends a cell, numbering it after the existing cells.
    ///
    /// Separators hold no cells; adding to one records an error instead.
    pub fn add(&mut self, mut cell: Cell) -> &mut Self {
        if self.separator {
            self.errors.add_error(TableError::SeparatorCells);
            return self;
        }
        cell.set_column_number(self.cells.len() + 1);
        cell.set_row_number(self.row_num);
        let row_num = self.row_num;
        log::trace!("row {} gains cell in column {}", row_num, self.cells.len() + 1);
        let Row {
            cells,
            cell_callbacks,
            errors,
            ..
        } = &mut *self;
        callback::invoke(cell_callbacks.at(CallbackTime::Add), CallbackTime::Add, &mut cell, errors);
        cells.push(cell);
        self
    }

    /// Appends a cell holding `item`.
    pub fn add_item(&mut self, item: impl Into<Value>) -> &mut Self {
        self.add(Cell::new(item))
    }

    pub fn is_separator(&self) -> bool {
        self.separator
    }

    /// The row's cells; always empty for a separator.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// The cell in 1-based `column`, if present.
    pub fn cell(&self, column: usize) -> Option<&Cell> {
        column.checked_sub(1).and_then(|i| self.cells.get(i))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 1-based position within the table's body; 0 for the header row or a
    /// row not yet in a table.
    pub fn row_number(&self) -> usize {
        self.row_num
    }

    /// Location of the row, with the column left at 0.
    pub fn location(&self) -> CellLocation {
        CellLocation::new(self.row_num, 0)
    }

    /// Registers a callback on this row.
    ///
    /// [`Itself`](CallbackTarget::Itself) and [`Row`](CallbackTarget::Row)
    /// both mean the row; [`Cell`](CallbackTarget::Cell) means each of its
    /// cells.
    pub fn register_callback(
        &mut self,
        target: CallbackTarget,
        when: CallbackTime,
        callback: impl PropertyCallback + 'static,
    ) -> Result<()> {
        self.register_callback_rc(target, when, Rc::new(callback))
    }

    pub(crate) fn register_callback_rc(
        &mut self,
        target: CallbackTarget,
        when: CallbackTime,
        callback: Rc<dyn PropertyCallback>,
    ) -> Result<()> {
        match target {
            CallbackTarget::Itself | CallbackTarget::Row => self.itself_callbacks.push(when, callback),
            CallbackTarget::Cell => self.cell_callbacks.push(when, callback),
        }
        Ok(())
    }

    pub fn add_error(&self, err: impl Into<Option<TableError>>) {
        self.errors.add_error(err)
    }

    pub fn add_error_list<I>(&self, errs: I)
    where
        I: IntoIterator,
        I::Item: Into<Option<TableError>>,
    {
        self.errors.add_error_list(errs)
    }

    /// Errors recorded against the row, or against its table once added.
    pub fn errors(&self) -> Option<Vec<TableError>> {
        self.errors.errors()
    }

    /// Moves the row's pending errors onto `shared` and adopts it.
    pub(crate) fn join_errors(&mut self, shared: &ErrorContainer) {
        shared.add_error_list(self.errors.take());
        self.errors = shared.share();
    }

    pub(crate) fn set_row_number(&mut self, row_num: usize) {
        self.row_num = row_num;
        for cell in &mut self.cells {
            cell.set_row_number(row_num);
        }
    }

    pub(crate) fn itself_callbacks(&self) -> &CallbackSet {
        &self.itself_callbacks
    }

    pub(crate) fn cells_and_callbacks(&mut self) -> (&mut [Cell], &CallbackSet) {
        (&mut self.cells, &self.cell_callbacks)
    }
}

impl PropertyOwner for Row {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    fn owner_kind(&self) -> OwnerKind {
        OwnerKind::Row
    }

    fn owner_label(&self) -> String {
        if self.row_num == 0 {
            "row".to_string()
        } else {
            format!("row {}", self.row_num)
        }
    }
}
