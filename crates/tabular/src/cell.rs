//! Table cells.

use std::fmt;
use std::rc::Rc;

use crate::callback::{CallbackSet, CallbackTarget, CallbackTime, PropertyCallback};
use crate::error::{Result, TableError};
use crate::length;
use crate::property::{OwnerKind, Properties, PropertyOwner};
use crate::value::Value;

/// The position of a cell: 1-based row and column numbers.
///
/// Header cells sit on row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CellLocation {
    pub row: usize,
    pub column: usize,
}

impl CellLocation {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[row {}, col {}]", self.row, self.column)
    }
}

/// One value in a table, with its derived text, width and height.
///
/// The derived attributes are computed when the value is set; call
/// [`update`](Self::update) after changing anything the value depends on.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    item: Value,
    text: String,
    width: usize,
    height: usize,
    empty: bool,
    properties: Properties,
    callbacks: CallbackSet,
    location: CellLocation,
}

impl Cell {
    pub fn new(item: impl Into<Value>) -> Self {
        let mut cell = Cell {
            item: item.into(),
            ..Cell::default()
        };
        cell.update();
        cell
    }

    /// Recomputes text, width, height and emptiness from the held value.
    pub fn update(&mut self) {
        let text = match &self.item {
            Value::Nil => {
                self.text.clear();
                self.width = 0;
                self.height = 0;
                self.empty = true;
                return;
            }
            Value::Cell(inner) => {
                self.text = inner.text.clone();
                self.width = inner.width;
                self.height = inner.height;
                self.empty = inner.empty;
                return;
            }
            other => other.text(),
        };

        let content = match &self.item {
            Value::Custom(content) => Some(Rc::clone(content)),
            _ => None,
        };

        // An empty string measures as nothing, but caller content may still
        // claim a size of its own.
        let blank = text.is_empty();
        self.empty = blank;
        self.width = 0;
        self.height = 0;
        if !blank {
            self.height = 1 + text.matches('\n').count();
            if text.ends_with('\n') {
                self.height -= 1;
            }
            self.width = length::longest_line_cells(&text).1;
        }
        if let Some(content) = content {
            if let Some(height) = content.height() {
                self.height = height;
            }
            if let Some(width) = content.terminal_cell_width() {
                self.width = width;
            }
        }
        self.text = text;
    }

    /// The value held by the cell.
    pub fn item(&self) -> &Value {
        &self.item
    }

    /// Replaces the value and recomputes the derived attributes.
    pub fn set_item(&mut self, item: impl Into<Value>) {
        self.item = item.into();
        self.update();
    }

    /// Display text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Display text split into lines.
    pub fn lines(&self) -> Vec<&str> {
        length::lines(&self.text)
    }

    /// Width of the widest line in terminal cells.
    pub fn terminal_cell_width(&self) -> usize {
        self.width
    }

    /// Height in lines. A cell with some width but no counted lines is one
    /// line high.
    pub fn height(&self) -> usize {
        if self.height < 1 {
            if self.width > 0 {
                1
            } else {
                0
            }
        } else {
            self.height
        }
    }

    /// True when the cell holds nothing or the empty string.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn location(&self) -> CellLocation {
        self.location
    }

    pub fn row_number(&self) -> usize {
        self.location.row
    }

    /// 1-based column number; 0 until the cell is added to a row.
    pub fn column_number(&self) -> usize {
        self.location.column
    }

    /// Registers a callback on the cell itself. Cells accept the
    /// [`Itself`](CallbackTarget::Itself) and [`Cell`](CallbackTarget::Cell)
    /// targets, both meaning this cell.
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
            CallbackTarget::Itself | CallbackTarget::Cell => {
                self.callbacks.push(when, callback);
                Ok(())
            }
            CallbackTarget::Row => Err(TableError::UnsupportedCallbackTarget {
                owner: OwnerKind::Cell,
                target,
            }),
        }
    }

    pub(crate) fn callbacks(&self) -> &CallbackSet {
        &self.callbacks
    }

    pub(crate) fn set_row_number(&mut self, row: usize) {
        self.location.row = row;
    }

    pub(crate) fn set_column_number(&mut self, column: usize) {
        self.location.column = column;
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PropertyOwner for Cell {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    fn owner_kind(&self) -> OwnerKind {
        OwnerKind::Cell
    }

    fn owner_label(&self) -> String {
        format!("cell {}", self.location)
    }

    fn as_cell(&self) -> Option<&Cell> {
        Some(self)
    }
}
