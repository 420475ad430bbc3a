//! The table container.
//!
//! A [`Table`] owns an optional header row, the body rows, and the columns.
//! Columns are never created directly: adding a row or headers wider than
//! the current table grows the column list, and it never shrinks. Column 0
//! always exists and acts as the default column.
//!
//! ```rust
//! use tabular::{values, Table};
//!
//! let mut t = Table::new();
//! t.add_headers(["name", "age"])
//!     .add_row_items(values!["fred", 42])
//!     .add_separator()
//!     .add_row_items(values!["wilma", 39]);
//!
//! assert_eq!(t.n_columns(), 2);
//! assert_eq!(t.n_rows(), 3);
//! assert!(t.errors().is_none());
//! ```

use std::collections::HashMap;
use std::fmt::Write as _;
use std::rc::Rc;

use crate::callback::{self, CallbackSet, CallbackTarget, CallbackTime, PropertyCallback};
use crate::cell::{Cell, CellLocation};
use crate::column::Column;
use crate::error::{ErrorContainer, Result, TableError};
use crate::property::{OwnerKind, Properties, PropertyOwner};
use crate::row::Row;
use crate::value::Value;

/// Which row of a table: the header, or a 1-based body row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowPosition {
    Header,
    Body(usize),
}

/// Where to register a property callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackHost {
    /// The table itself.
    Table,
    /// A column by number; 0 is the default column.
    Column(usize),
    Row(RowPosition),
    /// A cell by row and 1-based column.
    Cell(RowPosition, usize),
}

#[derive(Debug)]
pub struct Table {
    errors: ErrorContainer,
    properties: Properties,
    header: Option<Row>,
    rows: Vec<Row>,
    columns: Vec<Column>,
    column_names: HashMap<String, usize>,
    itself_callbacks: CallbackSet,
    cell_callbacks: CallbackSet,
    row_callbacks: CallbackSet,
}

impl Default for Table {
    fn default() -> Self {
        Table {
            errors: ErrorContainer::new(),
            properties: Properties::new(),
            header: None,
            rows: Vec::new(),
            columns: vec![Column::new(0)],
            column_names: HashMap::new(),
            itself_callbacks: CallbackSet::new(),
            cell_callbacks: CallbackSet::new(),
            row_callbacks: CallbackSet::new(),
        }
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of real columns, not counting the default column.
    pub fn n_columns(&self) -> usize {
        self.columns.len() - 1
    }

    /// Number of body rows, separators included.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Appends a body row, firing the row and cell add callbacks.
    pub fn add_row(&mut self, mut row: Row) -> &mut Self {
        let row_num = self.rows.len() + 1;
        row.set_row_number(row_num);
        self.resize_columns_at_least(row.len());
        row.join_errors(&self.errors);
        log::debug!("adding row {} with {} cells", row_num, row.len());

        let own = row.itself_callbacks().at(CallbackTime::Add).to_vec();
        callback::invoke(&own, CallbackTime::Add, &mut row, &self.errors);
        callback::invoke(
            self.row_callbacks.at(CallbackTime::Add),
            CallbackTime::Add,
            &mut row,
            &self.errors,
        );
        self.fire_cell_add(&mut row);

        self.rows.push(row);
        self
    }

    /// Appends a body row holding one cell per item.
    pub fn add_row_items<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.add_row(Row::from_items(items))
    }

    /// Appends a separator row. It takes a row number but holds no cells.
    pub fn add_separator(&mut self) -> &mut Self {
        let mut row = Row::separator();
        row.set_row_number(self.rows.len() + 1);
        row.join_errors(&self.errors);
        self.rows.push(row);
        self
    }

    /// Sets the header row, replacing any previous one, and names the
    /// columns after the header text.
    ///
    /// The table's row-addition and cell callbacks fire for the header, but
    /// the header row's own add callbacks do not.
    pub fn add_headers<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut row = Row::from_items(items);
        self.resize_columns_at_least(row.len());
        row.join_errors(&self.errors);

        self.column_names.clear();
        for column in &mut self.columns {
            column.set_name(None);
        }
        for cell in row.cells() {
            let number = cell.column_number();
            let name = cell.as_str().to_string();
            self.columns[number].set_name(Some(name.clone()));
            self.column_names.entry(name).or_insert(number);
        }

        callback::invoke(
            self.row_callbacks.at(CallbackTime::Add),
            CallbackTime::Add,
            &mut row,
            &self.errors,
        );
        self.fire_cell_add(&mut row);
        self.header = Some(row);
        self
    }

    /// An empty row with room for one cell per current column.
    pub fn new_row_sized_for(&self) -> Row {
        Row::with_capacity(self.n_columns())
    }

    /// Adds an empty body row and returns it for filling in.
    ///
    /// Cells added this way do not grow the table's columns.
    pub fn append_new_row(&mut self) -> &mut Row {
        let row = self.new_row_sized_for();
        self.add_row(row);
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Header cells, if headers were set.
    pub fn headers(&self) -> Option<&[Cell]> {
        self.header.as_ref().map(Row::cells)
    }

    pub fn header_row(&self) -> Option<&Row> {
        self.header.as_ref()
    }

    /// Body rows, separators included, in order. The header is not a body
    /// row.
    pub fn all_rows(&self) -> &[Row] {
        &self.rows
    }

    /// A body row by 1-based number.
    pub fn row(&self, number: usize) -> Option<&Row> {
        number.checked_sub(1).and_then(|i| self.rows.get(i))
    }

    pub fn row_mut(&mut self, number: usize) -> Option<&mut Row> {
        number.checked_sub(1).and_then(|i| self.rows.get_mut(i))
    }

    pub fn row_at(&self, position: RowPosition) -> Option<&Row> {
        match position {
            RowPosition::Header => self.header.as_ref(),
            RowPosition::Body(n) => self.row(n),
        }
    }

    pub fn row_at_mut(&mut self, position: RowPosition) -> Option<&mut Row> {
        match position {
            RowPosition::Header => self.header.as_mut(),
            RowPosition::Body(n) => self.row_mut(n),
        }
    }

    /// The body cell at 1-based coordinates.
    pub fn cell_at(&self, location: CellLocation) -> Result<&Cell> {
        self.row(location.row)
            .and_then(|row| row.cell(location.column))
            .ok_or(TableError::NoSuchCell {
                row: location.row,
                column: location.column,
            })
    }

    pub fn cell_at_mut(&mut self, location: CellLocation) -> Result<&mut Cell> {
        let missing = TableError::NoSuchCell {
            row: location.row,
            column: location.column,
        };
        let row = self.row_mut(location.row).ok_or_else(|| missing.clone())?;
        match location.column.checked_sub(1) {
            Some(i) if i < row.len() => Ok(&mut row.cells_mut()[i]),
            _ => Err(missing),
        }
    }

    /// A column by number; 0 is the default column.
    pub fn column(&self, number: usize) -> Option<&Column> {
        self.columns.get(number)
    }

    pub fn column_mut(&mut self, number: usize) -> Option<&mut Column> {
        self.columns.get_mut(number)
    }

    /// The default column, whose properties apply to every column.
    pub fn default_column(&self) -> &Column {
        &self.columns[0]
    }

    pub fn default_column_mut(&mut self) -> &mut Column {
        &mut self.columns[0]
    }

    /// The real columns, in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns[1..]
    }

    /// The number of the column whose header reads `name`.
    pub fn column_number_named(&self, name: &str) -> Option<usize> {
        self.column_names.get(name).copied()
    }

    pub fn column_named(&self, name: &str) -> Option<&Column> {
        self.column_number_named(name).and_then(|n| self.column(n))
    }

    pub fn column_named_mut(&mut self, name: &str) -> Option<&mut Column> {
        let number = self.column_number_named(name)?;
        self.column_mut(number)
    }

    /// Registers a callback on `host`, to be handed `target` objects at `when`.
    ///
    /// Tables take every target. Columns take their own and their cells'.
    /// Rows take their own and their cells'. Cells only take their own.
    pub fn register_property_callback(
        &mut self,
        host: CallbackHost,
        target: CallbackTarget,
        when: CallbackTime,
        callback: impl PropertyCallback + 'static,
    ) -> Result<()> {
        let callback: Rc<dyn PropertyCallback> = Rc::new(callback);
        match host {
            CallbackHost::Table => {
                let set = match target {
                    CallbackTarget::Itself => &mut self.itself_callbacks,
                    CallbackTarget::Cell => &mut self.cell_callbacks,
                    CallbackTarget::Row => &mut self.row_callbacks,
                };
                set.push(when, callback);
                Ok(())
            }
            CallbackHost::Column(n) => self
                .column_mut(n)
                .ok_or(TableError::ColumnOutOfRange(n))?
                .register_callback_rc(target, when, callback),
            CallbackHost::Row(position) => self
                .row_at_mut(position)
                .ok_or_else(|| missing_row(position))?
                .register_callback_rc(target, when, callback),
            CallbackHost::Cell(position, column) => {
                let row = self.row_at_mut(position).ok_or_else(|| missing_row(position))?;
                let row_num = row.row_number();
                match column.checked_sub(1) {
                    Some(i) if i < row.len() => {
                        row.cells_mut()[i].register_callback_rc(target, when, callback)
                    }
                    _ => Err(TableError::NoSuchCell {
                        row: row_num,
                        column,
                    }),
                }
            }
        }
    }

    /// Runs the render-time callbacks over the whole table.
    ///
    /// Order: the table's own pre-cell callbacks; each real column's own
    /// pre-cell callbacks; then the header and each body row in turn (row
    /// pre-cell, every cell, row post-cell); then each column's own post-cell
    /// callbacks; finally the table's own post-cell callbacks. For a cell
    /// the order is table, column and row pre-cell callbacks, table and then
    /// cell render callbacks, then row and column post-cell callbacks.
    pub fn invoke_render_callbacks(&mut self) {
        let errors = self.errors.share();
        log::debug!(
            "render callbacks over {} rows and {} columns",
            self.rows.len(),
            self.n_columns()
        );

        let own = self.itself_callbacks.at(CallbackTime::RenderPreCell).to_vec();
        callback::invoke(&own, CallbackTime::RenderPreCell, self, &errors);
        self.invoke_column_callbacks(CallbackTime::RenderPreCell, &errors);

        let Table {
            header,
            rows,
            columns,
            cell_callbacks,
            ..
        } = &mut *self;
        for row in header.iter_mut().chain(rows.iter_mut()) {
            render_row_callbacks(row, cell_callbacks, columns, &errors);
        }

        self.invoke_column_callbacks(CallbackTime::RenderPostCell, &errors);
        let own = self.itself_callbacks.at(CallbackTime::RenderPostCell).to_vec();
        callback::invoke(&own, CallbackTime::RenderPostCell, self, &errors);
    }

    fn invoke_column_callbacks(&mut self, when: CallbackTime, errors: &ErrorContainer) {
        for column in self.columns.iter_mut().skip(1) {
            let own = column.itself_callbacks().at(when).to_vec();
            callback::invoke(&own, when, column, errors);
        }
    }

    fn fire_cell_add(&self, row: &mut Row) {
        for cell in row.cells_mut() {
            if let Some(column) = self.real_column(cell.column_number()) {
                callback::invoke(
                    column.cell_callbacks().at(CallbackTime::Add),
                    CallbackTime::Add,
                    cell,
                    &self.errors,
                );
            }
            callback::invoke(
                self.cell_callbacks.at(CallbackTime::Add),
                CallbackTime::Add,
                cell,
                &self.errors,
            );
        }
    }

    fn real_column(&self, number: usize) -> Option<&Column> {
        if number == 0 {
            None
        } else {
            self.columns.get(number)
        }
    }

    fn resize_columns_at_least(&mut self, count: usize) {
        while self.columns.len() <= count {
            let number = self.columns.len();
            self.columns.push(Column::new(number));
        }
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
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

    /// Every error recorded so far, in order, or `None`.
    pub fn errors(&self) -> Option<Vec<TableError>> {
        self.errors.errors()
    }

    /// A multi-line description of the table's structure and properties.
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Table{{errors: {}, columns: {}, rows: {}}}",
            self.errors.len(),
            self.n_columns(),
            self.rows.len()
        );
        let _ = writeln!(out, "  properties: {:?}", self.properties);
        for column in &self.columns {
            let _ = write!(out, "  {}", column.owner_label());
            if let Some(name) = column.name() {
                let _ = write!(out, " {:?}", name);
            }
            let _ = writeln!(out, ": {:?}", column.properties());
        }
        if let Some(header) = &self.header {
            let _ = writeln!(out, "  header: {}", dump_cells(header));
        }
        for row in &self.rows {
            if row.is_separator() {
                let _ = writeln!(out, "  {}: separator", row.owner_label());
            } else {
                let _ = writeln!(out, "  {}: {}", row.owner_label(), dump_cells(row));
            }
        }
        out
    }
}

fn dump_cells(row: &Row) -> String {
    let cells: Vec<String> = row.cells().iter().map(|c| format!("{:?}", c.as_str())).collect();
    format!("[{}] {:?}", cells.join(", "), row.properties())
}

fn missing_row(position: RowPosition) -> TableError {
    match position {
        RowPosition::Header => TableError::NoSuchCell { row: 0, column: 0 },
        RowPosition::Body(row) => TableError::NoSuchCell { row, column: 0 },
    }
}

fn render_row_callbacks(
    row: &mut Row,
    table_cells: &CallbackSet,
    columns: &[Column],
    errors: &ErrorContainer,
) {
    let own = row.itself_callbacks().at(CallbackTime::RenderPreCell).to_vec();
    callback::invoke(&own, CallbackTime::RenderPreCell, row, errors);

    let (cells, row_cells) = row.cells_and_callbacks();
    for cell in cells.iter_mut() {
        let column = match cell.column_number() {
            0 => None,
            n => columns.get(n),
        };
        callback::invoke(table_cells.at(CallbackTime::RenderPreCell), CallbackTime::RenderPreCell, cell, errors);
        if let Some(column) = column {
            callback::invoke(
                column.cell_callbacks().at(CallbackTime::RenderPreCell),
                CallbackTime::RenderPreCell,
                cell,
                errors,
            );
        }
        callback::invoke(row_cells.at(CallbackTime::RenderPreCell), CallbackTime::RenderPreCell, cell, errors);
        callback::invoke(table_cells.at(CallbackTime::Render), CallbackTime::Render, cell, errors);
        let own = cell.callbacks().at(CallbackTime::Render).to_vec();
        callback::invoke(&own, CallbackTime::Render, cell, errors);
        callback::invoke(row_cells.at(CallbackTime::RenderPostCell), CallbackTime::RenderPostCell, cell, errors);
        if let Some(column) = column {
            callback::invoke(
                column.cell_callbacks().at(CallbackTime::RenderPostCell),
                CallbackTime::RenderPostCell,
                cell,
                errors,
            );
        }
    }

    let own = row.itself_callbacks().at(CallbackTime::RenderPostCell).to_vec();
    callback::invoke(&own, CallbackTime::RenderPostCell, row, errors);
}

impl PropertyOwner for Table {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    fn owner_kind(&self) -> OwnerKind {
        OwnerKind::Table
    }
}
