//! Error types for the table model.
//!
//! Most table operations do not fail outright. Problems found while adding
//! cells or running callbacks are collected into an [`ErrorContainer`] that
//! is shared between a table and the rows it holds, and are handed back in
//! insertion order by [`ErrorContainer::errors`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::callback::CallbackTarget;
use crate::property::{OwnerKind, PropertyKey};

/// Errors produced by the table model.
#[derive(Debug, Clone, Error)]
pub enum TableError {
    /// A cell lookup fell outside the table.
    #[error("table does not contain cell at coordinates [row {row}, col {column}]")]
    NoSuchCell { row: usize, column: usize },

    /// Sorting by a header name that no column carries.
    #[error("no such column {0:?}")]
    NoSuchColumn(String),

    /// Sorting by a column number beyond the table's columns.
    #[error("column {0} out of range")]
    ColumnOutOfRange(usize),

    /// Sorting by name on a table with no headers.
    #[error("no headers have defined columns")]
    NoColumnHeaders,

    /// Cells were added to a separator row.
    #[error("can't add cells to a non-cell row")]
    SeparatorCells,

    /// A callback was registered for a target its owner does not support.
    #[error("unable to register a {target}-targeted callback upon a {owner}")]
    UnsupportedCallbackTarget {
        owner: OwnerKind,
        target: CallbackTarget,
    },

    /// A property held a value of the wrong type.
    #[error("{owner} has bad {key} property, expected {expected}")]
    PropertyTypeMismatch {
        owner: String,
        key: PropertyKey,
        expected: &'static str,
    },

    /// A cell-targeted callback was handed something that is not a cell.
    #[error("callback expected a cell, was given a {0}")]
    NotACell(OwnerKind),

    /// A color name or hex string could not be understood.
    #[error("unknown color {0:?}")]
    UnknownColor(String),

    /// A failure reported by user callback code.
    #[error("{0}")]
    Callback(Rc<dyn std::error::Error>),
}

impl TableError {
    /// Wraps an arbitrary error raised inside a property callback.
    pub fn callback<E>(err: E) -> Self
    where
        E: std::error::Error + 'static,
    {
        TableError::Callback(Rc::new(err))
    }

    /// A callback failure carrying only a message.
    pub fn callback_message(msg: impl Into<String>) -> Self {
        TableError::Callback(Rc::new(CallbackMessage(msg.into())))
    }
}

#[derive(Debug)]
struct CallbackMessage(String);

impl fmt::Display for CallbackMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for CallbackMessage {}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// An ordered, append-only list of errors.
///
/// A container may be shared: a row added to a table first hands its own
/// errors to the table's container and then keeps a handle onto that same
/// container, so errors recorded on the row afterwards land on the table.
#[derive(Default)]
pub struct ErrorContainer {
    errors: Rc<RefCell<Vec<TableError>>>,
}

impl ErrorContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one error. Passing `None` is a no-op.
    pub fn add_error(&self, err: impl Into<Option<TableError>>) {
        if let Some(err) = err.into() {
            self.errors.borrow_mut().push(err);
        }
    }

    /// Records every present error of `errs`, skipping the `None` entries.
    pub fn add_error_list<I>(&self, errs: I)
    where
        I: IntoIterator,
        I::Item: Into<Option<TableError>>,
    {
        let mut errors = self.errors.borrow_mut();
        errors.extend(errs.into_iter().filter_map(Into::into));
    }

    /// All recorded errors in insertion order, or `None` when there are none.
    pub fn errors(&self) -> Option<Vec<TableError>> {
        let errors = self.errors.borrow();
        if errors.is_empty() {
            None
        } else {
            Some(errors.clone())
        }
    }

    pub fn len(&self) -> usize {
        self.errors.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }

    /// A second handle onto the same underlying list.
    pub(crate) fn share(&self) -> ErrorContainer {
        ErrorContainer {
            errors: Rc::clone(&self.errors),
        }
    }

    pub(crate) fn take(&self) -> Vec<TableError> {
        std::mem::take(&mut *self.errors.borrow_mut())
    }
}

impl fmt::Debug for ErrorContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.errors.borrow().iter()).finish()
    }
}
