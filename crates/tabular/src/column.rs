//! Table columns.
//!
//! Columns hold no cells. They exist to carry properties and callbacks that
//! apply to every cell in the same position. Column 0 is the default column:
//! its properties are the fallback for every real column.

use std::rc::Rc;

use crate::callback::{CallbackSet, CallbackTarget, CallbackTime, PropertyCallback};
use crate::error::{Result, TableError};
use crate::property::{OwnerKind, Properties, PropertyOwner};

#[derive(Debug, Default)]
pub struct Column {
    number: usize,
    name: Option<String>,
    properties: Properties,
    cell_callbacks: CallbackSet,
    itself_callbacks: CallbackSet,
}

impl Column {
    pub(crate) fn new(number: usize) -> Self {
        Column {
            number,
            ..Column::default()
        }
    }

    /// Position of the column; 0 for the default column.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn is_default(&self) -> bool {
        self.number == 0
    }

    /// The header text naming this column, once headers are set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Registers a callback on the column itself or on each of its cells.
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
            CallbackTarget::Itself => self.itself_callbacks.push(when, callback),
            CallbackTarget::Cell => self.cell_callbacks.push(when, callback),
            CallbackTarget::Row => {
                return Err(TableError::UnsupportedCallbackTarget {
                    owner: OwnerKind::Column,
                    target,
                })
            }
        }
        Ok(())
    }

    pub(crate) fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub(crate) fn cell_callbacks(&self) -> &CallbackSet {
        &self.cell_callbacks
    }

    pub(crate) fn itself_callbacks(&self) -> &CallbackSet {
        &self.itself_callbacks
    }
}

impl PropertyOwner for Column {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    fn owner_kind(&self) -> OwnerKind {
        OwnerKind::Column
    }

    fn owner_label(&self) -> String {
        if self.is_default() {
            "default column".to_string()
        } else {
            format!("column {}", self.number)
        }
    }
}
