//! Property callbacks.
//!
//! Callbacks let derived properties be computed from the data as it moves
//! through a table. Each callback is registered on an owner (table, column,
//! row or cell) for a [`CallbackTarget`], which picks the objects it will be
//! handed, and a [`CallbackTime`], which picks when it runs: when the object
//! is added to a table, or during the pre-cell, per-cell and post-cell
//! phases of a render pass.
//!
//! Callbacks run in registration order. A failing callback does not stop the
//! others; its error is recorded against the table.

use std::fmt;
use std::rc::Rc;

use crate::error::{ErrorContainer, Result};
use crate::property::PropertyOwner;

/// Code that updates the properties of the object it is given.
///
/// Any `Fn(&mut dyn PropertyOwner) -> Result<()>` closure is a callback.
pub trait PropertyCallback {
    fn update_properties(&self, owner: &mut dyn PropertyOwner) -> Result<()>;
}

impl<F> PropertyCallback for F
where
    F: Fn(&mut dyn PropertyOwner) -> Result<()>,
{
    fn update_properties(&self, owner: &mut dyn PropertyOwner) -> Result<()> {
        self(owner)
    }
}

/// When a callback runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackTime {
    /// When the object is added to a table.
    Add,
    /// During rendering, before any cell is visited.
    RenderPreCell,
    /// During rendering, once per cell.
    Render,
    /// During rendering, after the cells have been visited.
    RenderPostCell,
}

impl CallbackTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallbackTime::Add => "add",
            CallbackTime::RenderPreCell => "render-precell",
            CallbackTime::Render => "render",
            CallbackTime::RenderPostCell => "render-postcell",
        }
    }
}

impl fmt::Display for CallbackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which objects a callback is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackTarget {
    /// The owner the callback was registered on.
    Itself,
    /// Each cell belonging to the owner.
    Cell,
    /// Each row belonging to the owner.
    Row,
}

impl CallbackTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallbackTarget::Itself => "itself",
            CallbackTarget::Cell => "cell",
            CallbackTarget::Row => "row",
        }
    }
}

impl fmt::Display for CallbackTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered callbacks, one list per [`CallbackTime`].
#[derive(Clone, Default)]
pub struct CallbackSet {
    add: Vec<Rc<dyn PropertyCallback>>,
    pre_cell: Vec<Rc<dyn PropertyCallback>>,
    render: Vec<Rc<dyn PropertyCallback>>,
    post_cell: Vec<Rc<dyn PropertyCallback>>,
}

impl CallbackSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, when: CallbackTime, callback: Rc<dyn PropertyCallback>) {
        self.list_mut(when).push(callback);
    }

    /// Callbacks registered for `when`, in registration order.
    pub fn at(&self, when: CallbackTime) -> &[Rc<dyn PropertyCallback>] {
        match when {
            CallbackTime::Add => &self.add,
            CallbackTime::RenderPreCell => &self.pre_cell,
            CallbackTime::Render => &self.render,
            CallbackTime::RenderPostCell => &self.post_cell,
        }
    }

    pub fn len(&self) -> usize {
        self.add.len() + self.pre_cell.len() + self.render.len() + self.post_cell.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn list_mut(&mut self, when: CallbackTime) -> &mut Vec<Rc<dyn PropertyCallback>> {
        match when {
            CallbackTime::Add => &mut self.add,
            CallbackTime::RenderPreCell => &mut self.pre_cell,
            CallbackTime::Render => &mut self.render,
            CallbackTime::RenderPostCell => &mut self.post_cell,
        }
    }
}

impl fmt::Debug for CallbackSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSet")
            .field("add", &self.add.len())
            .field("pre_cell", &self.pre_cell.len())
            .field("render", &self.render.len())
            .field("post_cell", &self.post_cell.len())
            .finish()
    }
}

/// Runs `callbacks` against `owner`, recording failures in `errors`.
pub(crate) fn invoke(
    callbacks: &[Rc<dyn PropertyCallback>],
    when: CallbackTime,
    owner: &mut dyn PropertyOwner,
    errors: &ErrorContainer,
) {
    for callback in callbacks {
        log::trace!("{} callback on {}", when, owner.owner_label());
        if let Err(err) = callback.update_properties(owner) {
            log::debug!("{} callback on {} failed: {}", when, owner.owner_label(), err);
            errors.add_error(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::error::TableError;
    use crate::property::PropertyKey;

    const SEEN: PropertyKey = PropertyKey::new("test", "seen");

    #[test]
    fn lists_are_kept_per_time() {
        let mut set = CallbackSet::new();
        let noop: Rc<dyn PropertyCallback> = Rc::new(|_: &mut dyn PropertyOwner| -> Result<()> { Ok(()) });
        set.push(CallbackTime::Add, Rc::clone(&noop));
        set.push(CallbackTime::Render, Rc::clone(&noop));
        set.push(CallbackTime::Render, noop);
        assert_eq!(set.at(CallbackTime::Add).len(), 1);
        assert_eq!(set.at(CallbackTime::Render).len(), 2);
        assert!(set.at(CallbackTime::RenderPostCell).is_empty());
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn failures_are_collected_and_others_still_run() {
        let failing: Rc<dyn PropertyCallback> =
            Rc::new(|_: &mut dyn PropertyOwner| -> Result<()> {
                Err(TableError::callback_message("nope"))
            });
        let marking: Rc<dyn PropertyCallback> = Rc::new(|owner: &mut dyn PropertyOwner| -> Result<()> {
            owner.properties_mut().set(SEEN, true);
            Ok(())
        });
        let errors = ErrorContainer::new();
        let mut cell = Cell::new("x");
        invoke(&[failing, marking], CallbackTime::Render, &mut cell, &errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(cell.properties().get_as::<bool>(&SEEN), Some(&true));
    }
}
