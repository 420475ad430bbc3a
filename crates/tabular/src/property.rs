//! Typed, immutable property chains attached to tables, columns, rows and cells.
//!
//! A [`Properties`] value is a persistent chain of key/value links. Setting a
//! property prepends a new link and drops any older link for the same key;
//! the untouched suffix of the chain is shared, not copied. Cloning a
//! `Properties` is therefore cheap and gives an independent snapshot: later
//! changes to either copy never show through the other.
//!
//! Keys are [`PropertyKey`] values made of a namespace and a name, declared
//! as constants by whichever module owns the property. Values are stored
//! type-erased and read back with [`Properties::get_as`] or, when a wrong
//! type must be reported, [`Properties::expect_as`].

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::cell::Cell;
use crate::error::{Result, TableError};

/// Identity of a property: a namespace plus a name within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyKey {
    namespace: &'static str,
    name: &'static str,
}

impl PropertyKey {
    pub const fn new(namespace: &'static str, name: &'static str) -> Self {
        Self { namespace, name }
    }

    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Columns or rows holding `true` are left out of rendered output.
pub const OMIT: PropertyKey = PropertyKey::new("display", "omit");

/// Columns holding `true` drop empty cells from JSON objects.
pub const SKIPPABLE: PropertyKey = PropertyKey::new("display", "skippable");

/// Foreground [`Color`](crate::Color) for a cell, row or column.
pub const FG_COLOR: PropertyKey = PropertyKey::new("color", "foreground");

/// Background [`Color`](crate::Color) for a cell, row or column.
pub const BG_COLOR: PropertyKey = PropertyKey::new("color", "background");

/// A type-erased property value.
pub type PropertyValue = Rc<dyn Any>;

struct Link {
    key: PropertyKey,
    value: PropertyValue,
    next: Option<Rc<Link>>,
}

/// A persistent map from [`PropertyKey`] to values of any type.
#[derive(Clone, Default)]
pub struct Properties {
    head: Option<Rc<Link>>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw value for `key`, if set.
    pub fn get(&self, key: &PropertyKey) -> Option<&PropertyValue> {
        self.links().find(|link| link.key == *key).map(|link| &link.value)
    }

    /// The value for `key` if it is set and holds a `T`.
    pub fn get_as<T: Any>(&self, key: &PropertyKey) -> Option<&T> {
        self.get(key).and_then(|value| value.downcast_ref::<T>())
    }

    /// Like [`get_as`](Self::get_as), but a value of any other type is an
    /// error naming `owner`.
    pub fn expect_as<T: Any>(&self, key: &PropertyKey, owner: impl fmt::Display) -> Result<Option<&T>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => match value.downcast_ref::<T>() {
                Some(v) => Ok(Some(v)),
                None => Err(TableError::PropertyTypeMismatch {
                    owner: owner.to_string(),
                    key: *key,
                    expected: std::any::type_name::<T>(),
                }),
            },
        }
    }

    pub fn contains(&self, key: &PropertyKey) -> bool {
        self.get(key).is_some()
    }

    /// Sets `key` to `value`, replacing any earlier value.
    pub fn set<T: Any>(&mut self, key: PropertyKey, value: T) {
        self.set_value(key, Some(Rc::new(value)));
    }

    /// Sets an already type-erased value. `None` removes the key.
    pub fn set_value(&mut self, key: PropertyKey, value: Option<PropertyValue>) {
        let (_, rest) = self.without(&key);
        self.head = match value {
            Some(value) => Some(Rc::new(Link {
                key,
                value,
                next: rest,
            })),
            None => rest,
        };
    }

    /// Removes `key`, returning its old value.
    pub fn remove(&mut self, key: &PropertyKey) -> Option<PropertyValue> {
        let (old, rest) = self.without(key);
        if old.is_some() {
            self.head = rest;
        }
        old
    }

    pub fn len(&self) -> usize {
        self.links().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Keys currently set, most recently set first.
    pub fn keys(&self) -> impl Iterator<Item = PropertyKey> + '_ {
        self.links().map(|link| link.key)
    }

    fn links(&self) -> impl Iterator<Item = &Link> {
        std::iter::successors(self.head.as_deref(), |link| link.next.as_deref())
    }

    // Rebuilds the links in front of `key` over the suffix behind it.
    fn without(&self, key: &PropertyKey) -> (Option<PropertyValue>, Option<Rc<Link>>) {
        let mut prefix: Vec<&Rc<Link>> = Vec::new();
        let mut cursor = self.head.as_ref();
        while let Some(link) = cursor {
            if link.key == *key {
                let mut rest = link.next.clone();
                for kept in prefix.iter().rev() {
                    rest = Some(Rc::new(Link {
                        key: kept.key,
                        value: Rc::clone(&kept.value),
                        next: rest,
                    }));
                }
                return (Some(Rc::clone(&link.value)), rest);
            }
            prefix.push(link);
            cursor = link.next.as_ref();
        }
        (None, self.head.clone())
    }
}

impl fmt::Debug for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys().map(|k| k.to_string())).finish()
    }
}

/// The kinds of object that carry properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnerKind {
    Table,
    Column,
    Row,
    Cell,
}

impl OwnerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerKind::Table => "table",
            OwnerKind::Column => "column",
            OwnerKind::Row => "row",
            OwnerKind::Cell => "cell",
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything carrying a property chain.
///
/// Property callbacks receive their owner as `&mut dyn PropertyOwner`; a
/// callback registered for cells can reach the cell itself through
/// [`as_cell`](Self::as_cell).
pub trait PropertyOwner {
    fn properties(&self) -> &Properties;

    fn properties_mut(&mut self) -> &mut Properties;

    fn owner_kind(&self) -> OwnerKind;

    /// Short human label used in error messages.
    fn owner_label(&self) -> String {
        self.owner_kind().to_string()
    }

    fn as_cell(&self) -> Option<&Cell> {
        None
    }

    fn get_property(&self, key: &PropertyKey) -> Option<&PropertyValue> {
        self.properties().get(key)
    }

    fn set_property_value(&mut self, key: PropertyKey, value: Option<PropertyValue>) {
        self.properties_mut().set_value(key, value)
    }

    fn remove_property(&mut self, key: &PropertyKey) -> Option<PropertyValue> {
        self.properties_mut().remove(key)
    }

    fn set_property<T: Any>(&mut self, key: PropertyKey, value: T)
    where
        Self: Sized,
    {
        self.properties_mut().set(key, value)
    }
}
