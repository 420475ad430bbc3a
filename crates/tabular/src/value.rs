//! Values stored in cells.
//!
//! A [`Value`] is whatever the caller put into a cell: nothing, a primitive,
//! a string, an error's text, another cell, or a caller-defined
//! [`CellContent`]. The cell derives its display text, width and height from
//! the value once, when the value is set.

use std::fmt;
use std::rc::Rc;

use crate::cell::Cell;

/// Caller-defined cell content.
///
/// Only [`text`](Self::text) is required. The optional capabilities let a
/// value override what would otherwise be measured or inferred from its
/// text; each returns `None` when the value does not provide it.
pub trait CellContent: fmt::Debug {
    /// Display text.
    fn text(&self) -> String;

    /// Width in terminal cells, overriding the measured text width.
    fn terminal_cell_width(&self) -> Option<usize> {
        None
    }

    /// Height in lines, overriding the counted text lines.
    fn height(&self) -> Option<usize> {
        None
    }

    /// An integer sort key, preferred over every other comparison.
    fn sort_int64(&self) -> Option<i64> {
        None
    }

    /// JSON form of the value for the JSON renderer.
    fn to_json(&self) -> Option<serde_json::Value> {
        None
    }
}

/// The content of a cell.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// No value; the cell is empty.
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    /// The message of an error.
    Error(String),
    /// Another cell, whose derived attributes are copied.
    Cell(Box<Cell>),
    Custom(Rc<dyn CellContent>),
}

impl Value {
    /// Wraps caller-defined content.
    pub fn custom(content: impl CellContent + 'static) -> Self {
        Value::Custom(Rc::new(content))
    }

    /// Stores the message of `err`.
    pub fn error(err: &dyn std::error::Error) -> Self {
        Value::Error(err.to_string())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Display text of the value.
    pub fn text(&self) -> String {
        match self {
            Value::Nil => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Uint(u) => u.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Str(s) | Value::Error(s) => s.clone(),
            Value::Cell(cell) => cell.as_str().to_string(),
            Value::Custom(content) => content.text(),
        }
    }

    /// The value with any nesting cells peeled off.
    pub fn unwrap_cell(&self) -> &Value {
        match self {
            Value::Cell(cell) => cell.item().unwrap_cell(),
            other => other,
        }
    }

    /// The integer sort key of caller-defined content.
    pub fn sort_int64(&self) -> Option<i64> {
        match self.unwrap_cell() {
            Value::Custom(content) => content.sort_int64(),
            _ => None,
        }
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(v as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Uint(v as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Str(v.clone())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl From<Cell> for Value {
    fn from(v: Cell) -> Self {
        Value::Cell(Box::new(v))
    }
}

impl From<Rc<dyn CellContent>> for Value {
    fn from(v: Rc<dyn CellContent>) -> Self {
        Value::Custom(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

/// Builds a `Vec<Value>` from a list of differently-typed items.
///
/// ```rust
/// use tabular::{values, Value};
///
/// let row = values!["fred", 42, 0.5, true, ()];
/// assert_eq!(row.len(), 5);
/// assert!(row[4].is_nil());
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        vec![$($crate::Value::from($item)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Labelled(&'static str, i64);

    impl CellContent for Labelled {
        fn text(&self) -> String {
            self.0.to_string()
        }

        fn sort_int64(&self) -> Option<i64> {
            Some(self.1)
        }
    }

    #[test]
    fn text_of_primitives() {
        assert_eq!(Value::from(42).text(), "42");
        assert_eq!(Value::from(3.0).text(), "3");
        assert_eq!(Value::from(0.02).text(), "0.02");
        assert_eq!(Value::from(true).text(), "true");
        assert_eq!(Value::from(None::<i32>).text(), "");
        assert_eq!(Value::from('x').text(), "x");
    }

    #[test]
    fn errors_show_their_message() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        assert_eq!(Value::error(&err).text(), "disk on fire");
    }

    #[test]
    fn nested_cells_unwrap() {
        let inner = Cell::new(Value::custom(Labelled("mu", 12)));
        let outer = Value::from(Cell::new(inner));
        assert_eq!(outer.text(), "mu");
        assert_eq!(outer.sort_int64(), Some(12));
    }
}
