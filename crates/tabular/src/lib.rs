//! Tabular - a table data model with typed properties and callbacks.
//!
//! Tables hold an optional header row and body rows of [`Cell`]s. Every
//! table, column, row and cell carries a [`Properties`] chain, and
//! [`PropertyCallback`]s registered on any of them can derive properties as
//! rows are added or when a renderer walks the table. Renderers live in the
//! `tabular-render` crate; this crate knows nothing about output formats.
//!
//! # Quick Start
//!
//! ```rust
//! use tabular::{values, align, Alignment, CellLocation, SortOrder, Table};
//!
//! let mut t = Table::new();
//! t.add_headers(["fruit", "price"]);
//! t.add_row_items(values!["pear", 0.5]);
//! t.add_row_items(values!["apple", 0.25]);
//! align::set_alignment(t.column_named_mut("price").unwrap(), Alignment::Period);
//!
//! t.sort_by_named_column("price", SortOrder::Asc).unwrap();
//! assert_eq!(t.cell_at(CellLocation::new(1, 1)).unwrap().as_str(), "apple");
//! ```
//!
//! # Errors
//!
//! Lookups and sorts return [`Result`]. Problems found while building a
//! table (cells added to a separator, failing callbacks, bad property
//! types met during a render pass) are collected and reported by
//! [`Table::errors`].

pub mod align;
mod callback;
mod cell;
pub mod color;
mod column;
mod error;
pub mod length;
mod order;
mod property;
mod row;
mod table;
mod value;

pub use align::{Alignment, AlignmentFn, AlignmentOffset, ResolvedAlignment, ALIGNMENT, ALIGNMENT_FN};
pub use callback::{CallbackSet, CallbackTarget, CallbackTime, PropertyCallback};
pub use cell::{Cell, CellLocation};
pub use color::{Color, ERASE_TO_EOL, RESET};
pub use column::Column;
pub use error::{ErrorContainer, Result, TableError};
pub use order::{less_than, SortOrder};
pub use property::{
    OwnerKind, Properties, PropertyKey, PropertyOwner, PropertyValue, BG_COLOR, FG_COLOR, OMIT,
    SKIPPABLE,
};
pub use row::Row;
pub use table::{CallbackHost, RowPosition, Table};
pub use value::{CellContent, Value};
