//! The renderers, their shared trait and the table types, in one import.
//!
//! ```rust
//! use tabular_render::prelude::*;
//!
//! let mut t = MarkdownTable::new();
//! t.add_headers(["a"]);
//! t.add_row_items(values![1]);
//! assert_eq!(t.render().unwrap(), "| a |\n| --- |\n| 1 |\n");
//! ```

pub use crate::auto::Renderer;
pub use crate::csv::CsvTable;
pub use crate::html::HtmlTable;
pub use crate::json::JsonTable;
pub use crate::markdown::MarkdownTable;
pub use crate::texttable::TextTable;
pub use crate::traits::RenderTable;
pub use crate::RenderError;

pub use tabular::{values, Alignment, Cell, Color, Row, Table, Value};
