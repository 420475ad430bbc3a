//! # Tabular Render - output formats for tabular tables
//!
//! Each renderer wraps a [`tabular::Table`] together with the options of
//! one output format, and dereferences to the table so it can be filled in
//! directly:
//!
//! - [`TextTable`]: boxes drawn with Unicode or ASCII glyphs, for terminals
//! - [`CsvTable`]: RFC 4180 CSV with every field quoted
//! - [`MarkdownTable`]: GitHub-flavored Markdown tables
//! - [`JsonTable`]: an array of objects keyed by the headers
//! - [`HtmlTable`]: an HTML `<table>`
//!
//! All of them implement [`RenderTable`]. The [`auto`] module picks and
//! configures one from a style string such as `"utf8-light.white.navy"`,
//! and [`RenderConfig`] does the same from a YAML or JSON document.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabular::{values, Table};
//! use tabular_render::auto;
//!
//! let mut t = Table::new();
//! t.add_headers(["name", "n"]);
//! t.add_row_items(values!["pear", 3]);
//!
//! let out = auto::render(&mut t, "ascii-simple").unwrap();
//! assert_eq!(out, "\
//! +------+---+
//! | name | n |
//! +------+---+
//! | pear | 3 |
//! +------+---+
//! ");
//! assert_eq!(auto::render(&mut t, "csv").unwrap(), "\"name\",\"n\"\n\"pear\",\"3\"\n");
//! ```
//!
//! ## Decorations
//!
//! Text tables are drawn with a [`Decoration`] from a process-wide registry
//! holding the built-in styles; more can be added with
//! [`register_decoration`]. Selecting an unknown name leaves the table with
//! the empty decoration, which fails to render.

pub mod auto;
pub mod config;
pub mod csv;
pub mod decoration;
pub mod dimensions;
mod error;
pub mod html;
pub mod json;
pub mod markdown;
pub mod prelude;
pub mod texttable;
mod traits;

pub use auto::Renderer;
pub use config::{HtmlConfig, RenderConfig};
pub use self::csv::CsvTable;
pub use decoration::{register_decoration, registered_decoration_names, Decoration, WidthString};
pub use error::{RenderError, Result};
pub use html::HtmlTable;
pub use json::JsonTable;
pub use markdown::MarkdownTable;
pub use texttable::TextTable;
pub use traits::RenderTable;
