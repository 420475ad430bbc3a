//! Error types for rendering.

use thiserror::Error;

use tabular::TableError;

/// Errors returned by the renderers.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The text renderer was asked to draw with the empty decoration.
    #[error("table has no decoration at all, can't render")]
    NoDecoration,

    #[error("unknown decoration name {0:?}")]
    UnknownDecoration(String),

    /// Every column was omitted from a table that has content.
    #[error("no columns to display")]
    NoColumnsToDisplay,

    #[error("can't emit a table with 0 columns")]
    NoColumns,

    /// A row holds more cells than the table has columns.
    #[error("row {row} has {cells} cells, table has only {columns} columns")]
    TooManyCells {
        row: usize,
        cells: usize,
        columns: usize,
    },

    /// Headers are needed, for the stated purpose.
    #[error("require headers for {0}")]
    MissingHeaders(&'static str),

    #[error("require {needed} headers for keys, only found {found}")]
    InsufficientHeaders { needed: usize, found: usize },

    #[error("column {0} has an empty header")]
    EmptyHeader(usize),

    #[error("column {column} header matches previous column {previous}: {name:?}")]
    DuplicateHeader {
        column: usize,
        previous: usize,
        name: String,
    },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        RenderError::Config(err.to_string())
    }
}

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;
