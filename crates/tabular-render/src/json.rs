//! Tables as JSON arrays of objects.
//!
//! Each body row becomes one object keyed by the header texts, one object
//! per line:
//!
//! ```text
//! [
//! {"name": "pear", "price": 0.5},
//! {"name": "apple", "price": 0.25}
//! ]
//! ```
//!
//! Headers must cover every column, be non-empty and be unique. A separator
//! leaves an empty line between objects. Columns and rows with the
//! [`OMIT`] property are left out, and cells of columns with the
//! [`SKIPPABLE`] property are left out of an object when empty. Both column
//! properties fall back to the default column.

use std::collections::HashMap;
use std::io::Write;
use std::ops::{Deref, DerefMut};

use serde_json::Value as Json;
use tabular::{Cell, Column, PropertyKey, PropertyOwner, Table, Value, OMIT, SKIPPABLE};

use crate::error::{RenderError, Result};
use crate::traits::RenderTable;

/// A table written as JSON.
#[derive(Debug)]
pub struct JsonTable {
    table: Table,
}

struct ColumnPlan {
    key: String,
    omit: bool,
    skippable: bool,
}

impl JsonTable {
    pub fn new() -> Self {
        JsonTable::wrap(Table::new())
    }

    pub fn wrap(table: Table) -> Self {
        JsonTable { table }
    }

    pub fn into_table(self) -> Table {
        self.table
    }

    pub fn render(&mut self) -> Result<String> {
        RenderTable::render(self)
    }

    pub fn render_to(&mut self, w: &mut dyn Write) -> Result<()> {
        self.table.invoke_render_callbacks();
        let table = &self.table;
        let n_columns = table.n_columns();
        if n_columns < 1 {
            return Err(RenderError::NoColumns);
        }
        let plan = plan_columns(table)?;
        log::debug!("json render of {} rows, {} columns", table.n_rows(), n_columns);

        let mut out = String::from("[\n");
        let mut need_comma = false;
        for row in table.all_rows() {
            if flag(row, &OMIT)?.unwrap_or(false) {
                continue;
            }
            if need_comma {
                out.push_str(",\n");
                need_comma = false;
            }
            if row.is_separator() {
                out.push('\n');
                continue;
            }
            let cells = row.cells();
            if cells.len() > plan.len() {
                return Err(RenderError::TooManyCells {
                    row: row.row_number(),
                    cells: cells.len(),
                    columns: plan.len(),
                });
            }
            push_object(&mut out, &plan, cells)?;
            need_comma = true;
        }
        out.push_str("\n]\n");

        w.write_all(out.as_bytes())?;
        Ok(())
    }
}

impl Default for JsonTable {
    fn default() -> Self {
        JsonTable::new()
    }
}

impl Deref for JsonTable {
    type Target = Table;

    fn deref(&self) -> &Table {
        &self.table
    }
}

impl DerefMut for JsonTable {
    fn deref_mut(&mut self) -> &mut Table {
        &mut self.table
    }
}

impl RenderTable for JsonTable {
    fn render_to(&mut self, w: &mut dyn Write) -> Result<()> {
        JsonTable::render_to(self, w)
    }
}

/// Renders `table` as JSON.
pub fn render(table: &mut Table) -> Result<String> {
    let mut wrapped = JsonTable::wrap(std::mem::take(table));
    let out = wrapped.render();
    *table = wrapped.into_table();
    out
}

/// Writes `table` to `w` as JSON.
pub fn render_to(table: &mut Table, w: &mut dyn Write) -> Result<()> {
    let mut wrapped = JsonTable::wrap(std::mem::take(table));
    let out = wrapped.render_to(w);
    *table = wrapped.into_table();
    out
}

fn flag(owner: &dyn PropertyOwner, key: &PropertyKey) -> Result<Option<bool>> {
    Ok(owner
        .properties()
        .expect_as::<bool>(key, owner.owner_label())?
        .copied())
}

fn column_flag(column: Option<&Column>, default: Option<bool>, key: &PropertyKey) -> Result<bool> {
    let own = match column {
        Some(column) => flag(column, key)?,
        None => None,
    };
    Ok(own.or(default).unwrap_or(false))
}

fn plan_columns(table: &Table) -> Result<Vec<ColumnPlan>> {
    let n_columns = table.n_columns();
    let headers = table
        .headers()
        .ok_or(RenderError::MissingHeaders("JSON rendering to provide keys"))?;
    if headers.len() < n_columns {
        return Err(RenderError::InsufficientHeaders {
            needed: n_columns,
            found: headers.len(),
        });
    }

    let default_omit = flag(table.default_column(), &OMIT)?;
    let default_skippable = flag(table.default_column(), &SKIPPABLE)?;

    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(n_columns);
    let mut plan = Vec::with_capacity(n_columns);
    for (i, header) in headers.iter().take(n_columns).enumerate() {
        let number = i + 1;
        let name = header.as_str();
        if name.is_empty() {
            return Err(RenderError::EmptyHeader(number));
        }
        if let Some(&previous) = seen.get(name) {
            return Err(RenderError::DuplicateHeader {
                column: number,
                previous,
                name: name.to_string(),
            });
        }
        seen.insert(name, number);

        let column = table.column(number);
        plan.push(ColumnPlan {
            key: serde_json::to_string(name)?,
            omit: column_flag(column, default_omit, &OMIT)?,
            skippable: column_flag(column, default_skippable, &SKIPPABLE)?,
        });
    }
    Ok(plan)
}

fn push_object(out: &mut String, plan: &[ColumnPlan], cells: &[Cell]) -> Result<()> {
    let mut fields = Vec::with_capacity(cells.len());
    for (column, cell) in plan.iter().zip(cells) {
        if column.omit || (column.skippable && cell.is_empty()) {
            continue;
        }
        let value = serde_json::to_string(&cell_json(cell))?;
        fields.push(format!("{}: {value}", column.key));
    }
    out.push('{');
    out.push_str(&fields.join(", "));
    out.push('}');
    Ok(())
}

/// The JSON form of a cell's value.
///
/// Caller content without a JSON form of its own, or whose JSON form is an
/// empty object, is written as its text.
pub fn cell_json(cell: &Cell) -> Json {
    let json = value_json(cell.item());
    match &json {
        Json::Object(map) if map.is_empty() && !cell.as_str().is_empty() => {
            Json::String(cell.as_str().to_string())
        }
        _ => json,
    }
}

fn value_json(value: &Value) -> Json {
    match value {
        Value::Nil => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(i) => Json::from(*i),
        Value::Uint(u) => Json::from(*u),
        Value::Float(f) => serde_json::Number::from_f64(*f).map_or(Json::Null, Json::Number),
        Value::Str(s) | Value::Error(s) => Json::String(s.clone()),
        Value::Cell(inner) => cell_json(inner),
        Value::Custom(content) => content.to_json().unwrap_or_else(|| Json::String(content.text())),
    }
}
