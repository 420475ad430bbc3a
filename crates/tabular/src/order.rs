//! Value ordering and table sorting.
//!
//! [`less_than`] compares two cell values of possibly different kinds. It
//! tries, in order: caller-supplied integer sort keys, numeric comparison
//! with promotion between integer and float kinds, parsing both texts as
//! floats, and finally comparing the display texts. It never fails.

use std::cmp::Ordering;
use std::fmt;

use crate::cell::Cell;
use crate::error::{Result, TableError};
use crate::row::Row;
use crate::table::Table;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortOrder {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ascending",
            SortOrder::Desc => "descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
enum Numeric {
    Int(i64),
    Uint(u64),
    Float(f64),
}

impl Numeric {
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(Numeric::Int(*i)),
            Value::Uint(u) => Some(Numeric::Uint(*u)),
            Value::Float(f) => Some(Numeric::Float(*f)),
            Value::Custom(content) => content.sort_int64().map(Numeric::Int),
            _ => None,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(i) => i as f64,
            Numeric::Uint(u) => u as f64,
            Numeric::Float(f) => f,
        }
    }

    fn less_than(self, other: Numeric) -> bool {
        match (self, other) {
            (Numeric::Int(a), Numeric::Int(b)) => a < b,
            (Numeric::Uint(a), Numeric::Uint(b)) => a < b,
            (Numeric::Int(a), Numeric::Uint(b)) => i128::from(a) < i128::from(b),
            (Numeric::Uint(a), Numeric::Int(b)) => i128::from(a) < i128::from(b),
            (a, b) => a.as_f64() < b.as_f64(),
        }
    }
}

fn parse_float(value: &Value) -> Option<f64> {
    value.text().trim().parse::<f64>().ok()
}

/// Whether `a` sorts before `b`.
pub fn less_than(a: &Value, b: &Value) -> bool {
    let (a, b) = (a.unwrap_cell(), b.unwrap_cell());
    if let (Some(x), Some(y)) = (a.sort_int64(), b.sort_int64()) {
        return x < y;
    }
    if let (Some(x), Some(y)) = (Numeric::of(a), Numeric::of(b)) {
        return x.less_than(y);
    }
    if let (Some(x), Some(y)) = (parse_float(a), parse_float(b)) {
        return x < y;
    }
    a.text() < b.text()
}

impl Cell {
    /// Whether this cell's value sorts before `other`'s.
    pub fn less_than(&self, other: &Cell) -> bool {
        less_than(self.item(), other.item())
    }
}

// Bottom-up merge sort over indices. Stable, and safe with comparisons
// that are not a total order.
fn stable_order(len: usize, less: impl Fn(usize, usize) -> bool) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    let mut merged = order.clone();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut i, mut j, mut k) = (start, mid, start);
            while i < mid && j < end {
                if less(order[j], order[i]) {
                    merged[k] = order[j];
                    j += 1;
                } else {
                    merged[k] = order[i];
                    i += 1;
                }
                k += 1;
            }
            merged[k..k + (mid - i)].copy_from_slice(&order[i..mid]);
            k += mid - i;
            merged[k..k + (end - j)].copy_from_slice(&order[j..end]);
            start = end;
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }
    order
}

impl Table {
    /// Sorts the body rows by the column whose header reads `name`.
    pub fn sort_by_named_column(&mut self, name: &str, order: SortOrder) -> Result<()> {
        if self.header_row().is_none() {
            return Err(TableError::NoColumnHeaders);
        }
        let column = self
            .column_number_named(name)
            .ok_or_else(|| TableError::NoSuchColumn(name.to_string()))?;
        self.sort_by_column_number(column, order)
    }

    /// Sorts the body rows by the values in 1-based `column`.
    ///
    /// The sort is stable. Rows without a cell in that column, separators
    /// included, sort as if the cell were empty. Rows are renumbered
    /// afterwards.
    pub fn sort_by_column_number(&mut self, column: usize, order: SortOrder) -> Result<()> {
        if column == 0 || column > self.n_columns() {
            return Err(TableError::ColumnOutOfRange(column));
        }
        log::debug!("sorting {} rows by column {} {}", self.n_rows(), column, order);

        let nil = Value::Nil;
        let rows = self.rows_mut();
        let keys: Vec<&Value> = rows
            .iter()
            .map(|row| row.cell(column).map_or(&nil, Cell::item))
            .collect();
        let sorted = stable_order(keys.len(), |a, b| match order {
            SortOrder::Asc => less_than(keys[a], keys[b]),
            SortOrder::Desc => less_than(keys[b], keys[a]),
        });
        drop(keys);

        let mut slots: Vec<Option<Row>> = rows.drain(..).map(Some).collect();
        rows.extend(sorted.into_iter().filter_map(|i| slots[i].take()));
        for (i, row) in rows.iter_mut().enumerate() {
            row.set_row_number(i + 1);
        }
        Ok(())
    }
}
