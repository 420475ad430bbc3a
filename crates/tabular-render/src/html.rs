//! HTML tables.
//!
//! Output is a plain `<table>` with a `<thead>` and `<tbody>`, rendered
//! through a minijinja template with HTML auto-escaping. Styling is left to
//! the page: the table may carry an `id` and `class`, and a row-class
//! generator can name a class for each row. The one inline style written is
//! `text-align` for columns with a static left, center or right alignment,
//! since HTML5 has no `align` attribute; [`HtmlTable::disable_style`] turns
//! that off for pages whose content security policy forbids inline styles.
//!
//! Separators have no HTML form. They are skipped, but still counted in the
//! row numbers handed to the row-class generator.

use std::fmt;
use std::io::Write;
use std::ops::{Deref, DerefMut};

use minijinja::Environment;
use serde::Serialize;
use tabular::align::static_alignment;
use tabular::{Alignment, Cell, Table};

use crate::error::Result;
use crate::traits::RenderTable;

const TEMPLATE_NAME: &str = "table.html";

const TABLE_TEMPLATE: &str = r#"<table{% if class %} class="{{ class }}"{% endif %}{% if id %} id="{{ id }}"{% endif %}>
{%- if caption %}
  <caption>{{ caption }}</caption>
{%- endif %}
  <thead>
    <tr{% if header_class is not none %} class="{{ header_class }}"{% endif %}>{% for h in headers %}<th{% if h.align %} style="text-align: {{ h.align }}"{% endif %}>{{ h.text }}</th>{% endfor %}</tr>
  </thead>
  <tbody>
{%- for row in rows %}
    <tr{% if row.class is not none %} class="{{ row.class }}"{% endif %}>{% for c in row.cells %}<td{% if c.align %} style="text-align: {{ c.align }}"{% endif %}>{{ c.text }}</td>{% endfor %}</tr>
{%- endfor %}
  </tbody>
</table>
"#;

/// Names the class of a row: 0 is the header, body rows count from 1.
pub type RowClassFn = Box<dyn FnMut(usize) -> String>;

/// A table written as HTML.
pub struct HtmlTable {
    table: Table,
    pub id: String,
    pub class: String,
    pub caption: String,
    /// Leaves out the inline `text-align` styles.
    pub disable_style: bool,
    row_class: Option<RowClassFn>,
    env: Option<Environment<'static>>,
}

#[derive(Serialize)]
struct HtmlCell {
    text: String,
    align: Option<&'static str>,
}

#[derive(Serialize)]
struct HtmlRow {
    class: Option<String>,
    cells: Vec<HtmlCell>,
}

#[derive(Serialize)]
struct HtmlContext<'a> {
    id: &'a str,
    class: &'a str,
    caption: &'a str,
    header_class: Option<String>,
    headers: Vec<HtmlCell>,
    rows: Vec<HtmlRow>,
}

impl HtmlTable {
    pub fn new() -> Self {
        HtmlTable::wrap(Table::new())
    }

    pub fn wrap(table: Table) -> Self {
        HtmlTable {
            table,
            id: String::new(),
            class: String::new(),
            caption: String::new(),
            disable_style: false,
            row_class: None,
            env: None,
        }
    }

    pub fn into_table(self) -> Table {
        self.table
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = id.into();
        self
    }

    pub fn set_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.class = class.into();
        self
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) -> &mut Self {
        self.caption = caption.into();
        self
    }

    pub fn set_disable_style(&mut self, disable: bool) -> &mut Self {
        self.disable_style = disable;
        self
    }

    /// Gives every row a class attribute named by `generator`.
    ///
    /// Any state the generator needs can be captured by the closure.
    pub fn set_row_class_generator<F>(&mut self, generator: F) -> &mut Self
    where
        F: FnMut(usize) -> String + 'static,
    {
        self.row_class = Some(Box::new(generator));
        self
    }

    pub fn render(&mut self) -> Result<String> {
        RenderTable::render(self)
    }

    pub fn render_to(&mut self, w: &mut dyn Write) -> Result<()> {
        self.table.invoke_render_callbacks();
        log::debug!(
            "html render of {} rows, {} columns",
            self.table.n_rows(),
            self.table.n_columns()
        );

        let aligns = self.column_aligns()?;
        let cells_of = |cells: &[Cell]| -> Vec<HtmlCell> {
            cells
                .iter()
                .enumerate()
                .map(|(i, cell)| HtmlCell {
                    text: cell.as_str().to_string(),
                    align: aligns.get(i).copied().flatten(),
                })
                .collect()
        };

        let header_class = self.row_class.as_mut().map(|generator| generator(0));
        let headers = self.table.headers().map(&cells_of).unwrap_or_default();
        let mut rows = Vec::with_capacity(self.table.n_rows());
        for (i, row) in self.table.all_rows().iter().enumerate() {
            if row.is_separator() {
                continue;
            }
            rows.push(HtmlRow {
                class: self.row_class.as_mut().map(|generator| generator(i + 1)),
                cells: cells_of(row.cells()),
            });
        }

        let context = HtmlContext {
            id: &self.id,
            class: &self.class,
            caption: &self.caption,
            header_class,
            headers,
            rows,
        };
        let env = match self.env.take() {
            Some(env) => env,
            None => environment()?,
        };
        let rendered = env
            .get_template(TEMPLATE_NAME)
            .and_then(|template| template.render(&context));
        self.env = Some(env);
        w.write_all(rendered?.as_bytes())?;
        Ok(())
    }

    /// Inline alignment of each column, by index from 0.
    fn column_aligns(&self) -> Result<Vec<Option<&'static str>>> {
        if self.disable_style {
            return Ok(Vec::new());
        }
        let mut aligns = Vec::with_capacity(self.table.n_columns());
        for column in self.table.columns() {
            let align = match static_alignment(column)? {
                Some(Alignment::Left) => Some("left"),
                Some(Alignment::Center) => Some("center"),
                Some(Alignment::Right) => Some("right"),
                _ => None,
            };
            aligns.push(align);
        }
        Ok(aligns)
    }
}

fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(TEMPLATE_NAME, TABLE_TEMPLATE)?;
    Ok(env)
}

impl fmt::Debug for HtmlTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlTable")
            .field("table", &self.table)
            .field("id", &self.id)
            .field("class", &self.class)
            .field("caption", &self.caption)
            .field("disable_style", &self.disable_style)
            .field("row_class", &self.row_class.is_some())
            .finish()
    }
}

impl Default for HtmlTable {
    fn default() -> Self {
        HtmlTable::new()
    }
}

impl Deref for HtmlTable {
    type Target = Table;

    fn deref(&self) -> &Table {
        &self.table
    }
}

impl DerefMut for HtmlTable {
    fn deref_mut(&mut self) -> &mut Table {
        &mut self.table
    }
}

impl RenderTable for HtmlTable {
    fn render_to(&mut self, w: &mut dyn Write) -> Result<()> {
        HtmlTable::render_to(self, w)
    }
}

/// Renders `table` as HTML.
pub fn render(table: &mut Table) -> Result<String> {
    let mut wrapped = HtmlTable::wrap(std::mem::take(table));
    let out = wrapped.render();
    *table = wrapped.into_table();
    out
}

/// Writes `table` to `w` as HTML.
pub fn render_to(table: &mut Table, w: &mut dyn Write) -> Result<()> {
    let mut wrapped = HtmlTable::wrap(std::mem::take(table));
    let out = wrapped.render_to(w);
    *table = wrapped.into_table();
    out
}
