//! Picking a renderer from a style string.
//!
//! A style is a list of sections joined by dots. The first section names
//! the output format: `csv`, `html`, `json`, `markdown` or `texttable`. Text
//! tables take further sections, each a color (an HTML color name or a
//! `#RRGGBB` triplet, foreground first, then background), the word `solid`,
//! or a decoration name. A style whose first section names no format is a
//! text table configured by all of its sections, so `utf8-light.white.navy`
//! is a light box in white on navy.

use std::io::Write;
use std::ops::{Deref, DerefMut};

use tabular::{Color, Table};

use crate::csv::CsvTable;
use crate::decoration::registered_decoration_names;
use crate::error::Result;
use crate::html::HtmlTable;
use crate::json::JsonTable;
use crate::markdown::MarkdownTable;
use crate::texttable::TextTable;
use crate::traits::RenderTable;

/// Any of the renderers.
#[derive(Debug)]
pub enum Renderer {
    Csv(CsvTable),
    Html(HtmlTable),
    Json(JsonTable),
    Markdown(MarkdownTable),
    Text(TextTable),
}

impl Renderer {
    pub fn render(&mut self) -> Result<String> {
        RenderTable::render(self)
    }

    pub fn render_to(&mut self, w: &mut dyn Write) -> Result<()> {
        match self {
            Renderer::Csv(t) => t.render_to(w),
            Renderer::Html(t) => t.render_to(w),
            Renderer::Json(t) => t.render_to(w),
            Renderer::Markdown(t) => t.render_to(w),
            Renderer::Text(t) => t.render_to(w),
        }
    }

    pub fn into_table(self) -> Table {
        match self {
            Renderer::Csv(t) => t.into_table(),
            Renderer::Html(t) => t.into_table(),
            Renderer::Json(t) => t.into_table(),
            Renderer::Markdown(t) => t.into_table(),
            Renderer::Text(t) => t.into_table(),
        }
    }

    /// The text renderer, when this is one.
    pub fn as_text_mut(&mut self) -> Option<&mut TextTable> {
        match self {
            Renderer::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_html_mut(&mut self) -> Option<&mut HtmlTable> {
        match self {
            Renderer::Html(t) => Some(t),
            _ => None,
        }
    }
}

impl Deref for Renderer {
    type Target = Table;

    fn deref(&self) -> &Table {
        match self {
            Renderer::Csv(t) => &**t,
            Renderer::Html(t) => &**t,
            Renderer::Json(t) => &**t,
            Renderer::Markdown(t) => &**t,
            Renderer::Text(t) => &**t,
        }
    }
}

impl DerefMut for Renderer {
    fn deref_mut(&mut self) -> &mut Table {
        match self {
            Renderer::Csv(t) => &mut **t,
            Renderer::Html(t) => &mut **t,
            Renderer::Json(t) => &mut **t,
            Renderer::Markdown(t) => &mut **t,
            Renderer::Text(t) => &mut **t,
        }
    }
}

impl RenderTable for Renderer {
    fn render_to(&mut self, w: &mut dyn Write) -> Result<()> {
        Renderer::render_to(self, w)
    }
}

/// Wraps `table` in the renderer named by `style`.
pub fn wrap(table: Table, style: &str) -> Renderer {
    let sections: Vec<&str> = style.split('.').collect();
    let format = sections[0].to_lowercase();
    log::debug!("style {style:?} selects {format:?}");
    match format.as_str() {
        "csv" => Renderer::Csv(CsvTable::wrap(table)),
        "html" => Renderer::Html(HtmlTable::wrap(table)),
        "json" => Renderer::Json(JsonTable::wrap(table)),
        "markdown" => Renderer::Markdown(MarkdownTable::wrap(table)),
        "texttable" => Renderer::Text(styled_text_table(table, &sections[1..])),
        _ => Renderer::Text(styled_text_table(table, &sections)),
    }
}

/// A renderer named by `style` around a new table.
pub fn new(style: &str) -> Renderer {
    wrap(Table::new(), style)
}

/// Renders `table` in `style`.
pub fn render(table: &mut Table, style: &str) -> Result<String> {
    let mut wrapped = wrap(std::mem::take(table), style);
    let out = wrapped.render();
    *table = wrapped.into_table();
    out
}

/// Writes `table` to `w` in `style`.
pub fn render_to(table: &mut Table, w: &mut dyn Write, style: &str) -> Result<()> {
    let mut wrapped = wrap(std::mem::take(table), style);
    let out = wrapped.render_to(w);
    *table = wrapped.into_table();
    out
}

/// Every style with a single section: the decorations and the formats.
pub fn list_styles() -> Vec<String> {
    let mut styles = registered_decoration_names();
    styles.extend(["csv", "html", "json", "markdown"].map(String::from));
    styles.sort();
    styles.dedup();
    styles
}

fn styled_text_table(table: Table, sections: &[&str]) -> TextTable {
    let mut text = TextTable::wrap(table);
    let mut colors = 0;
    let mut decorated = false;
    for section in sections {
        if let Ok(color) = Color::parse(section) {
            match colors {
                0 => {
                    text.set_fg_color(color);
                }
                1 => {
                    text.set_bg_color(color);
                }
                _ => {}
            }
            colors += 1;
        } else if *section == "solid" {
            text.set_bg_solid(true);
        } else if !decorated {
            decorated = true;
            // An unknown name leaves the empty decoration, so rendering fails.
            let _ = text.set_decoration_named(section);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_configure_text_tables() {
        let mut r = wrap(Table::new(), "utf8-light.white.#000080.solid.red.ascii-simple");
        let text = r.as_text_mut().unwrap();
        assert_eq!(text.fg_color(), Some(Color::rgb24(255, 255, 255)));
        assert_eq!(text.bg_color(), Some(Color::rgb24(0, 0, 128)));
        assert_eq!(text.decoration(), &crate::decoration::Decoration::utf8_light());
    }

    #[test]
    fn format_names_ignore_case() {
        assert!(matches!(new("CSV"), Renderer::Csv(_)));
        assert!(matches!(new("Markdown"), Renderer::Markdown(_)));
        assert!(matches!(new("texttable"), Renderer::Text(_)));
        assert!(matches!(new("anything-else"), Renderer::Text(_)));
    }
}
