//! Render settings loaded from YAML or JSON.
//!
//! ```yaml
//! style: utf8-light
//! fg: white
//! bg: "#000080"
//! solid: true
//! html:
//!   class: listing
//! ```
//!
//! `style` takes the same strings as [`auto::wrap`]; left out, it means a
//! plain text table. The colors and flags apply to text tables and the
//! `html` section to HTML tables; each is ignored by the other renderers.

use std::path::Path;

use serde::Deserialize;
use tabular::{Color, Table};

use crate::auto::{self, Renderer};
use crate::error::{RenderError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub style: String,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub solid: bool,
    pub to_eol: bool,
    pub html: HtmlConfig,
}

/// Attributes of HTML tables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlConfig {
    pub id: String,
    pub class: String,
    pub caption: String,
    pub disable_style: bool,
}

impl RenderConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RenderError::Config(e.to_string()))
    }

    /// Loads a `.yaml`, `.yml` or `.json` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| RenderError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => RenderConfig::from_yaml(&content),
            Some("json") => RenderConfig::from_json(&content),
            _ => Err(RenderError::Config(format!(
                "unsupported config format: {}",
                path.display()
            ))),
        }
    }

    /// The style string, with an empty one meaning a text table.
    pub fn style(&self) -> &str {
        if self.style.is_empty() {
            "texttable"
        } else {
            &self.style
        }
    }

    /// Wraps `table` in the configured renderer.
    ///
    /// A text style naming an unknown decoration is refused here rather
    /// than at render time.
    pub fn renderer(&self, table: Table) -> Result<Renderer> {
        let mut renderer = auto::wrap(table, self.style());
        if let Some(text) = renderer.as_text_mut() {
            if text.decoration().is_empty() {
                return Err(RenderError::Config(format!(
                    "style {:?} names no known decoration",
                    self.style
                )));
            }
            if let Some(fg) = self.fg {
                text.set_fg_color(fg);
            }
            if let Some(bg) = self.bg {
                text.set_bg_color(bg);
            }
            if self.solid {
                text.set_bg_solid(true);
            }
            text.set_to_eol(self.to_eol);
        }
        if let Some(html) = renderer.as_html_mut() {
            html.set_id(self.html.id.as_str())
                .set_class(self.html.class.as_str())
                .set_caption(self.html.caption.as_str())
                .set_disable_style(self.html.disable_style);
        }
        Ok(renderer)
    }
}
