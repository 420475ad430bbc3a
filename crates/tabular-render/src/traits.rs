//! The interface shared by every renderer.

use std::io::Write;
use std::ops::DerefMut;

use tabular::Table;

use crate::error::Result;

/// A table wrapped together with the options for one output format.
///
/// Renderers dereference to the wrapped [`Table`], so rows and properties can
/// be added through the renderer itself.
pub trait RenderTable: DerefMut<Target = Table> {
    /// Writes the rendered table into `w`.
    fn render_to(&mut self, w: &mut dyn Write) -> Result<()>;

    /// The rendered table as a string.
    fn render(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        self.render_to(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
