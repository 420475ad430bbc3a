//! Glyph sets for drawing table borders.
//!
//! A [`Decoration`] names the strings used for every part of a table's
//! frame. Few styles need all of them: [`Decoration::populate`] fills the
//! unset parts from the basic horizontal, vertical and cross-piece glyphs,
//! so a style only spells out where it differs.
//!
//! ```text
//! ┏━━━┳━━━━━━━┳━━━┓  top_left h_outer h_top_down ... top_right
//! ┃ C ┃ Name  ┃ N ┃  v_header
//! ┣━━━╇━━━━━━━╇━━━┫  hb_left h_outer hb_cross ... hb_right
//! ┃ a │ Funky │ 1 ┃  v_body_border v_body_inner ... v_body_border
//! ┠───┼───────┼───┨  left_body_rule h_rule cross_piece ... right_body_rule
//! ┃ c │ Final │ 3 ┃
//! ┗━━━┷━━━━━━━┷━━━┛  bottom_left h_outer b_bottom_up ... bottom_right
//! ```
//!
//! Without a header, the top line uses `b_top_down` where it meets the
//! column dividers.

mod emit;
mod registry;
mod styles;

pub use emit::{DividerSet, Emitter, WidthString};
pub use registry::{named, register_decoration, registered_decoration_names};
pub use styles::{
    ASCII_SIMPLE, DEFAULT_DECORATION, NONE, UTF8_DOUBLE, UTF8_HEAVY, UTF8_LIGHT, UTF8_LIGHT_CURVED,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoration {
    pub horizontal: String,
    pub vertical: String,
    pub cross_piece: String,

    pub top_down: String,
    pub v_border: String,

    pub h_outer: String,
    pub h_rule: String,
    pub v_header: String,
    pub v_body_border: String,
    pub v_body_inner: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub left_body_rule: String,
    pub right_body_rule: String,
    pub h_top_down: String,
    pub b_top_down: String,
    pub b_bottom_up: String,
    pub hb_cross: String,
    pub hb_left: String,
    pub hb_right: String,

    boxless: bool,
}

fn default_to(target: &mut String, source: &str) {
    if target.is_empty() {
        target.push_str(source);
    }
}

impl Decoration {
    /// The decoration with nothing set; rendering with it fails.
    pub fn empty() -> Self {
        Decoration::default()
    }

    /// A decoration drawing no frame at all; cells are separated by spaces.
    pub fn boxless() -> Self {
        Decoration {
            boxless: true,
            ..Decoration::default()
        }
    }

    pub fn is_boxless(&self) -> bool {
        self.boxless
    }

    pub fn is_empty(&self) -> bool {
        *self == Decoration::empty()
    }

    /// Fills every unset glyph from the ones it is derived from.
    ///
    /// Missing basics become `H`, `V` and `X`, which are ugly on purpose.
    pub fn populate(&mut self) {
        default_to(&mut self.horizontal, "H");
        default_to(&mut self.vertical, "V");
        default_to(&mut self.cross_piece, "X");

        default_to(&mut self.top_down, &self.cross_piece);
        default_to(&mut self.v_border, &self.vertical);

        default_to(&mut self.h_outer, &self.horizontal);
        default_to(&mut self.h_rule, &self.horizontal);
        default_to(&mut self.v_header, &self.v_border);
        default_to(&mut self.v_body_border, &self.v_border);
        default_to(&mut self.v_body_inner, &self.vertical);

        default_to(&mut self.top_left, &self.cross_piece);
        default_to(&mut self.top_right, &self.cross_piece);
        default_to(&mut self.bottom_left, &self.cross_piece);
        default_to(&mut self.bottom_right, &self.cross_piece);
        default_to(&mut self.left_body_rule, &self.cross_piece);
        default_to(&mut self.right_body_rule, &self.cross_piece);
        default_to(&mut self.h_top_down, &self.top_down);
        default_to(&mut self.b_top_down, &self.top_down);
        default_to(&mut self.b_bottom_up, &self.cross_piece);
        default_to(&mut self.hb_cross, &self.cross_piece);
        default_to(&mut self.hb_left, &self.left_body_rule);
        default_to(&mut self.hb_right, &self.right_body_rule);
    }

    /// A populated copy, leaving boxless decorations untouched.
    pub fn populated(mut self) -> Self {
        if !self.boxless {
            self.populate();
        }
        self
    }

    /// An emitter drawing lines for columns of the given widths.
    pub fn for_column_widths(&self, widths: Vec<usize>) -> Emitter<'_> {
        Emitter::new(self, widths)
    }
}
