//! Building border and content lines from a decoration.

use super::Decoration;

/// Text with a known display width.
///
/// The width is carried separately from the text so the text may hold
/// zero-width escape sequences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidthString {
    pub text: String,
    pub width: usize,
    blank: bool,
}

impl WidthString {
    pub fn new(text: impl Into<String>, width: usize) -> Self {
        WidthString {
            text: text.into(),
            width,
            blank: false,
        }
    }

    /// A placeholder rendered as nothing but spaces.
    pub fn blank() -> Self {
        WidthString {
            blank: true,
            ..WidthString::default()
        }
    }

    /// The text padded with spaces on the right to `available` cells.
    ///
    /// Text already at least that wide is returned unchanged.
    pub fn within_width(&self, available: usize) -> String {
        if self.blank {
            return " ".repeat(available);
        }
        let pad = available.saturating_sub(self.width);
        let mut out = String::with_capacity(self.text.len() + pad);
        out.push_str(&self.text);
        out.extend(std::iter::repeat(' ').take(pad));
        out
    }
}

/// The strings placed before, between and after the cells of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DividerSet<'d> {
    pub left: &'d str,
    pub inner: &'d str,
    pub right: &'d str,
}

/// Draws lines of a table with fixed column widths.
///
/// Border lines come back as `None` for boxless decorations. Returned lines
/// carry no line ending.
#[derive(Debug, Clone)]
pub struct Emitter<'d> {
    decoration: &'d Decoration,
    widths: Vec<usize>,
}

impl<'d> Emitter<'d> {
    pub fn new(decoration: &'d Decoration, widths: Vec<usize>) -> Self {
        Emitter { decoration, widths }
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    fn template_line(&self, left: &str, horizontal: &str, cross: &str, right: &str) -> Option<String> {
        if self.decoration.is_boxless() {
            return None;
        }
        let mut line = String::from(left);
        for (i, width) in self.widths.iter().enumerate() {
            line.push_str(&horizontal.repeat(width + 2));
            line.push_str(if i + 1 == self.widths.len() { right } else { cross });
        }
        if self.widths.is_empty() {
            line.push_str(right);
        }
        Some(line)
    }

    pub fn line_header_top(&self) -> Option<String> {
        let d = self.decoration;
        self.template_line(&d.top_left, &d.h_outer, &d.h_top_down, &d.top_right)
    }

    pub fn line_header_body_sep(&self) -> Option<String> {
        let d = self.decoration;
        self.template_line(&d.hb_left, &d.h_outer, &d.hb_cross, &d.hb_right)
    }

    pub fn line_body_top(&self) -> Option<String> {
        let d = self.decoration;
        self.template_line(&d.top_left, &d.h_outer, &d.b_top_down, &d.top_right)
    }

    pub fn line_bottom(&self) -> Option<String> {
        let d = self.decoration;
        self.template_line(&d.bottom_left, &d.h_outer, &d.b_bottom_up, &d.bottom_right)
    }

    pub fn line_separator(&self) -> Option<String> {
        let d = self.decoration;
        self.template_line(&d.left_body_rule, &d.h_rule, &d.cross_piece, &d.right_body_rule)
    }

    pub fn header_dividers(&self) -> DividerSet<'d> {
        let d = self.decoration;
        DividerSet {
            left: &d.v_header,
            inner: &d.v_header,
            right: &d.v_header,
        }
    }

    pub fn body_dividers(&self) -> DividerSet<'d> {
        let d = self.decoration;
        DividerSet {
            left: &d.v_body_border,
            inner: &d.v_body_inner,
            right: &d.v_body_border,
        }
    }

    /// One physical line of cells, padded to the column widths.
    ///
    /// Fields are joined by single spaces, so every cell sits between a
    /// space on each side and its dividers.
    pub fn rendered_line(&self, dividers: DividerSet<'_>, cells: &[WidthString]) -> String {
        let mut fields: Vec<String> = Vec::with_capacity(self.widths.len() * 2 + 1);
        if !dividers.left.is_empty() {
            fields.push(dividers.left.to_string());
        }
        for (i, width) in self.widths.iter().enumerate() {
            let cell = cells.get(i).map_or_else(|| " ".repeat(*width), |c| c.within_width(*width));
            fields.push(cell);
            if !dividers.inner.is_empty() {
                fields.push(dividers.inner.to_string());
            }
        }
        match (dividers.right.is_empty(), dividers.inner.is_empty()) {
            (false, false) => {
                if let Some(last) = fields.last_mut() {
                    *last = dividers.right.to_string();
                }
            }
            (false, true) => fields.push(dividers.right.to_string()),
            (true, false) => {
                fields.pop();
            }
            (true, true) => {}
        }
        fields.join(" ")
    }

    pub fn header_line_rendered(&self, cells: &[WidthString]) -> String {
        self.rendered_line(self.header_dividers(), cells)
    }

    pub fn body_line_rendered(&self, cells: &[WidthString]) -> String {
        self.rendered_line(self.body_dividers(), cells)
    }
}
