//! The built-in decorations.

use super::Decoration;

pub const ASCII_SIMPLE: &str = "ascii-simple";
pub const NONE: &str = "none";
pub const UTF8_LIGHT: &str = "utf8-light";
pub const UTF8_LIGHT_CURVED: &str = "utf8-light-curved";
pub const UTF8_HEAVY: &str = "utf8-heavy";
pub const UTF8_DOUBLE: &str = "utf8-double";

/// The decoration a new text table starts with.
pub const DEFAULT_DECORATION: &str = UTF8_HEAVY;

fn glyphs(horizontal: &str, vertical: &str, cross_piece: &str) -> Decoration {
    Decoration {
        horizontal: horizontal.into(),
        vertical: vertical.into(),
        cross_piece: cross_piece.into(),
        ..Decoration::default()
    }
}

impl Decoration {
    /// `+`, `-` and `|` only.
    pub fn ascii_simple() -> Self {
        glyphs("-", "|", "+").populated()
    }

    pub fn utf8_light() -> Self {
        Decoration {
            top_down: "┬".into(),
            b_bottom_up: "┴".into(),
            top_left: "┌".into(),
            top_right: "┐".into(),
            bottom_left: "└".into(),
            bottom_right: "┘".into(),
            left_body_rule: "├".into(),
            right_body_rule: "┤".into(),
            ..glyphs("─", "│", "┼")
        }
        .populated()
    }

    /// Light lines with rounded corners.
    pub fn utf8_light_curved() -> Self {
        Decoration {
            top_left: "╭".into(),
            top_right: "╮".into(),
            bottom_left: "╰".into(),
            bottom_right: "╯".into(),
            ..Decoration::utf8_light()
        }
    }

    /// A heavy outer frame and header rule around light inner lines.
    pub fn utf8_heavy() -> Self {
        Decoration {
            v_border: "┃".into(),
            h_outer: "━".into(),
            h_top_down: "┳".into(),
            b_top_down: "┯".into(),
            b_bottom_up: "┷".into(),
            top_left: "┏".into(),
            top_right: "┓".into(),
            bottom_left: "┗".into(),
            bottom_right: "┛".into(),
            left_body_rule: "┠".into(),
            right_body_rule: "┨".into(),
            hb_left: "┣".into(),
            hb_cross: "╇".into(),
            hb_right: "┫".into(),
            ..glyphs("─", "│", "┼")
        }
        .populated()
    }

    /// A double outer frame and header rule around light inner lines.
    pub fn utf8_double() -> Self {
        Decoration {
            v_border: "║".into(),
            h_outer: "═".into(),
            h_top_down: "╦".into(),
            b_top_down: "╤".into(),
            b_bottom_up: "╧".into(),
            top_left: "╔".into(),
            top_right: "╗".into(),
            bottom_left: "╚".into(),
            bottom_right: "╝".into(),
            left_body_rule: "╟".into(),
            right_body_rule: "╢".into(),
            hb_left: "╠".into(),
            hb_cross: "╪".into(),
            hb_right: "╣".into(),
            ..glyphs("─", "│", "┼")
        }
        .populated()
    }
}

pub(super) fn builtin() -> Vec<(&'static str, Decoration)> {
    vec![
        (ASCII_SIMPLE, Decoration::ascii_simple()),
        (NONE, Decoration::boxless()),
        (UTF8_LIGHT, Decoration::utf8_light()),
        (UTF8_LIGHT_CURVED, Decoration::utf8_light_curved()),
        (UTF8_HEAVY, Decoration::utf8_heavy()),
        (UTF8_DOUBLE, Decoration::utf8_double()),
    ]
}
