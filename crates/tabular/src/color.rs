//! 24-bit colors for terminal and HTML output.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Resets every terminal color attribute.
pub const RESET: &str = "\x1B[m";

/// Erases from the cursor to the end of the line, in the current colors.
pub const ERASE_TO_EOL: &str = "\x1B[K";

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

static HTML_NAMES: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| HTML_COLORS.iter().copied().collect());

impl Color {
    pub const fn rgb24(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    const fn from_u32(rgb: u32) -> Self {
        Color::rgb24((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Looks up a color by its HTML/CSS name, ignoring case.
    pub fn by_html_name(name: &str) -> Result<Color, TableError> {
        HTML_NAMES
            .get(name.to_ascii_lowercase().as_str())
            .map(|rgb| Color::from_u32(*rgb))
            .ok_or_else(|| TableError::UnknownColor(name.to_string()))
    }

    /// Parses six hex digits, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Color, TableError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TableError::UnknownColor(hex.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Color::from_u32)
            .map_err(|_| TableError::UnknownColor(hex.to_string()))
    }

    /// Parses an HTML color name or a hex triplet.
    pub fn parse(s: &str) -> Result<Color, TableError> {
        Color::by_html_name(s).or_else(|_| Color::from_hex(s))
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Upper-case hex digits, without a `#`.
    pub fn rgb_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// The `#RRGGBB` form used in HTML and CSS.
    pub fn html(&self) -> String {
        format!("#{}", self.rgb_hex())
    }

    /// Escape sequence selecting this as the foreground color.
    pub fn ansi_escape_fg(&self) -> String {
        format!("\x1B[38;2;{};{};{}m", self.red, self.green, self.blue)
    }

    /// Escape sequence selecting this as the background color.
    pub fn ansi_escape_bg(&self) -> String {
        format!("\x1B[48;2;{};{};{}m", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html())
    }
}

impl FromStr for Color {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = TableError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::parse(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.html()
    }
}

/// Names every HTML/CSS named color.
pub fn html_color_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = HTML_COLORS.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names
}

const HTML_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xF0F8FF),
    ("antiquewhite", 0xFAEBD7),
    ("aqua", 0x00FFFF),
    ("aquamarine", 0x7FFFD4),
    ("azure", 0xF0FFFF),
    ("beige", 0xF5F5DC),
    ("bisque", 0xFFE4C4),
    ("black", 0x000000),
    ("blanchedalmond", 0xFFEBCD),
    ("blue", 0x0000FF),
    ("blueviolet", 0x8A2BE2),
    ("brown", 0xA52A2A),
    ("burlywood", 0xDEB887),
    ("cadetblue", 0x5F9EA0),
    ("chartreuse", 0x7FFF00),
    ("chocolate", 0xD2691E),
    ("coral", 0xFF7F50),
    ("cornflowerblue", 0x6495ED),
    ("cornsilk", 0xFFF8DC),
    ("crimson", 0xDC143C),
    ("cyan", 0x00FFFF),
    ("darkblue", 0x00008B),
    ("darkcyan", 0x008B8B),
    ("darkgoldenrod", 0xB8860B),
    ("darkgray", 0xA9A9A9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xA9A9A9),
    ("darkkhaki", 0xBDB76B),
    ("darkmagenta", 0x8B008B),
    ("darkolivegreen", 0x556B2F),
    ("darkorange", 0xFF8C00),
    ("darkorchid", 0x9932CC),
    ("darkred", 0x8B0000),
    ("darksalmon", 0xE9967A),
    ("darkseagreen", 0x8FBC8F),
    ("darkslateblue", 0x483D8B),
    ("darkslategray", 0x2F4F4F),
    ("darkslategrey", 0x2F4F4F),
    ("darkturquoise", 0x00CED1),
    ("darkviolet", 0x9400D3),
    ("deeppink", 0xFF1493),
    ("deepskyblue", 0x00BFFF),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1E90FF),
    ("firebrick", 0xB22222),
    ("floralwhite", 0xFFFAF0),
    ("forestgreen", 0x228B22),
    ("fuchsia", 0xFF00FF),
    ("gainsboro", 0xDCDCDC),
    ("ghostwhite", 0xF8F8FF),
    ("gold", 0xFFD700),
    ("goldenrod", 0xDAA520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xADFF2F),
    ("grey", 0x808080),
    ("honeydew", 0xF0FFF0),
    ("hotpink", 0xFF69B4),
    ("indianred", 0xCD5C5C),
    ("indigo", 0x4B0082),
    ("ivory", 0xFFFFF0),
    ("khaki", 0xF0E68C),
    ("lavender", 0xE6E6FA),
    ("lavenderblush", 0xFFF0F5),
    ("lawngreen", 0x7CFC00),
    ("lemonchiffon", 0xFFFACD),
    ("lightblue", 0xADD8E6),
    ("lightcoral", 0xF08080),
    ("lightcyan", 0xE0FFFF),
    ("lightgoldenrodyellow", 0xFAFAD2),
    ("lightgray", 0xD3D3D3),
    ("lightgreen", 0x90EE90),
    ("lightgrey", 0xD3D3D3),
    ("lightpink", 0xFFB6C1),
    ("lightsalmon", 0xFFA07A),
    ("lightseagreen", 0x20B2AA),
    ("lightskyblue", 0x87CEFA),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xB0C4DE),
    ("lightyellow", 0xFFFFE0),
    ("lime", 0x00FF00),
    ("limegreen", 0x32CD32),
    ("linen", 0xFAF0E6),
    ("magenta", 0xFF00FF),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66CDAA),
    ("mediumblue", 0x0000CD),
    ("mediumorchid", 0xBA55D3),
    ("mediumpurple", 0x9370DB),
    ("mediumseagreen", 0x3CB371),
    ("mediumslateblue", 0x7B68EE),
    ("mediumspringgreen", 0x00FA9A),
    ("mediumturquoise", 0x48D1CC),
    ("mediumvioletred", 0xC71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xF5FFFA),
    ("mistyrose", 0xFFE4E1),
    ("moccasin", 0xFFE4B5),
    ("navajowhite", 0xFFDEAD),
    ("navy", 0x000080),
    ("oldlace", 0xFDF5E6),
    ("olive", 0x808000),
    ("olivedrab", 0x6B8E23),
    ("orange", 0xFFA500),
    ("orangered", 0xFF4500),
    ("orchid", 0xDA70D6),
    ("palegoldenrod", 0xEEE8AA),
    ("palegreen", 0x98FB98),
    ("paleturquoise", 0xAFEEEE),
    ("palevioletred", 0xDB7093),
    ("papayawhip", 0xFFEFD5),
    ("peachpuff", 0xFFDAB9),
    ("peru", 0xCD853F),
    ("pink", 0xFFC0CB),
    ("plum", 0xDDA0DD),
    ("powderblue", 0xB0E0E6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xFF0000),
    ("rosybrown", 0xBC8F8F),
    ("royalblue", 0x4169E1),
    ("saddlebrown", 0x8B4513),
    ("salmon", 0xFA8072),
    ("sandybrown", 0xF4A460),
    ("seagreen", 0x2E8B57),
    ("seashell", 0xFFF5EE),
    ("sienna", 0xA0522D),
    ("silver", 0xC0C0C0),
    ("skyblue", 0x87CEEB),
    ("slateblue", 0x6A5ACD),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xFFFAFA),
    ("springgreen", 0x00FF7F),
    ("steelblue", 0x4682B4),
    ("tan", 0xD2B48C),
    ("teal", 0x008080),
    ("thistle", 0xD8BFD8),
    ("tomato", 0xFF6347),
    ("turquoise", 0x40E0D0),
    ("violet", 0xEE82EE),
    ("wheat", 0xF5DEB3),
    ("white", 0xFFFFFF),
    ("whitesmoke", 0xF5F5F5),
    ("yellow", 0xFFFF00),
    ("yellowgreen", 0x9ACD32),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        assert_eq!(Color::by_html_name("black").unwrap(), Color::rgb24(0, 0, 0));
        assert_eq!(Color::by_html_name("White").unwrap().rgb_hex(), "FFFFFF");
        assert_eq!(Color::by_html_name("cyan").unwrap().html(), "#00FFFF");
        assert_eq!(Color::by_html_name("royalblue").unwrap().rgb_hex(), "4169E1");
        assert!(Color::by_html_name("blurple").is_err());
    }

    #[test]
    fn hex_triplets() {
        let c = Color::parse("#2a57c8").unwrap();
        assert_eq!((c.red(), c.green(), c.blue()), (0x2A, 0x57, 0xC8));
        assert_eq!(c.rgb_hex(), "2A57C8");
        assert_eq!(Color::parse("2A57C8").unwrap(), c);
        assert!(Color::parse("#2a57c").is_err());
        assert!(Color::parse("#2a57cg").is_err());
        assert!(Color::parse("+2a57c8").is_err());
    }

    #[test]
    fn escapes() {
        let c = Color::rgb24(1, 2, 3);
        assert_eq!(c.ansi_escape_fg(), "\x1B[38;2;1;2;3m");
        assert_eq!(c.ansi_escape_bg(), "\x1B[48;2;1;2;3m");
        assert_eq!(RESET, "\x1B[m");
    }

    #[test]
    fn deserializes_from_strings() {
        let c: Color = serde_json::from_str("\"teal\"").unwrap();
        assert_eq!(c.html(), "#008080");
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#008080\"");
    }

    #[test]
    fn name_list_is_sorted() {
        let names = html_color_names();
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert!(names.contains(&"rebeccapurple"));
    }
}
