use std::fmt;

/// The escape character the chat runtime itself understands, `§`.
pub const ESCAPE_CHAR: char = '\u{00A7}';

/// The informal marker character accepted in user-written text, as in `&a`.
pub const MARKER_CHAR: char = '&';

/// A chat color, identified on the wire by its lowercase name.
///
/// Exactly one color applies to a segment at a time; assigning a new one
/// replaces the old. The default is white.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    #[default]
    White,
}

impl Color {
    /// The single-character code used in legacy formatting escapes.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
        }
    }

    /// The value of the `color` field on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }

    /// Looks a color up by its legacy code character, folding case.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code.to_ascii_lowercase() {
            '0' => Self::Black,
            '1' => Self::DarkBlue,
            '2' => Self::DarkGreen,
            '3' => Self::DarkAqua,
            '4' => Self::DarkRed,
            '5' => Self::DarkPurple,
            '6' => Self::Gold,
            '7' => Self::Gray,
            '8' => Self::DarkGray,
            '9' => Self::Blue,
            'a' => Self::Green,
            'b' => Self::Aqua,
            'c' => Self::Red,
            'd' => Self::LightPurple,
            'e' => Self::Yellow,
            'f' => Self::White,
            _ => return None,
        })
    }

    /// Looks a color up by its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "black" => Self::Black,
            "dark_blue" => Self::DarkBlue,
            "dark_green" => Self::DarkGreen,
            "dark_aqua" => Self::DarkAqua,
            "dark_red" => Self::DarkRed,
            "dark_purple" => Self::DarkPurple,
            "gold" => Self::Gold,
            "gray" => Self::Gray,
            "dark_gray" => Self::DarkGray,
            "blue" => Self::Blue,
            "green" => Self::Green,
            "aqua" => Self::Aqua,
            "red" => Self::Red,
            "light_purple" => Self::LightPurple,
            "yellow" => Self::Yellow,
            "white" => Self::White,
            _ => return None,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ESCAPE_CHAR}{}", self.code())
    }
}

/// A text style, serialized on the wire as its own boolean field.
///
/// Any number of styles can be active on a segment at once. The declaration
/// order here is the canonical order styles appear in on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Style {
    Magic,
    Bold,
    Strikethrough,
    Underline,
    Italic,
}

impl Style {
    /// The single-character code used in legacy formatting escapes.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Magic => 'k',
            Self::Bold => 'l',
            Self::Strikethrough => 'm',
            Self::Underline => 'n',
            Self::Italic => 'o',
        }
    }

    /// The field name used on the wire. Two entries predate the wire schema
    /// and do not match the variant name: magic serializes as `obfuscated`
    /// and underline as `underlined`.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Magic => "obfuscated",
            Self::Bold => "bold",
            Self::Strikethrough => "strikethrough",
            Self::Underline => "underlined",
            Self::Italic => "italic",
        }
    }

    /// Looks a style up by its legacy code character, folding case.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code.to_ascii_lowercase() {
            'k' => Self::Magic,
            'l' => Self::Bold,
            'm' => Self::Strikethrough,
            'n' => Self::Underline,
            'o' => Self::Italic,
            _ => return None,
        })
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ESCAPE_CHAR}{}", self.code())
    }
}

/// Any member of the legacy code alphabet: a color, a style, or the reset
/// code `r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatCode {
    Color(Color),
    Style(Style),
    Reset,
}

impl FormatCode {
    /// Looks any alphabet member up by its code character, folding case.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        if code == 'r' {
            return Some(Self::Reset);
        }
        if let Some(color) = Color::from_code(code) {
            return Some(Self::Color(color));
        }
        Style::from_code(code).map(Self::Style)
    }

    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Color(color) => color.code(),
            Self::Style(style) => style.code(),
            Self::Reset => 'r',
        }
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ESCAPE_CHAR}{}", self.code())
    }
}

/// Rewrites `marker`-prefixed legacy escapes to the runtime's native form,
/// so `&aHello` becomes `§aHello` under the conventional `&` marker.
///
/// A marker followed by anything outside the code alphabet is left untouched,
/// as is a marker at the end of the input. Code characters fold to lowercase
/// on the way through.
#[must_use]
pub fn translate_codes(marker: char, input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == marker {
            match chars.peek() {
                Some(&next) if FormatCode::from_code(next).is_some() => {
                    out.push(ESCAPE_CHAR);
                    out.push(next.to_ascii_lowercase());
                    chars.next();
                }
                _ => out.push(ch),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_codes_round_trip() {
        for code in "0123456789abcdef".chars() {
            let color = Color::from_code(code).unwrap();
            assert_eq!(color.code(), code);
            assert_eq!(Color::from_name(color.name()), Some(color));
        }
    }

    #[test]
    fn style_wire_names_follow_the_exception_table() {
        assert_eq!(Style::Magic.wire_name(), "obfuscated");
        assert_eq!(Style::Underline.wire_name(), "underlined");
        assert_eq!(Style::Bold.wire_name(), "bold");
        assert_eq!(Style::Strikethrough.wire_name(), "strikethrough");
        assert_eq!(Style::Italic.wire_name(), "italic");
    }

    #[test]
    fn lookups_accept_uppercase_codes() {
        assert_eq!(Color::from_code('A'), Some(Color::Green));
        assert_eq!(Style::from_code('K'), Some(Style::Magic));
        assert_eq!(FormatCode::from_code('R'), Some(FormatCode::Reset));
    }

    #[test]
    fn reset_is_neither_a_color_nor_a_style() {
        assert_eq!(FormatCode::from_code('r'), Some(FormatCode::Reset));
        assert_eq!(Color::from_code('r'), None);
        assert_eq!(Style::from_code('r'), None);
    }

    #[test]
    fn translate_rewrites_known_codes_only() {
        assert_eq!(translate_codes('&', "&aHi &LThere&x"), "§aHi §lThere&x");
        assert_eq!(translate_codes('&', "plain"), "plain");
        assert_eq!(translate_codes('&', "trailing &"), "trailing &");
    }

    #[test]
    fn display_writes_the_native_escape() {
        assert_eq!(Color::Red.to_string(), "§c");
        assert_eq!(Style::Bold.to_string(), "§l");
        assert_eq!(FormatCode::Reset.to_string(), "§r");
    }
}
