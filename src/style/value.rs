//! Style values: Color, Modifier, Style.
//!
//! A [`Style`] is an immutable overlay. Every field is optional, so the
//! default value ([`Style::EMPTY`]) means "no override" and patching with it
//! changes nothing.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
    Indexed(u8),
    Rgb(u8, u8, u8),
}

/// Returned when a string is not a recognised color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised color: {0:?}")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a named color (`red`, `light-blue`, `dark_gray`), a hex color
    /// (`#rgb`, `#rrggbb`) or a 256-palette index (`0`..=`255`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let err = || ParseColorError(raw.to_owned());

        if let Some(hex) = raw.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(err);
        }
        if raw.chars().all(|c| c.is_ascii_digit()) && !raw.is_empty() {
            return raw.parse::<u8>().map(Color::Indexed).map_err(|_| err());
        }

        let name: String = raw
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let color = match name.as_str() {
            "reset" | "default" => Color::Reset,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "gray" | "grey" => Color::Gray,
            "darkgray" | "darkgrey" => Color::DarkGray,
            "lightred" => Color::LightRed,
            "lightgreen" => Color::LightGreen,
            "lightyellow" => Color::LightYellow,
            "lightblue" => Color::LightBlue,
            "lightmagenta" => Color::LightMagenta,
            "lightcyan" => Color::LightCyan,
            "white" => Color::White,
            _ => return Err(err()),
        };
        Ok(color)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digit = |i: usize, len: usize| u8::from_str_radix(hex.get(i..i + len)?, 16).ok();
    match hex.len() {
        3 => {
            let r = digit(0, 1)?;
            let g = digit(1, 1)?;
            let b = digit(2, 1)?;
            Some(Color::Rgb(r * 17, g * 17, b * 17))
        }
        6 => Some(Color::Rgb(digit(0, 2)?, digit(2, 2)?, digit(4, 2)?)),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Modifier
// ---------------------------------------------------------------------------

/// Text modifier bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifier(pub u8);

impl Modifier {
    pub const NONE: Modifier = Modifier(0);
    pub const BOLD: Modifier = Modifier(1);
    pub const DIM: Modifier = Modifier(1 << 1);
    pub const ITALIC: Modifier = Modifier(1 << 2);
    pub const UNDERLINED: Modifier = Modifier(1 << 3);
    pub const REVERSED: Modifier = Modifier(1 << 4);
    pub const CROSSED_OUT: Modifier = Modifier(1 << 5);

    /// Whether every bit of `other` is set in `self`.
    pub fn contains(self, other: Modifier) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether no bit is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Look up a single modifier by its CSS keyword.
    pub fn from_keyword(keyword: &str) -> Option<Modifier> {
        match keyword.to_ascii_lowercase().as_str() {
            "bold" => Some(Modifier::BOLD),
            "dim" => Some(Modifier::DIM),
            "italic" => Some(Modifier::ITALIC),
            "underline" | "underlined" => Some(Modifier::UNDERLINED),
            "reverse" | "reversed" => Some(Modifier::REVERSED),
            "strike" | "strikethrough" | "crossed-out" => Some(Modifier::CROSSED_OUT),
            "none" => Some(Modifier::NONE),
            _ => None,
        }
    }
}

impl BitOr for Modifier {
    type Output = Modifier;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifier(self.0 | rhs.0)
    }
}

impl BitAnd for Modifier {
    type Output = Modifier;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifier(self.0 & rhs.0)
    }
}

impl Not for Modifier {
    type Output = Modifier;
    fn not(self) -> Self::Output {
        Modifier(!self.0)
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Foreground, background and text modifiers for a run of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub add_modifier: Modifier,
    pub sub_modifier: Modifier,
}

impl Style {
    /// The "no override" sentinel.
    pub const EMPTY: Style = Style {
        fg: None,
        bg: None,
        add_modifier: Modifier::NONE,
        sub_modifier: Modifier::NONE,
    };

    /// Create an empty style.
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Set the foreground color.
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add a text modifier (and stop removing it).
    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.sub_modifier = self.sub_modifier & !modifier;
        self.add_modifier = self.add_modifier | modifier;
        self
    }

    /// Remove a text modifier (and stop adding it).
    pub fn remove_modifier(mut self, modifier: Modifier) -> Self {
        self.add_modifier = self.add_modifier & !modifier;
        self.sub_modifier = self.sub_modifier | modifier;
        self
    }

    /// Shorthand for `add_modifier(Modifier::BOLD)`.
    pub fn bold(self) -> Self {
        self.add_modifier(Modifier::BOLD)
    }

    /// Shorthand for `add_modifier(Modifier::ITALIC)`.
    pub fn italic(self) -> Self {
        self.add_modifier(Modifier::ITALIC)
    }

    /// Shorthand for `add_modifier(Modifier::UNDERLINED)`.
    pub fn underlined(self) -> Self {
        self.add_modifier(Modifier::UNDERLINED)
    }

    /// Whether this style overrides nothing.
    pub fn is_empty(&self) -> bool {
        *self == Style::EMPTY
    }

    /// Overlay `other` on top of `self`: set fields in `other` win.
    pub fn patch(self, other: Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            add_modifier: (self.add_modifier & !other.sub_modifier) | other.add_modifier,
            sub_modifier: (self.sub_modifier & !other.add_modifier) | other.sub_modifier,
        }
    }

    /// The modifiers that end up active once this style is fully applied.
    pub fn effective_modifiers(&self) -> Modifier {
        self.add_modifier & !self.sub_modifier
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Indexed(i) => write!(f, "{i}"),
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            other => write!(f, "{}", format!("{other:?}").to_ascii_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // -----------------------------------------------------------------------
    // Color
    // -----------------------------------------------------------------------

    #[test]
    fn parse_named_colors() {
        assert_eq!("red".parse::<Color>(), Ok(Color::Red));
        assert_eq!("Light-Blue".parse::<Color>(), Ok(Color::LightBlue));
        assert_eq!("dark_grey".parse::<Color>(), Ok(Color::DarkGray));
        assert_eq!(" white ".parse::<Color>(), Ok(Color::White));
    }

    #[test]
    fn parse_hex_and_indexed() {
        assert_eq!("#ff0080".parse::<Color>(), Ok(Color::Rgb(255, 0, 128)));
        assert_eq!("#fff".parse::<Color>(), Ok(Color::Rgb(255, 255, 255)));
        assert_eq!("42".parse::<Color>(), Ok(Color::Indexed(42)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("chartreuse-ish".parse::<Color>().is_err());
        assert!("#12".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
        assert!("256".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn display_round_trips_rgb() {
        assert_eq!(Color::Rgb(1, 2, 255).to_string(), "#0102ff");
        assert_eq!(Color::LightCyan.to_string(), "lightcyan");
    }

    // -----------------------------------------------------------------------
    // Style
    // -----------------------------------------------------------------------

    #[test]
    fn empty_is_default() {
        assert!(Style::default().is_empty());
        assert!(Style::new().is_empty());
        assert!(!Style::new().fg(Color::Red).is_empty());
    }

    #[test]
    fn patch_with_empty_is_noop() {
        let s = Style::new().fg(Color::Red).bg(Color::Blue).bold();
        assert_eq!(s.patch(Style::EMPTY), s);
    }

    #[test]
    fn patch_overrides_set_fields_only() {
        let base = Style::new().fg(Color::Red).bg(Color::Blue);
        let over = Style::new().fg(Color::Green);
        let merged = base.patch(over);
        assert_eq!(merged.fg, Some(Color::Green));
        assert_eq!(merged.bg, Some(Color::Blue));
    }

    #[test]
    fn patch_modifiers_add_and_remove() {
        let base = Style::new().bold().italic();
        let over = Style::new().remove_modifier(Modifier::BOLD).underlined();
        let merged = base.patch(over);
        let active = merged.effective_modifiers();
        assert!(!active.contains(Modifier::BOLD));
        assert!(active.contains(Modifier::ITALIC));
        assert!(active.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn add_after_remove_cancels_removal() {
        let s = Style::new().remove_modifier(Modifier::BOLD).bold();
        assert!(s.effective_modifiers().contains(Modifier::BOLD));
        assert!(s.sub_modifier.is_empty());
    }

    #[test]
    fn modifier_keywords() {
        assert_eq!(Modifier::from_keyword("BOLD"), Some(Modifier::BOLD));
        assert_eq!(Modifier::from_keyword("underline"), Some(Modifier::UNDERLINED));
        assert_eq!(Modifier::from_keyword("sparkly"), None);
    }
}
