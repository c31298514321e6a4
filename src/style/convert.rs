//! Property converters: raw attribute text to typed values.
//!
//! Converters never fail loudly. Anything they cannot make sense of comes
//! back as `None` and the caller falls back to its default.

use crate::layout::Constraint;
use crate::style::gutter::Gutter;
use crate::style::value::{Color, Modifier, Style};

/// Converts a raw textual property value into a typed value.
pub trait PropertyConverter {
    type Value;

    fn convert(&self, raw: &str) -> Option<Self::Value>;
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

/// A single non-negative integer that fits a `u16`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerConverter;

impl PropertyConverter for IntegerConverter {
    type Value = u16;

    fn convert(&self, raw: &str) -> Option<u16> {
        parse_u16(raw.trim())
    }
}

fn parse_u16(token: &str) -> Option<u16> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// `"2"` is a uniform gutter, `"1 2"` is horizontal 1, vertical 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct GutterConverter;

impl PropertyConverter for GutterConverter {
    type Value = Gutter;

    fn convert(&self, raw: &str) -> Option<Gutter> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        match tokens.as_slice() {
            [value] => parse_u16(value).map(Gutter::uniform),
            [horizontal, vertical] => Some(Gutter::new(parse_u16(horizontal)?, parse_u16(vertical)?)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl PropertyConverter for ColorConverter {
    type Value = Color;

    fn convert(&self, raw: &str) -> Option<Color> {
        raw.parse().ok()
    }
}

/// Whitespace-separated modifier keywords, e.g. `"bold underline"`.
///
/// A keyword prefixed with `not-` removes the modifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierConverter;

impl PropertyConverter for ModifierConverter {
    type Value = Style;

    fn convert(&self, raw: &str) -> Option<Style> {
        let mut style = Style::EMPTY;
        let mut seen = false;
        for keyword in raw.split_whitespace() {
            seen = true;
            style = match keyword.strip_prefix("not-") {
                Some(negated) => style.remove_modifier(Modifier::from_keyword(negated)?),
                None => style.add_modifier(Modifier::from_keyword(keyword)?),
            };
        }
        seen.then_some(style)
    }
}

// ---------------------------------------------------------------------------
// Constraint
// ---------------------------------------------------------------------------

/// Layout constraint text.
///
/// | text | constraint |
/// |---|---|
/// | `5` | `Length(5)` |
/// | `40%` | `Percentage(40)` |
/// | `1/3` | `Ratio(1, 3)` |
/// | `fill`, `fill(2)` | `Fill(1)`, `Fill(2)` |
/// | `min(3)`, `max(8)` | `Min(3)`, `Max(8)` |
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintConverter;

impl PropertyConverter for ConstraintConverter {
    type Value = Constraint;

    fn convert(&self, raw: &str) -> Option<Constraint> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("fill") {
            return Some(Constraint::Fill(1));
        }
        if let Some(percent) = raw.strip_suffix('%') {
            let value = parse_u16(percent.trim())?;
            return (value <= 100).then_some(Constraint::Percentage(value));
        }
        if let Some((num, den)) = raw.split_once('/') {
            let num: u32 = parse_u16(num.trim())?.into();
            let den: u32 = parse_u16(den.trim())?.into();
            return (den > 0).then_some(Constraint::Ratio(num, den));
        }
        if let Some((name, rest)) = raw.split_once('(') {
            let arg = parse_u16(rest.strip_suffix(')')?.trim())?;
            return match name.trim().to_ascii_lowercase().as_str() {
                "fill" => Some(Constraint::Fill(arg)),
                "min" => Some(Constraint::Min(arg)),
                "max" => Some(Constraint::Max(arg)),
                "length" => Some(Constraint::Length(arg)),
                _ => None,
            };
        }
        parse_u16(raw).map(Constraint::Length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn gutter_single_value_is_uniform() {
        assert_eq!(GutterConverter.convert("2"), Some(Gutter::new(2, 2)));
    }

    #[test]
    fn gutter_two_values_are_horizontal_vertical() {
        assert_eq!(GutterConverter.convert("1 2"), Some(Gutter::new(1, 2)));
        assert_eq!(GutterConverter.convert("  3\t0 "), Some(Gutter::new(3, 0)));
    }

    #[test]
    fn gutter_rejects_malformed_input() {
        assert_eq!(GutterConverter.convert("-1"), None);
        assert_eq!(GutterConverter.convert("1 2 3"), None);
        assert_eq!(GutterConverter.convert("abc"), None);
        assert_eq!(GutterConverter.convert(""), None);
        assert_eq!(GutterConverter.convert("1 -2"), None);
        assert_eq!(GutterConverter.convert("70000"), None);
    }

    #[test]
    fn integer_is_non_negative() {
        assert_eq!(IntegerConverter.convert(" 4 "), Some(4));
        assert_eq!(IntegerConverter.convert("-4"), None);
        assert_eq!(IntegerConverter.convert("4.5"), None);
        assert_eq!(IntegerConverter.convert("+4"), None);
    }

    #[test]
    fn color_converter_delegates_to_parser() {
        assert_eq!(ColorConverter.convert("cyan"), Some(Color::Cyan));
        assert_eq!(ColorConverter.convert("nope"), None);
    }

    #[test]
    fn modifier_keywords_build_style() {
        let style = ModifierConverter.convert("bold underline").unwrap();
        assert!(style.effective_modifiers().contains(Modifier::BOLD));
        assert!(style.effective_modifiers().contains(Modifier::UNDERLINED));

        let removed = ModifierConverter.convert("not-bold").unwrap();
        assert!(removed.sub_modifier.contains(Modifier::BOLD));

        assert_eq!(ModifierConverter.convert("bold wobbly"), None);
        assert_eq!(ModifierConverter.convert("   "), None);
    }

    #[test]
    fn constraint_forms() {
        assert_eq!(ConstraintConverter.convert("5"), Some(Constraint::Length(5)));
        assert_eq!(ConstraintConverter.convert("40%"), Some(Constraint::Percentage(40)));
        assert_eq!(ConstraintConverter.convert("1/3"), Some(Constraint::Ratio(1, 3)));
        assert_eq!(ConstraintConverter.convert("fill"), Some(Constraint::Fill(1)));
        assert_eq!(ConstraintConverter.convert("fill(2)"), Some(Constraint::Fill(2)));
        assert_eq!(ConstraintConverter.convert("min(3)"), Some(Constraint::Min(3)));
        assert_eq!(ConstraintConverter.convert("max(8)"), Some(Constraint::Max(8)));
    }

    #[test]
    fn constraint_rejects_nonsense() {
        assert_eq!(ConstraintConverter.convert("150%"), None);
        assert_eq!(ConstraintConverter.convert("1/0"), None);
        assert_eq!(ConstraintConverter.convert("grow(2)"), None);
        assert_eq!(ConstraintConverter.convert("min(3"), None);
        assert_eq!(ConstraintConverter.convert("wide"), None);
    }
}
