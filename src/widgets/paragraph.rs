//! Paragraph widget: static text lines.
//!
//! Lines split on `'\n'`. With wrapping on, each line is word-wrapped to the
//! area width by `textwrap`; otherwise long lines are cut at the right edge.
//! Each rendered row is padded to the full area width with the style.

use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

use crate::geometry::Rect;
use crate::render::strip::Strip;
use crate::style::Style;
use crate::widget::Widget;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    content: String,
    wrap: bool,
}

impl Paragraph {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            wrap: false,
        }
    }

    /// Enable word wrapping (builder).
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The lines drawn at `width` cells wide.
    pub fn lines(&self, width: u16) -> Vec<Cow<'_, str>> {
        if self.wrap {
            textwrap::wrap(&self.content, usize::from(width.max(1)))
        } else {
            self.content.split('\n').map(Cow::Borrowed).collect()
        }
    }

    /// Widest line in display cells.
    pub fn max_line_width(&self) -> u16 {
        let widest = self.content.split('\n').map(|line| line.width()).max().unwrap_or(0);
        u16::try_from(widest).unwrap_or(u16::MAX)
    }

    pub fn line_count(&self, width: u16) -> u16 {
        u16::try_from(self.lines(width).len()).unwrap_or(u16::MAX)
    }
}

impl Widget for Paragraph {
    fn widget_type(&self) -> &'static str {
        "Paragraph"
    }

    fn render(&self, area: Rect, style: &Style) -> Vec<Strip> {
        if area.is_empty() {
            return Vec::new();
        }

        let max_width = area.width as usize;
        let width = u16::try_from(area.width).unwrap_or(u16::MAX);
        self.lines(width)
            .iter()
            .take(area.height as usize)
            .enumerate()
            .map(|(i, line)| {
                let mut strip = Strip::new(area.y + i as i32, area.x);
                strip.push_str_clipped(line, *style, max_width);
                strip.fill(area.width, *style);
                strip
            })
            .collect()
    }

    fn preferred_width(&self) -> u16 {
        self.max_line_width()
    }

    fn preferred_height(&self) -> u16 {
        u16::try_from(self.content.split('\n').count()).unwrap_or(u16::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    fn text(strip: &Strip) -> String {
        strip.cells.iter().map(|c| c.ch).collect::<String>().trim_end().to_owned()
    }

    #[test]
    fn render_single_line_fills_width() {
        let strips = Paragraph::new("Hello").render(Rect::new(0, 0, 10, 1), &Style::EMPTY);
        assert_eq!(strips.len(), 1);
        assert_eq!(strips[0].width(), 10);
        assert_eq!(text(&strips[0]), "Hello");
    }

    #[test]
    fn render_truncates_to_width() {
        let strips = Paragraph::new("Hello, world!").render(Rect::new(0, 0, 5, 1), &Style::EMPTY);
        assert_eq!(text(&strips[0]), "Hello");
    }

    #[test]
    fn render_limits_to_height() {
        let strips = Paragraph::new("A\nB\nC\nD").render(Rect::new(0, 0, 3, 2), &Style::EMPTY);
        assert_eq!(strips.len(), 2);
        assert_eq!(text(&strips[1]), "B");
    }

    #[test]
    fn render_offsets_rows() {
        let strips = Paragraph::new("A\nB").render(Rect::new(5, 10, 4, 4), &Style::EMPTY);
        assert_eq!((strips[0].x_offset, strips[0].y), (5, 10));
        assert_eq!(strips[1].y, 11);
    }

    #[test]
    fn render_empty_area() {
        assert!(Paragraph::new("x").render(Rect::new(0, 0, 0, 3), &Style::EMPTY).is_empty());
    }

    #[test]
    fn render_applies_style_to_padding() {
        let red = Style::new().bg(Color::Red);
        let strips = Paragraph::new("Hi").render(Rect::new(0, 0, 4, 1), &red);
        assert_eq!(strips[0].cells[3].style, red);
    }

    #[test]
    fn wrapping_breaks_on_words() {
        let p = Paragraph::new("the quick brown fox").wrap(true);
        assert_eq!(p.lines(10), vec!["the quick", "brown fox"]);
        assert_eq!(p.line_count(10), 2);
        assert_eq!(p.line_count(40), 1);
    }

    #[test]
    fn preferred_size_uses_display_width() {
        let p = Paragraph::new("日本\nab");
        assert_eq!(p.preferred_width(), 4);
        assert_eq!(p.preferred_height(), 2);
    }
}
