//! Block widget: a single-line border with an optional title.

use unicode_width::UnicodeWidthStr;

use crate::geometry::Rect;
use crate::render::strip::Strip;
use crate::style::Style;
use crate::widget::Widget;

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Draws the outline of its area. The interior is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    title: Option<String>,
    title_style: Style,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Style patched over the border style for the title text.
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }
}

impl Widget for Block {
    fn widget_type(&self) -> &'static str {
        "Block"
    }

    fn render(&self, area: Rect, style: &Style) -> Vec<Strip> {
        if area.width < 2 || area.height < 2 {
            return Vec::new();
        }
        let inner_width = (area.width - 2) as usize;

        let mut top = Strip::new(area.y, area.x);
        top.push(TOP_LEFT, *style);
        if let Some(title) = &self.title {
            top.push_str_clipped(title, style.patch(self.title_style), inner_width);
        }
        while top.cells.len() < inner_width + 1 {
            top.push(HORIZONTAL, *style);
        }
        top.push(TOP_RIGHT, *style);

        let mut strips = vec![top];
        for y in area.y + 1..area.bottom() - 1 {
            for x in [area.x, area.right() - 1] {
                let mut side = Strip::new(y, x);
                side.push(VERTICAL, *style);
                strips.push(side);
            }
        }

        let mut bottom = Strip::new(area.bottom() - 1, area.x);
        bottom.push(BOTTOM_LEFT, *style);
        for _ in 0..inner_width {
            bottom.push(HORIZONTAL, *style);
        }
        bottom.push(BOTTOM_RIGHT, *style);
        strips.push(bottom);
        strips
    }

    fn preferred_width(&self) -> u16 {
        let title = self.title.as_deref().map_or(0, |t| t.width());
        u16::try_from(title + 2).unwrap_or(u16::MAX)
    }

    fn preferred_height(&self) -> u16 {
        2
    }
}
