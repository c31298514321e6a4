//! Frame: the drawing surface handed to elements during a render pass.
//!
//! A thin wrapper over [`Buffer`] so that elements draw through one narrow
//! interface: widgets, style patches and raw strings.

use crate::geometry::Rect;
use crate::style::Style;
use crate::widget::Widget;

use super::buffer::Buffer;

pub struct Frame {
    buffer: Buffer,
}

impl Frame {
    /// A blank frame of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self { buffer: Buffer::new(width, height) }
    }

    pub fn from_buffer(buffer: Buffer) -> Self {
        Self { buffer }
    }

    /// The whole frame as a rect at the origin.
    pub fn area(&self) -> Rect {
        self.buffer.area()
    }

    /// Draw `widget` with an already resolved `style`, clipped to `area`.
    pub fn render_widget(&mut self, widget: &dyn Widget, area: Rect, style: &Style) {
        if area.is_empty() {
            return;
        }
        let strips = widget.render(area, style);
        self.buffer.place_strips(&strips, area);
    }

    pub fn set_style(&mut self, area: Rect, style: Style) {
        self.buffer.set_style(area, style);
    }

    pub fn set_string(&mut self, x: i32, y: i32, text: &str, style: Style) {
        self.buffer.set_string(x, y, text, style);
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    pub fn into_buffer(self) -> Buffer {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strip::Strip;
    use crate::style::Color;

    struct Fill(char);

    impl Widget for Fill {
        fn widget_type(&self) -> &'static str {
            "Fill"
        }

        fn render(&self, area: Rect, style: &Style) -> Vec<Strip> {
            // Deliberately one row too many and one column too wide.
            (area.y..=area.bottom())
                .map(|y| {
                    let mut strip = Strip::new(y, area.x);
                    for _ in 0..=area.width {
                        strip.push(self.0, *style);
                    }
                    strip
                })
                .collect()
        }
    }

    #[test]
    fn render_widget_clips_to_area() {
        let mut frame = Frame::new(5, 4);
        frame.render_widget(&Fill('#'), Rect::new(1, 1, 2, 2), &Style::EMPTY);
        let buffer = frame.into_buffer();
        assert_eq!(buffer.row_text(0).as_deref(), Some("     "));
        assert_eq!(buffer.row_text(1).as_deref(), Some(" ##  "));
        assert_eq!(buffer.row_text(2).as_deref(), Some(" ##  "));
        assert_eq!(buffer.row_text(3).as_deref(), Some("     "));
    }

    #[test]
    fn render_widget_into_empty_area_is_noop() {
        let mut frame = Frame::new(3, 1);
        frame.render_widget(&Fill('#'), Rect::new(0, 0, 0, 1), &Style::EMPTY);
        assert_eq!(frame.buffer().row_text(0).as_deref(), Some("   "));
    }

    #[test]
    fn render_widget_passes_style_through() {
        let red = Style::new().fg(Color::Red);
        let mut frame = Frame::new(2, 1);
        frame.render_widget(&Fill('x'), frame.area(), &red);
        assert_eq!(frame.buffer().get(1, 0).map(|c| c.style), Some(red));
    }
}
