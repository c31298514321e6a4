//! Text: a styled, optionally wrapping run of text.

use crate::error::Result;
use crate::geometry::Rect;
use crate::render::Frame;
use crate::style::{Style, StyleAttributes, StyleResolver};
use crate::widget::Widget;
use crate::widgets::Paragraph;

use super::context::RenderContext;
use super::props::{ElementProps, Styled};
use super::traits::Element;

/// Multi-line text. Sizes are measured in display cells.
pub struct Text {
    props: ElementProps,
    paragraph: Paragraph,
    wrap: bool,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            props: ElementProps::new(),
            paragraph: Paragraph::new(content),
            wrap: false,
        }
    }

    /// Word-wrap to the rendered width (builder).
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.paragraph = self.paragraph.wrap(wrap);
        self.wrap = wrap;
        self
    }

    pub fn content(&self) -> &str {
        self.paragraph.content()
    }
}

impl Styled for Text {
    fn props(&self) -> &ElementProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut ElementProps {
        &mut self.props
    }
}

impl Element for Text {
    fn type_name(&self) -> &'static str {
        "Text"
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &mut RenderContext<'_>) -> Result<()> {
        if area.is_empty() {
            return Ok(());
        }
        self.props.record_area(area);

        let resolved = StyleResolver::new(&*self, ctx).resolve(self.props.style.as_ref(), None, Style::EMPTY);
        let style = ctx.current_style().patch(resolved);
        frame.render_widget(&self.paragraph, area, &style);
        Ok(())
    }

    fn preferred_width(&self) -> u16 {
        self.paragraph.preferred_width()
    }

    fn preferred_height(&self) -> u16 {
        self.paragraph.preferred_height()
    }

    fn preferred_height_for(&self, available_width: u16, _ctx: &RenderContext<'_>) -> u16 {
        if self.wrap {
            self.paragraph.line_count(available_width)
        } else {
            self.preferred_height()
        }
    }

    fn style_attributes(&self) -> StyleAttributes {
        self.props.attributes.clone()
    }

    crate::element_props!(props);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::CompiledStylesheet;
    use crate::element::{ElementPath, Stack};
    use crate::style::Color;
    use crate::testing::render_element_to_string;

    #[test]
    fn renders_content() {
        let mut text = Text::new("hello\nworld");
        assert_eq!(render_element_to_string(&mut text, 8, 3).unwrap(), "hello\nworld");
        assert_eq!(text.rendered_area(), Some(Rect::new(0, 0, 8, 3)));
    }

    #[test]
    fn empty_area_leaves_rendered_area_unset() {
        let mut text = Text::new("x");
        let mut frame = Frame::new(2, 2);
        text.render(&mut frame, Rect::new(0, 0, 2, 0), &mut RenderContext::new()).unwrap();
        assert_eq!(text.rendered_area(), None);
    }

    #[test]
    fn sizes_in_display_cells() {
        let text = Text::new("日本語\nab");
        assert_eq!(text.preferred_width(), 6);
        assert_eq!(text.preferred_height(), 2);
    }

    #[test]
    fn wrapped_height_depends_on_width() {
        let ctx = RenderContext::new();
        let text = Text::new("one two three four").wrap(true);
        assert_eq!(text.preferred_height_for(14, &ctx), 2);
        assert_eq!(text.preferred_height_for(100, &ctx), 1);
        let unwrapped = Text::new("one two three four");
        assert_eq!(unwrapped.preferred_height_for(9, &ctx), 1);
    }

    #[test]
    fn explicit_style_beats_stylesheet() {
        let sheet = CompiledStylesheet::parse("Text { color: red; }").unwrap();
        let mut frame = Frame::new(3, 2);
        let mut ctx = RenderContext::with_engine(&sheet);
        let mut plain = Text::new("a");
        let mut blue = Text::new("b").with_style(Style::new().fg(Color::Blue));
        plain.render(&mut frame, Rect::new(0, 0, 3, 1), &mut ctx).unwrap();
        blue.render(&mut frame, Rect::new(0, 1, 3, 1), &mut ctx).unwrap();

        let buffer = frame.buffer();
        assert_eq!(buffer.get(0, 0).and_then(|c| c.style.fg), Some(Color::Red));
        assert_eq!(buffer.get(0, 1).and_then(|c| c.style.fg), Some(Color::Blue));
    }

    #[test]
    fn focus_pseudo_class_applies_to_focused_text() {
        let sheet = CompiledStylesheet::parse("Text:focus { text-style: reverse; }").unwrap();
        let mut column = Stack::column()
            .child(Text::new("a").focusable(true))
            .child(Text::new("b").focusable(true));
        let mut frame = Frame::new(1, 2);
        let mut ctx = RenderContext::with_engine(&sheet).with_focus(Some(ElementPath::from(vec![1])));
        column.render(&mut frame, Rect::new(0, 0, 1, 2), &mut ctx).unwrap();

        let reversed = |y| {
            frame
                .buffer()
                .get(0, y)
                .is_some_and(|c| c.style.effective_modifiers().contains(crate::style::Modifier::REVERSED))
        };
        assert!(!reversed(0));
        assert!(reversed(1));
    }

    #[test]
    fn inherits_container_style() {
        let sheet = CompiledStylesheet::parse("Column { background: blue; } Text { color: red; }").unwrap();
        let mut column = Stack::column().child(Text::new("a"));
        let mut frame = Frame::new(2, 1);
        let mut ctx = RenderContext::with_engine(&sheet);
        column.render(&mut frame, Rect::new(0, 0, 2, 1), &mut ctx).unwrap();

        let cell = frame.buffer().get(0, 0).copied().unwrap();
        assert_eq!(cell.ch, 'a');
        assert_eq!(cell.style.fg, Some(Color::Red));
        assert_eq!(cell.style.bg, Some(Color::Blue));
    }
}
