//! Wraps any leaf [`Widget`] as an element.
//!
//! The widget supplies drawing and natural size. The wrapper adds identity,
//! classes, constraint, focus and handlers through [`ElementProps`], and its
//! CSS type name is the widget's own type name.

use std::fmt;

use crate::error::{Result, ToolkitError};
use crate::geometry::Rect;
use crate::render::Frame;
use crate::style::{Style, StyleAttributes, StyleResolver};
use crate::widget::Widget;

use super::context::RenderContext;
use super::props::{ElementProps, Styled};
use super::traits::Element;

pub struct GenericWidgetElement {
    props: ElementProps,
    widget: Box<dyn Widget>,
}

impl GenericWidgetElement {
    pub fn new(widget: impl Widget + 'static) -> Self {
        Self {
            props: ElementProps::new(),
            widget: Box::new(widget),
        }
    }

    /// Wrap an already boxed widget.
    ///
    /// # Errors
    ///
    /// [`ToolkitError::InvalidArgument`] when `widget` is `None`.
    pub fn try_from_boxed(widget: Option<Box<dyn Widget>>) -> Result<Self> {
        let widget = widget.ok_or_else(|| ToolkitError::InvalidArgument("widget is required".into()))?;
        Ok(Self {
            props: ElementProps::new(),
            widget,
        })
    }

    pub fn widget(&self) -> &dyn Widget {
        &*self.widget
    }
}

impl TryFrom<Option<Box<dyn Widget>>> for GenericWidgetElement {
    type Error = ToolkitError;

    fn try_from(widget: Option<Box<dyn Widget>>) -> Result<Self> {
        Self::try_from_boxed(widget)
    }
}

impl fmt::Debug for GenericWidgetElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericWidgetElement")
            .field("widget", &self.widget.widget_type())
            .field("props", &self.props)
            .finish()
    }
}

impl Styled for GenericWidgetElement {
    fn props(&self) -> &ElementProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut ElementProps {
        &mut self.props
    }
}

impl Element for GenericWidgetElement {
    fn type_name(&self) -> &'static str {
        self.widget.widget_type()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &mut RenderContext<'_>) -> Result<()> {
        if area.is_empty() {
            return Ok(());
        }
        self.props.record_area(area);

        let resolved = StyleResolver::new(&*self, ctx).resolve(self.props.style.as_ref(), None, Style::EMPTY);
        frame.render_widget(&*self.widget, area, &ctx.current_style().patch(resolved));
        Ok(())
    }

    fn preferred_width(&self) -> u16 {
        self.widget.preferred_width()
    }

    fn preferred_height(&self) -> u16 {
        self.widget.preferred_height()
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
    use crate::style::Color;
    use crate::testing::render_element_to_string;
    use crate::widgets::Paragraph;

    #[test]
    fn absent_widget_fails_construction() {
        let err = GenericWidgetElement::try_from_boxed(None).unwrap_err();
        assert!(matches!(err, ToolkitError::InvalidArgument(_)));

        let err = GenericWidgetElement::try_from(None::<Box<dyn Widget>>).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument: widget is required");
    }

    #[test]
    fn boxed_widget_is_accepted() {
        let boxed: Box<dyn Widget> = Box::new(Paragraph::new("ok"));
        let element = GenericWidgetElement::try_from_boxed(Some(boxed)).unwrap();
        assert_eq!(element.type_name(), "Paragraph");
        assert_eq!(element.preferred_width(), 2);
    }

    #[test]
    fn renders_the_widget() {
        let mut element = GenericWidgetElement::new(Paragraph::new("hello"));
        assert_eq!(render_element_to_string(&mut element, 10, 1).unwrap(), "hello");
        assert_eq!(element.rendered_area(), Some(Rect::new(0, 0, 10, 1)));
    }

    #[test]
    fn type_selector_uses_widget_type() {
        let sheet = CompiledStylesheet::parse("Paragraph.note { color: magenta; }").unwrap();
        let mut element = GenericWidgetElement::new(Paragraph::new("n")).with_class("note");
        let mut frame = Frame::new(1, 1);
        let mut ctx = RenderContext::with_engine(&sheet);
        element.render(&mut frame, Rect::new(0, 0, 1, 1), &mut ctx).unwrap();
        assert_eq!(frame.buffer().get(0, 0).and_then(|c| c.style.fg), Some(Color::Magenta));
    }
}
