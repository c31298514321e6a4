//! Widget trait: a stateless drawable.
//!
//! Widgets know nothing about the element tree, the cascade, or input. They
//! take an area and an already-resolved style and produce [`Strip`]s. The
//! element layer wraps them (see `GenericWidgetElement`) to give them ids,
//! classes, constraints and event handlers.

use crate::geometry::Rect;
use crate::render::strip::Strip;
use crate::style::Style;

/// Core trait implemented by drawable widgets.
///
/// Object-safe: the element layer stores widgets as `Box<dyn Widget>`.
pub trait Widget {
    /// The CSS type name (e.g. `"Paragraph"`), used for type selectors.
    fn widget_type(&self) -> &'static str;

    /// Render into strips covering at most `area`.
    ///
    /// Strips outside `area` are clipped by the buffer, but well-behaved
    /// widgets stay inside it.
    fn render(&self, area: Rect, style: &Style) -> Vec<Strip>;

    /// Natural width in cells, or 0 when the widget has no preference.
    fn preferred_width(&self) -> u16 {
        0
    }

    /// Natural height in cells, or 0 when the widget has no preference.
    fn preferred_height(&self) -> u16 {
        0
    }
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn widget_type(&self) -> &'static str {
        (**self).widget_type()
    }

    fn render(&self, area: Rect, style: &Style) -> Vec<Strip> {
        (**self).render(area, style)
    }

    fn preferred_width(&self) -> u16 {
        (**self).preferred_width()
    }

    fn preferred_height(&self) -> u16 {
        (**self).preferred_height()
    }
}
