//! Free functions for building trees without naming every type.
//!
//! ```ignore
//! use gilt_toolkit::element::dsl::*;
//!
//! let tree = column([
//!     boxed(text("Title").with_class("title")),
//!     boxed(panel(text("body")).title("Main")),
//! ])
//! .spacing(1);
//! ```

use crate::widget::Widget;

use super::generic::GenericWidgetElement;
use super::lazy::Lazy;
use super::panel::Panel;
use super::stack::Stack;
use super::text::Text;
use super::traits::Element;

pub use super::props::Styled;

/// Erase an element's type for use in a child list.
pub fn boxed(element: impl Element + 'static) -> Box<dyn Element> {
    Box::new(element)
}

pub fn column(children: impl IntoIterator<Item = Box<dyn Element>>) -> Stack {
    Stack::column().children(children)
}

pub fn row(children: impl IntoIterator<Item = Box<dyn Element>>) -> Stack {
    Stack::row().children(children)
}

pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

/// A subtree rebuilt from `producer` on every render.
pub fn lazy<E: Element + 'static>(producer: impl Fn() -> E + 'static) -> Lazy {
    Lazy::from_fn(producer)
}

pub fn widget(widget: impl Widget + 'static) -> GenericWidgetElement {
    GenericWidgetElement::new(widget)
}

pub fn panel(child: impl Element + 'static) -> Panel {
    Panel::new().child(child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render_element_to_string;
    use crate::widgets::Paragraph;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn builds_a_tree() {
        let count = Rc::new(Cell::new(3));
        let shown = Rc::clone(&count);
        let mut tree = column([
            boxed(text("Title")),
            boxed(row([boxed(text("a")), boxed(widget(Paragraph::new("b")))])),
            boxed(lazy(move || text(format!("n={}", shown.get())))),
        ]);
        assert_eq!(tree.len(), 3);
        assert_eq!(render_element_to_string(&mut tree, 6, 3).unwrap(), "Title\na  b\nn=3");

        count.set(4);
        assert_eq!(render_element_to_string(&mut tree, 6, 3).unwrap(), "Title\na  b\nn=4");
    }

    #[test]
    fn panel_wraps_child() {
        let mut boxed_text = panel(text("x")).title("T");
        assert_eq!(render_element_to_string(&mut boxed_text, 3, 3).unwrap(), "┌T┐\n│x│\n└─┘");
    }
}
