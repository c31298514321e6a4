//! The `Element` trait: the capability contract of every tree node.
//!
//! Elements are retained: they own their children and survive across frames.
//! Each frame the root is rendered into a [`Frame`] with a fresh
//! [`RenderContext`], and every container registers where its children landed.
//! Every method except [`type_name`](Element::type_name) and
//! [`render`](Element::render) has a neutral default, so leaf elements only
//! override what they actually support.

use crate::error::Result;
use crate::event::handler::{EventResult, KeyHandler, MouseHandler};
use crate::event::input::{KeyEvent, MouseEvent};
use crate::geometry::Rect;
use crate::layout::Constraint;
use crate::render::Frame;
use crate::style::{StyleAttributes, StyleSubject};

use super::context::RenderContext;

/// A node of the element tree.
///
/// Object-safe: containers hold children as `Box<dyn Element>`.
pub trait Element {
    /// The CSS type name (e.g. `"Column"`, `"Text"`).
    fn type_name(&self) -> &'static str;

    /// Draw into `area` of `frame`.
    ///
    /// Must be a no-op when `area` is empty. Containers render each child
    /// through `ctx` and register the child's rect once it is drawn.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &mut RenderContext<'_>) -> Result<()>;

    /// Natural width in cells; 0 means no preference.
    fn preferred_width(&self) -> u16 {
        0
    }

    /// Natural height in cells; 0 means no preference.
    fn preferred_height(&self) -> u16 {
        0
    }

    /// Natural height when laid out `available_width` cells wide.
    fn preferred_height_for(&self, available_width: u16, ctx: &RenderContext<'_>) -> u16 {
        let _ = (available_width, ctx);
        self.preferred_height()
    }

    /// Sizing hint for the enclosing container. `None` means fill.
    fn constraint(&self) -> Option<Constraint> {
        None
    }

    fn id(&self) -> Option<String> {
        None
    }

    fn classes(&self) -> Vec<String> {
        Vec::new()
    }

    /// Attributes visible to `[name=value]` selectors.
    fn style_attributes(&self) -> StyleAttributes {
        StyleAttributes::new()
    }

    fn is_focusable(&self) -> bool {
        false
    }

    fn is_draggable(&self) -> bool {
        false
    }

    fn key_event_handler(&self) -> Option<KeyHandler> {
        None
    }

    fn mouse_event_handler(&self) -> Option<MouseHandler> {
        None
    }

    /// Handle a routed key event. `focused` is true only for the element
    /// holding focus; ancestors see the same event with `focused == false`.
    fn handle_key_event(&mut self, event: &KeyEvent, focused: bool) -> EventResult {
        let _ = (event, focused);
        EventResult::Unhandled
    }

    fn handle_mouse_event(&mut self, event: &MouseEvent) -> EventResult {
        let _ = event;
        EventResult::Unhandled
    }

    /// The area of the last non-empty render, if any.
    fn rendered_area(&self) -> Option<Rect> {
        None
    }

    /// Child `index` as registered by this element, for event routing.
    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Element> {
        let _ = index;
        None
    }

    /// Everything selectors can see about this element.
    fn style_subject(&self) -> StyleSubject {
        StyleSubject {
            type_name: self.type_name().to_owned(),
            id: self.id(),
            classes: self.classes(),
            attributes: self.style_attributes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::input::Key;

    struct Bare;

    impl Element for Bare {
        fn type_name(&self) -> &'static str {
            "Bare"
        }

        fn render(&mut self, _: &mut Frame, _: Rect, _: &mut RenderContext<'_>) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn defaults_are_neutral() {
        let mut bare = Bare;
        let ctx = RenderContext::new();
        assert_eq!(bare.preferred_width(), 0);
        assert_eq!(bare.preferred_height(), 0);
        assert_eq!(bare.preferred_height_for(40, &ctx), 0);
        assert_eq!(bare.constraint(), None);
        assert_eq!(bare.id(), None);
        assert!(bare.classes().is_empty());
        assert!(bare.style_attributes().is_empty());
        assert!(!bare.is_focusable());
        assert!(!bare.is_draggable());
        assert!(bare.key_event_handler().is_none());
        assert!(bare.mouse_event_handler().is_none());
        assert_eq!(
            bare.handle_key_event(&KeyEvent::plain(Key::Enter), true),
            EventResult::Unhandled
        );
        assert_eq!(bare.rendered_area(), None);
        assert!(bare.child_mut(0).is_none());
    }

    #[test]
    fn style_subject_collects_identity() {
        let subject = Bare.style_subject();
        assert_eq!(subject.type_name, "Bare");
        assert_eq!(subject.id, None);
    }
}
