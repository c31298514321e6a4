//! Per-instance element attributes and the builder methods that set them.
//!
//! Concrete elements embed an [`ElementProps`], implement [`Styled`] to get
//! the builder methods, and call [`element_props!`](crate::element_props)
//! inside their `Element` impl to forward the trait's identity, focus and
//! handler methods to it.

use std::fmt;

use crate::event::handler::{EventResult, HandlerDebug, KeyHandler, MouseHandler};
use crate::event::input::{KeyEvent, MouseEvent};
use crate::geometry::Rect;
use crate::layout::Constraint;
use crate::style::{Style, StyleAttributes};

/// Attributes every element carries.
#[derive(Clone, Default)]
pub struct ElementProps {
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Explicit style. `None` and `Some(Style::EMPTY)` both defer to the cascade.
    pub style: Option<Style>,
    pub constraint: Option<Constraint>,
    pub focusable: bool,
    pub draggable: bool,
    /// Base attributes for `[name=value]` selectors.
    pub attributes: StyleAttributes,
    pub key_handler: Option<KeyHandler>,
    pub mouse_handler: Option<MouseHandler>,
    pub rendered_area: Option<Rect>,
}

impl ElementProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_area(&mut self, area: Rect) {
        self.rendered_area = Some(area);
    }

    /// Run the key handler, but only for the focused element.
    pub fn handle_key(&self, event: &KeyEvent, focused: bool) -> EventResult {
        match &self.key_handler {
            Some(handler) if focused => handler.handle_key(event),
            _ => EventResult::Unhandled,
        }
    }

    pub fn handle_mouse(&self, event: &MouseEvent) -> EventResult {
        match &self.mouse_handler {
            Some(handler) => handler.handle_mouse(event),
            None => EventResult::Unhandled,
        }
    }
}

impl fmt::Debug for ElementProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementProps")
            .field("id", &self.id)
            .field("classes", &self.classes)
            .field("style", &self.style)
            .field("constraint", &self.constraint)
            .field("focusable", &self.focusable)
            .field("draggable", &self.draggable)
            .field("attributes", &self.attributes)
            .field("key_handler", &HandlerDebug(&self.key_handler))
            .field("mouse_handler", &HandlerDebug(&self.mouse_handler))
            .field("rendered_area", &self.rendered_area)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Styled
// ---------------------------------------------------------------------------

/// Builder methods shared by every element that embeds [`ElementProps`].
pub trait Styled: Sized {
    fn props(&self) -> &ElementProps;

    fn props_mut(&mut self) -> &mut ElementProps;

    fn with_id(mut self, id: impl Into<String>) -> Self {
        self.props_mut().id = Some(id.into());
        self
    }

    /// Add a CSS class. Duplicates are ignored.
    fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        let classes = &mut self.props_mut().classes;
        if !classes.contains(&class) {
            classes.push(class);
        }
        self
    }

    fn with_style(mut self, style: Style) -> Self {
        self.props_mut().style = Some(style);
        self
    }

    fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.props_mut().constraint = Some(constraint);
        self
    }

    fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.props_mut().attributes.insert(name, value);
        self
    }

    fn focusable(mut self, focusable: bool) -> Self {
        self.props_mut().focusable = focusable;
        self
    }

    fn draggable(mut self, draggable: bool) -> Self {
        self.props_mut().draggable = draggable;
        self
    }

    /// Attach a key handler. It only fires while the element is focused.
    fn on_key(mut self, handler: KeyHandler) -> Self {
        self.props_mut().key_handler = Some(handler);
        self
    }

    fn on_mouse(mut self, handler: MouseHandler) -> Self {
        self.props_mut().mouse_handler = Some(handler);
        self
    }
}

/// Forward the identity, focus and handler methods of `Element` to an
/// `ElementProps` field.
///
/// `style_attributes` is left out so elements can add their own attributes.
#[macro_export]
macro_rules! element_props {
    ($field:ident) => {
        fn constraint(&self) -> Option<$crate::layout::Constraint> {
            self.$field.constraint
        }

        fn id(&self) -> Option<String> {
            self.$field.id.clone()
        }

        fn classes(&self) -> Vec<String> {
            self.$field.classes.clone()
        }

        fn is_focusable(&self) -> bool {
            self.$field.focusable
        }

        fn is_draggable(&self) -> bool {
            self.$field.draggable
        }

        fn key_event_handler(&self) -> Option<$crate::event::KeyHandler> {
            self.$field.key_handler.clone()
        }

        fn mouse_event_handler(&self) -> Option<$crate::event::MouseHandler> {
            self.$field.mouse_handler.clone()
        }

        fn handle_key_event(
            &mut self,
            event: &$crate::event::KeyEvent,
            focused: bool,
        ) -> $crate::event::EventResult {
            self.$field.handle_key(event, focused)
        }

        fn handle_mouse_event(&mut self, event: &$crate::event::MouseEvent) -> $crate::event::EventResult {
            self.$field.handle_mouse(event)
        }

        fn rendered_area(&self) -> Option<$crate::geometry::Rect> {
            self.$field.rendered_area
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::handler::{key_handler, mouse_handler};
    use crate::event::input::{Key, MouseAction};

    #[derive(Default)]
    struct Dummy {
        props: ElementProps,
    }

    impl Styled for Dummy {
        fn props(&self) -> &ElementProps {
            &self.props
        }

        fn props_mut(&mut self) -> &mut ElementProps {
            &mut self.props
        }
    }

    #[test]
    fn builder_sets_props() {
        let dummy = Dummy::default()
            .with_id("save")
            .with_class("primary")
            .with_class("primary")
            .with_constraint(Constraint::Length(3))
            .with_attribute("kind", "button")
            .focusable(true);
        let props = dummy.props();
        assert_eq!(props.id.as_deref(), Some("save"));
        assert_eq!(props.classes, vec!["primary"]);
        assert_eq!(props.constraint, Some(Constraint::Length(3)));
        assert_eq!(props.attributes.get("kind"), Some("button"));
        assert!(props.focusable);
        assert!(!props.draggable);
    }

    #[test]
    fn key_handler_requires_focus() {
        let props = Dummy::default()
            .on_key(key_handler(|_: &KeyEvent| EventResult::Handled))
            .props
            .clone();
        let enter = KeyEvent::plain(Key::Enter);
        assert_eq!(props.handle_key(&enter, false), EventResult::Unhandled);
        assert_eq!(props.handle_key(&enter, true), EventResult::Handled);
    }

    #[test]
    fn mouse_handler_always_fires() {
        let props = Dummy::default()
            .on_mouse(mouse_handler(|_: &MouseEvent| EventResult::Handled))
            .props
            .clone();
        let moved = MouseEvent::new(MouseAction::Moved, 0, 0);
        assert_eq!(props.handle_mouse(&moved), EventResult::Handled);
        assert_eq!(ElementProps::new().handle_mouse(&moved), EventResult::Unhandled);
    }

    #[test]
    fn debug_hides_handlers() {
        let props = Dummy::default()
            .on_key(key_handler(|_: &KeyEvent| EventResult::Handled))
            .props
            .clone();
        let rendered = format!("{props:?}");
        assert!(rendered.contains("key_handler: Some(<handler>)"));
        assert!(rendered.contains("mouse_handler: None"));
    }
}
