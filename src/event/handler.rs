//! Event handler objects and the handled/unhandled result.
//!
//! Handlers are shared (`Rc`) so an element can hand out its handler through
//! `key_event_handler()` while keeping it attached. Any closure of the right
//! shape is a handler.

use std::fmt;
use std::rc::Rc;

use super::input::{KeyEvent, MouseEvent};

/// Whether an event was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventResult {
    Handled,
    #[default]
    Unhandled,
}

impl EventResult {
    pub fn is_handled(self) -> bool {
        self == EventResult::Handled
    }

    /// `self` if handled, otherwise the result of `f`.
    pub fn or_else(self, f: impl FnOnce() -> EventResult) -> EventResult {
        match self {
            EventResult::Handled => EventResult::Handled,
            EventResult::Unhandled => f(),
        }
    }
}

impl From<bool> for EventResult {
    fn from(handled: bool) -> Self {
        if handled {
            EventResult::Handled
        } else {
            EventResult::Unhandled
        }
    }
}

pub trait KeyEventHandler {
    fn handle_key(&self, event: &KeyEvent) -> EventResult;
}

pub trait MouseEventHandler {
    fn handle_mouse(&self, event: &MouseEvent) -> EventResult;
}

impl<F: Fn(&KeyEvent) -> EventResult> KeyEventHandler for F {
    fn handle_key(&self, event: &KeyEvent) -> EventResult {
        self(event)
    }
}

impl<F: Fn(&MouseEvent) -> EventResult> MouseEventHandler for F {
    fn handle_mouse(&self, event: &MouseEvent) -> EventResult {
        self(event)
    }
}

pub type KeyHandler = Rc<dyn KeyEventHandler>;
pub type MouseHandler = Rc<dyn MouseEventHandler>;

/// Wrap a closure as a [`KeyHandler`].
pub fn key_handler(f: impl Fn(&KeyEvent) -> EventResult + 'static) -> KeyHandler {
    Rc::new(f)
}

/// Wrap a closure as a [`MouseHandler`].
pub fn mouse_handler(f: impl Fn(&MouseEvent) -> EventResult + 'static) -> MouseHandler {
    Rc::new(f)
}

/// Debug placeholder for handler fields.
pub(crate) struct HandlerDebug<'a, T: ?Sized>(pub &'a Option<Rc<T>>);

impl<T: ?Sized> fmt::Debug for HandlerDebug<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Some(<handler>)"),
            None => f.write_str("None"),
        }
    }
}
