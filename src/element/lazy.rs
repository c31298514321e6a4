//! Lazy: an element re-derived from a producer closure on every render.
//!
//! The producer typically captures shared state (`Rc<Cell<_>>` and friends),
//! so each frame rebuilds the subtree from whatever that state is now.
//! Between renders the last produced child is cached so that sizing, identity
//! and event queries see the same element the frame was drawn with.
//!
//! Queries made before the first render run the producer once to fill the
//! cache. Producers should therefore be idempotent and cheap; they may run
//! outside a render pass.

use std::cell::RefCell;

use tracing::trace;

use crate::error::Result;
use crate::event::handler::{EventResult, KeyHandler, MouseHandler};
use crate::event::input::{KeyEvent, MouseEvent};
use crate::geometry::Rect;
use crate::layout::Constraint;
use crate::render::Frame;
use crate::style::StyleAttributes;

use super::context::RenderContext;
use super::traits::Element;

type Producer = Box<dyn Fn() -> Option<Box<dyn Element>>>;

enum LazyState {
    Unevaluated,
    Evaluated(Option<Box<dyn Element>>),
}

/// A deferred element.
///
/// The `Lazy` itself is invisible to selectors and registration: it reports
/// its child's type name, id and classes, and renders the child at its own
/// path.
pub struct Lazy {
    producer: Producer,
    state: RefCell<LazyState>,
}

impl Lazy {
    /// Wrap a producer that may decline to produce anything.
    pub fn new(producer: impl Fn() -> Option<Box<dyn Element>> + 'static) -> Self {
        Self {
            producer: Box::new(producer),
            state: RefCell::new(LazyState::Unevaluated),
        }
    }

    /// Wrap a producer that always yields an element.
    pub fn from_fn<E: Element + 'static>(producer: impl Fn() -> E + 'static) -> Self {
        Self::new(move || Some(Box::new(producer()) as Box<dyn Element>))
    }

    /// Whether a child is cached from a render or an earlier query.
    pub fn is_evaluated(&self) -> bool {
        matches!(*self.state.borrow(), LazyState::Evaluated(_))
    }

    fn produce(producer: &Producer) -> Option<Box<dyn Element>> {
        trace!("lazy producer invoked");
        producer()
    }

    /// Run `f` on the cached child, producing it first if needed.
    fn with_child<R>(&self, default: R, f: impl FnOnce(&dyn Element) -> R) -> R {
        if !self.is_evaluated() {
            let child = Self::produce(&self.producer);
            *self.state.borrow_mut() = LazyState::Evaluated(child);
        }
        match &*self.state.borrow() {
            LazyState::Evaluated(Some(child)) => f(&**child),
            _ => default,
        }
    }

    fn cached_child_mut(&mut self) -> Option<&mut dyn Element> {
        let state = self.state.get_mut();
        if let LazyState::Unevaluated = state {
            *state = LazyState::Evaluated(Self::produce(&self.producer));
        }
        match state {
            LazyState::Evaluated(Some(child)) => Some(&mut **child),
            _ => None,
        }
    }
}

impl Element for Lazy {
    fn type_name(&self) -> &'static str {
        self.with_child("Lazy", |child| child.type_name())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &mut RenderContext<'_>) -> Result<()> {
        *self.state.get_mut() = LazyState::Unevaluated;
        match self.cached_child_mut() {
            Some(child) => ctx.render_child(child, frame, area),
            None => Ok(()),
        }
    }

    fn preferred_width(&self) -> u16 {
        self.with_child(0, |child| child.preferred_width())
    }

    fn preferred_height(&self) -> u16 {
        self.with_child(0, |child| child.preferred_height())
    }

    fn preferred_height_for(&self, available_width: u16, ctx: &RenderContext<'_>) -> u16 {
        self.with_child(0, |child| child.preferred_height_for(available_width, ctx))
    }

    fn constraint(&self) -> Option<Constraint> {
        self.with_child(None, |child| child.constraint())
    }

    fn id(&self) -> Option<String> {
        self.with_child(None, |child| child.id())
    }

    fn classes(&self) -> Vec<String> {
        self.with_child(Vec::new(), |child| child.classes())
    }

    fn style_attributes(&self) -> StyleAttributes {
        self.with_child(StyleAttributes::new(), |child| child.style_attributes())
    }

    fn is_focusable(&self) -> bool {
        self.with_child(false, |child| child.is_focusable())
    }

    fn is_draggable(&self) -> bool {
        self.with_child(false, |child| child.is_draggable())
    }

    fn key_event_handler(&self) -> Option<KeyHandler> {
        self.with_child(None, |child| child.key_event_handler())
    }

    fn mouse_event_handler(&self) -> Option<MouseHandler> {
        self.with_child(None, |child| child.mouse_event_handler())
    }

    fn handle_key_event(&mut self, event: &KeyEvent, focused: bool) -> EventResult {
        self.cached_child_mut()
            .map_or(EventResult::Unhandled, |child| child.handle_key_event(event, focused))
    }

    fn handle_mouse_event(&mut self, event: &MouseEvent) -> EventResult {
        self.cached_child_mut()
            .map_or(EventResult::Unhandled, |child| child.handle_mouse_event(event))
    }

    fn rendered_area(&self) -> Option<Rect> {
        self.with_child(None, |child| child.rendered_area())
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Element> {
        self.cached_child_mut()?.child_mut(index)
    }
}
