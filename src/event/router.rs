//! Event routing over the registry of the last rendered frame.
//!
//! Keys go to the focused element first (with `focused == true`) and then
//! bubble through its ancestors (with `focused == false`) until one handles
//! them. Unhandled Tab / BackTab move focus. Mouse events go to the deepest
//! element under the pointer and bubble the same way, except while a drag is
//! active: then drag and release events go to the drag target.

use tracing::debug;

use crate::element::{Element, ElementPath, ElementRegistry, RegisteredElement};

use super::handler::EventResult;
use super::input::{Key, KeyEvent, MouseAction, MouseBtn, MouseEvent};

/// Resolve `path` against a live tree.
pub fn element_at_path<'a>(root: &'a mut dyn Element, path: &ElementPath) -> Option<&'a mut dyn Element> {
    let mut current = root;
    for &index in path.indices() {
        current = current.child_mut(index)?;
    }
    Some(current)
}

/// Focus and drag state plus the registry it is resolved against.
#[derive(Debug, Default)]
pub struct EventRouter {
    registry: ElementRegistry,
    focused: Option<ElementPath>,
    drag: Option<ElementPath>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in the registry of a new frame.
    ///
    /// Focus and drag survive only if their path is still registered with
    /// the same capability.
    pub fn update(&mut self, registry: ElementRegistry) {
        self.registry = registry;
        if let Some(path) = &self.focused {
            if !self.registry.entry_at(path).is_some_and(|e| e.focusable) {
                debug!(%path, "focused element left the tree");
                self.focused = None;
            }
        }
        if let Some(path) = &self.drag {
            if !self.registry.entry_at(path).is_some_and(|e| e.draggable) {
                self.drag = None;
            }
        }
    }

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn focused(&self) -> Option<&ElementPath> {
        self.focused.as_ref()
    }

    pub fn focused_element(&self) -> Option<&RegisteredElement> {
        self.registry.entry_at(self.focused.as_ref()?)
    }

    pub fn dragging(&self) -> Option<&ElementPath> {
        self.drag.as_ref()
    }

    // ── Focus ───────────────────────────────────────────────────────

    fn set_focus(&mut self, path: Option<ElementPath>) {
        if self.focused != path {
            debug!(from = ?self.focused, to = ?path, "focus changed");
            self.focused = path;
        }
    }

    /// Move to the next focusable element, wrapping at the end.
    pub fn focus_next(&mut self) -> Option<&ElementPath> {
        let chain = self.registry.focus_chain();
        let next = match self.position_in(&chain) {
            Some(i) => chain.get((i + 1) % chain.len()),
            None => chain.first(),
        };
        self.set_focus(next.cloned());
        self.focused.as_ref()
    }

    /// Move to the previous focusable element, wrapping at the start.
    pub fn focus_previous(&mut self) -> Option<&ElementPath> {
        let chain = self.registry.focus_chain();
        let previous = match self.position_in(&chain) {
            Some(i) => chain.get((i + chain.len() - 1) % chain.len()),
            None => chain.last(),
        };
        self.set_focus(previous.cloned());
        self.focused.as_ref()
    }

    fn position_in(&self, chain: &[ElementPath]) -> Option<usize> {
        let focused = self.focused.as_ref()?;
        chain.iter().position(|path| path == focused)
    }

    /// Focus the focusable element registered with `id`.
    pub fn focus_id(&mut self, id: &str) -> bool {
        let target = self
            .registry
            .iter()
            .find(|e| e.focusable && e.id.as_deref() == Some(id))
            .map(|e| e.path.clone());
        let found = target.is_some();
        if found {
            self.set_focus(target);
        }
        found
    }

    /// Focus `path` if it is registered as focusable.
    pub fn focus_path(&mut self, path: &ElementPath) -> bool {
        let focusable = self.registry.entry_at(path).is_some_and(|e| e.focusable);
        if focusable {
            self.set_focus(Some(path.clone()));
        }
        focusable
    }

    pub fn clear_focus(&mut self) {
        self.set_focus(None);
    }

    // ── Routing ─────────────────────────────────────────────────────

    /// Deliver a key event to the focused element and its ancestors.
    ///
    /// Without focus the root alone sees the event, unfocused.
    pub fn route_key(&mut self, root: &mut dyn Element, event: &KeyEvent) -> EventResult {
        let start = self.focused.clone();
        let mut target = Some(start.clone().unwrap_or_default());
        let mut focused = start.is_some();

        while let Some(path) = target {
            if let Some(element) = element_at_path(root, &path) {
                if element.handle_key_event(event, focused).is_handled() {
                    return EventResult::Handled;
                }
            }
            focused = false;
            target = path.parent();
        }

        match event.code {
            Key::Tab => self.focus_next().is_some().into(),
            Key::BackTab => self.focus_previous().is_some().into(),
            _ => EventResult::Unhandled,
        }
    }

    /// Deliver a mouse event to the element under the pointer (or the drag
    /// target) and its ancestors.
    pub fn route_mouse(&mut self, root: &mut dyn Element, event: &MouseEvent) -> EventResult {
        let target = match (event.kind, &self.drag) {
            (MouseAction::Drag(_) | MouseAction::Up(_), Some(drag)) => Some(drag.clone()),
            _ => self.registry.hit_test(event.position()).map(|e| e.path.clone()),
        };

        if let (MouseAction::Down(MouseBtn::Left), Some(path)) = (event.kind, &target) {
            let (focusable, draggable) = self
                .registry
                .entry_at(path)
                .map_or((false, false), |e| (e.focusable, e.draggable));
            if focusable {
                self.set_focus(Some(path.clone()));
            }
            if draggable {
                debug!(%path, "drag started");
                self.drag = Some(path.clone());
            }
        }

        let mut result = EventResult::Unhandled;
        let mut current = target;
        while let Some(path) = current {
            if let Some(element) = element_at_path(root, &path) {
                if element.handle_mouse_event(event).is_handled() {
                    result = EventResult::Handled;
                    break;
                }
            }
            current = path.parent();
        }

        if let MouseAction::Up(_) = event.kind {
            self.drag = None;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Panel, RenderContext, Stack, Styled, Text};
    use crate::event::handler::{key_handler, mouse_handler};
    use crate::geometry::Rect;
    use crate::render::Frame;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn frame_for(root: &mut dyn Element, width: u16, height: u16) -> ElementRegistry {
        let mut frame = Frame::new(width, height);
        let mut ctx = RenderContext::new();
        let area = frame.area();
        root.render(&mut frame, area, &mut ctx).unwrap();
        ctx.register_root(root, area);
        ctx.into_registry()
    }

    fn logging_text(id: &str, log: &Rc<RefCell<Vec<String>>>) -> Text {
        let key_log = Rc::clone(log);
        let mouse_log = Rc::clone(log);
        let key_id = id.to_owned();
        let mouse_id = id.to_owned();
        Text::new(id)
            .with_id(id)
            .focusable(true)
            .on_key(key_handler(move |e: &KeyEvent| {
                key_log.borrow_mut().push(format!("{key_id}:{:?}", e.code));
                (e.code == Key::Enter).into()
            }))
            .on_mouse(mouse_handler(move |_: &MouseEvent| {
                mouse_log.borrow_mut().push(format!("{mouse_id}:mouse"));
                EventResult::Handled
            }))
    }

    fn three_texts(log: &Rc<RefCell<Vec<String>>>) -> Stack {
        Stack::column()
            .child(logging_text("a", log))
            .child(Text::new("static"))
            .child(Stack::row().child(logging_text("b", log)).child(logging_text("c", log)))
    }

    #[test]
    fn focus_chain_wraps_both_ways() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = three_texts(&log);
        let mut router = EventRouter::new();
        router.update(frame_for(&mut root, 10, 3));

        let ids = |router: &EventRouter| router.focused_element().and_then(|e| e.id.clone());
        router.focus_next();
        assert_eq!(ids(&router).as_deref(), Some("a"));
        router.focus_next();
        assert_eq!(ids(&router).as_deref(), Some("b"));
        router.focus_next();
        assert_eq!(ids(&router).as_deref(), Some("c"));
        router.focus_next();
        assert_eq!(ids(&router).as_deref(), Some("a"));
        router.focus_previous();
        assert_eq!(ids(&router).as_deref(), Some("c"));
    }

    #[test]
    fn focus_by_id_and_clear() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = three_texts(&log);
        let mut router = EventRouter::new();
        router.update(frame_for(&mut root, 10, 3));

        assert!(router.focus_id("b"));
        assert_eq!(router.focused().map(|p| p.to_string()).as_deref(), Some("/2/0"));
        assert!(!router.focus_id("static"));
        router.clear_focus();
        assert!(router.focused().is_none());
    }

    #[test]
    fn keys_reach_focused_element_only_when_focused() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = three_texts(&log);
        let mut router = EventRouter::new();
        router.update(frame_for(&mut root, 10, 3));

        assert_eq!(router.route_key(&mut root, &Key::Enter.into()), EventResult::Unhandled);
        assert!(log.borrow().is_empty());

        router.focus_id("c");
        assert_eq!(router.route_key(&mut root, &Key::Enter.into()), EventResult::Handled);
        assert_eq!(router.route_key(&mut root, &Key::Char('x').into()), EventResult::Unhandled);
        assert_eq!(*log.borrow(), vec!["c:Enter", "c:Char('x')"]);
    }

    #[test]
    fn unhandled_tab_moves_focus() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = three_texts(&log);
        let mut router = EventRouter::new();
        router.update(frame_for(&mut root, 10, 3));

        assert!(router.route_key(&mut root, &Key::Tab.into()).is_handled());
        assert_eq!(router.focused_element().and_then(|e| e.id.as_deref()), Some("a"));
        router.route_key(&mut root, &Key::BackTab.into());
        assert_eq!(router.focused_element().and_then(|e| e.id.as_deref()), Some("c"));
    }

    #[test]
    fn ancestors_see_keys_unfocused() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        // A panel's handler never fires: it is an ancestor, not the focus.
        let mut root = Panel::new()
            .focusable(true)
            .on_key(key_handler(move |_: &KeyEvent| {
                sink.borrow_mut().push("panel");
                EventResult::Handled
            }))
            .child(Text::new("inner").with_id("inner").focusable(true));
        let mut router = EventRouter::new();
        router.update(frame_for(&mut root, 10, 3));

        router.focus_id("inner");
        assert_eq!(router.route_key(&mut root, &Key::Enter.into()), EventResult::Unhandled);
        assert!(seen.borrow().is_empty());

        router.focus_path(&ElementPath::root());
        assert_eq!(router.route_key(&mut root, &Key::Enter.into()), EventResult::Handled);
        assert_eq!(*seen.borrow(), vec!["panel"]);
    }

    #[test]
    fn click_hits_deepest_and_focuses() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = three_texts(&log);
        let mut router = EventRouter::new();
        router.update(frame_for(&mut root, 10, 3));

        let click = MouseEvent::new(MouseAction::Down(MouseBtn::Left), 7, 2);
        assert!(router.route_mouse(&mut root, &click).is_handled());
        assert_eq!(*log.borrow(), vec!["c:mouse"]);
        assert_eq!(router.focused_element().and_then(|e| e.id.as_deref()), Some("c"));

        let miss = MouseEvent::new(MouseAction::Down(MouseBtn::Left), 2, 1);
        assert_eq!(router.route_mouse(&mut root, &miss), EventResult::Unhandled);
        assert_eq!(router.focused_element().and_then(|e| e.id.as_deref()), Some("c"));
    }

    #[test]
    fn drag_events_follow_the_drag_target() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = Stack::column()
            .child(logging_text("handle", &log).draggable(true))
            .child(logging_text("other", &log));
        let mut router = EventRouter::new();
        router.update(frame_for(&mut root, 10, 2));

        router.route_mouse(&mut root, &MouseEvent::new(MouseAction::Down(MouseBtn::Left), 0, 0));
        assert_eq!(router.dragging().map(|p| p.to_string()).as_deref(), Some("/0"));

        router.route_mouse(&mut root, &MouseEvent::new(MouseAction::Drag(MouseBtn::Left), 0, 1));
        router.route_mouse(&mut root, &MouseEvent::new(MouseAction::Up(MouseBtn::Left), 0, 1));
        assert!(router.dragging().is_none());
        assert_eq!(*log.borrow(), vec!["handle:mouse", "handle:mouse", "handle:mouse"]);
    }

    #[test]
    fn focus_survives_only_while_registered() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = three_texts(&log);
        let mut router = EventRouter::new();
        router.update(frame_for(&mut root, 10, 3));
        router.focus_id("b");

        router.update(frame_for(&mut root, 10, 3));
        assert_eq!(router.focused_element().and_then(|e| e.id.as_deref()), Some("b"));

        let mut smaller = Stack::column().child(Text::new("x"));
        router.update(frame_for(&mut smaller, 10, 3));
        assert!(router.focused().is_none());
    }

    #[test]
    fn element_at_path_walks_children() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = three_texts(&log);
        let found = element_at_path(&mut root, &ElementPath::from(vec![2, 1]));
        assert_eq!(found.and_then(|e| e.id()).as_deref(), Some("c"));
        assert!(element_at_path(&mut root, &ElementPath::from(vec![5])).is_none());
        assert_eq!(
            element_at_path(&mut root, &ElementPath::root()).map(|e| e.type_name()),
            Some("Column")
        );
    }

    #[test]
    fn hit_test_area_matches_layout() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = three_texts(&log);
        let registry = frame_for(&mut root, 10, 3);
        let c = registry.find_by_id("c").unwrap();
        assert_eq!(c.area, Rect::new(5, 2, 5, 1));
    }
}
