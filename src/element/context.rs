//! Per-frame render context.
//!
//! A [`RenderContext`] travels down the tree during one render pass. It
//! carries the cascade engine, the registry being filled, the path of the
//! element currently rendering, the open style scopes of its ancestors and
//! the focused path. It is created fresh for every top-level render and
//! consumed afterwards with [`into_registry`](RenderContext::into_registry).

use tracing::trace;

use crate::error::Result;
use crate::geometry::Rect;
use crate::render::Frame;
use crate::style::{CascadeMatch, Style, StyleEngine, StyleQuery, StyleSubject};

use super::registry::{ElementKey, ElementPath, ElementRegistry, RegisteredElement};
use super::traits::Element;

/// State shared by every element of one render pass.
pub struct RenderContext<'e> {
    engine: Option<&'e dyn StyleEngine>,
    registry: ElementRegistry,
    path: ElementPath,
    ancestors: Vec<StyleSubject>,
    // Cumulative: each entry is the previous one patched with the new scope.
    inherited: Vec<Style>,
    focused: Option<ElementPath>,
}

impl<'e> RenderContext<'e> {
    /// A context without a cascade engine.
    pub fn new() -> Self {
        Self {
            engine: None,
            registry: ElementRegistry::new(),
            path: ElementPath::root(),
            ancestors: Vec::new(),
            inherited: Vec::new(),
            focused: None,
        }
    }

    /// A context resolving cascade rules through `engine`.
    pub fn with_engine(engine: &'e dyn StyleEngine) -> Self {
        Self {
            engine: Some(engine),
            ..Self::new()
        }
    }

    /// Set the focused path (builder).
    pub fn with_focus(mut self, focused: Option<ElementPath>) -> Self {
        self.focused = focused;
        self
    }

    // ── Paths ───────────────────────────────────────────────────────

    /// Path of the element currently rendering.
    pub fn path(&self) -> &ElementPath {
        &self.path
    }

    /// Whether the element currently rendering holds focus.
    pub fn is_focused(&self) -> bool {
        self.focused.as_ref() == Some(&self.path)
    }

    pub fn focused(&self) -> Option<&ElementPath> {
        self.focused.as_ref()
    }

    // ── Child rendering ─────────────────────────────────────────────

    /// Render `child` in place of the current element, sharing its path.
    ///
    /// Used by wrappers that stand in for their single child.
    pub fn render_child(&mut self, child: &mut dyn Element, frame: &mut Frame, area: Rect) -> Result<()> {
        child.render(frame, area, self)
    }

    /// Render `child` as child `index` of the current element.
    pub fn render_child_at(
        &mut self,
        index: usize,
        child: &mut dyn Element,
        frame: &mut Frame,
        area: Rect,
    ) -> Result<()> {
        self.path.push(index);
        let result = child.render(frame, area, self);
        self.path.pop();
        result
    }

    /// Record that child `index` of the current element occupies `area`.
    pub fn register_child(&mut self, index: usize, child: &dyn Element, area: Rect) -> ElementKey {
        let path = self.path.child(index);
        self.register(path, child, area)
    }

    /// Record the root element's area.
    pub fn register_root(&mut self, root: &dyn Element, area: Rect) -> ElementKey {
        self.register(ElementPath::root(), root, area)
    }

    fn register(&mut self, path: ElementPath, element: &dyn Element, area: Rect) -> ElementKey {
        trace!(%path, type_name = element.type_name(), ?area, "register element");
        self.registry.register(RegisteredElement {
            path,
            area,
            type_name: element.type_name(),
            id: element.id(),
            focusable: element.is_focusable(),
            draggable: element.is_draggable(),
        })
    }

    // ── Cascade ─────────────────────────────────────────────────────

    /// Cascade result for `subject` at the current position in the tree.
    pub fn cascade(&self, subject: &StyleSubject, sub_part: Option<&str>) -> Option<CascadeMatch> {
        let engine = self.engine?;
        let query = StyleQuery::new(subject)
            .sub_part(sub_part)
            .ancestors(&self.ancestors)
            .focused(self.is_focused());
        engine.resolve(&query)
    }

    /// The style inherited from every open scope.
    pub fn current_style(&self) -> Style {
        self.inherited.last().copied().unwrap_or_default()
    }

    /// Run `f` with `subject` as the innermost ancestor and `style` patched
    /// onto the inherited style.
    pub fn with_scope<R>(
        &mut self,
        subject: StyleSubject,
        style: Style,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let inherited = self.current_style().patch(style);
        self.ancestors.push(subject);
        self.inherited.push(inherited);
        let result = f(self);
        self.inherited.pop();
        self.ancestors.pop();
        result
    }

    // ── Registry ────────────────────────────────────────────────────

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> ElementRegistry {
        self.registry
    }
}

impl Default for RenderContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}
