//! Style resolution for one element: explicit beats cascade beats default.

use crate::element::{Element, RenderContext};
use crate::style::convert::PropertyConverter;
use crate::style::engine::StyleSubject;
use crate::style::value::Style;

/// Resolves styles and typed properties for one element during a render.
///
/// The element's selector identity is captured once at construction, so a
/// resolver can be asked about several sub-parts without re-querying it.
pub struct StyleResolver<'c> {
    ctx: &'c RenderContext<'c>,
    subject: StyleSubject,
}

impl<'c> StyleResolver<'c> {
    pub fn new(element: &dyn Element, ctx: &'c RenderContext<'c>) -> Self {
        Self::for_subject(element.style_subject(), ctx)
    }

    pub fn for_subject(subject: StyleSubject, ctx: &'c RenderContext<'c>) -> Self {
        Self { ctx, subject }
    }

    pub fn subject(&self) -> &StyleSubject {
        &self.subject
    }

    pub fn into_subject(self) -> StyleSubject {
        self.subject
    }

    /// The effective style for `sub_part` (or the element itself).
    ///
    /// A non-empty `explicit` style is returned as is. Otherwise a non-empty
    /// cascade match wins, and `default` covers everything else.
    pub fn resolve(&self, explicit: Option<&Style>, sub_part: Option<&str>, default: Style) -> Style {
        if let Some(style) = explicit.filter(|style| !style.is_empty()) {
            return *style;
        }
        self.ctx
            .cascade(&self.subject, sub_part)
            .map(|matched| matched.style)
            .filter(|style| !style.is_empty())
            .unwrap_or(default)
    }

    /// A typed cascade property, `None` when unset or unparseable.
    pub fn property<C: PropertyConverter>(
        &self,
        name: &str,
        sub_part: Option<&str>,
        converter: &C,
    ) -> Option<C::Value> {
        self.ctx
            .cascade(&self.subject, sub_part)
            .and_then(|matched| matched.property(name, converter))
    }
}
