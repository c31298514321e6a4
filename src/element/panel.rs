//! Panel: a bordered box around a single child.
//!
//! Styleable sub-parts are `border` and `title` (`Panel::border`,
//! `Panel::title` in CSS). The title is also exposed as the `title` style
//! attribute, so `Panel[title=Main]` selects it. Padding comes from the
//! builder, else from the CSS `padding` property, else zero.

use crate::error::Result;
use crate::geometry::Rect;
use crate::render::Frame;
use crate::style::{Gutter, GutterConverter, Style, StyleAttributes, StyleResolver};
use crate::widgets::Block;

use super::context::RenderContext;
use super::props::{ElementProps, Styled};
use super::traits::Element;

pub struct Panel {
    props: ElementProps,
    child: Option<Box<dyn Element>>,
    title: Option<String>,
    padding: Option<Gutter>,
    border_style: Option<Style>,
    title_style: Option<Style>,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            props: ElementProps::new(),
            child: None,
            title: None,
            padding: None,
            border_style: None,
            title_style: None,
        }
    }

    pub fn child(mut self, child: impl Element + 'static) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn padding(mut self, padding: Gutter) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = Some(style);
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = Some(style);
        self
    }

    fn chrome(&self, padding: Gutter) -> (u16, u16) {
        (
            2u16.saturating_add(padding.horizontal().saturating_mul(2)),
            2u16.saturating_add(padding.vertical().saturating_mul(2)),
        )
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled for Panel {
    fn props(&self) -> &ElementProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut ElementProps {
        &mut self.props
    }
}

impl Element for Panel {
    fn type_name(&self) -> &'static str {
        "Panel"
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &mut RenderContext<'_>) -> Result<()> {
        if area.is_empty() {
            return Ok(());
        }
        self.props.record_area(area);

        let resolver = StyleResolver::new(&*self, ctx);
        let style = resolver.resolve(self.props.style.as_ref(), None, Style::EMPTY);
        let border = resolver.resolve(self.border_style.as_ref(), Some("border"), Style::EMPTY);
        let title = resolver.resolve(self.title_style.as_ref(), Some("title"), Style::new().bold());
        let padding = self
            .padding
            .or_else(|| resolver.property("padding", None, &GutterConverter))
            .unwrap_or(Gutter::ZERO);
        let subject = resolver.into_subject();

        let inherited = ctx.current_style().patch(style);
        if let Some(bg) = style.bg {
            frame.set_style(area, Style::new().bg(bg));
        }

        let mut block = Block::new().title_style(title);
        if let Some(text) = &self.title {
            block = block.title(text.as_str());
        }
        frame.render_widget(&block, area, &inherited.patch(border));

        let Some(child) = self.child.as_mut() else {
            return Ok(());
        };
        let inner = area
            .inner(1, 1)
            .inner(i32::from(padding.horizontal()), i32::from(padding.vertical()));
        ctx.with_scope(subject, style, |ctx| -> Result<()> {
            ctx.render_child_at(0, &mut **child, frame, inner)?;
            ctx.register_child(0, &**child, inner);
            Ok(())
        })
    }

    fn preferred_width(&self) -> u16 {
        let (horizontal, _) = self.chrome(self.padding.unwrap_or_default());
        let content = self.child.as_ref().map_or(0, |c| c.preferred_width());
        let title = self.title.as_deref().map_or(0, |t| unicode_width::UnicodeWidthStr::width(t));
        content.max(u16::try_from(title).unwrap_or(u16::MAX)).saturating_add(horizontal)
    }

    fn preferred_height(&self) -> u16 {
        let (_, vertical) = self.chrome(self.padding.unwrap_or_default());
        let content = self.child.as_ref().map_or(0, |c| c.preferred_height());
        content.saturating_add(vertical)
    }

    fn preferred_height_for(&self, available_width: u16, ctx: &RenderContext<'_>) -> u16 {
        let padding = self.padding.unwrap_or_else(|| {
            StyleResolver::new(self, ctx)
                .property("padding", None, &GutterConverter)
                .unwrap_or_default()
        });
        let (horizontal, vertical) = self.chrome(padding);
        let content = self.child.as_ref().map_or(0, |c| {
            c.preferred_height_for(available_width.saturating_sub(horizontal), ctx)
        });
        content.saturating_add(vertical)
    }

    fn style_attributes(&self) -> StyleAttributes {
        let mut declared = StyleAttributes::new();
        if let Some(title) = &self.title {
            declared.insert("title", title.as_str());
        }
        self.props.attributes.clone().merge(&declared)
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Element> {
        match (index, self.child.as_mut()) {
            (0, Some(child)) => Some(&mut **child),
            _ => None,
        }
    }

    crate::element_props!(props);
}
