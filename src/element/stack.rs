//! Stack: a column or row of children with optional spacing.
//!
//! Each child gets one layout slot. With spacing `s > 0` a fixed
//! `Length(s)` spacer slot sits between adjacent children, so `n` children
//! take `2n - 1` slots. Spacer slots are never rendered into or registered.

use tracing::trace;

use crate::error::Result;
use crate::geometry::Rect;
use crate::layout::{Constraint, Direction, Layout};
use crate::render::Frame;
use crate::style::{IntegerConverter, Style, StyleAttributes, StyleResolver};

use super::context::RenderContext;
use super::props::{ElementProps, Styled};
use super::traits::Element;

/// A container laying its children out along one axis.
pub struct Stack {
    props: ElementProps,
    direction: Direction,
    spacing: Option<u16>,
    children: Vec<Box<dyn Element>>,
}

impl Stack {
    pub fn new(direction: Direction) -> Self {
        Self {
            props: ElementProps::new(),
            direction,
            spacing: None,
            children: Vec::new(),
        }
    }

    /// Children top to bottom.
    pub fn column() -> Self {
        Self::new(Direction::Vertical)
    }

    /// Children left to right.
    pub fn row() -> Self {
        Self::new(Direction::Horizontal)
    }

    /// Gap between adjacent children. Negative values clamp to zero.
    pub fn spacing(mut self, spacing: i32) -> Self {
        self.spacing = Some(spacing.clamp(0, u16::MAX as i32) as u16);
        self
    }

    pub fn child(mut self, child: impl Element + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Box<dyn Element>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push(&mut self, child: Box<dyn Element>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// One constraint per child, with a spacer between neighbours when
    /// `spacing > 0`.
    pub fn slot_constraints(&self, spacing: u16) -> Vec<Constraint> {
        let mut constraints = Vec::with_capacity(self.children.len() * 2);
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 && spacing > 0 {
                constraints.push(Constraint::Length(spacing));
            }
            constraints.push(child.constraint().unwrap_or_default());
        }
        constraints
    }

    fn resolved_spacing(&self, resolver: &StyleResolver<'_>) -> u16 {
        self.spacing
            .or_else(|| resolver.property("spacing", None, &IntegerConverter))
            .unwrap_or(0)
    }

    fn gaps(&self, spacing: u16) -> u16 {
        let gaps = u16::try_from(self.children.len().saturating_sub(1)).unwrap_or(u16::MAX);
        gaps.saturating_mul(spacing)
    }

    fn main_axis(&self, sizes: impl Iterator<Item = u16>, spacing: u16) -> u16 {
        sizes.fold(self.gaps(spacing), u16::saturating_add)
    }
}

impl Styled for Stack {
    fn props(&self) -> &ElementProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut ElementProps {
        &mut self.props
    }
}

impl Element for Stack {
    fn type_name(&self) -> &'static str {
        match self.direction {
            Direction::Vertical => "Column",
            Direction::Horizontal => "Row",
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &mut RenderContext<'_>) -> Result<()> {
        if area.is_empty() || self.children.is_empty() {
            return Ok(());
        }
        self.props.record_area(area);

        let (subject, style, spacing) = {
            let resolver = StyleResolver::new(&*self, ctx);
            let style = resolver.resolve(self.props.style.as_ref(), None, Style::EMPTY);
            let spacing = self.resolved_spacing(&resolver);
            (resolver.into_subject(), style, spacing)
        };

        if let Some(bg) = style.bg {
            frame.set_style(area, Style::new().bg(bg));
        }

        let constraints = self.slot_constraints(spacing);
        let slots = Layout::new(self.direction, constraints).split(area)?;
        trace!(
            type_name = self.type_name(),
            children = self.children.len(),
            slots = slots.len(),
            spacing,
            "stack layout"
        );

        let step = if spacing > 0 { 2 } else { 1 };
        let children = &mut self.children;
        ctx.with_scope(subject, style, |ctx| -> Result<()> {
            let assigned = children.iter_mut().zip(slots.iter().step_by(step));
            for (index, (child, slot)) in assigned.enumerate() {
                ctx.render_child_at(index, &mut **child, frame, *slot)?;
                ctx.register_child(index, &**child, *slot);
            }
            Ok(())
        })
    }

    /// Context-free hint: only builder spacing counts, since the CSS
    /// `spacing` property needs a cascade. See
    /// [`preferred_height_for`](Element::preferred_height_for).
    fn preferred_width(&self) -> u16 {
        let widths = self.children.iter().map(|c| c.preferred_width());
        match self.direction {
            Direction::Horizontal => self.main_axis(widths, self.spacing.unwrap_or(0)),
            Direction::Vertical => widths.max().unwrap_or(0),
        }
    }

    /// Context-free hint, builder spacing only.
    fn preferred_height(&self) -> u16 {
        let heights = self.children.iter().map(|c| c.preferred_height());
        match self.direction {
            Direction::Vertical => self.main_axis(heights, self.spacing.unwrap_or(0)),
            Direction::Horizontal => heights.max().unwrap_or(0),
        }
    }

    /// Applies CSS `spacing` as well, matching what `render` lays out.
    fn preferred_height_for(&self, available_width: u16, ctx: &RenderContext<'_>) -> u16 {
        let heights = self
            .children
            .iter()
            .map(|c| c.preferred_height_for(available_width, ctx));
        match self.direction {
            Direction::Vertical => {
                let spacing = self.resolved_spacing(&StyleResolver::new(self, ctx));
                self.main_axis(heights, spacing)
            }
            Direction::Horizontal => heights.max().unwrap_or(0),
        }
    }

    fn style_attributes(&self) -> StyleAttributes {
        self.props.attributes.clone()
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Element> {
        let child = self.children.get_mut(index)?;
        Some(&mut **child)
    }

    crate::element_props!(props);
}
