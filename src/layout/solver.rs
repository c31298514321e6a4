//! Constraint solver: splits a rect into one slot per constraint.
//!
//! Each split builds a throwaway taffy flex tree: one root sized to the area
//! and one leaf per constraint along the main axis. Taffy's rounding keeps
//! neighbouring slots flush, so slots tile the area without gaps or overlap.

use taffy::prelude::*;

use crate::geometry::Rect;

use super::constraint::{Constraint, Direction};

/// Errors raised while splitting an area.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("ratio constraint {0}/{1} has a zero denominator")]
    ZeroDenominator(u32, u32),
    #[error("percentage constraint {0}% exceeds 100%")]
    PercentageOverflow(u16),
    #[error("layout solver failed: {0}")]
    Solver(String),
}

impl From<taffy::TaffyError> for LayoutError {
    fn from(err: taffy::TaffyError) -> Self {
        LayoutError::Solver(err.to_string())
    }
}

/// A direction plus the constraints to distribute along it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    direction: Direction,
    constraints: Vec<Constraint>,
}

impl Layout {
    pub fn new(direction: Direction, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        Self {
            direction,
            constraints: constraints.into_iter().collect(),
        }
    }

    pub fn vertical(constraints: impl IntoIterator<Item = Constraint>) -> Self {
        Self::new(Direction::Vertical, constraints)
    }

    pub fn horizontal(constraints: impl IntoIterator<Item = Constraint>) -> Self {
        Self::new(Direction::Horizontal, constraints)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Split `area` into one rect per constraint, in order.
    ///
    /// Every rect lies inside `area`. An empty `area` yields zero-size rects
    /// at its origin.
    pub fn split(&self, area: Rect) -> Result<Vec<Rect>, LayoutError> {
        for constraint in &self.constraints {
            validate(constraint)?;
        }
        if self.constraints.is_empty() {
            return Ok(Vec::new());
        }
        if area.is_empty() {
            let origin = Rect::new(area.x, area.y, 0, 0);
            return Ok(vec![origin; self.constraints.len()]);
        }

        let mut tree: TaffyTree<()> = TaffyTree::new();
        let leaves = self
            .constraints
            .iter()
            .map(|c| tree.new_leaf(item_style(*c, self.direction)))
            .collect::<Result<Vec<_>, _>>()?;
        let root = tree.new_with_children(root_style(area, self.direction), &leaves)?;
        tree.compute_layout(
            root,
            Size {
                width: AvailableSpace::Definite(area.width as f32),
                height: AvailableSpace::Definite(area.height as f32),
            },
        )?;

        leaves
            .iter()
            .map(|&leaf| {
                let layout = tree.layout(leaf)?;
                let rect = Rect::new(
                    area.x + layout.location.x.round() as i32,
                    area.y + layout.location.y.round() as i32,
                    layout.size.width.round() as i32,
                    layout.size.height.round() as i32,
                );
                Ok(confine(rect, area))
            })
            .collect()
    }
}

fn validate(constraint: &Constraint) -> Result<(), LayoutError> {
    match *constraint {
        Constraint::Ratio(a, 0) => Err(LayoutError::ZeroDenominator(a, 0)),
        Constraint::Percentage(p) if p > 100 => Err(LayoutError::PercentageOverflow(p)),
        _ => Ok(()),
    }
}

/// Clamp to `area`. Slots pushed past the end collapse to zero size at the
/// far edge instead of leaving the area.
fn confine(rect: Rect, area: Rect) -> Rect {
    let x = rect.x.clamp(area.x, area.right());
    let y = rect.y.clamp(area.y, area.bottom());
    let right = rect.right().clamp(x, area.right());
    let bottom = rect.bottom().clamp(y, area.bottom());
    Rect::new(x, y, right - x, bottom - y)
}

fn root_style(area: Rect, direction: Direction) -> Style {
    let mut style = Style::default();
    style.display = Display::Flex;
    style.flex_direction = match direction {
        Direction::Vertical => FlexDirection::Column,
        Direction::Horizontal => FlexDirection::Row,
    };
    style.size = Size {
        width: Dimension::from_length(area.width as f32),
        height: Dimension::from_length(area.height as f32),
    };
    style
}

fn item_style(constraint: Constraint, direction: Direction) -> Style {
    let mut style = Style::default();
    let mut min_main = Dimension::from_length(0.0);
    let mut max_main = Dimension::AUTO;

    match constraint {
        Constraint::Length(n) => {
            style.flex_basis = Dimension::from_length(n as f32);
            style.flex_grow = 0.0;
        }
        Constraint::Percentage(p) => {
            style.flex_basis = Dimension::from_percent(p as f32 / 100.0);
            style.flex_grow = 0.0;
        }
        Constraint::Ratio(a, b) => {
            style.flex_basis = Dimension::from_percent(a as f32 / b as f32);
            style.flex_grow = 0.0;
        }
        Constraint::Min(n) => {
            style.flex_basis = Dimension::from_length(n as f32);
            style.flex_grow = 1.0;
            min_main = Dimension::from_length(n as f32);
        }
        Constraint::Max(n) => {
            style.flex_basis = Dimension::from_length(0.0);
            style.flex_grow = 1.0;
            max_main = Dimension::from_length(n as f32);
        }
        Constraint::Fill(weight) => {
            style.flex_basis = Dimension::from_length(0.0);
            style.flex_grow = weight as f32;
        }
    }
    style.flex_shrink = 1.0;

    match direction {
        Direction::Vertical => {
            style.min_size.height = min_main;
            style.max_size.height = max_main;
        }
        Direction::Horizontal => {
            style.min_size.width = min_main;
            style.max_size.width = max_main;
        }
    }
    style
}
