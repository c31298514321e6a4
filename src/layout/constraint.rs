//! One-axis sizing directives.

use std::fmt;

/// How much of the main axis a layout slot asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Exactly this many cells (shrinks only when the slots overflow).
    Length(u16),
    /// A share of the whole area, 0 to 100.
    Percentage(u16),
    /// `numerator / denominator` of the whole area.
    Ratio(u32, u32),
    /// At least this many cells, growing into spare space.
    Min(u16),
    /// At most this many cells, growing into spare space.
    Max(u16),
    /// Spare space, shared between fill slots in proportion to the weight.
    Fill(u16),
}

impl Default for Constraint {
    fn default() -> Self {
        Constraint::Fill(1)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Length(n) => write!(f, "{n}"),
            Constraint::Percentage(p) => write!(f, "{p}%"),
            Constraint::Ratio(a, b) => write!(f, "{a}/{b}"),
            Constraint::Min(n) => write!(f, "min({n})"),
            Constraint::Max(n) => write!(f, "max({n})"),
            Constraint::Fill(w) => write!(f, "fill({w})"),
        }
    }
}

/// The axis a layout distributes space along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}
