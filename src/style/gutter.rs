//! Two-axis spacing value.

/// Horizontal and vertical spacing in cells.
///
/// `horizontal` applies to the left and right edges, `vertical` to the top
/// and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Gutter {
    horizontal: u16,
    vertical: u16,
}

impl Gutter {
    /// No spacing on either axis.
    pub const ZERO: Gutter = Gutter { horizontal: 0, vertical: 0 };

    /// Create a gutter with separate horizontal and vertical spacing.
    pub const fn new(horizontal: u16, vertical: u16) -> Self {
        Self { horizontal, vertical }
    }

    /// The same spacing on both axes.
    pub const fn uniform(value: u16) -> Self {
        Self { horizontal: value, vertical: value }
    }

    /// Spacing on the left and right edges.
    pub const fn horizontal(self) -> u16 {
        self.horizontal
    }

    /// Spacing on the top and bottom edges.
    pub const fn vertical(self) -> u16 {
        self.vertical
    }
}
