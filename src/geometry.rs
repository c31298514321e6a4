//! Core geometry types: Position and Rect.
//!
//! Integer cell coordinates used by the layout solver, the frame buffer and
//! the element registry. A [`Rect`] with a non-positive width or height is
//! empty, and rendering into it is a no-op everywhere in the toolkit.

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell position on the screen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle in buffer cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// An empty rectangle at the origin.
    pub const EMPTY: Rect = Rect { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether the rectangle covers no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Number of cells covered, zero for empty rectangles.
    #[inline]
    pub const fn area(self) -> i32 {
        if self.is_empty() {
            0
        } else {
            self.width * self.height
        }
    }

    /// The right edge (exclusive).
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive).
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// The top-left corner.
    #[inline]
    pub const fn position(self) -> Position {
        Position { x: self.x, y: self.y }
    }

    /// Whether the position lies inside this rectangle.
    #[inline]
    pub const fn contains(self, position: Position) -> bool {
        position.x >= self.x
            && position.x < self.right()
            && position.y >= self.y
            && position.y < self.bottom()
    }

    /// Whether `other` lies entirely inside this rectangle.
    ///
    /// Empty rectangles positioned on or inside the boundary count as contained.
    #[inline]
    pub const fn contains_rect(self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + if other.width > 0 { other.width } else { 0 } <= self.right()
            && other.y + if other.height > 0 { other.height } else { 0 } <= self.bottom()
    }

    /// Whether the two rectangles share at least one cell.
    #[inline]
    pub const fn overlaps(self, other: Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// The cells shared by both rectangles, or [`Rect::EMPTY`].
    #[inline]
    pub const fn intersection(self, other: Rect) -> Rect {
        let x1 = if self.x > other.x { self.x } else { other.x };
        let y1 = if self.y > other.y { self.y } else { other.y };
        let x2 = if self.right() < other.right() { self.right() } else { other.right() };
        let y2 = if self.bottom() < other.bottom() { self.bottom() } else { other.bottom() };

        if x2 - x1 <= 0 || y2 - y1 <= 0 {
            Rect::EMPTY
        } else {
            Rect { x: x1, y: y1, width: x2 - x1, height: y2 - y1 }
        }
    }

    /// Shrink by `horizontal` cells on the left and right edges and by
    /// `vertical` cells on the top and bottom edges.
    ///
    /// Width and height are clamped to zero.
    #[inline]
    pub const fn inner(self, horizontal: i32, vertical: i32) -> Rect {
        let w = self.width - 2 * horizontal;
        let h = self.height - 2 * vertical;
        Rect {
            x: self.x + horizontal,
            y: self.y + vertical,
            width: if w > 0 { w } else { 0 },
            height: if h > 0 { h } else { 0 },
        }
    }

    /// Iterate the rows covered by this rectangle (top to bottom).
    pub fn rows(self) -> impl Iterator<Item = i32> {
        self.y..self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_when_either_extent_is_zero() {
        assert!(Rect::new(0, 0, 0, 5).is_empty());
        assert!(Rect::new(0, 0, 5, 0).is_empty());
        assert!(Rect::new(3, 3, -1, 2).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
        assert_eq!(Rect::new(0, 0, 0, 5).area(), 0);
    }

    #[test]
    fn contains_is_exclusive_on_far_edges() {
        let r = Rect::new(2, 3, 4, 2);
        assert!(r.contains(Position::new(2, 3)));
        assert!(r.contains(Position::new(5, 4)));
        assert!(!r.contains(Position::new(6, 4)));
        assert!(!r.contains(Position::new(5, 5)));
        assert!(!r.contains(Position::new(1, 3)));
    }

    #[test]
    fn contains_rect_accepts_nested_and_edge_aligned() {
        let outer = Rect::new(0, 0, 10, 10);
        assert!(outer.contains_rect(Rect::new(0, 0, 10, 10)));
        assert!(outer.contains_rect(Rect::new(2, 2, 3, 3)));
        assert!(outer.contains_rect(Rect::new(10, 0, 0, 10)));
        assert!(!outer.contains_rect(Rect::new(8, 8, 3, 3)));
    }

    #[test]
    fn overlaps_ignores_touching_edges() {
        let a = Rect::new(0, 0, 5, 5);
        assert!(a.overlaps(Rect::new(4, 4, 5, 5)));
        assert!(!a.overlaps(Rect::new(5, 0, 5, 5)));
        assert!(!a.overlaps(Rect::new(0, 5, 5, 5)));
        assert!(!a.overlaps(Rect::new(1, 1, 0, 0)));
    }

    #[test]
    fn intersection_of_disjoint_is_empty() {
        let a = Rect::new(0, 0, 5, 5);
        assert_eq!(a.intersection(Rect::new(10, 10, 2, 2)), Rect::EMPTY);
        assert_eq!(
            a.intersection(Rect::new(3, 2, 5, 5)),
            Rect::new(3, 2, 2, 3)
        );
    }

    #[test]
    fn inner_clamps_to_zero() {
        let r = Rect::new(0, 0, 10, 4);
        assert_eq!(r.inner(1, 1), Rect::new(1, 1, 8, 2));
        assert_eq!(r.inner(2, 3), Rect::new(2, 3, 6, 0));
        assert!(r.inner(6, 0).is_empty());
    }

    #[test]
    fn rows_cover_height() {
        let rows: Vec<i32> = Rect::new(0, 4, 3, 3).rows().collect();
        assert_eq!(rows, vec![4, 5, 6]);
    }
}
