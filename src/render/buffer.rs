//! Screen buffer and frame diffing.
//!
//! The `Buffer` is a 2D grid of [`Cell`]s covering the whole terminal. Widgets
//! render into [`Strip`]s which are placed into the buffer via
//! [`place_strips`](Buffer::place_strips). [`diff`](Buffer::diff) compares two
//! frames and yields only the [`CellUpdate`]s needed to go from one to the other.

use crate::geometry::Rect;
use crate::style::Style;

use super::strip::{Cell, Strip};

// ---------------------------------------------------------------------------
// CellUpdate
// ---------------------------------------------------------------------------

/// A single cell that changed between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}

// ---------------------------------------------------------------------------
// Buffer
// ---------------------------------------------------------------------------

/// The cells of one frame. `cells[y][x]` is column x, row y.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    cells: Vec<Vec<Cell>>,
    width: u16,
    height: u16,
}

impl Buffer {
    /// A blank buffer of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: blank(width, height),
            width,
            height,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer as a rect at the origin.
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Resize and blank every cell.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = blank(width, height);
    }

    /// Reset every cell to a blank.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Cell::blank());
        }
    }

    /// Write strips into the buffer, clipped to `clip` and to the screen.
    pub fn place_strips(&mut self, strips: &[Strip], clip: Rect) {
        let clip = clip.intersection(self.area());
        if clip.is_empty() {
            return;
        }

        for strip in strips {
            if strip.y < clip.y || strip.y >= clip.bottom() {
                continue;
            }
            let row = &mut self.cells[strip.y as usize];
            for (i, cell) in strip.cells.iter().enumerate() {
                let x = strip.x_offset + i as i32;
                if x < clip.x || x >= clip.right() {
                    continue;
                }
                row[x as usize] = *cell;
            }
        }
    }

    /// Patch the style of every cell in `area`, keeping the characters.
    pub fn set_style(&mut self, area: Rect, style: Style) {
        let area = area.intersection(self.area());
        for y in area.rows() {
            let row = &mut self.cells[y as usize];
            for x in area.x..area.right() {
                let cell = &mut row[x as usize];
                cell.style = cell.style.patch(style);
            }
        }
    }

    /// Write `text` starting at `(x, y)`, clipped to the screen.
    pub fn set_string(&mut self, x: i32, y: i32, text: &str, style: Style) {
        let mut strip = Strip::new(y, x);
        strip.push_str_clipped(text, style, usize::MAX);
        self.place_strips(&[strip], self.area());
    }

    /// The cell at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.cells.get(y as usize).and_then(|row| row.get(x as usize))
    }

    /// The characters of row `y`, without styling.
    pub fn row_text(&self, y: u16) -> Option<String> {
        self.cells
            .get(y as usize)
            .map(|row| row.iter().map(|c| c.ch).collect())
    }

    /// Cells that differ from `previous`, in row-major order.
    ///
    /// Cells outside the previous frame's bounds always count as changed.
    pub fn diff(&self, previous: &Buffer) -> Vec<CellUpdate> {
        let mut updates = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let before = previous.cells.get(y).and_then(|r| r.get(x));
                if before != Some(cell) {
                    updates.push(CellUpdate {
                        x: x as u16,
                        y: y as u16,
                        cell: *cell,
                    });
                }
            }
        }
        updates
    }
}

fn blank(width: u16, height: u16) -> Vec<Vec<Cell>> {
    (0..height).map(|_| vec![Cell::blank(); width as usize]).collect()
}

// ===========================================================================
// Tests
// ===========================================================================
