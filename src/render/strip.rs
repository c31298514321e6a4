//! Strip: a horizontal run of styled cells.
//!
//! Widgets describe their output as strips, and the [`Buffer`](super::buffer::Buffer)
//! places them onto the screen grid, clipped to the widget's area.

use unicode_width::UnicodeWidthChar;

use crate::style::Style;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// One terminal cell: a character and the style it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    /// A space with no style.
    pub const fn blank() -> Self {
        Self { ch: ' ', style: Style::EMPTY }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

/// A row of cells starting at `(x_offset, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    pub y: i32,
    pub x_offset: i32,
    pub cells: Vec<Cell>,
}

impl Strip {
    pub fn new(y: i32, x_offset: i32) -> Self {
        Self { y, x_offset, cells: Vec::new() }
    }

    pub fn push(&mut self, ch: char, style: Style) {
        self.cells.push(Cell::new(ch, style));
    }

    /// Push the characters of `text` that fit in `max_width` display cells.
    ///
    /// Zero-width characters are dropped; wide characters that would straddle
    /// the limit are cut.
    pub fn push_str_clipped(&mut self, text: &str, style: Style, max_width: usize) {
        let mut used = 0;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if w == 0 {
                continue;
            }
            if used + w > max_width {
                break;
            }
            self.cells.push(Cell::new(ch, style));
            for _ in 1..w {
                self.cells.push(Cell::new(' ', style));
            }
            used += w;
        }
    }

    /// Pad with styled blanks (or truncate) to exactly `width` cells.
    pub fn fill(&mut self, width: i32, style: Style) {
        let w = width.max(0) as usize;
        if self.cells.len() < w {
            self.cells.resize(w, Cell::new(' ', style));
        } else {
            self.cells.truncate(w);
        }
    }

    pub fn width(&self) -> i32 {
        self.cells.len() as i32
    }
}
