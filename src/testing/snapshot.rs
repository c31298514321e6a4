//! Snapshot rendering helpers.
//!
//! Functions for converting rendered output into plain-text strings suitable
//! for snapshot testing and assertions.

use crate::element::{Element, RenderContext};
use crate::error::Result;
use crate::render::{Buffer, Frame};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Convert a buffer to plain text.
///
/// Each row is right-trimmed of spaces, trailing blank rows are dropped and
/// rows are joined with `'\n'`. Styling is ignored.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut lines: Vec<String> = (0..buffer.height())
        .filter_map(|y| buffer.row_text(y))
        .map(|row| row.trim_end().to_owned())
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Render `element` into a `width` x `height` frame without a stylesheet and
/// return the text.
///
/// # Examples
///
/// ```
/// use gilt_toolkit::element::Text;
/// use gilt_toolkit::testing::render_element_to_string;
///
/// let mut text = Text::new("Hello");
/// assert_eq!(render_element_to_string(&mut text, 20, 1).unwrap(), "Hello");
/// ```
pub fn render_element_to_string(element: &mut dyn Element, width: u16, height: u16) -> Result<String> {
    let mut frame = Frame::new(width, height);
    let area = frame.area();
    let mut ctx = RenderContext::new();
    element.render(&mut frame, area, &mut ctx)?;
    ctx.register_root(element, area);
    Ok(buffer_to_string(frame.buffer()))
}

// ===========================================================================
// Tests
// ===========================================================================
