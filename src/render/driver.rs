//! Crossterm terminal output backend.
//!
//! The `Driver` wraps a buffered stdout writer and provides methods for
//! entering and leaving the alternate screen, applying cell updates, and
//! controlling the cursor and mouse capture.

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor, event, execute, queue,
    style::{self as term, Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::style::{Color, Modifier, Style};

use super::buffer::CellUpdate;

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Terminal output backend using crossterm.
///
/// Does NOT enter the alternate screen on creation; call
/// [`enter_alt_screen`](Self::enter_alt_screen) explicitly.
pub struct Driver {
    writer: Box<dyn Write>,
    alt_screen: bool,
    raw_mode: bool,
    mouse_captured: bool,
}

impl Driver {
    pub fn new() -> io::Result<Self> {
        Ok(Self::with_writer(BufWriter::new(io::stdout())))
    }

    /// Driver writing escape sequences to an arbitrary sink.
    pub(crate) fn with_writer(writer: impl Write + 'static) -> Self {
        Self {
            writer: Box::new(writer),
            alt_screen: false,
            raw_mode: false,
            mouse_captured: false,
        }
    }

    /// Enter the alternate screen and enable raw mode.
    pub fn enter_alt_screen(&mut self) -> io::Result<()> {
        execute!(self.writer, EnterAlternateScreen)?;
        self.alt_screen = true;
        terminal::enable_raw_mode()?;
        self.raw_mode = true;
        Ok(())
    }

    /// Leave the alternate screen and disable raw mode.
    ///
    /// Only undoes what [`enter_alt_screen`](Self::enter_alt_screen)
    /// actually managed to switch on.
    pub fn leave_alt_screen(&mut self) -> io::Result<()> {
        let mut result = Ok(());
        if self.raw_mode {
            result = terminal::disable_raw_mode();
            self.raw_mode = false;
        }
        if self.alt_screen {
            let left = execute!(self.writer, LeaveAlternateScreen);
            self.alt_screen = false;
            result = result.and(left);
        }
        result
    }

    /// Put the terminal back the way it was found.
    ///
    /// Every step runs even if an earlier one fails; the first error is
    /// returned.
    pub fn restore(&mut self) -> io::Result<()> {
        let steps = [
            self.disable_mouse(),
            self.show_cursor(),
            self.leave_alt_screen(),
        ];
        steps.into_iter().collect()
    }

    pub fn set_title(&mut self, title: &str) -> io::Result<()> {
        execute!(self.writer, terminal::SetTitle(title))
    }

    pub fn enable_mouse(&mut self) -> io::Result<()> {
        execute!(self.writer, event::EnableMouseCapture)?;
        self.mouse_captured = true;
        Ok(())
    }

    pub fn disable_mouse(&mut self) -> io::Result<()> {
        if self.mouse_captured {
            execute!(self.writer, event::DisableMouseCapture)?;
            self.mouse_captured = false;
        }
        Ok(())
    }

    /// Queue a batch of cell updates. Call [`flush`](Self::flush) afterwards.
    pub fn apply_updates(&mut self, updates: &[CellUpdate]) -> io::Result<()> {
        for update in updates {
            queue!(self.writer, cursor::MoveTo(update.x, update.y))?;
            self.apply_style(&update.cell.style)?;
            queue!(
                self.writer,
                Print(update.cell.ch),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        Ok(())
    }

    /// Blank the whole terminal.
    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.writer, terminal::Clear(terminal::ClearType::All))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Terminal size as (columns, rows).
    pub fn terminal_size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Hide)
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Show)
    }

    fn apply_style(&mut self, style: &Style) -> io::Result<()> {
        if let Some(fg) = style.fg {
            queue!(self.writer, SetForegroundColor(to_crossterm(fg)))?;
        }
        if let Some(bg) = style.bg {
            queue!(self.writer, SetBackgroundColor(to_crossterm(bg)))?;
        }
        let modifiers = style.effective_modifiers();
        for (modifier, attribute) in ATTRIBUTES {
            if modifiers.contains(modifier) {
                queue!(self.writer, SetAttribute(attribute))?;
            }
        }
        Ok(())
    }
}

const ATTRIBUTES: [(Modifier, Attribute); 6] = [
    (Modifier::BOLD, Attribute::Bold),
    (Modifier::DIM, Attribute::Dim),
    (Modifier::ITALIC, Attribute::Italic),
    (Modifier::UNDERLINED, Attribute::Underlined),
    (Modifier::REVERSED, Attribute::Reverse),
    (Modifier::CROSSED_OUT, Attribute::CrossedOut),
];

// ---------------------------------------------------------------------------
// Color mapping
// ---------------------------------------------------------------------------

/// Map a toolkit color onto crossterm's palette.
///
/// crossterm names the bright variants plainly (`Red`) and the normal ones
/// `Dark*`, so the names shift by one step.
pub fn to_crossterm(color: Color) -> term::Color {
    match color {
        Color::Reset => term::Color::Reset,
        Color::Black => term::Color::Black,
        Color::Red => term::Color::DarkRed,
        Color::Green => term::Color::DarkGreen,
        Color::Yellow => term::Color::DarkYellow,
        Color::Blue => term::Color::DarkBlue,
        Color::Magenta => term::Color::DarkMagenta,
        Color::Cyan => term::Color::DarkCyan,
        Color::Gray => term::Color::Grey,
        Color::DarkGray => term::Color::DarkGrey,
        Color::LightRed => term::Color::Red,
        Color::LightGreen => term::Color::Green,
        Color::LightYellow => term::Color::Yellow,
        Color::LightBlue => term::Color::Blue,
        Color::LightMagenta => term::Color::Magenta,
        Color::LightCyan => term::Color::Cyan,
        Color::White => term::Color::White,
        Color::Indexed(i) => term::Color::AnsiValue(i),
        Color::Rgb(r, g, b) => term::Color::Rgb { r, g, b },
    }
}
