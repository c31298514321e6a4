//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` wraps an [`App`](crate::app::App) in headless mode and provides
//! methods to simulate user input (key presses, mouse clicks, resize). Every
//! input is followed by a frame pass, so the next event is routed against
//! what the user would now see.

use crate::app::{App, AppConfig};
use crate::element::Element;
use crate::error::Result;
use crate::event::input::{InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseBtn, MouseEvent};
use crate::event::EventResult;

use super::snapshot::buffer_to_string;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// # Examples
///
/// ```
/// use gilt_toolkit::element::{Styled, Text};
/// use gilt_toolkit::event::Key;
/// use gilt_toolkit::testing::Pilot;
///
/// let root = Text::new("hello").with_id("greeting").focusable(true);
/// let mut pilot = Pilot::new(root, 20, 1).unwrap();
/// pilot.press_key(Key::Tab).unwrap();
/// assert_eq!(pilot.focused_id().as_deref(), Some("greeting"));
/// ```
pub struct Pilot {
    app: App,
}

impl Pilot {
    /// Create a headless app of the given size and render its first frame.
    pub fn new(root: impl Element + 'static, width: u16, height: u16) -> Result<Self> {
        Self::with_config(root, AppConfig::default(), width, height)
    }

    /// Same as [`new`](Self::new) with an explicit config (stylesheets
    /// included).
    pub fn with_config(
        root: impl Element + 'static,
        config: AppConfig,
        width: u16,
        height: u16,
    ) -> Result<Self> {
        let mut app = App::new_headless(root, config, width, height)?;
        app.render()?;
        Ok(Self { app })
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Feed one input event, then render.
    pub fn send(&mut self, event: InputEvent) -> Result<EventResult> {
        let result = self.app.handle_input(event);
        self.app.render()?;
        Ok(result)
    }

    /// Simulate a key press with no modifiers.
    pub fn press_key(&mut self, key: Key) -> Result<EventResult> {
        self.press_key_with(key, Modifiers::NONE)
    }

    /// Simulate a key press with the given modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> Result<EventResult> {
        self.send(InputEvent::Key(KeyEvent::new(key, modifiers)))
    }

    /// Simulate typing each character of `text` as individual key presses.
    pub fn type_text(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            self.press_key(Key::Char(ch))?;
        }
        Ok(())
    }

    /// Simulate a left-button press and release at (x, y).
    pub fn click(&mut self, x: u16, y: u16) -> Result<EventResult> {
        let down = self.send(InputEvent::Mouse(MouseEvent::new(MouseAction::Down(MouseBtn::Left), x, y)))?;
        let up = self.send(InputEvent::Mouse(MouseEvent::new(MouseAction::Up(MouseBtn::Left), x, y)))?;
        Ok(down.or_else(|| up))
    }

    /// Simulate a terminal resize to the given dimensions.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.send(InputEvent::Resize { width, height })?;
        Ok(())
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Render a fresh frame and return its text.
    pub fn render(&mut self) -> Result<String> {
        self.app.render()?;
        Ok(buffer_to_string(self.app.buffer()))
    }

    /// Id of the focused element, if it has one.
    pub fn focused_id(&self) -> Option<String> {
        self.app.focused_id()
    }

    /// Borrow the underlying app immutably.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Borrow the underlying app mutably.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Whether the app is still running (has not quit).
    pub fn is_running(&self) -> bool {
        !self.app.should_quit()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
