//! Input event types, decoupled from crossterm.
//!
//! Crossterm events are converted via `From` impls so elements and handlers
//! never depend on crossterm directly.

use std::ops::{BitAnd, BitOr};

use crossterm::event as ct;

use crate::geometry::Position;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    /// A key crossterm reports that has no variant here.
    Unknown,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Whether all bits of `other` are set.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key press with no modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }

    /// Whether this is `Ctrl+<c>`.
    pub fn is_ctrl(&self, c: char) -> bool {
        self.code == Key::Char(c) && self.modifiers.contains(Modifiers::CTRL)
    }
}

impl From<Key> for KeyEvent {
    fn from(code: Key) -> Self {
        Self::plain(code)
    }
}

// ---------------------------------------------------------------------------
// MouseEvent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseBtn {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    Down(MouseBtn),
    Up(MouseBtn),
    Drag(MouseBtn),
    Moved,
    ScrollUp,
    ScrollDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseAction,
    pub x: u16,
    pub y: u16,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn new(kind: MouseAction, x: u16, y: u16) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x as i32, self.y as i32)
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
    FocusGained,
    FocusLost,
    Paste(String),
}

// ---------------------------------------------------------------------------
// From<crossterm> conversions
// ---------------------------------------------------------------------------

fn convert_modifiers(m: ct::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    for (flag, ours) in [
        (ct::KeyModifiers::SHIFT, Modifiers::SHIFT),
        (ct::KeyModifiers::CONTROL, Modifiers::CTRL),
        (ct::KeyModifiers::ALT, Modifiers::ALT),
    ] {
        if m.contains(flag) {
            out = out | ours;
        }
    }
    out
}

impl From<ct::KeyEvent> for KeyEvent {
    fn from(event: ct::KeyEvent) -> Self {
        let code = match event.code {
            ct::KeyCode::Char(c) => Key::Char(c),
            ct::KeyCode::Enter => Key::Enter,
            ct::KeyCode::Esc => Key::Escape,
            ct::KeyCode::Tab => Key::Tab,
            ct::KeyCode::BackTab => Key::BackTab,
            ct::KeyCode::Backspace => Key::Backspace,
            ct::KeyCode::Delete => Key::Delete,
            ct::KeyCode::Left => Key::Left,
            ct::KeyCode::Right => Key::Right,
            ct::KeyCode::Up => Key::Up,
            ct::KeyCode::Down => Key::Down,
            ct::KeyCode::Home => Key::Home,
            ct::KeyCode::End => Key::End,
            ct::KeyCode::PageUp => Key::PageUp,
            ct::KeyCode::PageDown => Key::PageDown,
            ct::KeyCode::F(n) => Key::F(n),
            _ => Key::Unknown,
        };
        KeyEvent::new(code, convert_modifiers(event.modifiers))
    }
}

fn convert_mouse_button(b: ct::MouseButton) -> MouseBtn {
    match b {
        ct::MouseButton::Left => MouseBtn::Left,
        ct::MouseButton::Right => MouseBtn::Right,
        ct::MouseButton::Middle => MouseBtn::Middle,
    }
}

impl From<ct::MouseEvent> for MouseEvent {
    fn from(event: ct::MouseEvent) -> Self {
        let kind = match event.kind {
            ct::MouseEventKind::Down(b) => MouseAction::Down(convert_mouse_button(b)),
            ct::MouseEventKind::Up(b) => MouseAction::Up(convert_mouse_button(b)),
            ct::MouseEventKind::Drag(b) => MouseAction::Drag(convert_mouse_button(b)),
            ct::MouseEventKind::Moved => MouseAction::Moved,
            ct::MouseEventKind::ScrollUp | ct::MouseEventKind::ScrollLeft => MouseAction::ScrollUp,
            ct::MouseEventKind::ScrollDown | ct::MouseEventKind::ScrollRight => MouseAction::ScrollDown,
        };
        MouseEvent {
            kind,
            x: event.column,
            y: event.row,
            modifiers: convert_modifiers(event.modifiers),
        }
    }
}

impl From<ct::Event> for InputEvent {
    fn from(event: ct::Event) -> Self {
        match event {
            ct::Event::Key(ke) => InputEvent::Key(ke.into()),
            ct::Event::Mouse(me) => InputEvent::Mouse(me.into()),
            ct::Event::Resize(width, height) => InputEvent::Resize { width, height },
            ct::Event::FocusGained => InputEvent::FocusGained,
            ct::Event::FocusLost => InputEvent::FocusLost,
            ct::Event::Paste(s) => InputEvent::Paste(s),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Modifiers ────────────────────────────────────────────────────

    #[test]
    fn modifiers_combine_and_test() {
        let mods = Modifiers::CTRL | Modifiers::ALT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(!mods.contains(Modifiers::SHIFT));
        assert_eq!(mods & Modifiers::CTRL, Modifiers::CTRL);
        assert!(Modifiers::NONE.is_empty());
    }

    // ── KeyEvent ─────────────────────────────────────────────────────

    #[test]
    fn ctrl_detection() {
        assert!(KeyEvent::new(Key::Char('c'), Modifiers::CTRL).is_ctrl('c'));
        assert!(!KeyEvent::plain(Key::Char('c')).is_ctrl('c'));
        assert_eq!(KeyEvent::from(Key::Tab), KeyEvent::plain(Key::Tab));
    }

    #[test]
    fn from_crossterm_keys() {
        for (code, expected) in [
            (ct::KeyCode::Char('x'), Key::Char('x')),
            (ct::KeyCode::Esc, Key::Escape),
            (ct::KeyCode::BackTab, Key::BackTab),
            (ct::KeyCode::F(5), Key::F(5)),
            (ct::KeyCode::CapsLock, Key::Unknown),
        ] {
            let ke = KeyEvent::from(ct::KeyEvent::new(code, ct::KeyModifiers::NONE));
            assert_eq!(ke.code, expected);
        }
    }

    #[test]
    fn from_crossterm_modifiers() {
        let ke = KeyEvent::from(ct::KeyEvent::new(
            ct::KeyCode::Char('A'),
            ct::KeyModifiers::SHIFT | ct::KeyModifiers::CONTROL,
        ));
        assert!(ke.modifiers.contains(Modifiers::SHIFT | Modifiers::CTRL));
        assert!(!ke.modifiers.contains(Modifiers::ALT));
    }

    // ── Mouse and top-level events ───────────────────────────────────

    #[test]
    fn from_crossterm_mouse() {
        let event = InputEvent::from(ct::Event::Mouse(ct::MouseEvent {
            kind: ct::MouseEventKind::Down(ct::MouseButton::Left),
            column: 4,
            row: 2,
            modifiers: ct::KeyModifiers::NONE,
        }));
        let expected = MouseEvent::new(MouseAction::Down(MouseBtn::Left), 4, 2);
        assert_eq!(event, InputEvent::Mouse(expected));
        assert_eq!(expected.position(), Position::new(4, 2));
    }

    #[test]
    fn from_crossterm_resize_and_paste() {
        assert_eq!(
            InputEvent::from(ct::Event::Resize(80, 24)),
            InputEvent::Resize { width: 80, height: 24 }
        );
        assert_eq!(
            InputEvent::from(ct::Event::Paste("hi".into())),
            InputEvent::Paste("hi".into())
        );
    }
}
