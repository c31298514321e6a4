//! Event system: input types, handlers, and routing over the element tree.

pub mod handler;
pub mod input;
pub mod router;

pub use handler::{
    key_handler, mouse_handler, EventResult, KeyEventHandler, KeyHandler, MouseEventHandler,
    MouseHandler,
};
pub use input::{InputEvent, Key, KeyEvent, Modifiers, MouseAction, MouseBtn, MouseEvent};
pub use router::{element_at_path, EventRouter};
