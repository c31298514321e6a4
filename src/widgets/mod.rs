//! Built-in leaf widgets.

pub mod block;
pub mod paragraph;

pub use block::Block;
pub use paragraph::Paragraph;
