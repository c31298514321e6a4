//! Rendering pipeline: strips, the cell buffer, frames and the terminal driver.

pub mod buffer;
pub mod driver;
pub mod frame;
pub mod strip;

pub use buffer::{Buffer, CellUpdate};
pub use driver::Driver;
pub use frame::Frame;
pub use strip::{Cell, Strip};
