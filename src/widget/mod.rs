//! Widget system: the drawable-widget trait.

pub mod traits;

pub use traits::Widget;
