//! Layout: constraints and the taffy-backed splitter.

pub mod constraint;
pub mod solver;

pub use constraint::{Constraint, Direction};
pub use solver::{Layout, LayoutError};
