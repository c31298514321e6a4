//! Crate error type.

use crate::css::parser::ParseError;
use crate::layout::LayoutError;

/// Everything that can go wrong in the element tree and the app around it.
///
/// Malformed style values are not errors; they fall back to defaults.
#[derive(Debug, thiserror::Error)]
pub enum ToolkitError {
    /// A required collaborator was missing at construction.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("stylesheet error: {0}")]
    Css(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ToolkitError> = std::result::Result<T, E>;
