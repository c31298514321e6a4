//! Declaration application: raw declaration text into a [`CascadeMatch`].
//!
//! Visual properties are typed into the match's [`Style`]; everything else is
//! kept verbatim for elements to convert on demand.

use crate::style::{CascadeMatch, ColorConverter, ModifierConverter, PropertyConverter};

/// Errors from applying a declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    #[error("invalid value for {property}: {value:?}")]
    InvalidValue { property: String, value: String },
}

/// Apply `property: value` on top of `target`.
pub fn apply_declaration(target: &mut CascadeMatch, property: &str, value: &str) -> Result<(), PropertyError> {
    let invalid = || PropertyError::InvalidValue {
        property: property.to_string(),
        value: value.to_string(),
    };

    match property {
        "color" | "foreground" => {
            let color = ColorConverter.convert(value).ok_or_else(invalid)?;
            target.style = target.style.fg(color);
        }
        "background" | "background-color" => {
            let color = ColorConverter.convert(value).ok_or_else(invalid)?;
            target.style = target.style.bg(color);
        }
        "text-style" => {
            let modifiers = ModifierConverter.convert(value).ok_or_else(invalid)?;
            target.style = target.style.patch(modifiers);
        }
        _ => {
            target.properties.insert(property.to_string(), value.to_string());
        }
    }
    Ok(())
}
