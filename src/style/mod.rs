//! Styling: values, attributes, converters, the cascade seam and the resolver.

pub mod attributes;
pub mod convert;
pub mod engine;
pub mod gutter;
pub mod resolver;
pub mod value;

pub use attributes::StyleAttributes;
pub use convert::{
    ColorConverter, ConstraintConverter, GutterConverter, IntegerConverter, ModifierConverter,
    PropertyConverter,
};
pub use engine::{CascadeMatch, StyleEngine, StyleQuery, StyleSubject};
pub use gutter::Gutter;
pub use resolver::StyleResolver;
pub use value::{Color, Modifier, ParseColorError, Style};
