//! CSS engine: tokenizer, parser, specificity, cascade.

pub mod model;
pub mod parser;
pub mod properties;
pub mod specificity;
pub mod stylesheet;
pub mod tokenizer;

pub use parser::{parse_css, ParseError};
pub use stylesheet::CompiledStylesheet;
