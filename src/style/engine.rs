//! The cascade engine seam.
//!
//! Styleable nodes describe themselves as a [`StyleSubject`]. A
//! [`StyleEngine`] (usually a compiled stylesheet) answers a [`StyleQuery`]
//! with the [`CascadeMatch`] for that subject, or `None` when no rule applies.

use std::collections::BTreeMap;

use crate::style::attributes::StyleAttributes;
use crate::style::convert::PropertyConverter;
use crate::style::value::Style;

/// The selector-visible identity of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSubject {
    /// CSS type name (e.g. `"Column"`, `"Text"`).
    pub type_name: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: StyleAttributes,
}

impl StyleSubject {
    /// A subject with only a type name.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add an attribute (builder).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Everything the cascade needs to pick rules for one node (or one sub-part
/// of a node).
#[derive(Debug, Clone, Copy)]
pub struct StyleQuery<'q> {
    pub subject: &'q StyleSubject,
    /// Styleable region inside the node, e.g. `"border"` or `"filled"`.
    pub sub_part: Option<&'q str>,
    /// Enclosing subjects, outermost first.
    pub ancestors: &'q [StyleSubject],
    /// Whether the node currently holds keyboard focus (`:focus`).
    pub focused: bool,
}

impl<'q> StyleQuery<'q> {
    pub fn new(subject: &'q StyleSubject) -> Self {
        Self {
            subject,
            sub_part: None,
            ancestors: &[],
            focused: false,
        }
    }

    pub fn sub_part(mut self, sub_part: Option<&'q str>) -> Self {
        self.sub_part = sub_part;
        self
    }

    pub fn ancestors(mut self, ancestors: &'q [StyleSubject]) -> Self {
        self.ancestors = ancestors;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// The outcome of cascading every matching rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeMatch {
    /// Visual properties (`color`, `background`, `text-style`).
    pub style: Style,
    /// Every other declared property as raw text, e.g. `spacing: "1"`.
    pub properties: BTreeMap<String, String>,
}

impl CascadeMatch {
    /// Convert a raw property through `converter`.
    pub fn property<C: PropertyConverter>(&self, name: &str, converter: &C) -> Option<C::Value> {
        self.properties
            .get(name)
            .and_then(|raw| converter.convert(raw))
    }

    pub fn is_empty(&self) -> bool {
        self.style.is_empty() && self.properties.is_empty()
    }
}

/// Resolves cascade rules for a node.
pub trait StyleEngine {
    fn resolve(&self, query: &StyleQuery<'_>) -> Option<CascadeMatch>;
}
