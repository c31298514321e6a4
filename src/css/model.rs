//! CSS AST: Selector, RuleSet, Declaration, StyleSheet.

/// A single CSS selector component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorComponent {
    /// Type selector: matches the element type name (e.g. `Column`).
    Type(String),
    /// Universal selector: `*`.
    Universal,
    /// Class selector: `.classname`.
    Class(String),
    /// ID selector: `#id`.
    Id(String),
    /// Attribute selector: `[name]` or `[name=value]`.
    Attribute { name: String, value: Option<String> },
    /// Pseudo-class: `:focus`.
    PseudoClass(String),
    /// Sub-part pseudo-element: `::border`.
    PseudoElement(String),
}

/// A combinator between compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant combinator (whitespace): `A B`.
    Descendant,
    /// Child combinator: `A > B`.
    Child,
}

/// A sequence of components with no combinators, e.g. `Panel.main:focus`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompoundSelector {
    pub components: Vec<SelectorComponent>,
}

impl CompoundSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, component: SelectorComponent) {
        self.components.push(component);
    }

    /// The sub-part this compound targets, if any.
    pub fn pseudo_element(&self) -> Option<&str> {
        self.components.iter().find_map(|c| match c {
            SelectorComponent::PseudoElement(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

/// One element in a selector chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorPart {
    Compound(CompoundSelector),
    Combinator(Combinator),
}

/// A full selector: compound selectors joined by combinators.
///
/// `Column > Text.title` has parts
/// `[Compound(Column), Combinator(Child), Compound(Text.title)]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    /// Alternating compounds and combinators, starting and ending with a
    /// compound.
    pub parts: Vec<SelectorPart>,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rightmost compound, which must match the node itself.
    pub fn subject(&self) -> Option<&CompoundSelector> {
        match self.parts.last() {
            Some(SelectorPart::Compound(compound)) => Some(compound),
            _ => None,
        }
    }
}

/// A single property declaration, e.g. `padding: 1 2`.
///
/// The value is kept as raw text; property converters type it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>, important: bool) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important,
        }
    }
}

/// One or more selectors paired with declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
}

/// A parsed stylesheet: rule sets in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    pub rules: Vec<RuleSet>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_element_lookup() {
        let mut cs = CompoundSelector::new();
        cs.push(SelectorComponent::Type("Gauge".into()));
        assert_eq!(cs.pseudo_element(), None);
        cs.push(SelectorComponent::PseudoElement("filled".into()));
        assert_eq!(cs.pseudo_element(), Some("filled"));
    }

    #[test]
    fn selector_subject_is_last_compound() {
        let mut outer = CompoundSelector::new();
        outer.push(SelectorComponent::Type("Column".into()));
        let mut inner = CompoundSelector::new();
        inner.push(SelectorComponent::Type("Text".into()));
        let sel = Selector {
            parts: vec![
                SelectorPart::Compound(outer),
                SelectorPart::Combinator(Combinator::Child),
                SelectorPart::Compound(inner.clone()),
            ],
        };
        assert_eq!(sel.subject(), Some(&inner));
        assert_eq!(Selector::new().subject(), None);
    }
}
