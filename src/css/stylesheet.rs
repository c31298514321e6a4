//! Compiled stylesheet: selector matching and the cascade.
//!
//! A [`CompiledStylesheet`] is the crate's [`StyleEngine`]. Matching walks a
//! selector right to left: the rightmost compound must match the queried
//! subject (including its sub-part and focus state), and every compound to
//! its left must match an ancestor as the combinators require.

use tracing::{debug, trace};

use crate::css::model::{Combinator, CompoundSelector, Declaration, Selector, SelectorComponent, SelectorPart, StyleSheet};
use crate::css::parser::{parse_css, ParseError};
use crate::css::properties::apply_declaration;
use crate::css::specificity::Specificity;
use crate::style::{CascadeMatch, StyleEngine, StyleQuery, StyleSubject};

/// A stylesheet ready for matching.
#[derive(Debug, Clone, Default)]
pub struct CompiledStylesheet {
    rules: Vec<CompiledRule>,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    selectors: Vec<Selector>,
    declarations: Vec<Declaration>,
    is_default: bool,
    source_order: u32,
}

impl CompiledStylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a parsed [`StyleSheet`].
    ///
    /// Default sheets always lose to user sheets, regardless of selector
    /// specificity.
    pub fn compile(stylesheet: &StyleSheet, is_default: bool) -> Self {
        let mut compiled = Self::new();
        compiled.push_sheet(stylesheet, is_default);
        compiled
    }

    /// Parse and compile user CSS.
    pub fn parse(css: &str) -> Result<Self, ParseError> {
        Ok(Self::compile(&parse_css(css)?, false))
    }

    /// Parse and compile a default sheet and a user sheet together.
    pub fn with_defaults(default_css: &str, user_css: &str) -> Result<Self, ParseError> {
        let mut compiled = Self::new();
        compiled.push_sheet(&parse_css(default_css)?, true);
        compiled.push_sheet(&parse_css(user_css)?, false);
        debug!(rules = compiled.len(), "compiled stylesheet");
        Ok(compiled)
    }

    /// Append another compiled sheet; its rules come later in source order.
    pub fn extend(&mut self, other: CompiledStylesheet) {
        for mut rule in other.rules {
            rule.source_order = self.rules.len() as u32;
            self.rules.push(rule);
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn push_sheet(&mut self, stylesheet: &StyleSheet, is_default: bool) {
        for rule in &stylesheet.rules {
            self.rules.push(CompiledRule {
                selectors: rule.selectors.clone(),
                declarations: rule.declarations.clone(),
                is_default,
                source_order: self.rules.len() as u32,
            });
        }
    }
}

impl StyleEngine for CompiledStylesheet {
    /// Cascade every matching declaration, lowest specificity first.
    ///
    /// Declarations whose values fail to convert are skipped.
    fn resolve(&self, query: &StyleQuery<'_>) -> Option<CascadeMatch> {
        let mut matched: Vec<(Specificity, &Declaration)> = Vec::new();

        for rule in &self.rules {
            let best = rule
                .selectors
                .iter()
                .filter(|sel| matches_selector(sel, query))
                .map(|sel| Specificity::from_selector(sel, rule.source_order, rule.is_default, false))
                .max();
            if let Some(spec) = best {
                matched.extend(
                    rule.declarations
                        .iter()
                        .map(|decl| (spec.with_important(decl.important), decl)),
                );
            }
        }

        trace!(
            type_name = %query.subject.type_name,
            sub_part = ?query.sub_part,
            declarations = matched.len(),
            "cascade"
        );
        if matched.is_empty() {
            return None;
        }

        // Stable: declarations keep their order within a rule.
        matched.sort_by_key(|(spec, _)| *spec);

        let mut result = CascadeMatch::default();
        for (_, decl) in matched {
            let _ = apply_declaration(&mut result, &decl.property, &decl.value);
        }
        Some(result)
    }
}

/// Whether `selector` matches the node described by `query`.
fn matches_selector(selector: &Selector, query: &StyleQuery<'_>) -> bool {
    let Some((SelectorPart::Compound(subject), rest)) = selector.parts.split_last() else {
        return false;
    };
    subject.pseudo_element() == query.sub_part
        && matches_compound(subject, query.subject, query.focused)
        && matches_ancestors(rest, query.ancestors)
}

/// Match the remaining `compound combinator` pairs against `ancestors`
/// (outermost first), backtracking over descendant combinators.
fn matches_ancestors(parts: &[SelectorPart], ancestors: &[StyleSubject]) -> bool {
    let [head @ .., SelectorPart::Compound(compound), SelectorPart::Combinator(combinator)] = parts else {
        return parts.is_empty();
    };
    if compound.pseudo_element().is_some() {
        return false;
    }

    match combinator {
        Combinator::Child => match ancestors.split_last() {
            Some((parent, above)) => matches_compound(compound, parent, false) && matches_ancestors(head, above),
            None => false,
        },
        Combinator::Descendant => (0..ancestors.len())
            .rev()
            .any(|i| matches_compound(compound, &ancestors[i], false) && matches_ancestors(head, &ancestors[..i])),
    }
}

/// Whether every component of `compound` holds for `subject`.
///
/// Pseudo-elements are checked by the caller.
fn matches_compound(compound: &CompoundSelector, subject: &StyleSubject, focused: bool) -> bool {
    compound.components.iter().all(|component| match component {
        SelectorComponent::Type(name) => subject.type_name == *name,
        SelectorComponent::Universal => true,
        SelectorComponent::Class(name) => subject.has_class(name),
        SelectorComponent::Id(name) => subject.id.as_deref() == Some(name.as_str()),
        SelectorComponent::Attribute { name, value: None } => subject.attributes.contains(name),
        SelectorComponent::Attribute { name, value: Some(value) } => {
            subject.attributes.get(name) == Some(value.as_str())
        }
        SelectorComponent::PseudoClass(name) => name == "focus" && focused,
        SelectorComponent::PseudoElement(_) => true,
    })
}
