//! 6-tuple CSS specificity calculation and comparison.
//!
//! ```text
//! (is_user, important, id_count, class_count, type_count, source_order)
//! ```
//!
//! Fields are ordered so that the derived `Ord` (lexicographic) gives the
//! cascade order:
//! - User rules beat default rules
//! - `!important` beats normal
//! - More ids beat fewer ids
//! - More classes, attributes and pseudo-classes beat fewer
//! - More type selectors and pseudo-elements beat fewer
//! - Later source order wins as tie-breaker

use crate::css::model::{Selector, SelectorComponent, SelectorPart};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Specificity {
    /// 1 for user rules, 0 for default rules.
    pub is_user: u8,
    /// 1 if `!important`.
    pub important: u8,
    pub id_count: u16,
    /// `.class`, `[attr]` and `:pseudo` selectors.
    pub class_count: u16,
    /// Type selectors and `::part` pseudo-elements.
    pub type_count: u16,
    pub source_order: u32,
}

impl Specificity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Specificity of `selector` in a rule at `source_order`.
    pub fn from_selector(selector: &Selector, source_order: u32, is_default: bool, important: bool) -> Self {
        let mut spec = Self {
            is_user: u8::from(!is_default),
            important: u8::from(important),
            source_order,
            ..Self::default()
        };

        let components = selector.parts.iter().flat_map(|part| match part {
            SelectorPart::Compound(compound) => compound.components.as_slice(),
            SelectorPart::Combinator(_) => &[],
        });
        for component in components {
            match component {
                SelectorComponent::Id(_) => spec.id_count += 1,
                SelectorComponent::Class(_)
                | SelectorComponent::Attribute { .. }
                | SelectorComponent::PseudoClass(_) => spec.class_count += 1,
                SelectorComponent::Type(_) | SelectorComponent::PseudoElement(_) => spec.type_count += 1,
                SelectorComponent::Universal => {}
            }
        }
        spec
    }

    /// The same specificity with the `!important` bit set or cleared.
    pub fn with_important(mut self, important: bool) -> Self {
        self.important = u8::from(important);
        self
    }

    pub fn is_default(&self) -> bool {
        self.is_user == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::parser::parse_css;

    fn spec_of(css_selector: &str) -> Specificity {
        let sheet = parse_css(&format!("{css_selector} {{ color: red; }}")).unwrap();
        Specificity::from_selector(&sheet.rules[0].selectors[0], 0, false, false)
    }

    #[test]
    fn counts_by_component_kind() {
        let s = spec_of("Column > Panel.main#p[title=x]:focus::border");
        assert_eq!(s.id_count, 1);
        assert_eq!(s.class_count, 3);
        assert_eq!(s.type_count, 3);
    }

    #[test]
    fn universal_has_zero_specificity() {
        let s = spec_of("*");
        assert_eq!((s.id_count, s.class_count, s.type_count), (0, 0, 0));
    }

    #[test]
    fn id_beats_classes_beats_types() {
        assert!(spec_of("#a") > spec_of(".a.b.c"));
        assert!(spec_of(".a") > spec_of("Column Row Text"));
        assert!(spec_of("[title]") > spec_of("Panel"));
    }

    #[test]
    fn user_and_important_dominate() {
        let sheet = parse_css("#a { color: red; } Text { color: blue; }").unwrap();
        let default_id = Specificity::from_selector(&sheet.rules[0].selectors[0], 0, true, false);
        let user_type = Specificity::from_selector(&sheet.rules[1].selectors[0], 1, false, false);
        assert!(user_type > default_id);
        assert!(!user_type.is_default());
        assert!(default_id.is_default());

        let important_default = default_id.with_important(true);
        assert!(important_default > Specificity::from_selector(&sheet.rules[1].selectors[0], 1, true, false));
    }

    #[test]
    fn later_source_order_breaks_ties() {
        let sheet = parse_css("Text { color: red; }").unwrap();
        let sel = &sheet.rules[0].selectors[0];
        assert!(Specificity::from_selector(sel, 2, false, false) > Specificity::from_selector(sel, 1, false, false));
    }
}
