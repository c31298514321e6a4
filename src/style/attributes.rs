//! Named string attributes exposed to the cascade matcher.

use std::collections::BTreeMap;

/// Attribute name to string value, matched by `[name]` and `[name=value]`
/// selectors.
///
/// Keys are unique. Inserting an existing key replaces its value, so merging
/// more specific attributes last lets them win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleAttributes {
    entries: BTreeMap<String, String>,
}

impl StyleAttributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Whether the attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Overlay `other` on top of `self`; keys present in both take `other`'s value.
    pub fn merge(mut self, other: &StyleAttributes) -> StyleAttributes {
        for (name, value) in &other.entries {
            self.entries.insert(name.clone(), value.clone());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = StyleAttributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_existing_key() {
        let mut attrs = StyleAttributes::new();
        attrs.insert("title", "a");
        attrs.insert("title", "b");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("title"), Some("b"));
    }

    #[test]
    fn merge_prefers_later_values() {
        let base = StyleAttributes::new().with("title", "base").with("label", "x");
        let declared = StyleAttributes::new().with("title", "declared");
        let merged = base.merge(&declared);
        assert_eq!(merged.get("title"), Some("declared"));
        assert_eq!(merged.get("label"), Some("x"));
    }

    #[test]
    fn from_iter_and_lookup() {
        let attrs: StyleAttributes = [("b", "2"), ("a", "1")].into_iter().collect();
        assert!(attrs.contains("a"));
        assert!(!attrs.contains("c"));
        let names: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
