//! Element registry: where every element landed in the last frame.
//!
//! Containers register each child's rect after rendering it. The event router
//! reads the registry to hit-test mouse events and to build the focus chain.
//! A fresh registry is built every frame, so entries never outlive the frame
//! that produced them.

use std::fmt;

use slotmap::{new_key_type, SlotMap};

use crate::geometry::{Position, Rect};

new_key_type! {
    /// Handle to one registration in an [`ElementRegistry`].
    pub struct ElementKey;
}

// ---------------------------------------------------------------------------
// ElementPath
// ---------------------------------------------------------------------------

/// Child-index route from the root element.
///
/// The root has the empty path. Paths order lexicographically, which is
/// depth-first pre-order over the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementPath(Vec<usize>);

impl ElementPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// The path of child `index` below this one.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// The enclosing path, `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `self` is a strict ancestor of `other`.
    pub fn is_ancestor_of(&self, other: &ElementPath) -> bool {
        other.0.len() > self.0.len() && other.0.starts_with(&self.0)
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl From<Vec<usize>> for ElementPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// RegisteredElement
// ---------------------------------------------------------------------------

/// What the registry remembers about one rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredElement {
    pub path: ElementPath,
    pub area: Rect,
    pub type_name: &'static str,
    pub id: Option<String>,
    pub focusable: bool,
    pub draggable: bool,
}

// ---------------------------------------------------------------------------
// ElementRegistry
// ---------------------------------------------------------------------------

/// Registrations of one frame, in the order they were made.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    entries: SlotMap<ElementKey, RegisteredElement>,
    order: Vec<ElementKey>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: RegisteredElement) -> ElementKey {
        let key = self.entries.insert(entry);
        self.order.push(key);
        key
    }

    pub fn get(&self, key: ElementKey) -> Option<&RegisteredElement> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredElement> {
        self.order.iter().filter_map(|key| self.entries.get(*key))
    }

    /// The latest registration for `path`.
    pub fn entry_at(&self, path: &ElementPath) -> Option<&RegisteredElement> {
        self.iter().filter(|entry| &entry.path == path).last()
    }

    /// The first registration carrying `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&RegisteredElement> {
        self.iter().find(|entry| entry.id.as_deref() == Some(id))
    }

    /// The deepest element whose area contains `position`.
    ///
    /// When several entries of the same depth contain the point, the one
    /// registered last wins, since it was drawn on top.
    pub fn hit_test(&self, position: Position) -> Option<&RegisteredElement> {
        let mut best: Option<&RegisteredElement> = None;
        for entry in self.iter().filter(|entry| entry.area.contains(position)) {
            match best {
                Some(current) if current.path.depth() > entry.path.depth() => {}
                _ => best = Some(entry),
            }
        }
        best
    }

    /// Focusable paths in depth-first order, without duplicates.
    ///
    /// Elements squeezed to a zero-size area stay registered but are left
    /// out, so Tab never lands on something invisible.
    pub fn focus_chain(&self) -> Vec<ElementPath> {
        let mut chain: Vec<ElementPath> = self
            .iter()
            .filter(|entry| entry.focusable && !entry.area.is_empty())
            .map(|entry| entry.path.clone())
            .collect();
        chain.sort();
        chain.dedup();
        chain
    }
}
