//! Keyed child collections.

use crate::errors::{MalformedArtifactError, Result};
use crate::model::ArtifactKind;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// An item that carries its own identifying key
pub trait KeyedItem {
    fn key(&self) -> &str;
}

/// A collection of items identified by unique string keys
///
/// Iteration is always in key order, so any walk over a collection is
/// independent of the order in which items were declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyed<T> {
    items: BTreeMap<String, T>,
}

impl<T> Default for Keyed<T> {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }
}

/// Where a collection lives, for construction error messages
#[derive(Debug, Clone, Copy)]
pub(crate) struct CollectionContext<'a> {
    pub kind: ArtifactKind,
    pub entity: &'a str,
    pub collection: &'a str,
}

impl CollectionContext<'_> {
    pub(crate) fn missing_identifier(&self) -> MalformedArtifactError {
        MalformedArtifactError::MissingIdentifier {
            kind: self.kind,
            entity: self.entity.to_string(),
            collection: self.collection.to_string(),
        }
    }

    pub(crate) fn duplicate_key(&self, key: &str) -> MalformedArtifactError {
        MalformedArtifactError::DuplicateKey {
            kind: self.kind,
            entity: self.entity.to_string(),
            collection: self.collection.to_string(),
            key: key.to_string(),
        }
    }
}

/// Reject an entity whose name is empty
pub(crate) fn require_name(kind: ArtifactKind, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(MalformedArtifactError::MissingIdentifier {
            kind,
            entity: String::new(),
            collection: "name".to_string(),
        });
    }
    Ok(())
}

impl<T: KeyedItem> Keyed<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a keyed collection, rejecting empty and duplicate keys
    pub(crate) fn try_from_items(
        items: impl IntoIterator<Item = T>,
        ctx: CollectionContext<'_>,
    ) -> Result<Self> {
        let mut keyed = Self::new();
        for item in items {
            if item.key().is_empty() {
                return Err(ctx.missing_identifier());
            }
            let key = item.key().to_string();
            if !keyed.insert_new(item) {
                return Err(ctx.duplicate_key(&key));
            }
        }
        Ok(keyed)
    }

    /// Build a sequential collection, where repeated keys collapse onto the
    /// first occurrence
    pub(crate) fn try_from_sequence(
        items: impl IntoIterator<Item = T>,
        ctx: CollectionContext<'_>,
    ) -> Result<Self> {
        let mut keyed = Self::new();
        for item in items {
            if item.key().is_empty() {
                return Err(ctx.missing_identifier());
            }
            keyed.items.entry(item.key().to_string()).or_insert(item);
        }
        Ok(keyed)
    }

    /// Insert an item under a fresh key; false if the key is taken
    pub(crate) fn insert_new(&mut self, item: T) -> bool {
        match self.items.entry(item.key().to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(item);
                true
            }
        }
    }

    /// Get an item by key
    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.get(key)
    }

    /// Check if a key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Iterate items in key order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// Iterate keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
