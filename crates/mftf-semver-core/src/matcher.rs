//! Key-based matching of collections across two trees.
//!
//! Items are "the same" iff their keys are equal; declaration order never
//! matters. All outputs are ordered by key.

use crate::model::{Attributes, Keyed, KeyedItem};
use std::collections::BTreeSet;

/// Partition of two keyed collections
#[derive(Debug)]
pub struct Matched<'a, T> {
    /// Items present only in "before"
    pub removed: Vec<&'a T>,
    /// Items present only in "after"
    pub added: Vec<&'a T>,
    /// `(before, after)` pairs sharing a key
    pub pairs: Vec<(&'a T, &'a T)>,
}

impl<T> Matched<'_, T> {
    /// True when nothing was added or removed
    pub fn is_aligned(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// Match two keyed collections by exact key equality
pub fn match_keyed<'a, T: KeyedItem>(
    before: &'a Keyed<T>,
    after: &'a Keyed<T>,
) -> Matched<'a, T> {
    let mut removed = Vec::new();
    let mut pairs = Vec::new();
    for item in before.iter() {
        match after.get(item.key()) {
            Some(other) => pairs.push((item, other)),
            None => removed.push(item),
        }
    }
    let added = after
        .iter()
        .filter(|item| !before.contains_key(item.key()))
        .collect();
    Matched {
        removed,
        added,
        pairs,
    }
}

/// A single attribute that differs between two attribute maps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDelta<'a> {
    pub name: &'a str,
    pub before: Option<&'a str>,
    pub after: Option<&'a str>,
}

/// Compare two attribute maps
///
/// Every attribute whose value differs, appears or disappears yields one
/// delta, ordered by attribute name.
pub fn diff_attributes<'a>(
    before: &'a Attributes,
    after: &'a Attributes,
) -> Vec<AttributeDelta<'a>> {
    let names: BTreeSet<&str> = before
        .keys()
        .chain(after.keys())
        .map(String::as_str)
        .collect();
    names
        .into_iter()
        .filter_map(|name| {
            let old = before.get(name).map(String::as_str);
            let new = after.get(name).map(String::as_str);
            (old != new).then_some(AttributeDelta {
                name,
                before: old,
                after: new,
            })
        })
        .collect()
}

/// Compare two value sets
///
/// Returns `(added, removed)` where added = in after but not before.
pub fn set_delta<'a>(
    before: &'a BTreeSet<String>,
    after: &'a BTreeSet<String>,
) -> (Vec<&'a str>, Vec<&'a str>) {
    let added = after.difference(before).map(String::as_str).collect();
    let removed = before.difference(after).map(String::as_str).collect();
    (added, removed)
}
