//! Per-kind structural differs.
//!
//! Each artifact kind has one [`Differ`]. A differ compares one entity from
//! the "before" tree with its namesake from the "after" tree and returns the
//! classified changes by value:
//!
//! - only in "after": a single "added" record at the entity path;
//! - only in "before": a single "removed" record at the entity path;
//! - in both: one record per differing entity attribute, then every child
//!   collection is matched by key and compared level by level.
//!
//! A removed or added parent never emits records for its children.

mod children;
mod record;
mod steps;

pub mod action_group;
pub mod data;
pub mod metadata;
pub mod page;
pub mod section;

pub use action_group::ActionGroupDiffer;
pub use data::DataDiffer;
pub use metadata::MetadataDiffer;
pub use page::PageDiffer;
pub use record::{ChangeRecord, EntityPath, Recorder};
pub use section::SectionDiffer;
pub use test::TestDiffer;

use crate::matcher::{diff_attributes, match_keyed};
use crate::model::{ArtifactKind, ArtifactTree, Attributes, Keyed, KeyedItem, KindSlot};
use crate::taxonomy::ChangeShape;

/// Structural comparison of one artifact kind
pub trait Differ {
    type Entity: KeyedItem;

    const KIND: ArtifactKind;

    /// Slot of this kind in a tree
    fn slot(tree: &ArtifactTree) -> &KindSlot<Self::Entity>;

    /// Entity-level attributes
    fn attributes(entity: &Self::Entity) -> &Attributes;

    /// Compare the child collections of two entities sharing a name
    fn diff_children(
        &self,
        before: &Self::Entity,
        after: &Self::Entity,
        path: &EntityPath,
        out: &mut Recorder<'_>,
    );

    /// Compare one entity across both trees
    fn diff(
        &self,
        name: &str,
        before: Option<&Self::Entity>,
        after: Option<&Self::Entity>,
    ) -> Vec<ChangeRecord> {
        let mut out = Recorder::new(name);
        let path = EntityPath::root(name);
        match (before, after) {
            (None, Some(_)) => out.emit(ChangeShape::entity_added(Self::KIND), &path, name),
            (Some(_), None) => out.emit(ChangeShape::entity_removed(Self::KIND), &path, name),
            (Some(before), Some(after)) => {
                for delta in diff_attributes(Self::attributes(before), Self::attributes(after)) {
                    out.emit(
                        ChangeShape::attribute_changed(Self::KIND),
                        &path.child(delta.name),
                        delta.name,
                    );
                }
                self.diff_children(before, after, &path, &mut out);
            }
            (None, None) => {}
        }
        out.into_records()
    }

    /// Compare every entity of this kind, in name order
    fn diff_collection(
        &self,
        before: &Keyed<Self::Entity>,
        after: &Keyed<Self::Entity>,
    ) -> Vec<ChangeRecord> {
        let matched = match_keyed(before, after);
        let mut records = Vec::new();
        for entity in matched.removed {
            records.extend(self.diff(entity.key(), Some(entity), None));
        }
        for entity in matched.added {
            records.extend(self.diff(entity.key(), None, Some(entity)));
        }
        for (old, new) in matched.pairs {
            records.extend(self.diff(old.key(), Some(old), Some(new)));
        }
        records
    }
}
