//! Typed entity model for MFTF artifact trees.
//!
//! Six artifact kinds are modelled, each with its own nested child
//! collections. Every collection is keyed: items are identified by a string
//! key, never by position. Entities are assembled through builders that
//! validate keys once, and are immutable afterwards.

pub mod action_group;
pub mod collection;
pub mod data;
pub mod kind;
pub mod metadata;
pub mod page;
pub mod section;
pub mod step;
pub mod tree;

use std::collections::BTreeMap;

/// Scalar attributes of an entity or child item, ordered by name
pub type Attributes = BTreeMap<String, String>;

pub use action_group::{ActionGroup, ActionGroupBuilder, Argument};
pub use collection::{Keyed, KeyedItem};
pub use data::{
    ArrayItem, DataArray, DataEntity, DataEntityBuilder, DataField, DataVar, RequiredEntity,
};
pub use kind::ArtifactKind;
pub use metadata::{FieldNode, Operation, OperationBuilder, OperationField};
pub use page::{Page, PageBuilder, SectionRef};
pub use section::{Element, Section, SectionBuilder};
pub use step::Step;
pub use test::{AnnotationValue, Annotations, RemoveAction, Test, TestBuilder};
pub use tree::{ArtifactTree, Entity, KindSlot, TreeBuilder};
