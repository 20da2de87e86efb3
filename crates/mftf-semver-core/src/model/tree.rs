//! Artifact trees and their builder.

use super::{
    ActionGroup, ArtifactKind, DataEntity, Keyed, KeyedItem, Operation, Page, Section, Test,
};
use crate::errors::{MalformedArtifactError, Result};
use std::collections::BTreeMap;

/// One artifact entity of any kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    ActionGroup(ActionGroup),
    Test(Test),
    Page(Page),
    Section(Section),
    Data(DataEntity),
    Metadata(Operation),
}

impl Entity {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Entity::ActionGroup(_) => ArtifactKind::ActionGroup,
            Entity::Test(_) => ArtifactKind::Test,
            Entity::Page(_) => ArtifactKind::Page,
            Entity::Section(_) => ArtifactKind::Section,
            Entity::Data(_) => ArtifactKind::Data,
            Entity::Metadata(_) => ArtifactKind::Metadata,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entity::ActionGroup(e) => e.key(),
            Entity::Test(e) => e.key(),
            Entity::Page(e) => e.key(),
            Entity::Section(e) => e.key(),
            Entity::Data(e) => e.key(),
            Entity::Metadata(e) => e.key(),
        }
    }
}

macro_rules! impl_from_entity {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Entity {
                fn from(entity: $ty) -> Self {
                    Entity::$variant(entity)
                }
            }
        )*
    };
}

impl_from_entity! {
    ActionGroup => ActionGroup,
    Test => Test,
    Page => Page,
    Section => Section,
    Data => DataEntity,
    Metadata => Operation,
}

/// Entities of one kind, or the error that stopped the kind from being built
pub type KindSlot<T> = std::result::Result<Keyed<T>, MalformedArtifactError>;

/// A complete, immutable artifact tree ("before" or "after")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactTree {
    action_groups: KindSlot<ActionGroup>,
    tests: KindSlot<Test>,
    pages: KindSlot<Page>,
    sections: KindSlot<Section>,
    data: KindSlot<DataEntity>,
    metadata: KindSlot<Operation>,
}

impl Default for ArtifactTree {
    fn default() -> Self {
        Self {
            action_groups: Ok(Keyed::new()),
            tests: Ok(Keyed::new()),
            pages: Ok(Keyed::new()),
            sections: Ok(Keyed::new()),
            data: Ok(Keyed::new()),
            metadata: Ok(Keyed::new()),
        }
    }
}

impl ArtifactTree {
    /// An empty tree with every kind present and empty
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> TreeBuilder {
        TreeBuilder::default()
    }

    pub fn action_groups(&self) -> &KindSlot<ActionGroup> {
        &self.action_groups
    }

    pub fn tests(&self) -> &KindSlot<Test> {
        &self.tests
    }

    pub fn pages(&self) -> &KindSlot<Page> {
        &self.pages
    }

    pub fn sections(&self) -> &KindSlot<Section> {
        &self.sections
    }

    pub fn data(&self) -> &KindSlot<DataEntity> {
        &self.data
    }

    pub fn metadata(&self) -> &KindSlot<Operation> {
        &self.metadata
    }

    /// Construction error recorded for a kind, if any
    pub fn kind_error(&self, kind: ArtifactKind) -> Option<&MalformedArtifactError> {
        match kind {
            ArtifactKind::ActionGroup => self.action_groups.as_ref().err(),
            ArtifactKind::Test => self.tests.as_ref().err(),
            ArtifactKind::Page => self.pages.as_ref().err(),
            ArtifactKind::Section => self.sections.as_ref().err(),
            ArtifactKind::Data => self.data.as_ref().err(),
            ArtifactKind::Metadata => self.metadata.as_ref().err(),
        }
    }

    /// Number of entities of a kind (zero for a failed kind)
    pub fn entity_count(&self, kind: ArtifactKind) -> usize {
        fn count<T>(slot: &KindSlot<T>) -> usize
        where
            T: KeyedItem,
        {
            slot.as_ref().map(Keyed::len).unwrap_or(0)
        }
        match kind {
            ArtifactKind::ActionGroup => count(&self.action_groups),
            ArtifactKind::Test => count(&self.tests),
            ArtifactKind::Page => count(&self.pages),
            ArtifactKind::Section => count(&self.sections),
            ArtifactKind::Data => count(&self.data),
            ArtifactKind::Metadata => count(&self.metadata),
        }
    }
}

/// Assembles an [`ArtifactTree`] from parser output
///
/// Entity-level construction failures are recorded against their kind
/// rather than aborting the whole tree; the first failure of a kind wins.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    entities: BTreeMap<ArtifactKind, Vec<Entity>>,
    errors: BTreeMap<ArtifactKind, MalformedArtifactError>,
}

impl TreeBuilder {
    /// Add a constructed entity
    pub fn add(mut self, entity: impl Into<Entity>) -> Self {
        let entity = entity.into();
        self.entities.entry(entity.kind()).or_default().push(entity);
        self
    }

    /// Add the outcome of an entity builder
    ///
    /// A failed build marks the entity's kind as malformed.
    pub fn add_result<E>(self, result: Result<E>) -> Self
    where
        E: Into<Entity>,
    {
        match result {
            Ok(entity) => self.add(entity),
            Err(err) => self.fail(err),
        }
    }

    /// Mark a kind as malformed
    pub fn fail(mut self, err: MalformedArtifactError) -> Self {
        self.errors.entry(err.artifact_kind()).or_insert(err);
        self
    }

    pub fn build(mut self) -> ArtifactTree {
        let mut tree = ArtifactTree::default();
        for kind in ArtifactKind::ALL {
            let entities = self.entities.remove(&kind).unwrap_or_default();
            if let Some(err) = self.errors.remove(&kind) {
                tree.set_failed(err);
                continue;
            }
            if let Err(err) = tree.fill(kind, entities) {
                tree.set_failed(err);
            }
        }
        tree
    }
}

impl ArtifactTree {
    fn set_failed(&mut self, err: MalformedArtifactError) {
        match err.artifact_kind() {
            ArtifactKind::ActionGroup => self.action_groups = Err(err),
            ArtifactKind::Test => self.tests = Err(err),
            ArtifactKind::Page => self.pages = Err(err),
            ArtifactKind::Section => self.sections = Err(err),
            ArtifactKind::Data => self.data = Err(err),
            ArtifactKind::Metadata => self.metadata = Err(err),
        }
    }

    fn fill(&mut self, kind: ArtifactKind, entities: Vec<Entity>) -> Result<()> {
        for entity in entities {
            let name = entity.name().to_string();
            let inserted = match entity {
                Entity::ActionGroup(e) => insert(&mut self.action_groups, e),
                Entity::Test(e) => insert(&mut self.tests, e),
                Entity::Page(e) => insert(&mut self.pages, e),
                Entity::Section(e) => insert(&mut self.sections, e),
                Entity::Data(e) => insert(&mut self.data, e),
                Entity::Metadata(e) => insert(&mut self.metadata, e),
            };
            if !inserted {
                return Err(MalformedArtifactError::DuplicateEntity { kind, name });
            }
        }
        Ok(())
    }
}

/// Insert into a healthy slot; false if the name is already taken
fn insert<T: KeyedItem>(slot: &mut KindSlot<T>, entity: T) -> bool {
    match slot {
        Ok(keyed) => keyed.insert_new(entity),
        Err(_) => true,
    }
}
