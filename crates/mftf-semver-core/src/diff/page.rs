use super::children::{diff_keyed_children, ChildShapes};
use super::{Differ, EntityPath, Recorder};
use crate::model::{ArtifactKind, ArtifactTree, Attributes, KindSlot, Page};
use crate::taxonomy::PageChange;

/// Differ for `<page>` entities
#[derive(Debug, Clone, Copy, Default)]
pub struct PageDiffer;

impl Differ for PageDiffer {
    type Entity = Page;

    const KIND: ArtifactKind = ArtifactKind::Page;

    fn slot(tree: &ArtifactTree) -> &KindSlot<Page> {
        tree.pages()
    }

    fn attributes(entity: &Page) -> &Attributes {
        &entity.attributes
    }

    fn diff_children(
        &self,
        before: &Page,
        after: &Page,
        path: &EntityPath,
        out: &mut Recorder<'_>,
    ) {
        diff_keyed_children(
            &before.sections,
            &after.sections,
            &path.child("Sections"),
            ChildShapes {
                added: PageChange::SectionAdded.into(),
                removed: PageChange::SectionRemoved.into(),
                changed: PageChange::SectionChanged.into(),
            },
            |section| &section.attributes,
            out,
        );
    }
}
