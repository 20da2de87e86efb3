use super::children::{diff_keyed_children, ChildShapes};
use super::{Differ, EntityPath, Recorder};
use crate::model::{ArtifactKind, ArtifactTree, Attributes, KindSlot, Section};
use crate::taxonomy::SectionChange;

/// Differ for `<section>` entities
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionDiffer;

impl Differ for SectionDiffer {
    type Entity = Section;

    const KIND: ArtifactKind = ArtifactKind::Section;

    fn slot(tree: &ArtifactTree) -> &KindSlot<Section> {
        tree.sections()
    }

    fn attributes(entity: &Section) -> &Attributes {
        &entity.attributes
    }

    fn diff_children(
        &self,
        before: &Section,
        after: &Section,
        path: &EntityPath,
        out: &mut Recorder<'_>,
    ) {
        diff_keyed_children(
            &before.elements,
            &after.elements,
            &path.child("Elements"),
            ChildShapes {
                added: SectionChange::ElementAdded.into(),
                removed: SectionChange::ElementRemoved.into(),
                changed: SectionChange::ElementChanged.into(),
            },
            |element| &element.attributes,
            out,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Element;

    #[test]
    fn test_element_selector_change_is_patch() {
        let before = Section::builder("AdminLogin")
            .element(Element::new("username").attribute("selector", "#user"))
            .build()
            .unwrap();
        let after = Section::builder("AdminLogin")
            .element(Element::new("username").attribute("selector", "#login"))
            .build()
            .unwrap();

        let records = SectionDiffer.diff("AdminLogin", Some(&before), Some(&after));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "M217");
        assert_eq!(records[0].path, "AdminLogin/Elements/username/selector");
    }

    #[test]
    fn test_added_section_does_not_recurse() {
        let after = Section::builder("AdminLogin")
            .element(Element::new("username"))
            .element(Element::new("password"))
            .build()
            .unwrap();
        let records = SectionDiffer.diff("AdminLogin", None, Some(&after));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "M235");
    }
}
