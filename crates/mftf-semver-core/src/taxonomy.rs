//! Closed change taxonomy.
//!
//! Every change shape a differ can produce is a variant of [`ChangeShape`].
//! [`entry`] maps each variant to its stable code, severity and message
//! template. The match is exhaustive, so a shape without a table entry does
//! not compile.
//!
//! Codes are an external contract: a code is never reused for another shape,
//! and new shapes receive new codes.

use crate::model::ArtifactKind;
use serde::{Deserialize, Serialize};

/// Semantic-versioning severity of a single change
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Internal or behavioural tweak, non-breaking
    Patch,
    /// Additive, non-breaking
    Minor,
    /// Breaking
    Major,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Patch => "PATCH",
            Severity::Minor => "MINOR",
            Severity::Major => "MAJOR",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionGroupChange {
    Added,
    Removed,
    AttributeChanged,
    ArgumentAdded,
    ArgumentRemoved,
    ArgumentChanged,
    ActionAdded,
    ActionRemoved,
    ActionChanged,
    ActionTypeChanged,
    ActionGroupRefChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestChange {
    Added,
    Removed,
    AttributeChanged,
    ActionAdded,
    ActionRemoved,
    ActionChanged,
    ActionTypeChanged,
    ActionGroupRefChanged,
    AnnotationAdded,
    /// Scalar annotation removed or its value changed
    AnnotationChanged,
    GroupAdded,
    GroupRemoved,
    RemoveActionAdded,
    RemoveActionRemoved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PageChange {
    Added,
    Removed,
    AttributeChanged,
    SectionAdded,
    SectionRemoved,
    SectionChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionChange {
    Added,
    Removed,
    AttributeChanged,
    ElementAdded,
    ElementRemoved,
    ElementChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataChange {
    Added,
    Removed,
    AttributeChanged,
    FieldAdded,
    FieldRemoved,
    FieldChanged,
    ArrayAdded,
    ArrayRemoved,
    ArrayItemAdded,
    ArrayItemRemoved,
    RequiredEntityAdded,
    RequiredEntityRemoved,
    RequiredEntityChanged,
    VarAdded,
    VarRemoved,
    VarChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetadataChange {
    Added,
    Removed,
    AttributeChanged,
    ChildAdded,
    ChildRemoved,
    ChildChanged,
}

/// A structural edit pattern scoped to one artifact kind and nesting level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeShape {
    ActionGroup(ActionGroupChange),
    Test(TestChange),
    Page(PageChange),
    Section(SectionChange),
    Data(DataChange),
    Metadata(MetadataChange),
}

impl ChangeShape {
    /// Every shape in the taxonomy
    pub const ALL: [ChangeShape; 59] = {
        use ActionGroupChange as A;
        use ChangeShape as S;
        use DataChange as D;
        use MetadataChange as M;
        use PageChange as P;
        use SectionChange as C;
        use TestChange as T;
        [
            S::ActionGroup(A::Added),
            S::ActionGroup(A::Removed),
            S::ActionGroup(A::AttributeChanged),
            S::ActionGroup(A::ArgumentAdded),
            S::ActionGroup(A::ArgumentRemoved),
            S::ActionGroup(A::ArgumentChanged),
            S::ActionGroup(A::ActionAdded),
            S::ActionGroup(A::ActionRemoved),
            S::ActionGroup(A::ActionChanged),
            S::ActionGroup(A::ActionTypeChanged),
            S::ActionGroup(A::ActionGroupRefChanged),
            S::Test(T::Added),
            S::Test(T::Removed),
            S::Test(T::AttributeChanged),
            S::Test(T::ActionAdded),
            S::Test(T::ActionRemoved),
            S::Test(T::ActionChanged),
            S::Test(T::ActionTypeChanged),
            S::Test(T::ActionGroupRefChanged),
            S::Test(T::AnnotationAdded),
            S::Test(T::AnnotationChanged),
            S::Test(T::GroupAdded),
            S::Test(T::GroupRemoved),
            S::Test(T::RemoveActionAdded),
            S::Test(T::RemoveActionRemoved),
            S::Page(P::Added),
            S::Page(P::Removed),
            S::Page(P::AttributeChanged),
            S::Page(P::SectionAdded),
            S::Page(P::SectionRemoved),
            S::Page(P::SectionChanged),
            S::Section(C::Added),
            S::Section(C::Removed),
            S::Section(C::AttributeChanged),
            S::Section(C::ElementAdded),
            S::Section(C::ElementRemoved),
            S::Section(C::ElementChanged),
            S::Data(D::Added),
            S::Data(D::Removed),
            S::Data(D::AttributeChanged),
            S::Data(D::FieldAdded),
            S::Data(D::FieldRemoved),
            S::Data(D::FieldChanged),
            S::Data(D::ArrayAdded),
            S::Data(D::ArrayRemoved),
            S::Data(D::ArrayItemAdded),
            S::Data(D::ArrayItemRemoved),
            S::Data(D::RequiredEntityAdded),
            S::Data(D::RequiredEntityRemoved),
            S::Data(D::RequiredEntityChanged),
            S::Data(D::VarAdded),
            S::Data(D::VarRemoved),
            S::Data(D::VarChanged),
            S::Metadata(M::Added),
            S::Metadata(M::Removed),
            S::Metadata(M::AttributeChanged),
            S::Metadata(M::ChildAdded),
            S::Metadata(M::ChildRemoved),
            S::Metadata(M::ChildChanged),
        ]
    };

    pub fn kind(&self) -> ArtifactKind {
        match self {
            ChangeShape::ActionGroup(_) => ArtifactKind::ActionGroup,
            ChangeShape::Test(_) => ArtifactKind::Test,
            ChangeShape::Page(_) => ArtifactKind::Page,
            ChangeShape::Section(_) => ArtifactKind::Section,
            ChangeShape::Data(_) => ArtifactKind::Data,
            ChangeShape::Metadata(_) => ArtifactKind::Metadata,
        }
    }

    /// "Entity added" shape of a kind
    pub fn entity_added(kind: ArtifactKind) -> Self {
        match kind {
            ArtifactKind::ActionGroup => ChangeShape::ActionGroup(ActionGroupChange::Added),
            ArtifactKind::Test => ChangeShape::Test(TestChange::Added),
            ArtifactKind::Page => ChangeShape::Page(PageChange::Added),
            ArtifactKind::Section => ChangeShape::Section(SectionChange::Added),
            ArtifactKind::Data => ChangeShape::Data(DataChange::Added),
            ArtifactKind::Metadata => ChangeShape::Metadata(MetadataChange::Added),
        }
    }

    /// "Entity removed" shape of a kind
    pub fn entity_removed(kind: ArtifactKind) -> Self {
        match kind {
            ArtifactKind::ActionGroup => ChangeShape::ActionGroup(ActionGroupChange::Removed),
            ArtifactKind::Test => ChangeShape::Test(TestChange::Removed),
            ArtifactKind::Page => ChangeShape::Page(PageChange::Removed),
            ArtifactKind::Section => ChangeShape::Section(SectionChange::Removed),
            ArtifactKind::Data => ChangeShape::Data(DataChange::Removed),
            ArtifactKind::Metadata => ChangeShape::Metadata(MetadataChange::Removed),
        }
    }

    /// "Entity attribute changed" shape of a kind
    pub fn attribute_changed(kind: ArtifactKind) -> Self {
        match kind {
            ArtifactKind::ActionGroup => {
                ChangeShape::ActionGroup(ActionGroupChange::AttributeChanged)
            }
            ArtifactKind::Test => ChangeShape::Test(TestChange::AttributeChanged),
            ArtifactKind::Page => ChangeShape::Page(PageChange::AttributeChanged),
            ArtifactKind::Section => ChangeShape::Section(SectionChange::AttributeChanged),
            ArtifactKind::Data => ChangeShape::Data(DataChange::AttributeChanged),
            ArtifactKind::Metadata => ChangeShape::Metadata(MetadataChange::AttributeChanged),
        }
    }

    /// Taxonomy entry of this shape
    pub fn entry(&self) -> TaxonomyEntry {
        entry(*self)
    }
}

impl From<ActionGroupChange> for ChangeShape {
    fn from(change: ActionGroupChange) -> Self {
        ChangeShape::ActionGroup(change)
    }
}

impl From<TestChange> for ChangeShape {
    fn from(change: TestChange) -> Self {
        ChangeShape::Test(change)
    }
}

impl From<PageChange> for ChangeShape {
    fn from(change: PageChange) -> Self {
        ChangeShape::Page(change)
    }
}

impl From<SectionChange> for ChangeShape {
    fn from(change: SectionChange) -> Self {
        ChangeShape::Section(change)
    }
}

impl From<DataChange> for ChangeShape {
    fn from(change: DataChange) -> Self {
        ChangeShape::Data(change)
    }
}

impl From<MetadataChange> for ChangeShape {
    fn from(change: MetadataChange) -> Self {
        ChangeShape::Metadata(change)
    }
}

/// One row of the taxonomy table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxonomyEntry {
    /// Stable external code (`M200`, ...)
    pub code: &'static str,
    pub severity: Severity,
    /// Message template; `{entity}` and `{target}` are substituted
    pub template: &'static str,
}

impl TaxonomyEntry {
    const fn new(code: &'static str, severity: Severity, template: &'static str) -> Self {
        Self {
            code,
            severity,
            template,
        }
    }

    /// Render the message for a change at `target` inside `entity`
    pub fn render(&self, entity: &str, target: &str) -> String {
        self.template
            .replace("{entity}", entity)
            .replace("{target}", target)
    }
}

/// Look up the taxonomy entry of a change shape
pub fn entry(shape: ChangeShape) -> TaxonomyEntry {
    use Severity::{Major, Minor, Patch};
    let e = TaxonomyEntry::new;
    match shape {
        ChangeShape::ActionGroup(change) => match change {
            ActionGroupChange::Removed => e("M200", Major, "<actionGroup> {entity} was removed"),
            ActionGroupChange::ArgumentRemoved => {
                e("M201", Major, "<actionGroup> <argument> {target} was removed")
            }
            ActionGroupChange::ActionRemoved => {
                e("M202", Major, "<actionGroup> <action> {target} was removed")
            }
            ActionGroupChange::ArgumentChanged => {
                e("M203", Major, "<actionGroup> <argument> {target} was changed")
            }
            ActionGroupChange::ActionChanged => {
                e("M204", Patch, "<actionGroup> <action> {target} was changed")
            }
            ActionGroupChange::ActionTypeChanged => {
                e("M223", Patch, "<actionGroup> <action> {target} type was changed")
            }
            ActionGroupChange::Added => e("M225", Minor, "<actionGroup> {entity} was added"),
            ActionGroupChange::ActionAdded => {
                e("M226", Minor, "<actionGroup> <action> {target} was added")
            }
            ActionGroupChange::ArgumentAdded => {
                e("M227", Major, "<actionGroup> <argument> {target} was added")
            }
            ActionGroupChange::AttributeChanged => e(
                "M242",
                Patch,
                "<actionGroup> {entity} attribute {target} was changed",
            ),
            ActionGroupChange::ActionGroupRefChanged => e(
                "M243",
                Major,
                "<actionGroup> <actionGroup> {target} ref was changed",
            ),
        },
        ChangeShape::Test(change) => match change {
            TestChange::Removed => e("M218", Major, "<test> {entity} was removed"),
            TestChange::ActionRemoved => e("M219", Major, "<test> <action> {target} was removed"),
            TestChange::GroupRemoved => e(
                "M220",
                Major,
                "<test> <annotation> <group> {target} was removed",
            ),
            TestChange::AnnotationChanged => e(
                "M221",
                Patch,
                "<test> <annotation> {target} was removed or changed",
            ),
            TestChange::ActionChanged => e("M222", Patch, "<test> <action> {target} was changed"),
            TestChange::ActionTypeChanged => {
                e("M224", Patch, "<test> <action> {target} type was changed")
            }
            TestChange::Added => e("M237", Minor, "<test> {entity} was added"),
            TestChange::ActionAdded => e("M238", Minor, "<test> <action> {target} was added"),
            TestChange::ActionGroupRefChanged => {
                e("M241", Major, "<test> <actionGroup> {target} ref was changed")
            }
            TestChange::AttributeChanged => {
                e("M244", Patch, "<test> {entity} attribute {target} was changed")
            }
            TestChange::AnnotationAdded => {
                e("M245", Patch, "<test> <annotation> {target} was added")
            }
            TestChange::GroupAdded => e(
                "M246",
                Minor,
                "<test> <annotation> <group> {target} was added",
            ),
            TestChange::RemoveActionAdded => {
                e("M401", Major, "<test> <remove action> {target} was added")
            }
            TestChange::RemoveActionRemoved => {
                e("M402", Minor, "<test> <remove action> {target} was removed")
            }
        },
        ChangeShape::Page(change) => match change {
            PageChange::Removed => e("M213", Major, "<page> {entity} was removed"),
            PageChange::SectionRemoved => {
                e("M214", Major, "<page> <section> {target} was removed")
            }
            PageChange::Added => e("M233", Minor, "<page> {entity} was added"),
            PageChange::SectionAdded => e("M234", Minor, "<page> <section> {target} was added"),
            PageChange::AttributeChanged => {
                e("M254", Patch, "<page> {entity} attribute {target} was changed")
            }
            PageChange::SectionChanged => {
                e("M255", Patch, "<page> <section> {target} was changed")
            }
        },
        ChangeShape::Section(change) => match change {
            SectionChange::Removed => e("M215", Major, "<section> {entity} was removed"),
            SectionChange::ElementRemoved => {
                e("M216", Major, "<section> <element> {target} was removed")
            }
            SectionChange::ElementChanged => {
                e("M217", Patch, "<section> <element> {target} was changed")
            }
            SectionChange::Added => e("M235", Minor, "<section> {entity} was added"),
            SectionChange::ElementAdded => {
                e("M236", Minor, "<section> <element> {target} was added")
            }
            SectionChange::AttributeChanged => {
                e("M256", Patch, "<section> {entity} attribute {target} was changed")
            }
        },
        ChangeShape::Data(change) => match change {
            DataChange::Removed => e("M205", Major, "<entity> {entity} was removed"),
            DataChange::ArrayRemoved => e("M206", Major, "<entity> <array> {target} was removed"),
            DataChange::ArrayItemRemoved => e(
                "M207",
                Minor,
                "<entity> <array> <item> {target} was removed",
            ),
            DataChange::FieldRemoved => e("M208", Major, "<entity> <data> {target} was removed"),
            DataChange::RequiredEntityRemoved => e(
                "M209",
                Major,
                "<entity> <required-entity> {target} was removed",
            ),
            DataChange::VarRemoved => e("M210", Major, "<entity> <var> {target} was removed"),
            DataChange::Added => e("M228", Minor, "<entity> {entity} was added"),
            DataChange::ArrayAdded => e("M229", Minor, "<entity> <array> {target} was added"),
            DataChange::FieldAdded => e("M230", Minor, "<entity> <data> {target} was added"),
            DataChange::RequiredEntityAdded => e(
                "M231",
                Patch,
                "<entity> <required-entity> {target} was added",
            ),
            DataChange::VarAdded => e("M232", Minor, "<entity> <var> {target} was added"),
            DataChange::AttributeChanged => {
                e("M247", Patch, "<entity> {entity} attribute {target} was changed")
            }
            DataChange::FieldChanged => e("M248", Patch, "<entity> <data> {target} was changed"),
            DataChange::ArrayItemAdded => {
                e("M249", Minor, "<entity> <array> <item> {target} was added")
            }
            DataChange::RequiredEntityChanged => e(
                "M250",
                Patch,
                "<entity> <required-entity> {target} was changed",
            ),
            DataChange::VarChanged => e("M251", Patch, "<entity> <var> {target} was changed"),
        },
        ChangeShape::Metadata(change) => match change {
            MetadataChange::Removed => e("M211", Major, "<operation> {entity} was removed"),
            MetadataChange::ChildRemoved => e(
                "M212",
                Major,
                "<operation> child element {target} was removed",
            ),
            MetadataChange::ChildAdded => {
                e("M239", Minor, "<operation> child element {target} was added")
            }
            MetadataChange::Added => e("M240", Minor, "<operation> {entity} was added"),
            MetadataChange::AttributeChanged => e(
                "M252",
                Patch,
                "<operation> {entity} attribute {target} was changed",
            ),
            MetadataChange::ChildChanged => e(
                "M253",
                Patch,
                "<operation> child element {target} was changed",
            ),
        },
    }
}

/// Find the shape that owns a code
pub fn shape_for_code(code: &str) -> Option<ChangeShape> {
    ChangeShape::ALL
        .iter()
        .copied()
        .find(|shape| entry(*shape).code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_every_code_is_unique() {
        let codes: BTreeSet<&str> = ChangeShape::ALL.iter().map(|s| s.entry().code).collect();
        assert_eq!(codes.len(), ChangeShape::ALL.len());
    }

    #[test]
    fn test_all_lists_every_shape_once() {
        let shapes: BTreeSet<ChangeShape> = ChangeShape::ALL.iter().copied().collect();
        assert_eq!(shapes.len(), ChangeShape::ALL.len());
    }

    #[test]
    fn test_entity_level_shapes_match_their_kind() {
        for kind in ArtifactKind::ALL {
            assert_eq!(ChangeShape::entity_added(kind).kind(), kind);
            assert_eq!(ChangeShape::entity_removed(kind).kind(), kind);
            assert_eq!(ChangeShape::attribute_changed(kind).kind(), kind);
            assert_eq!(ChangeShape::entity_added(kind).entry().severity, Severity::Minor);
            assert_eq!(ChangeShape::entity_removed(kind).entry().severity, Severity::Major);
        }
    }

    #[test]
    fn test_remove_action_polarity_is_reversed() {
        assert_eq!(
            entry(TestChange::RemoveActionAdded.into()).severity,
            Severity::Major
        );
        assert_eq!(
            entry(TestChange::RemoveActionRemoved.into()).severity,
            Severity::Minor
        );
    }

    #[test]
    fn test_ref_changes_are_major() {
        assert_eq!(entry(TestChange::ActionGroupRefChanged.into()).code, "M241");
        assert_eq!(
            entry(ActionGroupChange::ActionGroupRefChanged.into()).severity,
            Severity::Major
        );
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let rendered = entry(ActionGroupChange::ArgumentRemoved.into()).render("AG1", "arg1");
        assert_eq!(rendered, "<actionGroup> <argument> arg1 was removed");
        let rendered = entry(ActionGroupChange::Removed.into()).render("AG1", "AG1");
        assert_eq!(rendered, "<actionGroup> AG1 was removed");
    }

    #[test]
    fn test_shape_for_code() {
        assert_eq!(
            shape_for_code("M207"),
            Some(ChangeShape::Data(DataChange::ArrayItemRemoved))
        );
        assert_eq!(shape_for_code("M999"), None);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Major > Severity::Minor);
        assert!(Severity::Minor > Severity::Patch);
        assert_eq!(serde_json::to_string(&Severity::Major).unwrap(), "\"MAJOR\"");
    }
}
