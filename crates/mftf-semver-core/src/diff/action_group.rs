use super::children::{diff_keyed_children, ChildShapes};
use super::steps::{diff_steps, StepShapes};
use super::{Differ, EntityPath, Recorder};
use crate::model::{ActionGroup, ArtifactKind, ArtifactTree, Attributes, KindSlot};
use crate::taxonomy::ActionGroupChange;

/// Differ for `<actionGroup>` entities
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionGroupDiffer;

impl Differ for ActionGroupDiffer {
    type Entity = ActionGroup;

    const KIND: ArtifactKind = ArtifactKind::ActionGroup;

    fn slot(tree: &ArtifactTree) -> &KindSlot<ActionGroup> {
        tree.action_groups()
    }

    fn attributes(entity: &ActionGroup) -> &Attributes {
        &entity.attributes
    }

    fn diff_children(
        &self,
        before: &ActionGroup,
        after: &ActionGroup,
        path: &EntityPath,
        out: &mut Recorder<'_>,
    ) {
        diff_keyed_children(
            &before.arguments,
            &after.arguments,
            &path.child("Arguments"),
            ChildShapes {
                added: ActionGroupChange::ArgumentAdded.into(),
                removed: ActionGroupChange::ArgumentRemoved.into(),
                changed: ActionGroupChange::ArgumentChanged.into(),
            },
            |argument| &argument.attributes,
            out,
        );
        diff_steps(
            &before.actions,
            &after.actions,
            &path.child("Actions"),
            StepShapes {
                added: ActionGroupChange::ActionAdded.into(),
                removed: ActionGroupChange::ActionRemoved.into(),
                changed: ActionGroupChange::ActionChanged.into(),
                type_changed: ActionGroupChange::ActionTypeChanged.into(),
                ref_changed: ActionGroupChange::ActionGroupRefChanged.into(),
            },
            out,
        );
    }
}
