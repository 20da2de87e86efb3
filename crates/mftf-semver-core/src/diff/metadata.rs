use super::{Differ, EntityPath, Recorder};
use crate::matcher::{diff_attributes, match_keyed};
use crate::model::{
    ArtifactKind, ArtifactTree, Attributes, FieldNode, Keyed, KindSlot, Operation,
};
use crate::taxonomy::MetadataChange;

/// Differ for metadata `<operation>` definitions
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataDiffer;

impl Differ for MetadataDiffer {
    type Entity = Operation;

    const KIND: ArtifactKind = ArtifactKind::Metadata;

    fn slot(tree: &ArtifactTree) -> &KindSlot<Operation> {
        tree.metadata()
    }

    fn attributes(entity: &Operation) -> &Attributes {
        &entity.attributes
    }

    fn diff_children(
        &self,
        before: &Operation,
        after: &Operation,
        path: &EntityPath,
        out: &mut Recorder<'_>,
    ) {
        diff_nodes(&before.fields, &after.fields, &path.child("Fields"), out);
    }
}

/// Compare one level of the field tree, recursing into matched nodes
fn diff_nodes(
    before: &Keyed<FieldNode>,
    after: &Keyed<FieldNode>,
    path: &EntityPath,
    out: &mut Recorder<'_>,
) {
    let matched = match_keyed(before, after);
    for node in matched.removed {
        out.emit(MetadataChange::ChildRemoved, &path.child(&node.key), &node.key);
    }
    for node in matched.added {
        out.emit(MetadataChange::ChildAdded, &path.child(&node.key), &node.key);
    }
    for (old, new) in matched.pairs {
        let node_path = path.child(&old.key);
        for delta in diff_attributes(&old.attributes, &new.attributes) {
            out.emit(
                MetadataChange::ChildChanged,
                &node_path.child(delta.name),
                &old.key,
            );
        }
        diff_nodes(&old.children, &new.children, &node_path, out);
    }
}
