use super::children::{diff_keyed_children, ChildShapes};
use super::{Differ, EntityPath, Recorder};
use crate::matcher::match_keyed;
use crate::model::{ArtifactKind, ArtifactTree, Attributes, DataEntity, KindSlot};
use crate::taxonomy::DataChange;

/// Differ for data `<entity>` definitions
#[derive(Debug, Clone, Copy, Default)]
pub struct DataDiffer;

impl Differ for DataDiffer {
    type Entity = DataEntity;

    const KIND: ArtifactKind = ArtifactKind::Data;

    fn slot(tree: &ArtifactTree) -> &KindSlot<DataEntity> {
        tree.data()
    }

    fn attributes(entity: &DataEntity) -> &Attributes {
        &entity.attributes
    }

    fn diff_children(
        &self,
        before: &DataEntity,
        after: &DataEntity,
        path: &EntityPath,
        out: &mut Recorder<'_>,
    ) {
        let fields = path.child("Fields");
        let matched = match_keyed(&before.fields, &after.fields);
        for field in matched.removed {
            out.emit(DataChange::FieldRemoved, &fields.child(&field.key), &field.key);
        }
        for field in matched.added {
            out.emit(DataChange::FieldAdded, &fields.child(&field.key), &field.key);
        }
        for (old, new) in matched.pairs {
            if old.value != new.value {
                out.emit(DataChange::FieldChanged, &fields.child(&old.key), &old.key);
            }
        }

        let arrays = path.child("Arrays");
        let matched = match_keyed(&before.arrays, &after.arrays);
        for array in matched.removed {
            out.emit(DataChange::ArrayRemoved, &arrays.child(&array.key), &array.key);
        }
        for array in matched.added {
            out.emit(DataChange::ArrayAdded, &arrays.child(&array.key), &array.key);
        }
        for (old, new) in matched.pairs {
            let items = arrays.child(&old.key).child("Items");
            let matched = match_keyed(&old.items, &new.items);
            for item in matched.removed {
                out.emit(DataChange::ArrayItemRemoved, &items.child(&item.value), &item.value);
            }
            for item in matched.added {
                out.emit(DataChange::ArrayItemAdded, &items.child(&item.value), &item.value);
            }
        }

        diff_keyed_children(
            &before.required_entities,
            &after.required_entities,
            &path.child("RequiredEntities"),
            ChildShapes {
                added: DataChange::RequiredEntityAdded.into(),
                removed: DataChange::RequiredEntityRemoved.into(),
                changed: DataChange::RequiredEntityChanged.into(),
            },
            |entity| &entity.attributes,
            out,
        );
        diff_keyed_children(
            &before.vars,
            &after.vars,
            &path.child("Vars"),
            ChildShapes {
                added: DataChange::VarAdded.into(),
                removed: DataChange::VarRemoved.into(),
                changed: DataChange::VarChanged.into(),
            },
            |var| &var.attributes,
            out,
        );
    }
}
