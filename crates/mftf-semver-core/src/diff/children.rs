//! Comparison of attribute-carrying child collections.

use super::{EntityPath, Recorder};
use crate::matcher::{diff_attributes, match_keyed};
use crate::model::{Attributes, Keyed, KeyedItem};
use crate::taxonomy::ChangeShape;

/// Change shapes of one child collection
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChildShapes {
    pub added: ChangeShape,
    pub removed: ChangeShape,
    pub changed: ChangeShape,
}

/// Compare a keyed collection whose items carry attributes
///
/// `path` is the collection path (`AG1/Arguments`). Added and removed
/// items are reported at the item path; a changed item yields one record
/// per differing attribute at `<item path>/<attr>`.
pub(crate) fn diff_keyed_children<T, F>(
    before: &Keyed<T>,
    after: &Keyed<T>,
    path: &EntityPath,
    shapes: ChildShapes,
    attributes: F,
    out: &mut Recorder<'_>,
) where
    T: KeyedItem,
    F: Fn(&T) -> &Attributes,
{
    let matched = match_keyed(before, after);
    for item in matched.removed {
        out.emit(shapes.removed, &path.child(item.key()), item.key());
    }
    for item in matched.added {
        out.emit(shapes.added, &path.child(item.key()), item.key());
    }
    for (old, new) in matched.pairs {
        let item_path = path.child(old.key());
        for delta in diff_attributes(attributes(old), attributes(new)) {
            out.emit(shapes.changed, &item_path.child(delta.name), old.key());
        }
    }
}
