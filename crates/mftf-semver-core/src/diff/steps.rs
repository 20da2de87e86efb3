//! Comparison of action step collections, shared by action groups and tests.

use super::{EntityPath, Recorder};
use crate::matcher::{diff_attributes, match_keyed};
use crate::model::step::REF_ATTRIBUTE;
use crate::model::{Keyed, Step};
use crate::taxonomy::ChangeShape;

/// Change shapes of a step collection
#[derive(Debug, Clone, Copy)]
pub(crate) struct StepShapes {
    pub added: ChangeShape,
    pub removed: ChangeShape,
    pub changed: ChangeShape,
    pub type_changed: ChangeShape,
    pub ref_changed: ChangeShape,
}

/// Compare two step collections under the collection path `path`
///
/// A changed step type is reported at the step path. A `ref` change on a
/// step that invokes an action group gets its own shape; every other
/// attribute change is reported at `<step path>/<attr>`.
pub(crate) fn diff_steps(
    before: &Keyed<Step>,
    after: &Keyed<Step>,
    path: &EntityPath,
    shapes: StepShapes,
    out: &mut Recorder<'_>,
) {
    let matched = match_keyed(before, after);
    for step in matched.removed {
        out.emit(shapes.removed, &path.child(&step.key), &step.key);
    }
    for step in matched.added {
        out.emit(shapes.added, &path.child(&step.key), &step.key);
    }
    for (old, new) in matched.pairs {
        let step_path = path.child(&old.key);
        if old.action_type != new.action_type {
            out.emit(shapes.type_changed, &step_path, &old.key);
        }
        for delta in diff_attributes(&old.attributes, &new.attributes) {
            let shape = if delta.name == REF_ATTRIBUTE && new.invokes_action_group() {
                shapes.ref_changed
            } else {
                shapes.changed
            };
            out.emit(shape, &step_path.child(delta.name), &old.key);
        }
    }
}
