#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{GroupParts, Module, TestParts};
use mftf_semver_core::model::step::ACTION_GROUP_STEP;
use mftf_semver_core::model::{ArtifactKind, Step};
use mftf_semver_core::{classify, render_report, Severity};

fn changed_user_input() -> (Module, Module) {
    let before = Module::reference();
    let mut after = Module::reference();
    let mut group = GroupParts::reference();
    group.actions[0] = Step::new("action1", "fillField").attribute("userInput", "{{arg2}}");
    after.action_group = Some(group.builder());
    (before, after)
}

#[test]
fn test_render_single_patch_change() {
    // GIVEN an action whose userInput changed
    let (before, after) = changed_user_input();

    // WHEN the report is rendered
    let report = classify(&before.tree(), &after.tree());
    let text = render_report(&report);

    // THEN it follows the heading / records / verdict layout
    assert_eq!(
        text,
        "Mftf (PATCH)\n\
         ActionGroup/ActionGroup1/Actions/action1/userInput | \
         <actionGroup> <action> action1 was changed | M204\n\
         \n\
         Patch change is detected.\n"
    );
}

#[test]
fn test_render_mixed_report_orders_by_kind_then_path() {
    let before = Module::reference();
    let mut after = Module::reference();
    let mut test = TestParts::reference();
    test.actions[1] = Step::new("key2", ACTION_GROUP_STEP).attribute("ref", "ActionGroup2");
    test.remove_actions.clear();
    after.test = Some(test.builder());
    after.page = None;

    let report = classify(&before.tree(), &after.tree());
    let text = render_report(&report);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Mftf (MAJOR)",
            "Test/SampleTest/Actions/key2/ref | <test> <actionGroup> key2 ref was changed | M241",
            "Test/SampleTest/RemoveActions/existingRemoveAction | \
             <test> <remove action> existingRemoveAction was removed | M402",
            "Page/HomePage | <page> HomePage was removed | M213",
            "",
            "Major change is detected.",
        ]
    );
}

#[test]
fn test_report_grouping_and_counts() {
    let before = Module::reference();
    let mut after = Module::reference();
    let mut test = TestParts::reference();
    test.remove_actions.clear();
    after.test = Some(test.builder());
    after.data = None;
    let (_, changed) = changed_user_input();
    after.action_group = changed.action_group;

    let report = classify(&before.tree(), &after.tree());

    let groups: Vec<(Severity, usize)> = report
        .by_severity()
        .into_iter()
        .map(|(severity, records)| (severity, records.len()))
        .collect();
    assert_eq!(
        groups,
        vec![
            (Severity::Major, 1),
            (Severity::Minor, 1),
            (Severity::Patch, 1),
        ]
    );
    assert_eq!(report.count(Severity::Major), 1);
    assert_eq!(report.records_for(ArtifactKind::Data).count(), 1);
    assert_eq!(report.records_for(ArtifactKind::Page).count(), 0);
}

#[test]
fn test_report_json_shape() {
    let (before, after) = changed_user_input();
    let report = classify(&before.tree(), &after.tree());

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["severity"], "PATCH");
    assert_eq!(json["failures"], serde_json::json!([]));
    let record = &json["records"][0];
    assert_eq!(record["kind"], "ActionGroup");
    assert_eq!(record["path"], "ActionGroup1/Actions/action1/userInput");
    assert_eq!(record["code"], "M204");
    assert_eq!(record["severity"], "PATCH");
    assert_eq!(record["message"], "<actionGroup> <action> action1 was changed");
}
