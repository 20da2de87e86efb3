//! Classification demo
//!
//! Builds two versions of a small MFTF module, classifies the differences
//! and prints the text report followed by its JSON form.
//!
//! Run with `RUST_LOG=mftf_semver_core=debug` to see the operation events.

use mftf_semver_core::logging_facility::{init, Profile};
use mftf_semver_core::model::step::ACTION_GROUP_STEP;
use mftf_semver_core::model::{
    ActionGroup, Argument, ArtifactTree, DataEntity, DataField, Element, RemoveAction, Section,
    Step, Test,
};
use mftf_semver_core::{render_report, Classifier, ClassifierConfig};

fn login_group(user_input: &str, with_remember_me: bool) -> mftf_semver_core::Result<ActionGroup> {
    let mut builder = ActionGroup::builder("AdminLoginActionGroup")
        .argument(Argument::new("adminUser").attribute("type", "entity"))
        .action(Step::new("fillUsername", "fillField").attribute("userInput", user_input))
        .action(Step::new("clickLogin", "click").attribute("selector", "#login"));
    if with_remember_me {
        builder = builder.action(Step::new("checkRememberMe", "checkOption"));
    }
    builder.build()
}

fn version(user_input: &str, next: bool) -> ArtifactTree {
    let mut test = Test::builder("AdminLoginTest")
        .annotation("severity", "CRITICAL")
        .annotation("group", "login")
        .action(
            Step::new("login", ACTION_GROUP_STEP).attribute("ref", "AdminLoginActionGroup"),
        );
    let mut section = Section::builder("AdminLoginFormSection")
        .element(Element::new("username").attribute("selector", "#username"));
    let mut data = DataEntity::builder("DefaultAdminUser")
        .attribute("type", "user")
        .field(DataField::new("username", "admin"));

    if next {
        test = test
            .annotation("group", "smoke")
            .remove_action(RemoveAction::new("legacyCaptchaStep"));
        section =
            section.element(Element::new("rememberMe").attribute("selector", "#remember"));
    } else {
        data = data.field(DataField::new("password", "123123q"));
    }

    ArtifactTree::builder()
        .add_result(login_group(user_input, next))
        .add_result(test.build())
        .add_result(section.build())
        .add_result(data.build())
        .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    println!("== MFTF semver classification demo ==\n");

    let before = version("{{adminUser.username}}", false);
    let after = version("{{adminUser.login}}", true);

    let config = ClassifierConfig::from_toml_str("parallel = true")?;
    let report = Classifier::new(config).classify(&before, &after);

    print!("{}", render_report(&report));

    println!("\n-- by severity --");
    for (severity, records) in report.by_severity() {
        println!("{}: {} change(s)", severity, records.len());
    }

    println!("\n-- json --");
    println!("{}", report.to_json()?);

    Ok(())
}
