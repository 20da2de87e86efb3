use mftf_semver_core::model::step::ACTION_GROUP_STEP;
use mftf_semver_core::model::{
    ActionGroup, ActionGroupBuilder, Argument, ArtifactTree, DataEntity, DataEntityBuilder,
    DataField, DataVar, Element, Operation, OperationBuilder, OperationField, Page, PageBuilder,
    RemoveAction, RequiredEntity, Section, SectionBuilder, SectionRef, Step, Test, TestBuilder,
};
use mftf_semver_core::{ChangeRecord, ClassificationReport};

/// One entity of every kind, as a module would declare them
///
/// Scenarios start from [`Module::reference`], replace single entities, and
/// compare the resulting trees.
#[derive(Debug, Clone)]
pub struct Module {
    pub action_group: Option<ActionGroupBuilder>,
    pub test: Option<TestBuilder>,
    pub page: Option<PageBuilder>,
    pub section: Option<SectionBuilder>,
    pub data: Option<DataEntityBuilder>,
    pub operation: Option<OperationBuilder>,
}

#[allow(dead_code)]
impl Module {
    pub fn reference() -> Self {
        Self {
            action_group: Some(GroupParts::reference().builder()),
            test: Some(TestParts::reference().builder()),
            page: Some(home_page()),
            section: Some(header_section()),
            data: Some(DataParts::reference().builder()),
            operation: Some(OperationParts::reference().builder()),
        }
    }

    pub fn tree(&self) -> ArtifactTree {
        let module = self.clone();
        let mut builder = ArtifactTree::builder();
        if let Some(b) = module.action_group {
            builder = builder.add_result(b.build());
        }
        if let Some(b) = module.test {
            builder = builder.add_result(b.build());
        }
        if let Some(b) = module.page {
            builder = builder.add_result(b.build());
        }
        if let Some(b) = module.section {
            builder = builder.add_result(b.build());
        }
        if let Some(b) = module.data {
            builder = builder.add_result(b.build());
        }
        if let Some(b) = module.operation {
            builder = builder.add_result(b.build());
        }
        builder.build()
    }
}

// ---------------------------------------------------------------------------
// Reference entities
// ---------------------------------------------------------------------------

/// Declared content of `ActionGroup1`
#[derive(Debug, Clone)]
pub struct GroupParts {
    pub attributes: Vec<(&'static str, &'static str)>,
    pub arguments: Vec<Argument>,
    pub actions: Vec<Step>,
}

#[allow(dead_code)]
impl GroupParts {
    pub fn reference() -> Self {
        Self {
            attributes: Vec::new(),
            arguments: vec![Argument::new("arg1").attribute("type", "string")],
            actions: vec![
                Step::new("action1", "fillField").attribute("userInput", "{{arg1}}"),
                Step::new("action2", "click").attribute("selector", "#submit"),
                Step::new("action3", ACTION_GROUP_STEP).attribute("ref", "HelperGroup"),
            ],
        }
    }

    pub fn builder(self) -> ActionGroupBuilder {
        let mut builder = ActionGroup::builder("ActionGroup1");
        for (name, value) in self.attributes {
            builder = builder.attribute(name, value);
        }
        for argument in self.arguments {
            builder = builder.argument(argument);
        }
        for step in self.actions {
            builder = builder.action(step);
        }
        builder
    }
}

/// Declared content of `SampleTest`
#[derive(Debug, Clone)]
pub struct TestParts {
    pub annotations: Vec<(&'static str, &'static str)>,
    pub before: Vec<Step>,
    pub actions: Vec<Step>,
    pub after: Vec<Step>,
    pub remove_actions: Vec<&'static str>,
}

#[allow(dead_code)]
impl TestParts {
    pub fn reference() -> Self {
        Self {
            annotations: vec![
                ("description", "sample test"),
                ("severity", "CRITICAL"),
                ("group", "sampleGroup"),
            ],
            before: vec![Step::new("login", ACTION_GROUP_STEP).attribute("ref", "LoginAsAdmin")],
            actions: vec![
                Step::new("key1", "amOnPage").attribute("url", "/admin"),
                Step::new("key2", ACTION_GROUP_STEP).attribute("ref", "ActionGroup1"),
            ],
            after: vec![Step::new("logout", ACTION_GROUP_STEP).attribute("ref", "Logout")],
            remove_actions: vec!["existingRemoveAction"],
        }
    }

    pub fn builder(self) -> TestBuilder {
        let mut builder = Test::builder("SampleTest");
        for (name, value) in self.annotations {
            builder = builder.annotation(name, value);
        }
        for step in self.before {
            builder = builder.before(step);
        }
        for step in self.actions {
            builder = builder.action(step);
        }
        for step in self.after {
            builder = builder.after(step);
        }
        for key in self.remove_actions {
            builder = builder.remove_action(RemoveAction::new(key));
        }
        builder
    }
}

/// Declared content of `DataEntity1`
#[derive(Debug, Clone)]
pub struct DataParts {
    pub fields: Vec<DataField>,
    pub arrays: Vec<(&'static str, Vec<&'static str>)>,
    pub required_entities: Vec<RequiredEntity>,
    pub vars: Vec<DataVar>,
}

#[allow(dead_code)]
impl DataParts {
    pub fn reference() -> Self {
        Self {
            fields: vec![DataField::new("email", "john@example.com")],
            arrays: vec![("arraykey", vec!["uno", "dos", "tre"])],
            required_entities: vec![RequiredEntity::new("address").attribute("type", "address")],
            vars: vec![DataVar::new("customerId").attribute("entityKey", "id")],
        }
    }

    pub fn builder(self) -> DataEntityBuilder {
        let mut builder = DataEntity::builder("DataEntity1").attribute("type", "customer");
        for field in self.fields {
            builder = builder.field(field);
        }
        for (key, items) in self.arrays {
            builder = builder.array(key, items);
        }
        for entity in self.required_entities {
            builder = builder.required_entity(entity);
        }
        for var in self.vars {
            builder = builder.var(var);
        }
        builder
    }
}

/// Declared content of the `createEntity` operation
#[derive(Debug, Clone)]
pub struct OperationParts {
    pub method: &'static str,
    pub fields: Vec<OperationField>,
}

#[allow(dead_code)]
impl OperationParts {
    pub fn reference() -> Self {
        Self {
            method: "POST",
            fields: vec![
                OperationField::new("toplevelField").attribute("type", "string"),
                OperationField::new("toplevelObj")
                    .attribute("type", "object")
                    .child(OperationField::new("childField").attribute("type", "string")),
            ],
        }
    }

    pub fn builder(self) -> OperationBuilder {
        let mut builder = Operation::builder("createEntity")
            .attribute("dataType", "entity")
            .attribute("method", self.method);
        for field in self.fields {
            builder = builder.field(field);
        }
        builder
    }
}

#[allow(dead_code)]
pub fn home_page() -> PageBuilder {
    Page::builder("HomePage")
        .attribute("url", "/")
        .attribute("area", "storefront")
        .section(SectionRef::new("HeaderSection"))
}

#[allow(dead_code)]
pub fn header_section() -> SectionBuilder {
    Section::builder("HeaderSection").element(
        Element::new("logo")
            .attribute("type", "button")
            .attribute("selector", ".logo"),
    )
}

// ---------------------------------------------------------------------------
// Assertions
// ---------------------------------------------------------------------------

/// Compact `<Kind>/<path> | <code>` form of a record
#[allow(dead_code)]
pub fn line(record: &ChangeRecord) -> String {
    format!("{}/{} | {}", record.kind, record.path, record.code)
}

#[allow(dead_code)]
pub fn lines(report: &ClassificationReport) -> Vec<String> {
    report.records.iter().map(line).collect()
}
