use super::collection::{require_name, CollectionContext};
use super::{ArtifactKind, Attributes, Keyed, KeyedItem, Step};
use crate::errors::Result;

/// A declared action-group argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    /// `type`, `defaultValue`, ...
    pub attributes: Attributes,
}

impl Argument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl KeyedItem for Argument {
    fn key(&self) -> &str {
        &self.name
    }
}

/// A reusable sequence of steps with named arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionGroup {
    pub name: String,
    pub attributes: Attributes,
    pub arguments: Keyed<Argument>,
    pub actions: Keyed<Step>,
}

impl ActionGroup {
    pub fn builder(name: impl Into<String>) -> ActionGroupBuilder {
        ActionGroupBuilder {
            name: name.into(),
            attributes: Attributes::new(),
            arguments: Vec::new(),
            actions: Vec::new(),
        }
    }
}

impl KeyedItem for ActionGroup {
    fn key(&self) -> &str {
        &self.name
    }
}

/// Collects parser output for one action group
#[derive(Debug, Clone)]
pub struct ActionGroupBuilder {
    name: String,
    attributes: Attributes,
    arguments: Vec<Argument>,
    actions: Vec<Step>,
}

impl ActionGroupBuilder {
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn action(mut self, step: Step) -> Self {
        self.actions.push(step);
        self
    }

    /// Validate collections and produce the action group
    ///
    /// # Errors
    ///
    /// - `MissingIdentifier` if the name, an argument name or a step key is empty
    /// - `DuplicateKey` if two arguments or two steps share a key
    pub fn build(self) -> Result<ActionGroup> {
        let kind = ArtifactKind::ActionGroup;
        require_name(kind, &self.name)?;
        let arguments = Keyed::try_from_items(
            self.arguments,
            CollectionContext {
                kind,
                entity: &self.name,
                collection: "Arguments",
            },
        )?;
        let actions = Keyed::try_from_items(
            self.actions,
            CollectionContext {
                kind,
                entity: &self.name,
                collection: "Actions",
            },
        )?;
        Ok(ActionGroup {
            name: self.name,
            attributes: self.attributes,
            arguments,
            actions,
        })
    }
}
