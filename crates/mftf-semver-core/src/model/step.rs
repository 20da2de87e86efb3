use super::{Attributes, KeyedItem};

/// Step type of an action that invokes another action group
pub const ACTION_GROUP_STEP: &str = "actionGroup";

/// Attribute naming the action group a step invokes
pub const REF_ATTRIBUTE: &str = "ref";

/// A single action step inside an action group or test
///
/// `action_type` is the step element itself (`click`, `fillField`,
/// `actionGroup`, ...) and is kept apart from the remaining attributes so a
/// type change can be classified on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Step key (`stepKey`), unique within its collection
    pub key: String,
    /// Step element type
    pub action_type: String,
    /// All other step attributes (`userInput`, `selector`, `ref`, ...)
    pub attributes: Attributes,
}

impl Step {
    /// Create a step with no attributes
    pub fn new(key: impl Into<String>, action_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action_type: action_type.into(),
            attributes: Attributes::new(),
        }
    }

    /// Set an attribute
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// True if this step invokes another action group
    pub fn invokes_action_group(&self) -> bool {
        self.action_type == ACTION_GROUP_STEP
    }

    /// Name of the invoked action group, if any
    pub fn action_group_ref(&self) -> Option<&str> {
        if self.invokes_action_group() {
            self.attributes.get(REF_ATTRIBUTE).map(String::as_str)
        } else {
            None
        }
    }
}

impl KeyedItem for Step {
    fn key(&self) -> &str {
        &self.key
    }
}
