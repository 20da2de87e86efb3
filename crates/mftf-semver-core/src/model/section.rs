use super::collection::{require_name, CollectionContext};
use super::{ArtifactKind, Attributes, Keyed, KeyedItem};
use crate::errors::Result;

/// A named UI element inside a section (`type`, `selector`, `timeout`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
}

impl Element {
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

impl KeyedItem for Element {
    fn key(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub attributes: Attributes,
    pub elements: Keyed<Element>,
}

impl Section {
    pub fn builder(name: impl Into<String>) -> SectionBuilder {
        SectionBuilder {
            name: name.into(),
            attributes: Attributes::new(),
            elements: Vec::new(),
        }
    }
}

impl KeyedItem for Section {
    fn key(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone)]
pub struct SectionBuilder {
    name: String,
    attributes: Attributes,
    elements: Vec<Element>,
}

impl SectionBuilder {
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// # Errors
    ///
    /// `MissingIdentifier` or `DuplicateKey` for a malformed name or element list
    pub fn build(self) -> Result<Section> {
        let kind = ArtifactKind::Section;
        require_name(kind, &self.name)?;
        let elements = Keyed::try_from_items(
            self.elements,
            CollectionContext {
                kind,
                entity: &self.name,
                collection: "Elements",
            },
        )?;
        Ok(Section {
            name: self.name,
            attributes: self.attributes,
            elements,
        })
    }
}
